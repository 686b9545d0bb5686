//! Driver for the `sqlfs` binary: query input, settings, translation of
//! whole batches and sequential execution through the shell.

pub mod commands;
pub mod env;
pub mod error;
pub mod executor;
pub mod output;
pub mod pipeline;
pub mod shutdown;
