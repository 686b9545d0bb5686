//! The `find` command model: an AST, a builder for it, and the renderer that
//! turns it into a shell command line.

pub mod ast;
pub mod builder;
pub mod renderer;

pub use ast::FindCommand;
