//! Lexer and statement-tree builder for the sqlfs query language.
//!
//! ```
//! use sqlfs_syntax::{parse, tree::StatementKind};
//!
//! let statements = parse("SELECT name, sz FROM /data WHERE sz > 100").unwrap();
//! assert_eq!(statements[0].kind(), StatementKind::Select);
//! assert_eq!(statements[0].where_clause().unwrap().comparisons().count(), 1);
//! ```

pub mod builder;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod tree;

pub use builder::parse;
