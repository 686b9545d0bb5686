//! Translation of sqlfs statement trees into `find` command lines.
//!
//! ```
//! use sqlfs_syntax::parse;
//! use translator::translate;
//!
//! let statements = parse("SELECT name, sz FROM /data WHERE sz > 100").unwrap();
//! let command = translate(&statements[0]).unwrap();
//! assert_eq!(
//!     command.to_string(),
//!     r#"find /data -maxdepth 1 \( -size +100c \) -printf "%p\t%s\n""#
//! );
//! ```

pub mod command;
pub mod condition;
pub mod error;
pub mod rules;
pub mod translate;

pub use command::FindCommand;
pub use condition::{Condition, extract_conditions};
pub use error::{TranslateError, TranslateResult};
pub use translate::translate;
