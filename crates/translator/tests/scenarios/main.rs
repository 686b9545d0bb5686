//! End-to-end translation tests: query text in, command line out.

mod delete;
mod insert;
mod properties;

use sqlfs_syntax::parse;
use translator::{TranslateResult, translate};

/// Translates the first statement of `query`.
pub fn command_for(query: &str) -> TranslateResult<String> {
    let statements = parse(query).expect("query should parse");
    translate(&statements[0]).map(|command| command.to_string())
}
