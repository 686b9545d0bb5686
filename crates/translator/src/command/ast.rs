//! Defines the AST of a generated `find` command line.

use crate::condition::Connective;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FindCommand {
    /// Runs before the traversal, e.g. to bind an aggregate.
    pub pre_command: Option<PreCommand>,

    /// Starting point, kept exactly as written in the query.
    pub path: String,

    /// Global options such as `-maxdepth 1`.
    pub options: Vec<TraversalOption>,

    /// Tests joined by their connectives, in query order.
    pub filter: Vec<FilterTerm>,

    pub action: Action,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PreCommand {
    /// Sums the byte size of the entries directly under `path` into the
    /// shell variable `variable`.
    SizeSum { variable: String, path: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalOption {
    MaxDepth(u32),
    MinDepth(u32),
}

/// One `find` test, e.g. `-and -size +100c`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterTerm {
    pub connective: Option<Connective>,
    pub test: &'static str,
    pub argument: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Action {
    /// `-ls`
    List,
    /// `-printf` with tab separated directives and a trailing newline.
    Printf { directives: Vec<String> },
    /// `-exec rm -rf {} +`
    Remove,
    /// `-exec cp -r {} <destination> \;`
    Copy { destination: String },
}
