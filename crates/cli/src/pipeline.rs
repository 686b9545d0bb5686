use crate::error::CliError;
use serde::Serialize;
use sqlfs_syntax::{parse, tree::Statement};
use tracing::{debug, info};
use translator::{Condition, TranslateError, extract_conditions, translate};

/// One statement together with the command it translates to.
#[derive(Debug, Clone, Serialize)]
pub struct Translation {
    pub statement: String,
    pub command: String,
    pub conditions: Vec<Condition>,
}

/// Parses `source` and translates every statement in order.
///
/// Nothing is returned unless every statement translates, so a bad
/// statement late in a batch keeps the earlier ones from running.
pub fn translate_query(source: &str) -> Result<Vec<Translation>, CliError> {
    let statements = parse(source)?;
    info!("Parsed {} statement(s)", statements.len());

    statements
        .iter()
        .enumerate()
        .map(|(idx, statement)| translate_statement(idx + 1, statement))
        .collect()
}

fn translate_statement(index: usize, statement: &Statement) -> Result<Translation, CliError> {
    let wrap = |source: TranslateError| CliError::Translate { index, source };

    let command = translate(statement).map_err(wrap)?;
    let conditions = extract_conditions(statement.where_clause()).map_err(wrap)?;
    debug!(index, command = %command, "Statement translated");

    Ok(Translation {
        statement: statement.to_string(),
        command: command.to_string(),
        conditions,
    })
}
