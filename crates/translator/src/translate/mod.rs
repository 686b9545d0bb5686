//! Per-operation translation of statement trees into `find` commands.

use crate::{
    command::{FindCommand, ast::FilterTerm},
    condition::extract_conditions,
    error::{TranslateError, TranslateResult},
    rules,
};
use sqlfs_syntax::{
    lexer::token::TokenKind,
    tree::{Node, Statement, StatementKind},
};
use tracing::debug;

mod delete;
mod insert;
mod select;

type TranslationRule = fn(&Statement) -> TranslateResult<FindCommand>;

/// Statement kinds that have a translation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Select,
    Delete,
    Insert,
}

impl TryFrom<StatementKind> for Operation {
    type Error = TranslateError;

    fn try_from(kind: StatementKind) -> Result<Self, Self::Error> {
        match kind {
            StatementKind::Select => Ok(Operation::Select),
            StatementKind::Delete => Ok(Operation::Delete),
            StatementKind::Insert => Ok(Operation::Insert),
            other => Err(TranslateError::UnsupportedOperation(other.to_string())),
        }
    }
}

impl Operation {
    fn rule(self) -> TranslationRule {
        match self {
            Operation::Select => select::translate_select,
            Operation::Delete => delete::translate_delete,
            Operation::Insert => insert::translate_insert,
        }
    }
}

/// Translates one statement into the command that carries it out.
///
/// Pure: the same tree always renders to the same command line, and a
/// failure leaves nothing half built.
pub fn translate(statement: &Statement) -> TranslateResult<FindCommand> {
    let operation = Operation::try_from(statement.kind())?;
    debug!(?operation, statement = %statement, "Translating statement");

    let command = (operation.rule())(statement)?;
    debug!(command = %command, "Translated statement");

    Ok(command)
}

/// Reads the path that follows `keyword`, verbatim.
fn extract_path(statement: &Statement, keyword: &TokenKind) -> TranslateResult<String> {
    let mut cursor = statement.cursor();
    cursor
        .seek(keyword)
        .ok_or_else(|| TranslateError::MissingClause(keyword.to_string()))?;

    match cursor.next_significant() {
        Some(Node::Token(token)) if is_path_like(&token.kind) => Ok(token.lexeme.clone()),
        _ => Err(TranslateError::MissingClause(format!("{} path", keyword))),
    }
}

fn is_path_like(kind: &TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Path(_) | TokenKind::String(_) | TokenKind::Identifier(_) | TokenKind::Number(_)
    )
}

fn is_recursive(statement: &Statement) -> bool {
    statement.has_keyword(&TokenKind::Recursive)
}

fn build_filter(statement: &Statement) -> TranslateResult<Vec<FilterTerm>> {
    extract_conditions(statement.where_clause())?
        .iter()
        .map(|condition| rules::field_filter(&condition.field)?.apply(condition))
        .collect()
}
