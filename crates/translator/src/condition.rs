//! Extraction of the `WHERE` clause into an ordered list of conditions.
//!
//! Connectives are applied strictly left to right: `a AND b OR c` yields
//! three conditions with connectives `(none, AND, OR)`, which is also how
//! `find` evaluates `-and`/`-or` when no parentheses are given.

use crate::error::{TranslateError, TranslateResult};
use serde::Serialize;
use sqlfs_syntax::{
    lexer::token::{Token, TokenKind},
    tree::{Comparison, Node, WhereClause},
};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Connective {
    And,
    Or,
}

impl Connective {
    /// The `find` operator joining this condition to the previous one.
    pub fn flag(self) -> &'static str {
        match self {
            Connective::And => "-and",
            Connective::Or => "-or",
        }
    }

    fn from_token(token: &Token) -> Option<Self> {
        match token.kind {
            TokenKind::And => Some(Connective::And),
            TokenKind::Or => Some(Connective::Or),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Comparator {
    #[serde(rename = "<")]
    LessThan,
    #[serde(rename = "=")]
    Equal,
    #[serde(rename = ">")]
    GreaterThan,
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comparator::LessThan => write!(f, "<"),
            Comparator::Equal => write!(f, "="),
            Comparator::GreaterThan => write!(f, ">"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Condition {
    /// `None` for the first condition of a clause.
    pub connective: Option<Connective>,
    pub field: String,
    pub comparator: Comparator,
    /// Source lexeme, quotes included.
    pub value: String,
}

/// Walks `clause` and returns its conditions in source order. A statement
/// without a `WHERE` clause has no conditions.
pub fn extract_conditions(clause: Option<&WhereClause>) -> TranslateResult<Vec<Condition>> {
    let Some(clause) = clause else {
        return Ok(Vec::new());
    };

    let mut cursor = clause.cursor();
    let first = expect_comparison(cursor.next_significant(), "WHERE")?;
    let mut conditions = vec![condition_from(first, None)?];

    while let Some(token) = cursor.peek_significant().and_then(Node::as_token) {
        let Some(connective) = Connective::from_token(token) else {
            break;
        };
        cursor.next_significant();

        let comparison = expect_comparison(cursor.next_significant(), &token.lexeme)?;
        conditions.push(condition_from(comparison, Some(connective))?);
    }

    Ok(conditions)
}

fn expect_comparison<'a>(node: Option<&'a Node>, after: &str) -> TranslateResult<&'a Comparison> {
    match node {
        Some(Node::Comparison(comparison)) => Ok(comparison),
        Some(other) => Err(TranslateError::MalformedCondition(format!(
            "expected a comparison after {}, found '{}'",
            after,
            other.value().trim()
        ))),
        None => Err(TranslateError::MalformedCondition(format!(
            "expected a comparison after {}",
            after
        ))),
    }
}

fn condition_from(
    comparison: &Comparison,
    connective: Option<Connective>,
) -> TranslateResult<Condition> {
    let malformed = |what: &str| {
        TranslateError::MalformedCondition(format!("{} in '{}'", what, comparison.value().trim()))
    };

    let field = comparison.left().ok_or_else(|| malformed("missing field"))?;
    let operator = comparison
        .comparator()
        .ok_or_else(|| malformed("missing comparator"))?;
    let value = comparison.right().ok_or_else(|| malformed("missing value"))?;

    let comparator = match operator.kind {
        TokenKind::LessThan => Comparator::LessThan,
        TokenKind::Equal => Comparator::Equal,
        TokenKind::GreaterThan => Comparator::GreaterThan,
        _ => {
            return Err(TranslateError::UnsupportedComparator {
                field: field.lexeme.clone(),
                comparator: operator.lexeme.clone(),
            });
        }
    };

    Ok(Condition {
        connective,
        field: field.lexeme.clone(),
        comparator,
        value: value.lexeme.clone(),
    })
}
