//! Statement trees produced by the [`builder`](crate::builder).
//!
//! A tree keeps every source token, trivia included, and groups the few
//! constructs the translator needs to walk as a unit: the projection list
//! after `SELECT`, the `WHERE` clause, and each comparison inside it.

use crate::lexer::token::{Token, TokenKind};
use serde::Serialize;

pub mod clause;
pub mod cursor;
pub mod statement;

pub use clause::{Comparison, IdentifierList, WhereClause};
pub use cursor::Cursor;
pub use statement::{Statement, StatementKind};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum Node {
    Token(Token),
    IdentifierList(IdentifierList),
    Comparison(Comparison),
    Where(WhereClause),
}

impl Node {
    pub fn is_trivia(&self) -> bool {
        matches!(self, Node::Token(token) if token.is_trivia())
    }

    pub fn as_token(&self) -> Option<&Token> {
        match self {
            Node::Token(token) => Some(token),
            _ => None,
        }
    }

    pub fn is_token(&self, kind: &TokenKind) -> bool {
        self.as_token().is_some_and(|token| token.is(kind))
    }

    /// Source text covered by this node.
    pub fn value(&self) -> String {
        match self {
            Node::Token(token) => token.lexeme.clone(),
            Node::IdentifierList(list) => list.value(),
            Node::Comparison(comparison) => comparison.value(),
            Node::Where(clause) => clause.value(),
        }
    }
}

pub(crate) fn concat_lexemes<'a>(tokens: impl Iterator<Item = &'a Token>) -> String {
    tokens.map(|token| token.lexeme.as_str()).collect()
}
