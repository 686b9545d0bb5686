use crate::{
    lexer::token::Token,
    tree::{Cursor, Node, concat_lexemes},
};
use serde::Serialize;

/// Comma separated projection, e.g. `name, sz`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdentifierList {
    pub tokens: Vec<Token>,
}

impl IdentifierList {
    pub fn value(&self) -> String {
        concat_lexemes(self.tokens.iter())
    }
}

/// `left <op> right`, possibly padded with trivia around the operator.
///
/// The builder opens a comparison as soon as an operand is followed by a
/// comparison operator, so the right operand may be missing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub tokens: Vec<Token>,
}

impl Comparison {
    fn significant(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|token| !token.is_trivia())
    }

    pub fn left(&self) -> Option<&Token> {
        self.significant()
            .next()
            .filter(|token| token.kind.is_operand())
    }

    pub fn comparator(&self) -> Option<&Token> {
        self.significant()
            .nth(1)
            .filter(|token| token.kind.is_comparison_operator())
    }

    pub fn right(&self) -> Option<&Token> {
        self.significant()
            .nth(2)
            .filter(|token| token.kind.is_operand())
    }

    pub fn value(&self) -> String {
        concat_lexemes(self.tokens.iter())
    }
}

/// Everything from the `WHERE` keyword up to `RECURSIVE` or the end of the
/// statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WhereClause {
    pub nodes: Vec<Node>,
}

impl WhereClause {
    /// Nodes following the `WHERE` keyword.
    pub fn body(&self) -> &[Node] {
        self.nodes.split_first().map(|(_, rest)| rest).unwrap_or_default()
    }

    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(self.body())
    }

    pub fn comparisons(&self) -> impl Iterator<Item = &Comparison> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Comparison(comparison) => Some(comparison),
            _ => None,
        })
    }

    pub fn value(&self) -> String {
        self.nodes.iter().map(Node::value).collect()
    }
}
