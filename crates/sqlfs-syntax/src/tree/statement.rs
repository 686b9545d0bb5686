use crate::{
    lexer::token::TokenKind,
    tree::{Cursor, Node, WhereClause},
};
use serde::Serialize;
use std::fmt;

/// Operation declared by the leading keyword of a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StatementKind {
    Select,
    Delete,
    Insert,
    Update,
    Unknown,
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatementKind::Select => write!(f, "SELECT"),
            StatementKind::Delete => write!(f, "DELETE"),
            StatementKind::Insert => write!(f, "INSERT"),
            StatementKind::Update => write!(f, "UPDATE"),
            StatementKind::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// One parsed query, terminated by `;` or the end of input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statement {
    pub kind: StatementKind,
    pub nodes: Vec<Node>,
}

impl Statement {
    pub fn new(nodes: Vec<Node>) -> Self {
        let kind = match Cursor::new(&nodes).peek_significant() {
            Some(node) if node.is_token(&TokenKind::Select) => StatementKind::Select,
            Some(node) if node.is_token(&TokenKind::Delete) => StatementKind::Delete,
            Some(node) if node.is_token(&TokenKind::Insert) => StatementKind::Insert,
            Some(node) if node.is_token(&TokenKind::Update) => StatementKind::Update,
            _ => StatementKind::Unknown,
        };
        Self { kind, nodes }
    }

    pub fn kind(&self) -> StatementKind {
        self.kind
    }

    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.nodes)
    }

    /// Index of the first `kind` token at or after `start`.
    pub fn token_next_match(&self, start: usize, kind: &TokenKind) -> Option<usize> {
        self.nodes
            .iter()
            .skip(start)
            .position(|node| node.is_token(kind))
            .map(|offset| start + offset)
    }

    /// The first significant node strictly after `idx`.
    pub fn token_next(&self, idx: usize) -> Option<(usize, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .skip(idx + 1)
            .find(|(_, node)| !node.is_trivia() && !node.is_token(&TokenKind::Eof))
    }

    pub fn has_keyword(&self, kind: &TokenKind) -> bool {
        self.token_next_match(0, kind).is_some()
    }

    pub fn where_clause(&self) -> Option<&WhereClause> {
        self.nodes.iter().find_map(|node| match node {
            Node::Where(clause) => Some(clause),
            _ => None,
        })
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: String = self.nodes.iter().map(Node::value).collect();
        write!(f, "{}", text.trim())
    }
}
