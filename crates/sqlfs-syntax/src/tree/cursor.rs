use crate::{lexer::token::TokenKind, tree::Node};

/// Forward-only position over a materialized list of nodes.
///
/// Every `next_*`/`seek` call consumes the node it returns, so successive
/// calls walk the clause left to right without re-scanning from the start.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    nodes: &'a [Node],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(nodes: &'a [Node]) -> Self {
        Self { nodes, pos: 0 }
    }

    pub fn peek_significant(&self) -> Option<&'a Node> {
        self.nodes[self.pos.min(self.nodes.len())..]
            .iter()
            .find(|node| !node.is_trivia() && !node.is_token(&TokenKind::Eof))
    }

    /// Returns the next non-trivia node and moves past it.
    pub fn next_significant(&mut self) -> Option<&'a Node> {
        while self.pos < self.nodes.len() {
            let node = &self.nodes[self.pos];
            self.pos += 1;
            if node.is_token(&TokenKind::Eof) {
                self.pos = self.nodes.len();
                return None;
            }
            if !node.is_trivia() {
                return Some(node);
            }
        }
        None
    }

    /// Moves past the first token of `kind` at or after the current position.
    pub fn seek(&mut self, kind: &TokenKind) -> Option<&'a Node> {
        let offset = self.nodes[self.pos.min(self.nodes.len())..]
            .iter()
            .position(|node| node.is_token(kind))?;
        let node = &self.nodes[self.pos + offset];
        self.pos += offset + 1;
        Some(node)
    }
}
