use crate::{
    error::SyntaxError,
    lexer::{
        Lexer,
        token::{Token, TokenKind},
    },
    tree::{Comparison, IdentifierList, Node, Statement, WhereClause},
};
use tracing::debug;

pub type BuildResult<T> = Result<T, SyntaxError>;

/// Parse query text into one statement tree per `;`-separated statement.
pub fn parse(input: &str) -> BuildResult<Vec<Statement>> {
    let tokens = Lexer::new().tokenize(input)?;

    let statements: Vec<Statement> = split_statements(tokens)
        .into_iter()
        .map(build_statement)
        .collect();

    if statements.is_empty() {
        return Err(SyntaxError::EmptyQuery);
    }

    debug!(count = statements.len(), "Parsed statements");
    Ok(statements)
}

fn split_statements(tokens: Vec<Token>) -> Vec<Vec<Token>> {
    let mut statements = Vec::new();
    let mut current: Vec<Token> = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::Semicolon | TokenKind::Eof => {
                // Empty statements (`;;`, trailing `;`) are dropped
                if current.iter().any(|t| !t.is_trivia()) {
                    statements.push(std::mem::take(&mut current));
                } else {
                    current.clear();
                }
            }
            _ => current.push(token),
        }
    }

    statements
}

fn build_statement(tokens: Vec<Token>) -> Statement {
    let mut nodes = Vec::with_capacity(tokens.len());
    let mut idx = 0;

    while idx < tokens.len() {
        match tokens[idx].kind {
            TokenKind::Select => {
                nodes.push(Node::Token(tokens[idx].clone()));
                idx = build_projection(&tokens, idx + 1, &mut nodes);
            }
            TokenKind::Where => {
                let (clause, next) = build_where_clause(&tokens, idx);
                nodes.push(Node::Where(clause));
                idx = next;
            }
            _ => {
                nodes.push(Node::Token(tokens[idx].clone()));
                idx += 1;
            }
        }
    }

    Statement::new(nodes)
}

/// Groups the tokens between `SELECT` and the next keyword into an
/// [`IdentifierList`] when there is more than one significant token.
fn build_projection(tokens: &[Token], start: usize, nodes: &mut Vec<Node>) -> usize {
    let end = tokens[start..]
        .iter()
        .position(|t| t.kind.is_keyword())
        .map(|offset| start + offset)
        .unwrap_or(tokens.len());

    let significant: Vec<usize> = (start..end).filter(|&i| !tokens[i].is_trivia()).collect();

    match (significant.first(), significant.last()) {
        (Some(&first), Some(&last)) if significant.len() > 1 => {
            nodes.extend(tokens[start..first].iter().cloned().map(Node::Token));
            nodes.push(Node::IdentifierList(IdentifierList {
                tokens: tokens[first..=last].to_vec(),
            }));
            nodes.extend(tokens[last + 1..end].iter().cloned().map(Node::Token));
        }
        _ => nodes.extend(tokens[start..end].iter().cloned().map(Node::Token)),
    }

    end
}

/// The clause runs from `WHERE` to `RECURSIVE` or the end of the statement.
fn build_where_clause(tokens: &[Token], start: usize) -> (WhereClause, usize) {
    let end = tokens[start + 1..]
        .iter()
        .position(|t| t.kind == TokenKind::Recursive)
        .map(|offset| start + 1 + offset)
        .unwrap_or(tokens.len());

    let mut nodes = vec![Node::Token(tokens[start].clone())];
    nodes.extend(group_comparisons(&tokens[start + 1..end]));

    (WhereClause { nodes }, end)
}

fn group_comparisons(tokens: &[Token]) -> Vec<Node> {
    let mut nodes = Vec::new();
    let mut idx = 0;

    while idx < tokens.len() {
        if tokens[idx].kind.is_operand() {
            if let Some(op_idx) = next_significant(tokens, idx + 1) {
                if tokens[op_idx].kind.is_comparison_operator() {
                    let mut end = op_idx + 1;
                    if let Some(right_idx) = next_significant(tokens, op_idx + 1) {
                        if tokens[right_idx].kind.is_operand() {
                            end = right_idx + 1;
                        }
                    }
                    nodes.push(Node::Comparison(Comparison {
                        tokens: tokens[idx..end].to_vec(),
                    }));
                    idx = end;
                    continue;
                }
            }
        }

        nodes.push(Node::Token(tokens[idx].clone()));
        idx += 1;
    }

    nodes
}

fn next_significant(tokens: &[Token], from: usize) -> Option<usize> {
    tokens[from.min(tokens.len())..]
        .iter()
        .position(|t| !t.is_trivia())
        .map(|offset| from + offset)
}
