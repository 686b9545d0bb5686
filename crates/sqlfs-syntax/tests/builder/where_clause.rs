use sqlfs_syntax::{
    lexer::token::TokenKind,
    parse,
    tree::{Node, Statement},
};

fn single(input: &str) -> Statement {
    parse(input).unwrap().remove(0)
}

#[test]
fn test_comparisons_and_connectives() {
    let stmt = single("DELETE FROM /tmp WHERE name = 'x' AND sz < 10 or perm = 644");
    let clause = stmt.where_clause().unwrap();

    let comparisons: Vec<String> = clause.comparisons().map(|c| c.value()).collect();
    assert_eq!(comparisons, vec!["name = 'x'", "sz < 10", "perm = 644"]);

    let connectives: Vec<&TokenKind> = clause
        .body()
        .iter()
        .filter_map(Node::as_token)
        .filter(|t| t.kind.is_connective())
        .map(|t| &t.kind)
        .collect();
    assert_eq!(connectives, vec![&TokenKind::And, &TokenKind::Or]);
}

#[test]
fn test_comparison_operands() {
    let stmt = single("SELECT * FROM /data WHERE sz   >\t100");
    let comparison = stmt.where_clause().unwrap().comparisons().next().unwrap();

    assert_eq!(comparison.left().unwrap().lexeme, "sz");
    assert_eq!(comparison.comparator().unwrap().kind, TokenKind::GreaterThan);
    assert_eq!(comparison.right().unwrap().lexeme, "100");
}

#[test]
fn test_comparison_missing_right_operand() {
    let stmt = single("SELECT * FROM /data WHERE sz >");
    let comparison = stmt.where_clause().unwrap().comparisons().next().unwrap();

    assert!(comparison.left().is_some());
    assert!(comparison.comparator().is_some());
    assert!(comparison.right().is_none());
}

#[test]
fn test_where_clause_stops_at_recursive() {
    let stmt = single("SELECT * FROM /data WHERE sz > 100 RECURSIVE");

    assert!(stmt.has_keyword(&TokenKind::Recursive));
    let clause = stmt.where_clause().unwrap();
    assert!(!clause.value().to_lowercase().contains("recursive"));
}

#[test]
fn test_where_cursor_skips_keyword() {
    let stmt = single("SELECT * FROM /data WHERE sz > 1");
    let mut cursor = stmt.where_clause().unwrap().cursor();

    assert!(matches!(cursor.next_significant(), Some(Node::Comparison(_))));
    assert!(cursor.next_significant().is_none());
}
