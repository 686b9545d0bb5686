use sqlfs_syntax::{
    lexer::token::TokenKind,
    parse,
    tree::{Node, StatementKind},
};

#[test]
fn test_statement_kinds() {
    let statements = parse(
        "SELECT * FROM /tmp; delete from /tmp; Insert into /b from /a; update x; /tmp",
    )
    .unwrap();

    let kinds: Vec<StatementKind> = statements.iter().map(|s| s.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            StatementKind::Select,
            StatementKind::Delete,
            StatementKind::Insert,
            StatementKind::Update,
            StatementKind::Unknown,
        ]
    );
}

#[test]
fn test_statement_display_is_source_text() {
    let statements = parse("  SELECT name,  sz FROM /data WHERE sz > 100 ;").unwrap();
    assert_eq!(
        statements[0].to_string(),
        "SELECT name,  sz FROM /data WHERE sz > 100"
    );
}

#[test]
fn test_projection_list_is_grouped() {
    let statements = parse("SELECT name, sz FROM /data").unwrap();
    let stmt = &statements[0];

    let select = stmt.token_next_match(0, &TokenKind::Select).unwrap();
    let (_, projection) = stmt.token_next(select).unwrap();

    match projection {
        Node::IdentifierList(list) => assert_eq!(list.value(), "name, sz"),
        other => panic!("Expected identifier list, got {:?}", other),
    }
}

#[test]
fn test_single_projection_stays_a_token() {
    let statements = parse("SELECT * FROM /tmp").unwrap();
    let stmt = &statements[0];

    let (_, projection) = stmt.token_next(0).unwrap();
    assert!(projection.is_token(&TokenKind::Wildcard));
}

#[test]
fn test_function_call_in_projection() {
    let statements = parse("SELECT name, sum(sz) FROM /data").unwrap();
    let (_, projection) = statements[0].token_next(0).unwrap();
    assert_eq!(projection.value(), "name, sum(sz)");
}

#[test]
fn test_keyword_lookup_and_positional_lookup() {
    let statements = parse("INSERT INTO /backup FROM /data").unwrap();
    let stmt = &statements[0];

    let into = stmt.token_next_match(0, &TokenKind::Into).unwrap();
    let (_, destination) = stmt.token_next(into).unwrap();
    assert_eq!(destination.value(), "/backup");

    let from = stmt.token_next_match(into, &TokenKind::From).unwrap();
    let (_, source) = stmt.token_next(from).unwrap();
    assert_eq!(source.value(), "/data");

    assert!(stmt.token_next_match(from, &TokenKind::Into).is_none());
}

#[test]
fn test_recursive_marker() {
    let statements = parse("SELECT sum FROM /data RECURSIVE; SELECT sum FROM /data").unwrap();
    assert!(statements[0].has_keyword(&TokenKind::Recursive));
    assert!(!statements[1].has_keyword(&TokenKind::Recursive));
}

#[test]
fn test_no_where_clause() {
    let statements = parse("DELETE FROM /tmp").unwrap();
    assert!(statements[0].where_clause().is_none());
}

#[test]
fn test_tree_serializes_to_json() {
    let statements = parse("SELECT * FROM /tmp WHERE sz > 1").unwrap();
    let json = serde_json::to_value(&statements[0]).unwrap();

    assert_eq!(json["kind"], "SELECT");
    let nodes = json["nodes"].as_array().unwrap();
    assert!(nodes.iter().any(|n| n["node"] == "where"));
}
