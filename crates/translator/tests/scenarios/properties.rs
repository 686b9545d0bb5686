use crate::command_for;
use sqlfs_syntax::parse;
use translator::{extract_conditions, translate};

const QUERIES: &[&str] = &[
    "SELECT * FROM /tmp",
    "SELECT name, sz FROM /data WHERE sz > 100",
    "DELETE FROM /tmp WHERE name = 'x' AND sz < 10",
    "SELECT sum FROM /data RECURSIVE",
    "INSERT INTO /backup FROM /data WHERE perm = 644",
];

#[test]
fn test_translation_is_idempotent() {
    for query in QUERIES {
        let statement = parse(query).unwrap().remove(0);
        let first = translate(&statement).unwrap().to_string();
        let second = translate(&statement).unwrap().to_string();
        assert_eq!(first, second, "{}", query);
    }
}

#[test]
fn test_default_shallow() {
    for query in QUERIES {
        let command = command_for(query).unwrap();
        let main = command.rsplit("; ").next().unwrap();
        let recursive = query.contains("RECURSIVE");
        assert_eq!(main.contains("-maxdepth 1"), !recursive, "{}", query);
    }
}

#[test]
fn test_condition_count_matches_comparisons() {
    let cases = [
        ("SELECT * FROM /a", 0),
        ("SELECT * FROM /a WHERE sz > 1", 1),
        ("SELECT * FROM /a WHERE sz > 1 OR sz < 0", 2),
        ("SELECT * FROM /a WHERE sz > 1 OR sz < 0 AND name = 'b' OR perm = 755", 4),
    ];

    for (query, expected) in cases {
        let statement = parse(query).unwrap().remove(0);
        let conditions = extract_conditions(statement.where_clause()).unwrap();

        assert_eq!(conditions.len(), expected, "{}", query);
        if let Some(first) = conditions.first() {
            assert!(first.connective.is_none());
        }
        assert!(conditions.iter().skip(1).all(|c| c.connective.is_some()));
    }
}

#[test]
fn test_batch_translates_each_statement() {
    let statements = parse("SELECT * FROM /a; DELETE FROM /b; INSERT INTO /c FROM /d").unwrap();
    let commands: Vec<String> = statements
        .iter()
        .map(|s| translate(s).unwrap().to_string())
        .collect();

    assert_eq!(commands.len(), 3);
    assert!(commands[0].ends_with("-ls"));
    assert!(commands[1].contains("rm -rf"));
    assert!(commands[2].contains("cp -r {} /c"));
}
