use crate::write_file;
use cli::{executor::CommandExecutor, pipeline::translate_query};
use tokio_util::sync::CancellationToken;

async fn execute(query: &str) {
    let commands: Vec<String> = translate_query(query)
        .unwrap()
        .into_iter()
        .map(|t| t.command)
        .collect();

    CommandExecutor::new("sh", false, CancellationToken::new())
        .run_all(&commands)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_delete_by_size() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "small.txt", 5);
    write_file(dir.path(), "large.txt", 50);

    execute(&format!("DELETE FROM {} WHERE sz > 10", dir.path().display())).await;

    assert!(dir.path().exists());
    assert!(dir.path().join("small.txt").exists());
    assert!(!dir.path().join("large.txt").exists());
}

#[tokio::test]
async fn test_delete_is_shallow_unless_recursive() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("nested");
    std::fs::create_dir(&nested).unwrap();
    write_file(&nested, "old.log", 1);
    write_file(dir.path(), "old.log", 1);

    execute(&format!("DELETE FROM {} WHERE name = 'old.log'", dir.path().display())).await;
    assert!(!dir.path().join("old.log").exists());
    assert!(nested.join("old.log").exists());

    execute(&format!(
        "DELETE FROM {} WHERE name = 'old.log' RECURSIVE",
        dir.path().display()
    ))
    .await;
    assert!(!nested.join("old.log").exists());
    assert!(nested.exists());
}

#[tokio::test]
async fn test_insert_copies_matching_entries() {
    let source = tempfile::tempdir().unwrap();
    let destination = tempfile::tempdir().unwrap();
    write_file(source.path(), "keep.txt", 3);
    write_file(source.path(), "skip.txt", 3);

    execute(&format!(
        "INSERT INTO {} FROM {} WHERE name = 'keep.txt'",
        destination.path().display(),
        source.path().display()
    ))
    .await;

    assert!(destination.path().join("keep.txt").exists());
    assert!(!destination.path().join("skip.txt").exists());
    assert!(source.path().join("skip.txt").exists());
}

#[tokio::test]
async fn test_delete_applies_every_or_branch() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["x", "y", "keep"] {
        write_file(dir.path(), name, 1);
    }

    execute(&format!(
        "DELETE FROM {} WHERE name = 'x' OR name = 'y'",
        dir.path().display()
    ))
    .await;

    assert!(!dir.path().join("x").exists());
    assert!(!dir.path().join("y").exists());
    assert!(dir.path().join("keep").exists());
}

#[tokio::test]
async fn test_insert_applies_every_or_branch() {
    let source = tempfile::tempdir().unwrap();
    let destination = tempfile::tempdir().unwrap();
    write_file(source.path(), "tiny", 1);
    write_file(source.path(), "named", 40);
    write_file(source.path(), "other", 40);

    execute(&format!(
        "INSERT INTO {} FROM {} WHERE sz < 2 OR name = 'named'",
        destination.path().display(),
        source.path().display()
    ))
    .await;

    assert!(destination.path().join("tiny").exists());
    assert!(destination.path().join("named").exists());
    assert!(!destination.path().join("other").exists());
}
