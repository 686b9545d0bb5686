use crate::write_file;
use cli::{error::CliError, executor::CommandExecutor, pipeline::translate_query};
use std::process::Command;
use tokio_util::sync::CancellationToken;

#[test]
fn test_sum_prints_total_size() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "a", 5);
    write_file(dir.path(), "b", 50);

    let translations =
        translate_query(&format!("SELECT sum FROM {}", dir.path().display())).unwrap();
    let output = Command::new("sh")
        .arg("-c")
        .arg(&translations[0].command)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    // The root and both files
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|line| *line == "55"));
}

#[tokio::test]
async fn test_failed_command_stops_batch() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "a", 1);
    let missing = dir.path().join("missing");

    let query = format!(
        "SELECT * FROM {}; DELETE FROM {}",
        missing.display(),
        dir.path().display()
    );
    let commands: Vec<String> = translate_query(&query)
        .unwrap()
        .into_iter()
        .map(|t| t.command)
        .collect();

    let err = CommandExecutor::new("sh", false, CancellationToken::new())
        .run_all(&commands)
        .await
        .unwrap_err();

    assert!(matches!(err, CliError::CommandFailed { .. }));
    assert!(dir.path().join("a").exists());
}

#[test]
fn test_untranslatable_statement_blocks_batch() {
    let err = translate_query("DELETE FROM /tmp; SELECT * FROM /tmp WHERE owner = 'me'")
        .unwrap_err();

    assert!(matches!(err, CliError::Translate { index: 2, .. }));
}
