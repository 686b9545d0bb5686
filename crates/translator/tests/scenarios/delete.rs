use crate::command_for;
use translator::TranslateError;

#[test]
fn test_delete_with_two_conditions() {
    assert_eq!(
        command_for("DELETE FROM /tmp WHERE name = 'x' AND sz < 10").unwrap(),
        r"find /tmp -maxdepth 1 -mindepth 1 \( -name 'x' -and -size -10c \) -exec rm -rf {} +"
    );
}

#[test]
fn test_delete_recursive_by_owner() {
    assert_eq!(
        command_for("DELETE FROM ~/cache WHERE u = nobody RECURSIVE").unwrap(),
        r"find ~/cache -mindepth 1 \( -user nobody \) -exec rm -rf {} +"
    );
}

#[test]
fn test_delete_unknown_field() {
    assert_eq!(
        command_for("DELETE FROM /tmp WHERE colour = 'red'"),
        Err(TranslateError::UnknownField("colour".to_string()))
    );
}

#[test]
fn test_delete_quoted_path_stays_one_word() {
    assert_eq!(
        command_for("DELETE FROM '/data/(old) & new' WHERE sz > 1").unwrap(),
        r"find '/data/(old) & new' -maxdepth 1 -mindepth 1 \( -size +1c \) -exec rm -rf {} +"
    );
}

#[test]
fn test_delete_size_needs_a_number() {
    assert!(matches!(
        command_for("DELETE FROM /tmp WHERE sz > big"),
        Err(TranslateError::MalformedCondition(_))
    ));
}
