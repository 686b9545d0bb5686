use crate::command_for;

#[test]
fn test_insert_permission_filtered() {
    assert_eq!(
        command_for("INSERT INTO /backup FROM /data WHERE perm = 644").unwrap(),
        r"find /data -maxdepth 1 -mindepth 1 \( -perm 644 \) -exec cp -r {} /backup \;"
    );
}

#[test]
fn test_insert_clause_order_is_free() {
    assert_eq!(
        command_for("INSERT FROM /data INTO /backup WHERE g = staff").unwrap(),
        r"find /data -maxdepth 1 -mindepth 1 \( -group staff \) -exec cp -r {} /backup \;"
    );
}
