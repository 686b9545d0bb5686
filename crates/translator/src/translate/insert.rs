use crate::{
    command::{FindCommand, ast::Action, builder::FindCommandBuilder},
    error::TranslateResult,
    translate::{build_filter, extract_path, is_recursive},
};
use sqlfs_syntax::{lexer::token::TokenKind, tree::Statement};

/// Copies every match under the `FROM` path into the `INTO` path. The
/// destination is a single target, so it should be a directory whenever
/// more than one entry can match.
pub(super) fn translate_insert(statement: &Statement) -> TranslateResult<FindCommand> {
    let destination = extract_path(statement, &TokenKind::Into)?;
    let source = extract_path(statement, &TokenKind::From)?;

    Ok(
        FindCommandBuilder::new(source, Action::Copy { destination })
            .recursive(is_recursive(statement))
            .skip_root()
            .filter(build_filter(statement)?)
            .build(),
    )
}
