use crate::{
    command::{FindCommand, ast::Action, builder::FindCommandBuilder},
    error::TranslateResult,
    translate::{build_filter, extract_path, is_recursive},
};
use sqlfs_syntax::{lexer::token::TokenKind, tree::Statement};

pub(super) fn translate_delete(statement: &Statement) -> TranslateResult<FindCommand> {
    let path = extract_path(statement, &TokenKind::From)?;

    Ok(FindCommandBuilder::new(path, Action::Remove)
        .recursive(is_recursive(statement))
        .skip_root()
        .filter(build_filter(statement)?)
        .build())
}
