use crate::{
    command::{
        FindCommand,
        ast::{Action, PreCommand},
        builder::FindCommandBuilder,
    },
    error::{TranslateError, TranslateResult},
    rules::{self, SUM_ATTRIBUTE, SUM_VARIABLE},
    translate::{build_filter, extract_path, is_recursive},
};
use sqlfs_syntax::{
    lexer::token::TokenKind,
    tree::{Node, Statement},
};

pub(super) fn translate_select(statement: &Statement) -> TranslateResult<FindCommand> {
    let path = extract_path(statement, &TokenKind::From)?;
    let projection = projection(statement)?;

    let mut wants_sum = false;
    let action = if projection.is_token(&TokenKind::Wildcard) {
        Action::List
    } else {
        let attributes = attribute_names(projection);
        wants_sum = attributes.iter().any(|name| name == SUM_ATTRIBUTE);

        let directives = attributes
            .iter()
            .map(|name| rules::attribute_placeholder(name).map(str::to_string))
            .collect::<TranslateResult<Vec<_>>>()?;
        Action::Printf { directives }
    };

    let mut builder = FindCommandBuilder::new(path.clone(), action)
        .recursive(is_recursive(statement))
        .filter(build_filter(statement)?);

    if wants_sum {
        builder = builder.pre_command(PreCommand::SizeSum {
            variable: SUM_VARIABLE.to_string(),
            path,
        });
    }

    Ok(builder.build())
}

/// The node right after `SELECT`: a wildcard, a single attribute or an
/// attribute list.
fn projection(statement: &Statement) -> TranslateResult<&Node> {
    let mut cursor = statement.cursor();
    cursor.seek(&TokenKind::Select);

    match cursor.next_significant() {
        Some(node) if !node.as_token().is_some_and(|t| t.kind.is_keyword()) => Ok(node),
        _ => Err(TranslateError::MissingClause("projection".to_string())),
    }
}

/// Splits the projection on commas. Names are lower-cased and a call-like
/// suffix is dropped, so `SUM(sz)` looks up `sum`.
fn attribute_names(projection: &Node) -> Vec<String> {
    let text: String = match projection {
        Node::IdentifierList(list) => list
            .tokens
            .iter()
            .filter(|t| !t.is_trivia())
            .map(|t| t.lexeme.as_str())
            .collect(),
        other => other.value(),
    };

    text.split(',')
        .map(|attribute| {
            let bare = attribute.split('(').next().unwrap_or_default();
            bare.trim().to_lowercase()
        })
        .collect()
}
