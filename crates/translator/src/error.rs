use thiserror::Error;

/// Reasons a single statement cannot be turned into a command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    #[error("Unsupported statement kind: {0}")]
    UnsupportedOperation(String),

    #[error("Missing {0} clause")]
    MissingClause(String),

    #[error("Unknown field '{0}'")]
    UnknownField(String),

    #[error("Unsupported comparator '{comparator}' for field '{field}'")]
    UnsupportedComparator { field: String, comparator: String },

    #[error("Malformed condition: {0}")]
    MalformedCondition(String),
}

pub type TranslateResult<T> = Result<T, TranslateError>;
