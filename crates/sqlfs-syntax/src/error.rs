use crate::lexer::error::LexerError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyntaxError {
    #[error(transparent)]
    Lexer(#[from] LexerError),

    #[error("Query contains no statements")]
    EmptyQuery,
}
