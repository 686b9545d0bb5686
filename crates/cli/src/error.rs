use sqlfs_syntax::error::SyntaxError;
use thiserror::Error;
use translator::TranslateError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read the query: {0}")]
    QueryRead(#[from] std::io::Error),

    #[error("Failed to parse the query: {0}")]
    Syntax(#[from] SyntaxError),

    #[error("Failed to translate statement {index}: {source}")]
    Translate {
        index: usize,
        #[source]
        source: TranslateError,
    },

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to start '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command '{command}' exited with status {status}")]
    CommandFailed { command: String, status: i32 },

    #[error("Shutdown requested")]
    ShutdownRequested,
}

impl CliError {
    /// Text for the terminal; lexer failures get the caret diagnostic.
    pub fn report(&self) -> String {
        match self {
            CliError::Syntax(SyntaxError::Lexer(e)) => {
                format!("Failed to parse the query:\n{}", e.diagnostic())
            }
            other => other.to_string(),
        }
    }
}
