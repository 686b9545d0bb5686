use crate::parser::Rule;
use pest::error::{Error as PestError, LineColLocation};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexerError {
    /// No token rule matches at `line`:`column` (both 1-based).
    #[error("Unexpected {found} at line {line}, column {column}")]
    ParseError {
        found: String,
        line: usize,
        column: usize,
        source_line: String,
    },
}

impl LexerError {
    pub fn from_pest_error(err: PestError<Rule>) -> Self {
        let (line, column) = match err.line_col {
            LineColLocation::Pos(pos) | LineColLocation::Span(pos, _) => pos,
        };
        let source_line = err.line().trim_end_matches(['\r', '\n']).to_string();

        let found = source_line
            .chars()
            .nth(column.saturating_sub(1))
            .map(|c| format!("'{c}'"))
            .unwrap_or_else(|| "end of input".to_string());

        LexerError::ParseError {
            found,
            line,
            column,
            source_line,
        }
    }

    /// The message followed by the offending line, with a caret under the
    /// column.
    pub fn diagnostic(&self) -> String {
        let LexerError::ParseError {
            line,
            column,
            source_line,
            ..
        } = self;

        let gutter = line.to_string();
        format!(
            "{message}\n{gutter} | {source_line}\n{pad} | {caret:>width$}",
            message = self,
            pad = " ".repeat(gutter.len()),
            caret = "^",
            width = (*column).max(1),
        )
    }
}
