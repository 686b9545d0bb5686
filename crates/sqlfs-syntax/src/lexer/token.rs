use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: usize,
    pub column: usize,
    pub span: (usize, usize),
}

impl Token {
    /// Whitespace and comments carry no meaning for the translator.
    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }

    pub fn is(&self, kind: &TokenKind) -> bool {
        &self.kind == kind
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TokenKind {
    // Keywords
    Select,
    Delete,
    Insert,
    Update,
    Into,
    From,
    Where,
    And,
    Or,
    Recursive,

    // Literals
    String(String),
    Number(String),
    Path(String),

    // Identifiers
    Identifier(String),
    FunctionCall(String), // Function name

    // Operators
    Equal,          // =
    NotEqual,       // != or <>
    GreaterThan,    // >
    LessThan,       // <
    GreaterOrEqual, // >=
    LessOrEqual,    // <=

    // Delimiters
    Wildcard,   // *
    Comma,      // ,
    Semicolon,  // ;
    LeftParen,  // (
    RightParen, // )

    // Trivia
    Whitespace,
    Comment,

    // Special
    Eof,
}

impl TokenKind {
    pub fn is_trivia(&self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Comment)
    }

    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Select
                | TokenKind::Delete
                | TokenKind::Insert
                | TokenKind::Update
                | TokenKind::Into
                | TokenKind::From
                | TokenKind::Where
                | TokenKind::And
                | TokenKind::Or
                | TokenKind::Recursive
        )
    }

    /// Tokens that may stand on either side of a comparison.
    pub fn is_operand(&self) -> bool {
        matches!(
            self,
            TokenKind::Identifier(_)
                | TokenKind::FunctionCall(_)
                | TokenKind::String(_)
                | TokenKind::Number(_)
                | TokenKind::Path(_)
        )
    }

    pub fn is_comparison_operator(&self) -> bool {
        matches!(
            self,
            TokenKind::Equal
                | TokenKind::NotEqual
                | TokenKind::GreaterThan
                | TokenKind::LessThan
                | TokenKind::GreaterOrEqual
                | TokenKind::LessOrEqual
        )
    }

    pub fn is_connective(&self) -> bool {
        matches!(self, TokenKind::And | TokenKind::Or)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Select => write!(f, "SELECT"),
            TokenKind::Delete => write!(f, "DELETE"),
            TokenKind::Insert => write!(f, "INSERT"),
            TokenKind::Update => write!(f, "UPDATE"),
            TokenKind::Into => write!(f, "INTO"),
            TokenKind::From => write!(f, "FROM"),
            TokenKind::Where => write!(f, "WHERE"),
            TokenKind::And => write!(f, "AND"),
            TokenKind::Or => write!(f, "OR"),
            TokenKind::Recursive => write!(f, "RECURSIVE"),
            TokenKind::String(s) => write!(f, "'{}'", s),
            TokenKind::Number(n) => write!(f, "{}", n),
            TokenKind::Path(p) => write!(f, "{}", p),
            TokenKind::Identifier(s) => write!(f, "{}", s),
            TokenKind::FunctionCall(name) => write!(f, "{}()", name),
            TokenKind::Equal => write!(f, "="),
            TokenKind::NotEqual => write!(f, "!="),
            TokenKind::GreaterThan => write!(f, ">"),
            TokenKind::LessThan => write!(f, "<"),
            TokenKind::GreaterOrEqual => write!(f, ">="),
            TokenKind::LessOrEqual => write!(f, "<="),
            TokenKind::Wildcard => write!(f, "*"),
            TokenKind::Comma => write!(f, ","),
            TokenKind::Semicolon => write!(f, ";"),
            TokenKind::LeftParen => write!(f, "("),
            TokenKind::RightParen => write!(f, ")"),
            TokenKind::Whitespace => write!(f, "whitespace"),
            TokenKind::Comment => write!(f, "comment"),
            TokenKind::Eof => write!(f, "EOF"),
        }
    }
}
