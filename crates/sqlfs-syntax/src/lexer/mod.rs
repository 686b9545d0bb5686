use crate::{
    lexer::{
        error::LexerError,
        token::{Token, TokenKind},
    },
    parser::{Rule, SqlfsParser},
};
use pest::{Parser, iterators::Pair};

pub mod error;
pub mod token;

pub struct Lexer {
    tokens: Vec<Token>,
}

impl Lexer {
    pub fn new() -> Self {
        Lexer { tokens: Vec::new() }
    }

    pub fn tokenize(&mut self, input: &str) -> Result<Vec<Token>, LexerError> {
        self.tokens.clear();

        let pairs =
            SqlfsParser::parse(Rule::program, input).map_err(LexerError::from_pest_error)?;

        for pair in pairs {
            self.process_pair(pair);
        }

        // Add EOF token
        self.tokens.push(Token {
            kind: TokenKind::Eof,
            lexeme: String::new(),
            line: input.lines().count(),
            column: input.lines().last().map(|l| l.len()).unwrap_or(0),
            span: (input.len(), input.len()),
        });

        Ok(self.tokens.clone())
    }

    fn process_pair(&mut self, pair: Pair<Rule>) {
        let span = pair.as_span();
        let (line, column) = span.start_pos().line_col();
        let lexeme = span.as_str().to_string();

        let kind = match pair.as_rule() {
            // Keywords
            Rule::kw_select => TokenKind::Select,
            Rule::kw_delete => TokenKind::Delete,
            Rule::kw_insert => TokenKind::Insert,
            Rule::kw_update => TokenKind::Update,
            Rule::kw_into => TokenKind::Into,
            Rule::kw_from => TokenKind::From,
            Rule::kw_where => TokenKind::Where,
            Rule::kw_and => TokenKind::And,
            Rule::kw_or => TokenKind::Or,
            Rule::kw_recursive => TokenKind::Recursive,

            // Literals
            Rule::lit_string => {
                let content = &lexeme[1..lexeme.len() - 1];
                TokenKind::String(content.to_string())
            }
            Rule::lit_number => TokenKind::Number(lexeme.clone()),
            Rule::path => TokenKind::Path(lexeme.clone()),

            // Identifiers
            Rule::ident => TokenKind::Identifier(lexeme.clone()),
            Rule::fn_call => {
                let name = pair
                    .into_inner()
                    .find(|inner| inner.as_rule() == Rule::fn_name)
                    .map(|inner| inner.as_str().to_string())
                    .unwrap_or_default();
                TokenKind::FunctionCall(name)
            }

            // Operators
            Rule::op_eq => TokenKind::Equal,
            Rule::op_neq => TokenKind::NotEqual,
            Rule::op_lt => TokenKind::LessThan,
            Rule::op_gt => TokenKind::GreaterThan,
            Rule::op_lte => TokenKind::LessOrEqual,
            Rule::op_gte => TokenKind::GreaterOrEqual,

            // Delimiters
            Rule::wildcard => TokenKind::Wildcard,
            Rule::comma => TokenKind::Comma,
            Rule::semicolon => TokenKind::Semicolon,
            Rule::lparen => TokenKind::LeftParen,
            Rule::rparen => TokenKind::RightParen,

            // Trivia
            Rule::ws => TokenKind::Whitespace,
            Rule::comment => TokenKind::Comment,

            // Recursively process other rules
            _ => {
                for inner_pair in pair.into_inner() {
                    self.process_pair(inner_pair);
                }
                return;
            }
        };

        self.add_token(kind, lexeme, line, column, span.start(), span.end());
    }

    fn add_token(
        &mut self,
        kind: TokenKind,
        lexeme: String,
        line: usize,
        column: usize,
        start: usize,
        end: usize,
    ) {
        self.tokens.push(Token {
            kind,
            lexeme,
            line,
            column,
            span: (start, end),
        });
    }
}

impl Default for Lexer {
    fn default() -> Self {
        Lexer { tokens: vec![] }
    }
}
