//! Token kinds and the immutable token value
//!
//! Only a subset of `TokenKind` is produced by the tokenizer today. The rest
//! are reserved so later grammar work can extend classification without
//! renumbering the enum.
use crate::utils::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    // === PRODUCED BY THE TOKENIZER ===
    Let,
    Number,
    Plus,
    Minus,
    Multiply,
    Divide,
    LeftParen,
    RightParen,
    Assign,
    Identifier,
    Null,
    Eof,

    // === RESERVED ===
    String,
    Character,
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Comma,
    Semicolon,
    Colon,
    Dot,
    Equal,
    NotEqual,
    LessThan,
    LessThanEqual,
    GreaterThan,
    GreaterThanEqual,
    PlusAssign,
    MinusAssign,
    MultiplyAssign,
    DivideAssign,
    ModuloAssign,
    LogicalAnd,
    LogicalOr,
    LogicalNot,
    Modulo,
    Increment,
    Decrement,
    Comment,
}

impl TokenKind {
    /// Upper-case name used in debug output, e.g. `LEFT_PAREN`
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Let => "LET",
            Self::Number => "NUMBER",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Multiply => "MULTIPLY",
            Self::Divide => "DIVIDE",
            Self::LeftParen => "LEFT_PAREN",
            Self::RightParen => "RIGHT_PAREN",
            Self::Assign => "ASSIGN",
            Self::Identifier => "IDENTIFIER",
            Self::Null => "NULL",
            Self::Eof => "EOF",
            Self::String => "STRING",
            Self::Character => "CHARACTER",
            Self::LeftBrace => "LEFT_BRACE",
            Self::RightBrace => "RIGHT_BRACE",
            Self::LeftBracket => "LEFT_BRACKET",
            Self::RightBracket => "RIGHT_BRACKET",
            Self::Comma => "COMMA",
            Self::Semicolon => "SEMICOLON",
            Self::Colon => "COLON",
            Self::Dot => "DOT",
            Self::Equal => "EQUAL",
            Self::NotEqual => "NOT_EQUAL",
            Self::LessThan => "LESS_THAN",
            Self::LessThanEqual => "LESS_THAN_EQUAL",
            Self::GreaterThan => "GREATER_THAN",
            Self::GreaterThanEqual => "GREATER_THAN_EQUAL",
            Self::PlusAssign => "PLUS_ASSIGN",
            Self::MinusAssign => "MINUS_ASSIGN",
            Self::MultiplyAssign => "MULTIPLY_ASSIGN",
            Self::DivideAssign => "DIVIDE_ASSIGN",
            Self::ModuloAssign => "MODULO_ASSIGN",
            Self::LogicalAnd => "LOGICAL_AND",
            Self::LogicalOr => "LOGICAL_OR",
            Self::LogicalNot => "LOGICAL_NOT",
            Self::Modulo => "MODULO",
            Self::Increment => "INCREMENT",
            Self::Decrement => "DECREMENT",
            Self::Comment => "COMMENT",
        }
    }

    pub fn is_arithmetic_operator(self) -> bool {
        matches!(
            self,
            Self::Plus | Self::Minus | Self::Multiply | Self::Divide
        )
    }

    /// Kinds that can stand alone as an operand in an expression chain
    pub fn is_operand(self) -> bool {
        matches!(self, Self::Number | Self::Identifier | Self::Null)
    }

    pub fn token_class(self) -> TokenClass {
        match self {
            Self::Let => TokenClass::Keyword,
            Self::Plus | Self::Minus | Self::Multiply | Self::Divide | Self::Assign => {
                TokenClass::Operator
            }
            Self::Number | Self::Null => TokenClass::Literal,
            Self::Identifier => TokenClass::Identifier,
            Self::LeftParen | Self::RightParen => TokenClass::Grouping,
            Self::Eof => TokenClass::Special,
            _ => TokenClass::Reserved,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse grouping used for lexical metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenClass {
    Keyword,
    Operator,
    Literal,
    Identifier,
    Grouping,
    Special,
    Reserved,
}

/// Map the first character of a fragment to a single-glyph token kind
pub fn classify_glyph(ch: char) -> Option<TokenKind> {
    match ch {
        '(' => Some(TokenKind::LeftParen),
        ')' => Some(TokenKind::RightParen),
        '=' => Some(TokenKind::Assign),
        '+' => Some(TokenKind::Plus),
        '-' => Some(TokenKind::Minus),
        '*' => Some(TokenKind::Multiply),
        '/' => Some(TokenKind::Divide),
        _ => None,
    }
}

/// A classified fragment of source text. `value` is the exact text the
/// token was produced from (the glyph alone for operators, `"EOF"` for the
/// terminator).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Token {
    pub const EOF_VALUE: &'static str = "EOF";

    pub fn new(kind: TokenKind, value: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            value: value.into(),
            span,
        }
    }

    pub fn eof(span: Span) -> Self {
        Self::new(TokenKind::Eof, Self::EOF_VALUE, span)
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.kind, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_classification() {
        assert_eq!(classify_glyph('('), Some(TokenKind::LeftParen));
        assert_eq!(classify_glyph('='), Some(TokenKind::Assign));
        assert_eq!(classify_glyph('/'), Some(TokenKind::Divide));
        assert_eq!(classify_glyph('%'), None);
        assert_eq!(classify_glyph('a'), None);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(TokenKind::LeftParen.to_string(), "LEFT_PAREN");
        assert_eq!(TokenKind::GreaterThanEqual.as_str(), "GREATER_THAN_EQUAL");
        assert_eq!(
            serde_json::to_string(&TokenKind::RightParen).unwrap(),
            "\"RIGHT_PAREN\""
        );
    }

    #[test]
    fn test_token_classes() {
        assert_eq!(TokenKind::Let.token_class(), TokenClass::Keyword);
        assert_eq!(TokenKind::Assign.token_class(), TokenClass::Operator);
        assert_eq!(TokenKind::Null.token_class(), TokenClass::Literal);
        assert_eq!(TokenKind::Comment.token_class(), TokenClass::Reserved);
        assert!(TokenKind::Null.is_operand());
        assert!(!TokenKind::Assign.is_arithmetic_operator());
    }

    #[test]
    fn test_eof_token() {
        let eof = Token::eof(Span::default());
        assert!(eof.is_eof());
        assert_eq!(eof.value(), "EOF");
        assert_eq!(eof.to_string(), "EOF [EOF]");
    }
}
