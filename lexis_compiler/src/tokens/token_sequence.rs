//! EOF-terminated token sequences and a read cursor over them
//!
//! A `TokenSequence` can only be obtained from `TokenSequenceBuilder::finish`,
//! which appends the single EOF token. After that the sequence is read-only.

use crate::tokens::token::{Token, TokenKind};
use crate::utils::Span;
use serde::Serialize;
use std::ops::Index;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TokenSequence {
    tokens: Vec<Token>,
}

impl TokenSequence {
    /// Number of tokens, EOF included; never zero
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always false; kept for clippy's `len_without_is_empty`
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// The EOF terminator
    pub fn last(&self) -> &Token {
        // finish() guarantees at least the EOF token
        &self.tokens[self.tokens.len() - 1]
    }

    pub fn has_eof(&self) -> bool {
        self.tokens.last().map(Token::is_eof).unwrap_or(false)
    }

    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(Token::kind).collect()
    }
}

impl Index<usize> for TokenSequence {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// Append-only accumulator used during lexing
#[derive(Debug, Default)]
pub struct TokenSequenceBuilder {
    tokens: Vec<Token>,
}

impl TokenSequenceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tokens: Vec::with_capacity(capacity),
        }
    }

    /// Append a classified token; EOF is reserved for `finish`
    pub fn push(&mut self, token: Token) {
        debug_assert!(!token.is_eof(), "EOF is appended by finish()");
        self.tokens.push(token);
    }

    /// Tokens pushed so far
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Append the EOF terminator and seal the sequence
    pub fn finish(mut self, eof_span: Span) -> TokenSequence {
        self.tokens.push(Token::eof(eof_span));
        TokenSequence {
            tokens: self.tokens,
        }
    }
}

/// Forward-only read position over a token slice
#[derive(Debug, Clone)]
pub struct TokenCursor<'a> {
    tokens: &'a [Token],
    position: usize,
}

impl<'a> TokenCursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    pub fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.position)
    }

    pub fn current_kind(&self) -> Option<TokenKind> {
        self.current().map(Token::kind)
    }

    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.position + 1)
    }

    /// Move past the current token and return it
    pub fn advance(&mut self) -> Option<&'a Token> {
        let token = self.current()?;
        self.position += 1;
        Some(token)
    }

    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == Some(kind)
    }

    pub fn is_at_eof(&self) -> bool {
        self.current().map(Token::is_eof).unwrap_or(true)
    }

    pub fn position(&self) -> usize {
        self.position
    }
}
