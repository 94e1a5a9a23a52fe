//! Reserved words of the Lexis language
//!
//! Matching is exact and case-sensitive: `let` is a keyword, `Let` and
//! `letx` are identifiers.
use crate::tokens::TokenKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Keyword {
    Let,
    Null,
}

impl Keyword {
    pub const ALL: [Keyword; 2] = [Keyword::Let, Keyword::Null];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Let => "let",
            Self::Null => "null",
        }
    }

    pub fn from_str(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kw| kw.as_str() == word)
    }

    pub const fn token_kind(self) -> TokenKind {
        match self {
            Self::Let => TokenKind::Let,
            Self::Null => TokenKind::Null,
        }
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn is_keyword(word: &str) -> bool {
    Keyword::from_str(word).is_some()
}
