//! Token model for Lexis source text
//!
//! - [`Token`]: immutable (kind, text) pair with its source span
//! - [`TokenKind`]: closed set of kinds, some reserved for future grammar
//! - [`TokenSequence`]: EOF-terminated output of the tokenizer
//! - [`TokenCursor`]: forward reader the parser walks with

pub mod token;
pub mod token_sequence;

pub use token::{classify_glyph, Token, TokenClass, TokenKind};
pub use token_sequence::{TokenCursor, TokenSequence, TokenSequenceBuilder};

pub use crate::utils::{Position, Span};
