//! Shared utilities for the lexer, parser and printer

pub mod span;

pub use span::{Position, SourceMap, Span};
