//! Fragment-based lexical analyzer
//!
//! Source text is split on the single ASCII space. Each non-blank fragment is
//! classified by its first character (operator glyphs), then as a whole
//! (digits, letters). The first fragment that fits none of these aborts the
//! call; no partial sequence is returned.

use crate::config::compile_time::lexical::{MAX_FRAGMENT_LENGTH, MAX_TOKEN_COUNT};
use crate::config::runtime::LexicalPreferences;
use crate::file_processor::FileProcessingResult;
use crate::grammar::keywords::Keyword;
use crate::logging::codes;
use crate::tokens::{classify_glyph, Token, TokenKind, TokenSequence, TokenSequenceBuilder};
use crate::utils::{Position, Span};
use crate::{log_debug, log_error, log_success, log_warning};
use serde::Serialize;
use std::collections::BTreeMap;

/// The one delimiter the tokenizer always splits on
pub const FRAGMENT_DELIMITER: char = ' ';

/// Lexical analysis errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexerError {
    #[error("Unknown token: [{fragment}] (fragment {index} at {span})")]
    UnrecognizedToken {
        fragment: String,
        index: usize,
        span: Span,
    },

    #[error("Malformed operator: [{fragment}] (fragment {index} at {span})")]
    MalformedOperator {
        fragment: String,
        index: usize,
        span: Span,
    },

    #[error("Fragment too long: {length} characters (max {MAX_FRAGMENT_LENGTH})")]
    FragmentTooLong {
        length: usize,
        index: usize,
        span: Span,
    },

    #[error("Too many tokens: {count} (max {MAX_TOKEN_COUNT})")]
    TooManyTokens { count: usize },
}

impl LexerError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            LexerError::UnrecognizedToken { .. } => codes::lexical::UNRECOGNIZED_TOKEN,
            LexerError::MalformedOperator { .. } => codes::lexical::MALFORMED_OPERATOR,
            LexerError::FragmentTooLong { .. } => codes::lexical::FRAGMENT_TOO_LONG,
            LexerError::TooManyTokens { .. } => codes::lexical::TOO_MANY_TOKENS,
        }
    }

    /// Source location of the offending fragment, when there is one
    pub fn span(&self) -> Option<Span> {
        match self {
            LexerError::UnrecognizedToken { span, .. }
            | LexerError::MalformedOperator { span, .. }
            | LexerError::FragmentTooLong { span, .. } => Some(*span),
            LexerError::TooManyTokens { .. } => None,
        }
    }

    /// 0-based position of the offending fragment among the split pieces
    pub fn fragment_index(&self) -> Option<usize> {
        match self {
            LexerError::UnrecognizedToken { index, .. }
            | LexerError::MalformedOperator { index, .. }
            | LexerError::FragmentTooLong { index, .. } => Some(*index),
            LexerError::TooManyTokens { .. } => None,
        }
    }
}

/// Counters gathered during one tokenization
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct LexicalMetrics {
    /// Pieces produced by splitting, empty ones included
    pub fragments_seen: usize,
    /// Empty or whitespace-only pieces
    pub fragments_skipped: usize,
    /// Tokens in the finished sequence, EOF included
    pub total_tokens: usize,
    pub keyword_tokens: usize,
    pub identifier_tokens: usize,
    pub number_tokens: usize,
    pub null_tokens: usize,
    pub operator_tokens: usize,
    pub grouping_tokens: usize,
    /// Operator fragments whose trailing characters were dropped
    pub truncated_operator_fragments: usize,
    /// Longest classified fragment, in characters
    pub max_fragment_length: usize,

    // Only filled when `collect_detailed_metrics` is set
    pub kind_counts: BTreeMap<&'static str, usize>,
}

impl LexicalMetrics {
    pub(crate) fn record_token(&mut self, token: &Token, preferences: &LexicalPreferences) {
        match token.kind() {
            TokenKind::Let => self.keyword_tokens += 1,
            TokenKind::Null => self.null_tokens += 1,
            TokenKind::Identifier => self.identifier_tokens += 1,
            TokenKind::Number => self.number_tokens += 1,
            TokenKind::LeftParen | TokenKind::RightParen => self.grouping_tokens += 1,
            kind if kind.is_arithmetic_operator() || kind == TokenKind::Assign => {
                self.operator_tokens += 1
            }
            _ => {}
        }

        if preferences.collect_detailed_metrics {
            *self.kind_counts.entry(token.kind().as_str()).or_insert(0) += 1;
        }
    }

    pub(crate) fn record_fragment_length(&mut self, length: usize) {
        self.max_fragment_length = self.max_fragment_length.max(length);
    }
}

/// Stateful tokenizer; metrics are reset at the start of each call
pub struct LexicalAnalyzer {
    metrics: LexicalMetrics,
    preferences: LexicalPreferences,
}

impl LexicalAnalyzer {
    pub fn new() -> Self {
        Self {
            metrics: LexicalMetrics::default(),
            preferences: LexicalPreferences::default(),
        }
    }

    pub fn with_preferences(preferences: LexicalPreferences) -> Self {
        Self {
            metrics: LexicalMetrics::default(),
            preferences,
        }
    }

    /// Split `source` into fragments and classify each one
    pub fn tokenize(&mut self, source: &str) -> Result<TokenSequence, LexerError> {
        self.metrics = LexicalMetrics::default();
        let start_time = std::time::Instant::now();

        log_debug!("Starting lexical analysis",
            "bytes" => source.len(),
            "split_on_newlines" => self.preferences.split_on_newlines,
            "strict_operators" => self.preferences.strict_operator_fragments
        );

        let split_on_newlines = self.preferences.split_on_newlines;
        let is_delimiter = move |c: char| {
            c == FRAGMENT_DELIMITER || (split_on_newlines && (c == '\n' || c == '\r'))
        };

        let mut builder = TokenSequenceBuilder::new();
        let mut cursor = Position::start();

        for (index, fragment) in source.split(is_delimiter).enumerate() {
            let start = cursor;
            let end = start.advance_str(fragment);
            cursor = source
                .get(end.offset..)
                .and_then(|rest| rest.chars().next())
                .map(|delimiter| end.advance(delimiter))
                .unwrap_or(end);

            self.metrics.fragments_seen += 1;
            if fragment.trim().is_empty() {
                self.metrics.fragments_skipped += 1;
                continue;
            }

            // +1 for this token, +1 for the EOF terminator
            let projected = builder.len() + 2;
            if projected > MAX_TOKEN_COUNT {
                let error = LexerError::TooManyTokens { count: projected };
                log_error!(error.error_code(), "Token limit exceeded",
                    span = Span::new(start, end),
                    "token_count" => projected,
                    "limit" => MAX_TOKEN_COUNT
                );
                return Err(error);
            }

            let token = self.classify_fragment(fragment, index, Span::new(start, end))?;
            self.metrics.record_token(&token, &self.preferences);
            builder.push(token);
        }

        let sequence = builder.finish(Span::empty_at(cursor));
        self.metrics.total_tokens = sequence.len();

        let duration_ms = format!("{:.3}", start_time.elapsed().as_secs_f64() * 1000.0);
        log_success!(codes::success::TOKENIZATION_COMPLETE,
            "Lexical analysis completed successfully",
            "token_count" => sequence.len(),
            "fragments" => self.metrics.fragments_seen,
            "skipped" => self.metrics.fragments_skipped,
            "truncated_operators" => self.metrics.truncated_operator_fragments,
            "duration_ms" => duration_ms
        );

        Ok(sequence)
    }

    /// Tokenize the contents of a file read by the file processor
    pub fn tokenize_file_result(
        &mut self,
        file_result: &FileProcessingResult,
    ) -> Result<TokenSequence, LexerError> {
        let file_path = file_result.metadata.path.display().to_string();
        log_debug!("Tokenizing file",
            "file" => file_path,
            "size_bytes" => file_result.metadata.size,
            "lines" => file_result.metadata.line_count
        );
        self.tokenize(&file_result.source)
    }

    pub fn metrics(&self) -> &LexicalMetrics {
        &self.metrics
    }

    pub fn preferences(&self) -> &LexicalPreferences {
        &self.preferences
    }

    pub fn set_preferences(&mut self, preferences: LexicalPreferences) {
        self.preferences = preferences;
    }

    fn classify_fragment(
        &mut self,
        fragment: &str,
        index: usize,
        span: Span,
    ) -> Result<Token, LexerError> {
        let length = fragment.chars().count();
        if length > MAX_FRAGMENT_LENGTH {
            let error = LexerError::FragmentTooLong {
                length,
                index,
                span,
            };
            log_error!(error.error_code(), "Fragment exceeds maximum length",
                span = span,
                "length" => length,
                "limit" => MAX_FRAGMENT_LENGTH,
                "index" => index
            );
            return Err(error);
        }
        self.metrics.record_fragment_length(length);

        if let Some(kind) = fragment.chars().next().and_then(classify_glyph) {
            return self.operator_token(kind, fragment, index, span);
        }

        if fragment.chars().all(|c| c.is_ascii_digit()) {
            return Ok(Token::new(TokenKind::Number, fragment, span));
        }

        if fragment.chars().all(|c| c.is_ascii_alphabetic()) {
            let kind = Keyword::from_str(fragment)
                .map(Keyword::token_kind)
                .unwrap_or(TokenKind::Identifier);
            return Ok(Token::new(kind, fragment, span));
        }

        let error = LexerError::UnrecognizedToken {
            fragment: fragment.to_string(),
            index,
            span,
        };
        log_error!(error.error_code(), "Unknown token",
            span = span,
            "fragment" => fragment,
            "index" => index
        );
        Err(error)
    }

    /// Glyphs are ASCII, so the token text is the first byte of the fragment
    fn operator_token(
        &mut self,
        kind: TokenKind,
        fragment: &str,
        index: usize,
        span: Span,
    ) -> Result<Token, LexerError> {
        let (glyph, rest) = fragment.split_at(1);

        if !rest.is_empty() {
            if self.preferences.strict_operator_fragments {
                let error = LexerError::MalformedOperator {
                    fragment: fragment.to_string(),
                    index,
                    span,
                };
                log_error!(error.error_code(), "Operator fragment has trailing characters",
                    span = span,
                    "fragment" => fragment,
                    "index" => index
                );
                return Err(error);
            }

            self.metrics.truncated_operator_fragments += 1;
            if self.preferences.warn_on_truncation {
                log_warning!(codes::lexical::OPERATOR_TRUNCATED,
                    "Operator fragment truncated to its first character",
                    span = span,
                    "fragment" => fragment,
                    "kept" => glyph,
                    "dropped" => rest
                );
            }
        }

        Ok(Token::new(kind, glyph, Span::covering(span.start, glyph)))
    }
}

impl Default for LexicalAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
