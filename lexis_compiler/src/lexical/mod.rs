//! Lexical analysis: source text to an EOF-terminated token sequence
//!
//! The free functions build a fresh [`LexicalAnalyzer`] per call. Use the
//! analyzer directly to read [`LexicalMetrics`] afterwards.

pub mod analyzer;

use crate::config::compile_time::lexical::{MAX_FRAGMENT_LENGTH, MAX_TOKEN_COUNT};
use crate::config::runtime::LexicalPreferences;
use crate::file_processor::FileProcessingResult;
use crate::tokens::{TokenClass, TokenKind, TokenSequence};

pub use analyzer::{LexerError, LexicalAnalyzer, LexicalMetrics, FRAGMENT_DELIMITER};

/// Tokenize `source` with preferences taken from the environment
pub fn tokenize(source: &str) -> Result<TokenSequence, LexerError> {
    LexicalAnalyzer::new().tokenize(source)
}

pub fn tokenize_with_preferences(
    source: &str,
    preferences: LexicalPreferences,
) -> Result<TokenSequence, LexerError> {
    LexicalAnalyzer::with_preferences(preferences).tokenize(source)
}

/// Tokenize a file's contents
pub fn tokenize_file_result(
    file_result: &FileProcessingResult,
) -> Result<TokenSequence, LexerError> {
    LexicalAnalyzer::new().tokenize_file_result(file_result)
}

/// Check that every lexical code has registry metadata
pub fn init_lexical_analysis_logging() -> Result<(), String> {
    let lexical_codes = [
        crate::logging::codes::lexical::UNRECOGNIZED_TOKEN,
        crate::logging::codes::lexical::MALFORMED_OPERATOR,
        crate::logging::codes::lexical::FRAGMENT_TOO_LONG,
        crate::logging::codes::lexical::TOO_MANY_TOKENS,
        crate::logging::codes::lexical::OPERATOR_TRUNCATED,
    ];

    for code in &lexical_codes {
        if crate::logging::codes::get_error_metadata(code.as_str()).is_none() {
            return Err(format!(
                "Lexical code {} not found in metadata registry",
                code.as_str()
            ));
        }
    }

    crate::log_debug!("Lexical limits initialized",
        "max_token_count" => MAX_TOKEN_COUNT,
        "max_fragment_length" => MAX_FRAGMENT_LENGTH
    );

    Ok(())
}

/// Token distribution of a finished sequence
pub fn get_token_counts(sequence: &TokenSequence) -> TokenCounts {
    let mut counts = TokenCounts::default();

    for token in sequence {
        counts.total += 1;
        match token.kind() {
            TokenKind::Number => counts.numbers += 1,
            TokenKind::Null => counts.nulls += 1,
            kind => match kind.token_class() {
                TokenClass::Keyword => counts.keywords += 1,
                TokenClass::Identifier => counts.identifiers += 1,
                TokenClass::Operator => counts.operators += 1,
                TokenClass::Grouping => counts.grouping += 1,
                _ => {}
            },
        }
    }

    counts
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TokenCounts {
    /// EOF included
    pub total: usize,
    pub keywords: usize,
    pub identifiers: usize,
    pub numbers: usize,
    pub nulls: usize,
    pub operators: usize,
    pub grouping: usize,
}

impl TokenCounts {
    /// Everything except the EOF terminator
    pub fn significant_tokens(&self) -> usize {
        self.total.saturating_sub(1)
    }

    pub fn has_content(&self) -> bool {
        self.significant_tokens() > 0
    }

    pub fn is_within_limits(&self) -> bool {
        self.total <= MAX_TOKEN_COUNT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn defaults() -> LexicalPreferences {
        LexicalPreferences {
            strict_operator_fragments: false,
            collect_detailed_metrics: false,
            warn_on_truncation: false,
            split_on_newlines: false,
        }
    }

    #[test]
    fn test_tokenize_with_preferences() {
        let sequence = tokenize_with_preferences("x + 1", defaults()).unwrap();
        assert_eq!(
            sequence.kinds(),
            vec![
                TokenKind::Identifier,
                TokenKind::Plus,
                TokenKind::Number,
                TokenKind::Eof
            ]
        );

        assert_matches!(
            tokenize_with_preferences("x + 1.5", defaults()),
            Err(LexerError::UnrecognizedToken { index: 2, .. })
        );
    }

    #[test]
    fn test_init_logging() {
        assert!(init_lexical_analysis_logging().is_ok());
    }

    #[test]
    fn test_token_counts() {
        let sequence =
            tokenize_with_preferences("let total = ( a + 10 ) / null", defaults()).unwrap();
        let counts = get_token_counts(&sequence);

        assert_eq!(counts.total, 11);
        assert_eq!(counts.keywords, 1);
        assert_eq!(counts.identifiers, 2);
        assert_eq!(counts.numbers, 1);
        assert_eq!(counts.nulls, 1);
        assert_eq!(counts.operators, 3);
        assert_eq!(counts.grouping, 2);
        assert_eq!(counts.significant_tokens(), 10);
        assert!(counts.has_content());
        assert!(counts.is_within_limits());
    }

    #[test]
    fn test_empty_sequence_counts() {
        let counts = get_token_counts(&tokenize_with_preferences("", defaults()).unwrap());
        assert_eq!(counts.total, 1);
        assert!(!counts.has_content());
    }

    #[test]
    fn test_compile_time_constants_exist() {
        assert!(MAX_TOKEN_COUNT > 1);
        assert!(MAX_FRAGMENT_LENGTH > 0);
    }
}
