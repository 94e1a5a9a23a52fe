//! Syntax errors with logging code mapping and span reporting

use crate::logging::{codes, Code};
use crate::utils::Span;

pub type SyntaxResult<T> = Result<T, SyntaxError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    #[error("Unexpected token: expected {expected}, found '{found}' at {span}")]
    UnexpectedToken {
        expected: String,
        found: String,
        span: Span,
    },

    #[error("Unexpected end of input: expected {expected} at {span}")]
    UnexpectedEndOfInput { expected: String, span: Span },

    #[error("Unsupported token '{token}' at {span}: grouping is not part of expression chains")]
    UnsupportedToken { token: String, span: Span },

    #[error("Empty token stream - no tokens to parse")]
    EmptyTokenStream,

    #[error("Token stream must end with exactly one EOF token")]
    MissingEof,

    #[error("Expression chain too long: {length} operands (max {max}) at {span}")]
    MaxChainLength {
        length: usize,
        max: usize,
        span: Span,
    },

    #[error("Too many statements: {count} (max {max})")]
    TooManyStatements { count: usize, max: usize },
}

impl SyntaxError {
    pub fn unexpected_token(expected: &str, found: &str, span: Span) -> Self {
        Self::UnexpectedToken {
            expected: expected.to_string(),
            found: found.to_string(),
            span,
        }
    }

    pub fn unexpected_end_of_input(expected: &str, span: Span) -> Self {
        Self::UnexpectedEndOfInput {
            expected: expected.to_string(),
            span,
        }
    }

    pub fn unsupported_token(token: &str, span: Span) -> Self {
        Self::UnsupportedToken {
            token: token.to_string(),
            span,
        }
    }

    pub fn error_code(&self) -> Code {
        match self {
            Self::UnexpectedToken { .. } => codes::syntax::UNEXPECTED_TOKEN,
            Self::UnexpectedEndOfInput { .. } => codes::syntax::UNEXPECTED_END_OF_INPUT,
            Self::UnsupportedToken { .. } => codes::syntax::UNSUPPORTED_TOKEN,
            Self::EmptyTokenStream => codes::syntax::EMPTY_TOKEN_STREAM,
            Self::MissingEof => codes::syntax::MISSING_EOF,
            Self::MaxChainLength { .. } => codes::syntax::CHAIN_TOO_LONG,
            Self::TooManyStatements { .. } => codes::syntax::TOO_MANY_STATEMENTS,
        }
    }

    pub fn span(&self) -> Option<Span> {
        match self {
            Self::UnexpectedToken { span, .. }
            | Self::UnexpectedEndOfInput { span, .. }
            | Self::UnsupportedToken { span, .. }
            | Self::MaxChainLength { span, .. } => Some(*span),
            Self::EmptyTokenStream | Self::MissingEof | Self::TooManyStatements { .. } => None,
        }
    }

    pub fn requires_halt(&self) -> bool {
        codes::requires_halt(self.error_code().as_str())
    }

    pub fn is_recoverable(&self) -> bool {
        codes::is_recoverable(self.error_code().as_str())
    }

    pub fn severity(&self) -> &'static str {
        codes::get_severity(self.error_code().as_str()).as_str()
    }

    pub fn category(&self) -> &'static str {
        codes::get_category(self.error_code().as_str())
    }

    pub fn recommended_action(&self) -> &'static str {
        codes::get_action(self.error_code().as_str())
    }

    /// Error message followed by the registry's recommended action
    pub fn enhanced_message(&self) -> String {
        match self {
            Self::UnexpectedToken {
                expected, found, ..
            } => format!(
                "Expected {} but found '{}'. {}",
                expected,
                found,
                self.recommended_action()
            ),
            Self::UnexpectedEndOfInput { expected, .. } => format!(
                "Unexpected end of input while expecting {}. {}",
                expected,
                self.recommended_action()
            ),
            _ => format!("{} ({})", self, self.recommended_action()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::Position;

    #[test]
    fn test_error_code_mapping() {
        let span = Span::empty_at(Position::start());

        assert_eq!(
            SyntaxError::unexpected_token("operand", "=", span)
                .error_code()
                .as_str(),
            "E050"
        );
        assert_eq!(SyntaxError::MissingEof.error_code().as_str(), "E040");
        assert_eq!(SyntaxError::EmptyTokenStream.error_code().as_str(), "E041");
        assert_eq!(
            SyntaxError::unsupported_token("(", span).error_code().as_str(),
            "E042"
        );
        assert_eq!(
            SyntaxError::unexpected_end_of_input("operand", span)
                .error_code()
                .as_str(),
            "E043"
        );
        assert_eq!(
            SyntaxError::MaxChainLength {
                length: 3,
                max: 2,
                span
            }
            .error_code()
            .as_str(),
            "E087"
        );
    }

    #[test]
    fn test_span_extraction() {
        let span = Span::new(Position::new(10, 1, 11), Position::new(11, 1, 12));
        let error = SyntaxError::unexpected_token("operand", "*", span);

        assert_eq!(error.span(), Some(span));
        assert_eq!(SyntaxError::MissingEof.span(), None);
        assert_eq!(error.to_string(), "Unexpected token: expected operand, found '*' at 1:11-12");
    }

    #[test]
    fn test_error_properties() {
        let error = SyntaxError::unsupported_token(")", Span::default());
        assert!(error.requires_halt());
        assert!(!error.is_recoverable());
        assert_eq!(error.category(), "Syntax");
        assert_eq!(error.severity(), "Medium");
    }

    #[test]
    fn test_enhanced_messages() {
        let error = SyntaxError::unexpected_token("identifier", "45", Span::default());
        let enhanced = error.enhanced_message();
        assert!(enhanced.contains("Expected identifier"));
        assert!(enhanced.contains("found '45'"));
        assert!(enhanced.ends_with("Check statement structure"));
    }
}
