//! Error and success codes with their classification metadata
//!
//! Every code a stage can emit is declared here together with severity,
//! recoverability and a recommended action.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for a code
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub requires_halt: bool,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
}

pub mod file_processing {
    use super::Code;

    pub const FILE_NOT_FOUND: Code = Code::new("E005");
    pub const INVALID_EXTENSION: Code = Code::new("E006");
    pub const FILE_TOO_LARGE: Code = Code::new("E007");
    pub const INVALID_ENCODING: Code = Code::new("E010");
    pub const IO_ERROR: Code = Code::new("E011");
    pub const INVALID_PATH: Code = Code::new("E012");
}

pub mod lexical {
    use super::Code;

    pub const UNRECOGNIZED_TOKEN: Code = Code::new("E020");
    pub const MALFORMED_OPERATOR: Code = Code::new("E021");
    pub const FRAGMENT_TOO_LONG: Code = Code::new("E023");
    pub const TOO_MANY_TOKENS: Code = Code::new("E027");
    /// Warning: operator fragment had trailing characters that were dropped
    pub const OPERATOR_TRUNCATED: Code = Code::new("W020");
}

pub mod syntax {
    use super::Code;

    pub const MISSING_EOF: Code = Code::new("E040");
    pub const EMPTY_TOKEN_STREAM: Code = Code::new("E041");
    pub const UNSUPPORTED_TOKEN: Code = Code::new("E042");
    pub const UNEXPECTED_END_OF_INPUT: Code = Code::new("E043");
    pub const UNEXPECTED_TOKEN: Code = Code::new("E050");
    pub const CHAIN_TOO_LONG: Code = Code::new("E087");
    pub const TOO_MANY_STATEMENTS: Code = Code::new("E088");
}

pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I004");
    pub const FILE_PROCESSING_SUCCESS: Code = Code::new("I006");
    pub const TOKENIZATION_COMPLETE: Code = Code::new("I020");
    pub const AST_CONSTRUCTION_COMPLETE: Code = Code::new("I040");
    pub const PIPELINE_COMPLETE: Code = Code::new("I090");
}

type Row = (
    &'static str,
    &'static str,
    Severity,
    bool,
    bool,
    &'static str,
    &'static str,
);

// code, category, severity, recoverable, requires_halt, description, action
const REGISTRY_ROWS: &[Row] = &[
    ("ERR001", "System", Severity::Critical, false, true,
        "Critical internal error",
        "File a bug report with the input that triggered it"),
    ("ERR002", "System", Severity::Critical, false, true,
        "Logging or configuration initialization failed",
        "Check LEXIS_* environment variables"),
    ("E005", "FileProcessing", Severity::Medium, false, true,
        "File not found at specified path",
        "Check file path and ensure file exists"),
    ("E006", "FileProcessing", Severity::Low, true, false,
        "File does not have the .lx extension",
        "Rename the file or unset LEXIS_REQUIRE_LX_EXTENSION"),
    ("E007", "FileProcessing", Severity::Medium, false, true,
        "File exceeds maximum size limit",
        "Split the source or build with a larger max_file_size"),
    ("E010", "FileProcessing", Severity::Medium, false, true,
        "File is not valid UTF-8",
        "Re-save the file as UTF-8"),
    ("E011", "FileProcessing", Severity::High, false, true,
        "I/O error while reading file",
        "Check permissions and disk state"),
    ("E012", "FileProcessing", Severity::Medium, false, true,
        "Path is not a regular file",
        "Pass a path to a source file"),
    ("E020", "Lexical", Severity::High, false, true,
        "Fragment is not an operator, number or word",
        "Separate every token with a single space; only integers and ASCII words are allowed"),
    ("E021", "Lexical", Severity::High, false, true,
        "Operator glyph followed by other characters",
        "Put a space after the operator"),
    ("E023", "Lexical", Severity::Medium, false, true,
        "Fragment exceeds maximum length",
        "Shorten the identifier or number"),
    ("E027", "Lexical", Severity::High, false, true,
        "Too many tokens in a single source",
        "Split the source into smaller files"),
    ("W020", "Lexical", Severity::Low, true, false,
        "Operator fragment truncated to its first character",
        "Put a space after the operator"),
    ("E040", "Syntax", Severity::High, false, true,
        "Token sequence does not end with EOF",
        "Build token sequences through the tokenizer"),
    ("E041", "Syntax", Severity::High, false, true,
        "Token sequence is empty",
        "Build token sequences through the tokenizer"),
    ("E042", "Syntax", Severity::Medium, false, true,
        "Token kind is not supported by the expression chain grammar",
        "Remove parentheses; chains are evaluated left to right"),
    ("E043", "Syntax", Severity::Medium, false, true,
        "Input ended in the middle of a statement",
        "Complete the expression"),
    ("E050", "Syntax", Severity::Medium, false, true,
        "Unexpected token",
        "Check statement structure"),
    ("E087", "Syntax", Severity::High, false, true,
        "Expression chain exceeds maximum length",
        "Break the expression into several statements"),
    ("E088", "Syntax", Severity::High, false, true,
        "Program exceeds maximum statement count",
        "Split the source into smaller files"),
    ("I004", "System", Severity::Low, true, false,
        "Logging initialized",
        "None"),
    ("I006", "FileProcessing", Severity::Low, true, false,
        "File read and validated",
        "Continue to tokenization"),
    ("I020", "Lexical", Severity::Low, true, false,
        "Tokenization complete",
        "Continue to parsing"),
    ("I040", "Syntax", Severity::Low, true, false,
        "AST construction complete",
        "Continue to printing"),
    ("I090", "Pipeline", Severity::Low, true, false,
        "Pipeline completed",
        "None"),
];

static ERROR_REGISTRY: OnceLock<HashMap<&'static str, ErrorMetadata>> = OnceLock::new();

fn get_error_registry() -> &'static HashMap<&'static str, ErrorMetadata> {
    ERROR_REGISTRY.get_or_init(|| {
        REGISTRY_ROWS
            .iter()
            .map(
                |&(code, category, severity, recoverable, requires_halt, description, action)| {
                    (
                        code,
                        ErrorMetadata {
                            code,
                            category,
                            severity,
                            recoverable,
                            requires_halt,
                            description,
                            recommended_action: action,
                        },
                    )
                },
            )
            .collect()
    })
}

/// Get metadata for a specific code
pub fn get_error_metadata(code: &str) -> Option<&'static ErrorMetadata> {
    get_error_registry().get(code)
}

pub fn get_severity(code: &str) -> Severity {
    get_error_metadata(code)
        .map(|metadata| metadata.severity)
        .unwrap_or(Severity::Medium)
}

pub fn is_recoverable(code: &str) -> bool {
    get_error_metadata(code)
        .map(|metadata| metadata.recoverable)
        .unwrap_or(true)
}

pub fn requires_halt(code: &str) -> bool {
    get_error_metadata(code)
        .map(|metadata| metadata.requires_halt)
        .unwrap_or(false)
}

pub fn get_description(code: &str) -> &'static str {
    get_error_metadata(code)
        .map(|metadata| metadata.description)
        .unwrap_or("Unknown error")
}

pub fn get_action(code: &str) -> &'static str {
    get_error_metadata(code)
        .map(|metadata| metadata.recommended_action)
        .unwrap_or("No specific action available")
}

pub fn get_category(code: &str) -> &'static str {
    get_error_metadata(code)
        .map(|metadata| metadata.category)
        .unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_declared_code_has_metadata() {
        let declared = [
            system::INTERNAL_ERROR,
            system::INITIALIZATION_FAILURE,
            file_processing::FILE_NOT_FOUND,
            file_processing::INVALID_EXTENSION,
            file_processing::FILE_TOO_LARGE,
            file_processing::INVALID_ENCODING,
            file_processing::IO_ERROR,
            file_processing::INVALID_PATH,
            lexical::UNRECOGNIZED_TOKEN,
            lexical::MALFORMED_OPERATOR,
            lexical::FRAGMENT_TOO_LONG,
            lexical::TOO_MANY_TOKENS,
            lexical::OPERATOR_TRUNCATED,
            syntax::MISSING_EOF,
            syntax::EMPTY_TOKEN_STREAM,
            syntax::UNSUPPORTED_TOKEN,
            syntax::UNEXPECTED_END_OF_INPUT,
            syntax::UNEXPECTED_TOKEN,
            syntax::CHAIN_TOO_LONG,
            syntax::TOO_MANY_STATEMENTS,
            success::SYSTEM_INITIALIZATION_COMPLETED,
            success::FILE_PROCESSING_SUCCESS,
            success::TOKENIZATION_COMPLETE,
            success::AST_CONSTRUCTION_COMPLETE,
            success::PIPELINE_COMPLETE,
        ];

        for code in declared {
            assert!(
                get_error_metadata(code.as_str()).is_some(),
                "missing metadata for {}",
                code
            );
        }
        assert_eq!(get_error_registry().len(), REGISTRY_ROWS.len());
    }

    #[test]
    fn test_classification_lookups() {
        let code = lexical::UNRECOGNIZED_TOKEN.as_str();
        assert_eq!(get_category(code), "Lexical");
        assert_eq!(get_severity(code), Severity::High);
        assert!(requires_halt(code));
        assert!(!is_recoverable(code));

        assert!(is_recoverable(lexical::OPERATOR_TRUNCATED.as_str()));
    }

    #[test]
    fn test_unknown_code_defaults() {
        assert_eq!(get_description("Z999"), "Unknown error");
        assert_eq!(get_category("Z999"), "Unknown");
        assert_eq!(get_severity("Z999"), Severity::Medium);
        assert!(!requires_halt("Z999"));
    }
}
