//! Front-end pipeline: file -> tokens -> AST
//!
//! Each stage keeps its own error type; `PipelineError` wraps them so the
//! caller can still tell which stage failed.

mod error;
pub mod output;
mod result;
mod validation;

pub use error::PipelineError;
pub use output::PipelineOutput;
pub use result::PipelineResult;
pub use validation::validate_pipeline;

use crate::config::runtime::LexicalPreferences;
use crate::lexical::LexicalAnalyzer;
use std::time::Instant;

/// Run in-memory source through the tokenizer and parser
pub fn process_source(source: &str) -> Result<PipelineResult, PipelineError> {
    process_source_with_preferences(source, LexicalPreferences::default())
}

pub fn process_source_with_preferences(
    source: &str,
    preferences: LexicalPreferences,
) -> Result<PipelineResult, PipelineError> {
    let start_time = Instant::now();
    crate::log_info!("Starting Lexis source pipeline", "bytes" => source.len());

    let mut analyzer = LexicalAnalyzer::with_preferences(preferences);
    let tokens = analyzer.tokenize(source)?;
    let ast = crate::syntax::parse_program(&tokens)?;

    let result = PipelineResult::new(
        tokens,
        ast,
        None,
        analyzer.metrics().clone(),
        start_time.elapsed(),
    );
    result.log_success("<source>");

    Ok(result)
}

/// Process a file through every stage
///
/// Files are multi-line, so newlines delimit fragments here regardless of
/// the environment preference.
pub fn process_file(file_path: &str) -> Result<PipelineResult, PipelineError> {
    let start_time = Instant::now();
    crate::log_info!("Starting Lexis file pipeline", "file" => file_path);

    let file_result = crate::file_processor::process_file(file_path)?;

    let preferences = LexicalPreferences {
        split_on_newlines: true,
        ..LexicalPreferences::default()
    };
    let mut analyzer = LexicalAnalyzer::with_preferences(preferences);
    let tokens = analyzer.tokenize_file_result(&file_result)?;
    let ast = crate::syntax::parse_program(&tokens)?;

    let result = PipelineResult::new(
        tokens,
        ast,
        Some(file_result.metadata),
        analyzer.metrics().clone(),
        start_time.elapsed(),
    );
    result.log_success(file_path);

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::ast::nodes::{NodeType, Statement};
    use crate::tokens::TokenKind;
    use assert_matches::assert_matches;
    use std::io::Write;

    fn lenient() -> LexicalPreferences {
        LexicalPreferences {
            strict_operator_fragments: false,
            collect_detailed_metrics: true,
            warn_on_truncation: false,
            split_on_newlines: false,
        }
    }

    #[test]
    fn test_validate_pipeline() {
        let _ = crate::logging::init_global_logging();
        assert!(validate_pipeline().is_ok());
    }

    #[test]
    fn test_pipeline_error_creation() {
        let error = PipelineError::pipeline_error("Test error");
        assert_matches!(error, PipelineError::Pipeline { ref message } if message == "Test error");
        assert_eq!(error.error_code().as_str(), "ERR001");
        assert_eq!(error.stage(), "pipeline");
    }

    #[test]
    fn test_process_source() {
        let result = process_source_with_preferences("let total = a + 2", lenient()).unwrap();

        assert_eq!(result.token_count, 7);
        assert_eq!(result.tokens.last().kind(), TokenKind::Eof);
        assert_eq!(result.statement_count(), 1);
        assert_eq!(result.ast.body[0].node_type(), NodeType::VariableDeclaration);
        assert!(result.file_metadata.is_none());
        assert_eq!(result.lexical_metrics.total_tokens, 7);
    }

    #[test]
    fn test_lexer_error_surfaces_as_lexical_stage() {
        let error = process_source_with_preferences("x = 3.14", lenient()).unwrap_err();

        assert_matches!(error, PipelineError::LexicalAnalysis(_));
        assert_eq!(error.error_code().as_str(), "E020");
        assert_eq!(error.stage(), "lexical");
        assert!(error.span().is_some());
    }

    #[test]
    fn test_parse_error_surfaces_as_syntax_stage() {
        let error = process_source_with_preferences("1 + ( 2 )", lenient()).unwrap_err();

        assert_matches!(error, PipelineError::SyntaxAnalysis(_));
        assert_eq!(error.error_code().as_str(), "E042");
    }

    #[test]
    fn test_process_file_splits_lines() {
        let mut file = tempfile::Builder::new().suffix(".lx").tempfile().unwrap();
        write!(file, "let x = 1\nx * 2\nnull\n").unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let result = process_file(&path).unwrap();

        assert_eq!(result.statement_count(), 3);
        assert_matches!(result.ast.body[2], Statement::RegularExpression(_));
        let metadata = result.file_metadata.as_ref().unwrap();
        assert_eq!(metadata.line_count, 3);
    }

    #[test]
    fn test_missing_file_surfaces_as_file_stage() {
        let error = process_file("/nonexistent/program.lx").unwrap_err();
        assert_matches!(error, PipelineError::FileProcessing(_));
        assert!(error.span().is_none());
    }

    #[test]
    fn test_output_serializes_tokens_and_ast() {
        let result = process_source_with_preferences("a - 1", lenient()).unwrap();
        let json = result.to_output().to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["tokens"].as_array().map(Vec::len), Some(4));
        assert!(value["ast"]["body"][0]["BinaryExpression"].is_object());
        assert_eq!(value["metrics"]["total_tokens"], 4);
    }
}
