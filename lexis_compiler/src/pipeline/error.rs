use crate::file_processor::FileProcessorError;
use crate::lexical::LexerError;
use crate::logging::{codes, Code};
use crate::syntax::SyntaxError;
use crate::utils::Span;

/// Pipeline processing errors
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("File processing failed: {0}")]
    FileProcessing(#[from] FileProcessorError),

    #[error("Lexical analysis failed: {0}")]
    LexicalAnalysis(#[from] LexerError),

    #[error("Syntax analysis failed: {0}")]
    SyntaxAnalysis(#[from] SyntaxError),

    #[error("Pipeline error: {message}")]
    Pipeline { message: String },
}

impl PipelineError {
    pub fn pipeline_error(message: &str) -> Self {
        Self::Pipeline {
            message: message.to_string(),
        }
    }

    pub fn error_code(&self) -> Code {
        match self {
            Self::FileProcessing(e) => e.error_code(),
            Self::LexicalAnalysis(e) => e.error_code(),
            Self::SyntaxAnalysis(e) => e.error_code(),
            Self::Pipeline { .. } => codes::system::INTERNAL_ERROR,
        }
    }

    /// Source location, when the failing stage reported one
    pub fn span(&self) -> Option<Span> {
        match self {
            Self::LexicalAnalysis(e) => e.span(),
            Self::SyntaxAnalysis(e) => e.span(),
            Self::FileProcessing(_) | Self::Pipeline { .. } => None,
        }
    }

    pub fn stage(&self) -> &'static str {
        match self {
            Self::FileProcessing(_) => "file_processing",
            Self::LexicalAnalysis(_) => "lexical",
            Self::SyntaxAnalysis(_) => "syntax",
            Self::Pipeline { .. } => "pipeline",
        }
    }
}
