use crate::file_processor::FileMetadata;
use crate::grammar::ast::nodes::Program;
use crate::lexical::LexicalMetrics;
use crate::pipeline::output::PipelineOutput;
use crate::tokens::TokenSequence;
use std::time::Duration;

/// Everything the front end produced for one source
#[derive(Debug)]
pub struct PipelineResult {
    pub tokens: TokenSequence,
    pub ast: Program,
    /// Present when the source came from a file
    pub file_metadata: Option<FileMetadata>,
    pub lexical_metrics: LexicalMetrics,
    pub token_count: usize,
    pub processing_duration: Duration,
}

impl PipelineResult {
    pub fn new(
        tokens: TokenSequence,
        ast: Program,
        file_metadata: Option<FileMetadata>,
        lexical_metrics: LexicalMetrics,
        processing_duration: Duration,
    ) -> Self {
        Self {
            token_count: tokens.len(),
            tokens,
            ast,
            file_metadata,
            lexical_metrics,
            processing_duration,
        }
    }

    pub fn statement_count(&self) -> usize {
        self.ast.len()
    }

    /// Serializable view of tokens, AST and metrics
    pub fn to_output(&self) -> PipelineOutput {
        PipelineOutput::new(
            self.tokens.clone(),
            self.ast.clone(),
            self.lexical_metrics.clone(),
        )
    }

    pub fn log_success(&self, source_name: &str) {
        crate::log_success!(
            crate::logging::codes::success::PIPELINE_COMPLETE,
            "Lexis front end pipeline succeeded",
            "source" => source_name,
            "tokens" => self.token_count,
            "statements" => self.statement_count(),
            "truncated_operators" => self.lexical_metrics.truncated_operator_fragments,
            "duration_ms" => format!("{:.2}", self.processing_duration.as_secs_f64() * 1000.0)
        );
    }
}
