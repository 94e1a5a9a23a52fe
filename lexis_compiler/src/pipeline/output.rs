use crate::grammar::ast::nodes::Program;
use crate::lexical::LexicalMetrics;
use crate::tokens::TokenSequence;
use serde::Serialize;

/// JSON shape emitted by `lexis --json`
#[derive(Debug, Serialize)]
pub struct PipelineOutput {
    pub tokens: TokenSequence,
    pub ast: Program,
    pub metrics: LexicalMetrics,
}

impl PipelineOutput {
    pub fn new(tokens: TokenSequence, ast: Program, metrics: LexicalMetrics) -> Self {
        Self {
            tokens,
            ast,
            metrics,
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
