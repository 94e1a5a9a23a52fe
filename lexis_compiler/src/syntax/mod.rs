//! Syntax analysis: token sequence to AST

mod error;
mod parser;

pub use error::{SyntaxError, SyntaxResult};
pub use parser::LexisParser;

use crate::grammar::ast::nodes::Program;
use crate::logging::codes;
use crate::tokens::{Token, TokenSequence};
use crate::{log_debug, log_error, log_success};

/// Parse a tokenizer-produced sequence
pub fn parse_program(sequence: &TokenSequence) -> SyntaxResult<Program> {
    parse_tokens(sequence.as_slice())
}

/// Parse an arbitrary token slice; it must end in a single EOF token
pub fn parse_tokens(tokens: &[Token]) -> SyntaxResult<Program> {
    log_debug!("Starting syntax analysis", "tokens" => tokens.len());

    let result = LexisParser::new(tokens).parse_program();

    match &result {
        Ok(program) => {
            log_success!(
                codes::success::AST_CONSTRUCTION_COMPLETE,
                "Syntax analysis completed successfully",
                "statements" => program.len()
            );
        }
        Err(error) => match error.span() {
            Some(span) => log_error!(error.error_code(), "Syntax analysis failed",
                span = span,
                "error" => error
            ),
            None => log_error!(error.error_code(), "Syntax analysis failed",
                "error" => error
            ),
        },
    }

    result
}

/// Check that every syntax code has registry metadata
pub fn init_syntax_logging() -> Result<(), String> {
    let syntax_codes = [
        codes::syntax::MISSING_EOF,
        codes::syntax::EMPTY_TOKEN_STREAM,
        codes::syntax::UNSUPPORTED_TOKEN,
        codes::syntax::UNEXPECTED_END_OF_INPUT,
        codes::syntax::UNEXPECTED_TOKEN,
        codes::syntax::CHAIN_TOO_LONG,
        codes::syntax::TOO_MANY_STATEMENTS,
        codes::success::AST_CONSTRUCTION_COMPLETE,
    ];

    for code in &syntax_codes {
        if codes::get_error_metadata(code.as_str()).is_none() {
            return Err(format!(
                "Syntax code {} not found in metadata registry",
                code.as_str()
            ));
        }
    }

    Ok(())
}
