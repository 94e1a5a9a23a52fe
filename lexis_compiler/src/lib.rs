// Internal modules
pub mod config;
pub mod file_processor;
pub mod grammar;
pub mod lexical;
#[macro_use]
pub mod logging;
pub mod pipeline;
pub mod printer;
pub mod syntax;
pub mod tokens;
pub mod utils;

// Re-export key types for library consumers
pub use grammar::ast::nodes::Program;
pub use lexical::{tokenize, LexerError};
pub use pipeline::output::PipelineOutput;
pub use pipeline::{PipelineError, PipelineResult};
pub use tokens::{Token, TokenKind, TokenSequence};
