//! Grammar definitions for Lexis: AST nodes and reserved words

pub mod ast;
pub mod keywords;

pub use ast::nodes::*;
pub use keywords::{is_keyword, Keyword};
