//! # Introduction
//!
//! llgen reads a small grammar-definition language and emits Rust source for
//! a recursive-descent parser of that grammar. Alternation is ordered
//! (first match wins) and there is no lookahead analysis, memoization or
//! error recovery.
//!
//! ## Pipeline
//!
//! ```text
//! Grammar text → Lexer → Parser → Grammar AST → Symbol table → Generator → Rust source
//! ```
//!
//! 1. [`parser`] — tokenises the grammar text and builds the
//!    [`parser::ast::Grammar`]. The parser itself has the exact shape of the
//!    code llgen generates.
//! 2. [`codegen`] — classifies identifiers into tokens and expressions,
//!    then emits one node type and one parse procedure per expression
//!    declaration after a shared runtime preamble.
//!
//! Every stage consumes the whole output of the previous one, and the first
//! error aborts the run; see [`Error`].

pub mod codegen;
pub mod error;
pub mod parser;

use log::debug;

pub use codegen::module::GeneratedModule;
pub use error::Error;

use parser::ast::Grammar;
use parser::lexer::Lexer;

/// Lex and parse grammar text.
pub fn parse_source(source: &str) -> Result<Grammar, Error> {
    let tokens = Lexer::new(source).tokenize()?;
    debug!("lexed {} tokens", tokens.len());
    Ok(parser::parse::parse_grammar(&tokens)?)
}

/// Run the whole pipeline over grammar text.
pub fn compile(source: &str) -> Result<GeneratedModule, Error> {
    let grammar = parse_source(source)?;
    Ok(codegen::generate::generate(&grammar)?)
}
