// Top-level error type for the whole pipeline

use thiserror::Error;

use crate::codegen::errors::GenerateError;
use crate::parser::lexer::LexError;
use crate::parser::parse::GrammarError;

/// First failure of any stage; later stages never run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("lexical error: {0}")]
    Lex(#[from] LexError),

    #[error("syntax error: {0}")]
    Syntax(#[from] GrammarError),

    #[error("semantic error: {0}")]
    Generate(#[from] GenerateError),
}
