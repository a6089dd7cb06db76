//! Code generation error types
//!
//! [`GenerateError`] covers the semantic checks made between parsing and
//! emission. Like every other stage, the first error aborts the run and no
//! partial output is produced.

use thiserror::Error;

/// Semantic errors found while classifying or generating a grammar
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// A unit references a name that no statement declares
    #[error("unknown identifier: {name} (referenced in {declaration}, line {line})")]
    UnknownIdentifier {
        name: String,
        declaration: String,
        line: usize,
    },

    /// Two statements declare the same name
    #[error("duplicate declaration: {name} (line {line}, first declared on line {first_line})")]
    DuplicateDeclaration {
        name: String,
        first_line: usize,
        line: usize,
    },

    /// Two expression names map to the same generated type name
    #[error("{first} and {second} both generate type name {type_name}")]
    TypeNameCollision {
        type_name: String,
        first: String,
        second: String,
    },

    /// A choice with fewer than two alternatives
    #[error("choice {declaration} needs at least two alternatives (line {line})")]
    ShortChoice { declaration: String, line: usize },
}
