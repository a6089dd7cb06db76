//! Grammar-definition front end
//!
//! This module transforms grammar-definition text into a [`ast::Grammar`]:
//! - [`lexer`]: Tokenization (grammar text → tokens)
//! - [`parse`]: Parsing (tokens → AST), error type and shared helpers
//! - [`ast`]: AST node definitions
//!
//! # Grammar-definition language
//!
//! ```text
//! token ident
//! token plus = "+"
//! sum  = ident plus ident
//! atom = ident | sum
//! list = atom...
//! kw   = ident<"let"> ident
//! ```
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent over token slices. The parser is a
//! hand-expanded instance of the code [`crate::codegen`] emits, applied to
//! the grammar of the grammar-definition language itself
//! (`grammars/llgen.grammar`).

pub mod ast;
pub mod expressions;
pub mod lexer;
pub mod parse;
pub mod statements;
