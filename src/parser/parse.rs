//! Main parser coordinator
//!
//! This module provides the failure type shared by every production, the
//! token-matching helpers, and the [`parse_grammar`] entry point.
//!
//! # Parser Architecture
//!
//! The grammar-definition parser is written in exactly the shape that the
//! code generator emits for user grammars:
//! - every production is a free function from the unconsumed token slice to
//!   `(node, tokens consumed)` or a [`ParseError`];
//! - a production never mutates a caller-visible cursor, so a failed attempt
//!   leaves nothing to undo and ordered choice is simply "try the next one";
//! - sequences keep a local cursor and report zero consumption on failure.
//!
//! Productions are split across `statements` (top-level statements) and
//! `expressions` (expression bodies and units).
//!
//! # Grammar
//!
//! ```text
//! statements  := statement*
//! statement   := token-decl | expr-decl | empty
//! empty       := NEWLINE
//! token-decl  := IDENT<"token"> IDENT token-literal? NEWLINE
//! token-literal := EQ STRING
//! expr-decl   := IDENT EQ expr NEWLINE
//! expr        := choice | sequence
//! choice      := unit OR unit choice-ext...
//! choice-ext  := OR unit
//! sequence    := unit-q...
//! unit-q      := unit-rep | unit
//! unit-rep    := unit ELLIPSIS
//! unit        := unit-tagged | IDENT
//! unit-tagged := IDENT AL STRING AR
//! ```

use std::fmt;

use log::debug;
use thiserror::Error;

use crate::parser::ast::Grammar;
use crate::parser::lexer::{Token, TokenKind};
use crate::parser::statements::{parse_statement, parse_statements};

/// Failure of a single production.
///
/// `line` is the line of the token where the attempt diverged, or 0 when the
/// input ran out. Wrapping keeps the innermost line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub line: usize,
}

impl ParseError {
    pub fn new(message: impl Into<String>, line: usize) -> Self {
        let mut message = message.into();
        if line == 0 {
            message.push_str(": unexpected EOF");
        }
        ParseError { message, line }
    }

    /// Prefix the message with `context`, keeping the original line.
    pub fn wrap(self, context: &str) -> Self {
        ParseError {
            message: format!("{}: {}", context, self.message),
            line: self.line,
        }
    }

    pub fn is_eof(&self) -> bool {
        self.line == 0
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_eof() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{} (line {})", self.message, self.line)
        }
    }
}

impl std::error::Error for ParseError {}

/// Node plus number of tokens consumed.
pub type ParseResult<T> = Result<(T, usize), ParseError>;

/// Errors reported for a whole grammar document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    /// Statements stopped matching before the end of the token stream.
    #[error("invalid document: {cause}")]
    TrailingInput { consumed: usize, cause: ParseError },
}

/// Line of the token at `index`, or 0 past the end of `input`.
pub fn line_at(input: &[Token], index: usize) -> usize {
    input.get(index).map_or(0, |token| token.line)
}

/// The token at `index` if it has `kind` (and text `literal`, when given).
pub(crate) fn token_at<'a>(
    input: &'a [Token],
    index: usize,
    kind: TokenKind,
    literal: Option<&str>,
) -> Option<&'a Token> {
    input
        .get(index)
        .filter(|token| token.kind == kind && literal.map_or(true, |text| token.text == text))
}

/// Sequence step for a token element: the matching token, or the
/// `<kind> expected` failure for `production`.
pub(crate) fn expect<'a>(
    input: &'a [Token],
    cursor: usize,
    kind: TokenKind,
    literal: Option<&str>,
    production: &str,
) -> Result<&'a Token, ParseError> {
    token_at(input, cursor, kind, literal).ok_or_else(|| {
        ParseError::new(
            format!("failed to parse {}: {} expected", production, kind),
            line_at(input, cursor),
        )
    })
}

/// Parse a complete token stream; every token must belong to a statement.
pub fn parse_grammar(tokens: &[Token]) -> Result<Grammar, GrammarError> {
    let (declarations, consumed) = parse_statements(tokens);

    if consumed < tokens.len() {
        let rest = &tokens[consumed..];
        let cause = parse_statement(rest)
            .err()
            .unwrap_or_else(|| ParseError::new("failed to parse statement", line_at(rest, 0)));
        return Err(GrammarError::TrailingInput { consumed, cause });
    }

    debug!(
        "parsed {} statements from {} tokens",
        declarations.len(),
        tokens.len()
    );
    Ok(Grammar { declarations })
}
