//! Lexer (tokenizer) for grammar-definition text
//!
//! Converts raw grammar text into a flat [`Token`] stream consumed by the
//! fixed grammar parser. Carriage returns are stripped before scanning, so
//! grammars written with CRLF line endings tokenize identically.

use std::fmt;

use log::trace;
use thiserror::Error;

/// Lexical category of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Ident,
    Eq,
    Or,
    AngleLeft,
    AngleRight,
    Ellipsis,
    StringLit,
    Newline,
}

impl TokenKind {
    /// Short name used in diagnostics (`ident expected`).
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Ident => "ident",
            TokenKind::Eq => "eq",
            TokenKind::Or => "or",
            TokenKind::AngleLeft => "al",
            TokenKind::AngleRight => "ar",
            TokenKind::Ellipsis => "ell",
            TokenKind::StringLit => "string",
            TokenKind::Newline => "newline",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single lexeme of grammar-definition text.
///
/// `line` is 1-based. A newline token carries the line it terminates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Newline => write!(f, "newline"),
            TokenKind::StringLit => write!(f, "string \"{}\"", self.text),
            kind => write!(f, "{}<{}>", kind, self.text),
        }
    }
}

/// Lexer error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} (line {line})")]
pub struct LexError {
    pub message: String,
    pub line: usize,
}

/// Lexer for grammar-definition text
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
}

impl Lexer {
    /// Create a new lexer for the given grammar text.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().filter(|&ch| ch != '\r').collect(),
            position: 0,
            line: 1,
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        while let Some(ch) = self.peek() {
            if ch == ' ' || ch == '\t' {
                self.advance();
                continue;
            }
            let token = self.next_token()?;
            trace!("lexed {}", token);
            tokens.push(token);
        }

        Ok(tokens)
    }

    /// Get next token
    fn next_token(&mut self) -> Result<Token, LexError> {
        let line = self.line;
        let ch = self.advance().ok_or_else(|| LexError {
            message: "unexpected end of input".to_string(),
            line,
        })?;

        match ch {
            '=' => Ok(Token::new(TokenKind::Eq, "=", line)),
            '|' => Ok(Token::new(TokenKind::Or, "|", line)),
            '<' => Ok(Token::new(TokenKind::AngleLeft, "<", line)),
            '>' => Ok(Token::new(TokenKind::AngleRight, ">", line)),
            '\n' => {
                self.line += 1;
                Ok(Token::new(TokenKind::Newline, "", line))
            }
            '"' => Ok(self.string_literal(line)),
            '.' => self.ellipsis(line),
            c if c.is_alphabetic() => Ok(self.identifier(c, line)),
            _ => Err(LexError {
                message: format!("invalid token: {}", ch),
                line,
            }),
        }
    }

    /// Scan the contents of a string literal; the opening quote is consumed.
    /// No escapes. An unterminated string runs to end of input. Newlines
    /// inside a string do not advance the line counter.
    fn string_literal(&mut self, line: usize) -> Token {
        let mut text = String::new();

        while let Some(ch) = self.advance() {
            if ch == '"' {
                break;
            }
            text.push(ch);
        }

        Token::new(TokenKind::StringLit, text, line)
    }

    /// Scan `...`; the first dot is consumed.
    fn ellipsis(&mut self, line: usize) -> Result<Token, LexError> {
        for _ in 0..2 {
            match self.advance() {
                Some('.') => {}
                Some(_) => {
                    return Err(LexError {
                        message: "expected .".to_string(),
                        line,
                    })
                }
                None => {
                    return Err(LexError {
                        message: "expected ., got EOF".to_string(),
                        line,
                    })
                }
            }
        }
        Ok(Token::new(TokenKind::Ellipsis, "...", line))
    }

    /// Scan an identifier: a letter followed by letters, digits and hyphens.
    fn identifier(&mut self, first_char: char, line: usize) -> Token {
        let mut ident = String::new();
        ident.push(first_char);

        while let Some(ch) = self.peek() {
            if ch.is_alphanumeric() || ch == '-' {
                ident.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        Token::new(TokenKind::Ident, ident, line)
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;
        Some(ch)
    }
}
