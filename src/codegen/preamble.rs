// Runtime support emitted once at the top of every generated module

/// Token shape, failure type, and the matching helpers the generated
/// procedures call. `line == 0` means the input ran out.
pub const PREAMBLE: &str = r#"// Generated by llgen. Do not edit by hand.

use std::fmt;

/// A token handed to the generated parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: String,
    pub text: String,
    pub line: usize,
}

/// Failure of a generated parse procedure. `line` is 0 at end of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub line: usize,
}

impl ParseError {
    fn new(message: &str, line: usize) -> Self {
        let mut message = message.to_string();
        if line == 0 {
            message.push_str(": unexpected EOF");
        }
        ParseError { message, line }
    }

    fn wrap(self, context: &str) -> Self {
        ParseError {
            message: format!("{}: {}", context, self.message),
            line: self.line,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line == 0 {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{} (line {})", self.message, self.line)
        }
    }
}

impl std::error::Error for ParseError {}

fn line_at(input: &[Token], index: usize) -> usize {
    input.get(index).map_or(0, |token| token.line)
}

fn token_matches(input: &[Token], index: usize, kind: &str, text: Option<&str>) -> bool {
    input.get(index).map_or(false, |token| {
        token.kind == kind && text.map_or(true, |text| token.text == text)
    })
}
"#;
