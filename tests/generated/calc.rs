// Generated by llgen. Do not edit by hand.

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

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSum {
    pub i0: Token, // ident
    pub i1: Token, // plus
    pub i2: Token, // ident
}

pub fn parse_sum(input: &[Token]) -> Result<(NodeSum, usize), ParseError> {
    let mut cursor = 0;

    if !token_matches(input, cursor, "ident", None) {
        return Err(ParseError::new(
            "failed to parse sum: ident expected",
            line_at(input, cursor),
        ));
    }
    let i0 = input[cursor].clone();
    cursor += 1;

    if !token_matches(input, cursor, "plus", None) {
        return Err(ParseError::new(
            "failed to parse sum: plus expected",
            line_at(input, cursor),
        ));
    }
    let i1 = input[cursor].clone();
    cursor += 1;

    if !token_matches(input, cursor, "ident", None) {
        return Err(ParseError::new(
            "failed to parse sum: ident expected",
            line_at(input, cursor),
        ));
    }
    let i2 = input[cursor].clone();
    cursor += 1;

    Ok((NodeSum { i0, i1, i2 }, cursor))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeChoice {
    A(Token),
    B(Token),
}

pub fn parse_choice(input: &[Token]) -> Result<(NodeChoice, usize), ParseError> {
    if token_matches(input, 0, "a", None) {
        return Ok((NodeChoice::A(input[0].clone()), 1));
    }
    if token_matches(input, 0, "b", None) {
        return Ok((NodeChoice::B(input[0].clone()), 1));
    }
    Err(ParseError::new("failed to parse choice", line_at(input, 0)))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodePrefer {
    A(Token),
    A1(Token),
}

pub fn parse_prefer(input: &[Token]) -> Result<(NodePrefer, usize), ParseError> {
    if token_matches(input, 0, "a", Some("x")) {
        return Ok((NodePrefer::A(input[0].clone()), 1));
    }
    if token_matches(input, 0, "a", None) {
        return Ok((NodePrefer::A1(input[0].clone()), 1));
    }
    Err(ParseError::new("failed to parse prefer", line_at(input, 0)))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodePair {
    pub i0: Token, // a
    pub i1: Token, // b
}

pub fn parse_pair(input: &[Token]) -> Result<(NodePair, usize), ParseError> {
    let mut cursor = 0;

    if !token_matches(input, cursor, "a", None) {
        return Err(ParseError::new(
            "failed to parse pair: a expected",
            line_at(input, cursor),
        ));
    }
    let i0 = input[cursor].clone();
    cursor += 1;

    if !token_matches(input, cursor, "b", None) {
        return Err(ParseError::new(
            "failed to parse pair: b expected",
            line_at(input, cursor),
        ));
    }
    let i1 = input[cursor].clone();
    cursor += 1;

    Ok((NodePair { i0, i1 }, cursor))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeGreedy {
    Single(Box<NodeSingle>),
    Pair(Box<NodePair>),
}

pub fn parse_greedy(input: &[Token]) -> Result<(NodeGreedy, usize), ParseError> {
    if let Ok((node, consumed)) = parse_single(input) {
        return Ok((NodeGreedy::Single(Box::new(node)), consumed));
    }
    if let Ok((node, consumed)) = parse_pair(input) {
        return Ok((NodeGreedy::Pair(Box::new(node)), consumed));
    }
    Err(ParseError::new("failed to parse greedy", line_at(input, 0)))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSingle {
    pub i0: Token, // a
}

pub fn parse_single(input: &[Token]) -> Result<(NodeSingle, usize), ParseError> {
    let mut cursor = 0;

    if !token_matches(input, cursor, "a", None) {
        return Err(ParseError::new(
            "failed to parse single: a expected",
            line_at(input, cursor),
        ));
    }
    let i0 = input[cursor].clone();
    cursor += 1;

    Ok((NodeSingle { i0 }, cursor))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeCall {
    pub i0: Token, // ident
    pub i1: Box<NodePair>,
}

pub fn parse_call(input: &[Token]) -> Result<(NodeCall, usize), ParseError> {
    let mut cursor = 0;

    if !token_matches(input, cursor, "ident", None) {
        return Err(ParseError::new(
            "failed to parse call: ident expected",
            line_at(input, cursor),
        ));
    }
    let i0 = input[cursor].clone();
    cursor += 1;

    let (node, consumed) =
        parse_pair(&input[cursor..]).map_err(|err| err.wrap("failed to parse call"))?;
    let i1 = Box::new(node);
    cursor += consumed;

    Ok((NodeCall { i0, i1 }, cursor))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeList {
    pub i0: Token, // ident
    pub i1: Vec<Token>, // comma
}

pub fn parse_list(input: &[Token]) -> Result<(NodeList, usize), ParseError> {
    let mut cursor = 0;

    if !token_matches(input, cursor, "ident", None) {
        return Err(ParseError::new(
            "failed to parse list: ident expected",
            line_at(input, cursor),
        ));
    }
    let i0 = input[cursor].clone();
    cursor += 1;

    let mut i1 = Vec::new();
    while token_matches(input, cursor, "comma", None) {
        i1.push(input[cursor].clone());
        cursor += 1;
    }

    Ok((NodeList { i0, i1 }, cursor))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodePairs {
    pub i0: Vec<NodePair>,
    pub i1: Token, // ident
}

pub fn parse_pairs(input: &[Token]) -> Result<(NodePairs, usize), ParseError> {
    let mut cursor = 0;

    let mut i0 = Vec::new();
    while let Ok((node, consumed)) = parse_pair(&input[cursor..]) {
        if consumed == 0 {
            break;
        }
        i0.push(node);
        cursor += consumed;
    }

    if !token_matches(input, cursor, "ident", None) {
        return Err(ParseError::new(
            "failed to parse pairs: ident expected",
            line_at(input, cursor),
        ));
    }
    let i1 = input[cursor].clone();
    cursor += 1;

    Ok((NodePairs { i0, i1 }, cursor))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeNothing {}

pub fn parse_nothing(_input: &[Token]) -> Result<(NodeNothing, usize), ParseError> {
    Ok((NodeNothing {}, 0))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeMaybe {
    pub i0: Token, // a
    pub i1: Option<Token>, // b
}

pub fn parse_maybe(input: &[Token]) -> Result<(NodeMaybe, usize), ParseError> {
    let mut cursor = 0;

    if !token_matches(input, cursor, "a", None) {
        return Err(ParseError::new(
            "failed to parse maybe: a expected",
            line_at(input, cursor),
        ));
    }
    let i0 = input[cursor].clone();
    cursor += 1;

    let i1 = if token_matches(input, cursor, "b", None) {
        cursor += 1;
        Some(input[cursor - 1].clone())
    } else {
        None
    };

    Ok((NodeMaybe { i0, i1 }, cursor))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeMaybePair {
    pub i0: Token, // ident
    pub i1: Option<Box<NodePair>>,
}

pub fn parse_maybe_pair(input: &[Token]) -> Result<(NodeMaybePair, usize), ParseError> {
    let mut cursor = 0;

    if !token_matches(input, cursor, "ident", None) {
        return Err(ParseError::new(
            "failed to parse maybe-pair: ident expected",
            line_at(input, cursor),
        ));
    }
    let i0 = input[cursor].clone();
    cursor += 1;

    let i1 = match parse_pair(&input[cursor..]) {
        Ok((node, consumed)) => {
            cursor += consumed;
            Some(Box::new(node))
        }
        Err(_) => None,
    };

    Ok((NodeMaybePair { i0, i1 }, cursor))
}
