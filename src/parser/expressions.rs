//! Expression parsing implementation
//!
//! Productions for the right-hand side of an expression declaration:
//!
//! ```text
//! expr        := choice | sequence
//! choice      := unit OR unit choice-ext...
//! choice-ext  := OR unit
//! sequence    := unit-q...
//! unit-q      := unit-rep | unit
//! unit-rep    := unit ELLIPSIS
//! unit        := unit-tagged | IDENT
//! unit-tagged := IDENT AL STRING AR
//! ```
//!
//! Longer alternatives are listed first wherever one alternative is a prefix
//! of another; ordered choice would otherwise stop at the shorter match.

use crate::parser::ast::*;
use crate::parser::lexer::{Token, TokenKind};
use crate::parser::parse::{expect, line_at, token_at, ParseError, ParseResult};

/// `choice | sequence`
pub(crate) fn parse_expr(input: &[Token]) -> ParseResult<Body> {
    if let Ok((units, consumed)) = parse_choice(input) {
        return Ok((Body::Choice(units), consumed));
    }
    if let Ok((elements, consumed)) = parse_sequence(input) {
        return Ok((Body::Sequence(elements), consumed));
    }
    Err(ParseError::new("failed to parse expr", line_at(input, 0)))
}

/// `unit OR unit choice-ext...`
pub(crate) fn parse_choice(input: &[Token]) -> ParseResult<Vec<Unit>> {
    const NAME: &str = "choice";
    let mut cursor = 0;
    let mut units = Vec::new();

    let (first, consumed) =
        parse_unit(&input[cursor..]).map_err(|err| err.wrap("failed to parse choice"))?;
    units.push(first);
    cursor += consumed;

    expect(input, cursor, TokenKind::Or, None, NAME)?;
    cursor += 1;

    let (second, consumed) =
        parse_unit(&input[cursor..]).map_err(|err| err.wrap("failed to parse choice"))?;
    units.push(second);
    cursor += consumed;

    while let Ok((unit, consumed)) = parse_choice_ext(&input[cursor..]) {
        units.push(unit);
        cursor += consumed;
    }

    Ok((units, cursor))
}

/// `OR unit`
fn parse_choice_ext(input: &[Token]) -> ParseResult<Unit> {
    expect(input, 0, TokenKind::Or, None, "choice-ext")?;
    let (unit, consumed) =
        parse_unit(&input[1..]).map_err(|err| err.wrap("failed to parse choice-ext"))?;
    Ok((unit, 1 + consumed))
}

/// `unit-q...`
pub(crate) fn parse_sequence(input: &[Token]) -> ParseResult<Vec<Element>> {
    let mut cursor = 0;
    let mut elements = Vec::new();

    while let Ok((element, consumed)) = parse_quantified_unit(&input[cursor..]) {
        elements.push(element);
        cursor += consumed;
    }

    Ok((elements, cursor))
}

/// `unit-rep | unit`
fn parse_quantified_unit(input: &[Token]) -> ParseResult<Element> {
    if let Ok((unit, consumed)) = parse_repeated_unit(input) {
        return Ok((Element::new(unit, Quantifier::Repeated), consumed));
    }
    if let Ok((unit, consumed)) = parse_unit(input) {
        return Ok((Element::new(unit, Quantifier::One), consumed));
    }
    Err(ParseError::new("failed to parse unit-q", line_at(input, 0)))
}

/// `unit ELLIPSIS`
fn parse_repeated_unit(input: &[Token]) -> ParseResult<Unit> {
    let (unit, consumed) =
        parse_unit(input).map_err(|err| err.wrap("failed to parse unit-rep"))?;
    expect(input, consumed, TokenKind::Ellipsis, None, "unit-rep")?;
    Ok((unit, consumed + 1))
}

/// `unit-tagged | IDENT`
pub(crate) fn parse_unit(input: &[Token]) -> ParseResult<Unit> {
    if let Ok((unit, consumed)) = parse_tagged_unit(input) {
        return Ok((unit, consumed));
    }
    if let Some(ident) = token_at(input, 0, TokenKind::Ident, None) {
        return Ok((Unit::new(ident.text.clone(), ident.line), 1));
    }
    Err(ParseError::new("failed to parse unit", line_at(input, 0)))
}

/// `IDENT AL STRING AR`
fn parse_tagged_unit(input: &[Token]) -> ParseResult<Unit> {
    const NAME: &str = "unit-tagged";

    let ident = expect(input, 0, TokenKind::Ident, None, NAME)?;
    expect(input, 1, TokenKind::AngleLeft, None, NAME)?;
    let literal = expect(input, 2, TokenKind::StringLit, None, NAME)?;
    expect(input, 3, TokenKind::AngleRight, None, NAME)?;

    Ok((
        Unit::new(ident.text.clone(), ident.line).with_literal(literal.text.clone()),
        4,
    ))
}
