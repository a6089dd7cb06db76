//! Statement parsing implementation
//!
//! Top-level productions of a grammar file:
//!
//! ```text
//! statements    := statement...
//! statement     := token-decl | expr-decl | empty
//! token-decl    := IDENT<"token"> IDENT token-literal? NEWLINE
//! token-literal := EQ STRING
//! expr-decl     := IDENT EQ expr NEWLINE
//! empty         := NEWLINE
//! ```

use crate::parser::ast::*;
use crate::parser::expressions::parse_expr;
use crate::parser::lexer::{Token, TokenKind};
use crate::parser::parse::{expect, line_at, token_at, ParseError, ParseResult};

/// `statement...`
///
/// A sequence holding only a repeated element cannot fail, so this returns
/// the statements and the tokens they cover directly.
pub(crate) fn parse_statements(input: &[Token]) -> (Vec<Declaration>, usize) {
    let mut cursor = 0;
    let mut declarations = Vec::new();

    while let Ok((declaration, consumed)) = parse_statement(&input[cursor..]) {
        if consumed == 0 {
            break;
        }
        declarations.push(declaration);
        cursor += consumed;
    }

    (declarations, cursor)
}

/// `token-decl | expr-decl | empty`
pub(crate) fn parse_statement(input: &[Token]) -> ParseResult<Declaration> {
    if let Ok((decl, consumed)) = parse_token_declaration(input) {
        return Ok((Declaration::Token(decl), consumed));
    }
    if let Ok((decl, consumed)) = parse_expression_declaration(input) {
        return Ok((Declaration::Expression(decl), consumed));
    }
    if let Ok((line, consumed)) = parse_empty(input) {
        return Ok((Declaration::Empty { line }, consumed));
    }
    Err(ParseError::new("failed to parse statement", line_at(input, 0)))
}

/// `IDENT<"token"> IDENT token-literal? NEWLINE`
pub(crate) fn parse_token_declaration(input: &[Token]) -> ParseResult<TokenDeclaration> {
    const NAME: &str = "token-decl";
    let mut cursor = 0;

    let keyword = expect(input, cursor, TokenKind::Ident, Some("token"), NAME)?;
    cursor += 1;

    let name = expect(input, cursor, TokenKind::Ident, None, NAME)?;
    cursor += 1;

    let literal = match parse_token_literal(&input[cursor..]) {
        Ok((text, consumed)) => {
            cursor += consumed;
            Some(text)
        }
        Err(_) => None,
    };

    expect(input, cursor, TokenKind::Newline, None, NAME)?;
    cursor += 1;

    Ok((
        TokenDeclaration {
            name: name.text.clone(),
            literal,
            line: keyword.line,
        },
        cursor,
    ))
}

/// `EQ STRING`
fn parse_token_literal(input: &[Token]) -> ParseResult<String> {
    const NAME: &str = "token-literal";

    expect(input, 0, TokenKind::Eq, None, NAME)?;
    let text = expect(input, 1, TokenKind::StringLit, None, NAME)?;

    Ok((text.text.clone(), 2))
}

/// `IDENT EQ expr NEWLINE`
pub(crate) fn parse_expression_declaration(
    input: &[Token],
) -> ParseResult<ExpressionDeclaration> {
    const NAME: &str = "expr-decl";
    let mut cursor = 0;

    let name = expect(input, cursor, TokenKind::Ident, None, NAME)?;
    cursor += 1;

    expect(input, cursor, TokenKind::Eq, None, NAME)?;
    cursor += 1;

    let (body, consumed) =
        parse_expr(&input[cursor..]).map_err(|err| err.wrap("failed to parse expr-decl"))?;
    cursor += consumed;

    expect(input, cursor, TokenKind::Newline, None, NAME)?;
    cursor += 1;

    Ok((
        ExpressionDeclaration {
            name: name.text.clone(),
            body,
            line: name.line,
        },
        cursor,
    ))
}

/// `NEWLINE`; yields the line of the blank line.
fn parse_empty(input: &[Token]) -> ParseResult<usize> {
    match token_at(input, 0, TokenKind::Newline, None) {
        Some(token) => Ok((token.line, 1)),
        None => Err(ParseError::new(
            "failed to parse empty: newline expected",
            line_at(input, 0),
        )),
    }
}
