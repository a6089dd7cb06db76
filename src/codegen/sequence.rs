//! Sequence generation (ordered conjunction with quantifiers)
//!
//! A sequence becomes a struct with one field `iN` per element and a
//! procedure that walks a local cursor through the input:
//!
//! | quantifier | field            | on failure                         |
//! |------------|------------------|------------------------------------|
//! | `One`      | `T`              | abort the whole sequence           |
//! | `Optional` | `Option<T>`      | `None`, cursor unchanged           |
//! | `Repeated` | `Vec<T>`         | stop collecting, cursor unchanged  |
//!
//! `T` is `Token` for token references and `Box<Node…>` (or plain `Node…`
//! inside a `Vec`) for expression references. An aborted sequence returns
//! an error, so the caller sees no consumption at all.

use crate::codegen::errors::GenerateError;
use crate::codegen::generate::literal_arg;
use crate::codegen::naming::{node_type, parse_fn};
use crate::codegen::symbols::{SymbolKind, SymbolTable};
use crate::parser::ast::{Element, ExpressionDeclaration, Quantifier, Unit};

pub(crate) fn generate_sequence(
    decl: &ExpressionDeclaration,
    elements: &[Element],
    symbols: &SymbolTable,
) -> Result<String, GenerateError> {
    let node = node_type(&decl.name);
    let context = format!("failed to parse {}", decl.name);

    let mut fields = String::new();
    let mut body = String::new();
    let mut names = Vec::new();

    for (index, element) in elements.iter().enumerate() {
        let unit = &element.unit;
        let field = format!("i{}", index);

        match symbols.resolve(unit, &decl.name)? {
            SymbolKind::Token => {
                let ty = match element.quantifier {
                    Quantifier::One => "Token",
                    Quantifier::Optional => "Option<Token>",
                    Quantifier::Repeated => "Vec<Token>",
                };
                fields.push_str(&format!("    pub {}: {}, // {}\n", field, ty, unit.name));
                body.push_str(&token_step(&field, unit, element.quantifier, &decl.name));
            }
            SymbolKind::Expression => {
                if unit.literal.is_some() {
                    log::warn!(
                        "{}: literal on expression reference {} is ignored",
                        decl.name,
                        unit.name
                    );
                }
                let target = node_type(&unit.name);
                let ty = match element.quantifier {
                    Quantifier::One => format!("Box<{}>", target),
                    Quantifier::Optional => format!("Option<Box<{}>>", target),
                    Quantifier::Repeated => format!("Vec<{}>", target),
                };
                fields.push_str(&format!("    pub {}: {},\n", field, ty));
                body.push_str(&expression_step(&field, unit, element.quantifier, &context));
            }
        }
        names.push(field);
    }

    let mut out = String::new();
    out.push_str("\n#[derive(Debug, Clone, PartialEq, Eq)]\n");
    if elements.is_empty() {
        out.push_str(&format!("pub struct {} {{}}\n\n", node));
        out.push_str(&format!(
            "pub fn {}(_input: &[Token]) -> Result<({}, usize), ParseError> {{\n",
            parse_fn(&decl.name),
            node
        ));
        out.push_str(&format!("    Ok(({} {{}}, 0))\n", node));
        out.push_str("}\n");
        return Ok(out);
    }

    out.push_str(&format!("pub struct {} {{\n", node));
    out.push_str(&fields);
    out.push_str("}\n\n");

    out.push_str(&format!(
        "pub fn {}(input: &[Token]) -> Result<({}, usize), ParseError> {{\n",
        parse_fn(&decl.name),
        node
    ));
    out.push_str("    let mut cursor = 0;\n\n");
    out.push_str(&body);
    out.push_str(&format!(
        "    Ok(({} {{ {} }}, cursor))\n",
        node,
        names.join(", ")
    ));
    out.push_str("}\n");

    Ok(out)
}

/// Statements matching one token element at `cursor`.
fn token_step(field: &str, unit: &Unit, quantifier: Quantifier, decl_name: &str) -> String {
    let test = format!(
        "token_matches(input, cursor, {:?}, {})",
        unit.name,
        literal_arg(unit)
    );

    match quantifier {
        Quantifier::One => {
            let message = format!("failed to parse {}: {} expected", decl_name, unit.name);
            format!(
                "    if !{test} {{\n        return Err(ParseError::new(\n            {message:?},\n            line_at(input, cursor),\n        ));\n    }}\n    let {field} = input[cursor].clone();\n    cursor += 1;\n\n"
            )
        }
        Quantifier::Optional => format!(
            "    let {field} = if {test} {{\n        cursor += 1;\n        Some(input[cursor - 1].clone())\n    }} else {{\n        None\n    }};\n\n"
        ),
        Quantifier::Repeated => format!(
            "    let mut {field} = Vec::new();\n    while {test} {{\n        {field}.push(input[cursor].clone());\n        cursor += 1;\n    }}\n\n"
        ),
    }
}

/// Statements matching one expression element at `cursor`.
fn expression_step(field: &str, unit: &Unit, quantifier: Quantifier, context: &str) -> String {
    let call = format!("{}(&input[cursor..])", parse_fn(&unit.name));

    match quantifier {
        Quantifier::One => format!(
            "    let (node, consumed) =\n        {call}.map_err(|err| err.wrap({context:?}))?;\n    let {field} = Box::new(node);\n    cursor += consumed;\n\n"
        ),
        Quantifier::Optional => format!(
            "    let {field} = match {call} {{\n        Ok((node, consumed)) => {{\n            cursor += consumed;\n            Some(Box::new(node))\n        }}\n        Err(_) => None,\n    }};\n\n"
        ),
        Quantifier::Repeated => format!(
            "    let mut {field} = Vec::new();\n    while let Ok((node, consumed)) = {call} {{\n        if consumed == 0 {{\n            break;\n        }}\n        {field}.push(node);\n        cursor += consumed;\n    }}\n\n"
        ),
    }
}
