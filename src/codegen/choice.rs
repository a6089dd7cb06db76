//! Choice generation (prioritized ordered alternation)
//!
//! A choice becomes an enum with one variant per alternative and a procedure
//! that tries the alternatives top to bottom against the same input,
//! returning the first success. A later alternative is never consulted once
//! an earlier one has matched.

use crate::codegen::errors::GenerateError;
use crate::codegen::generate::literal_arg;
use crate::codegen::naming::{node_type, parse_fn, variant_name};
use crate::codegen::symbols::{SymbolKind, SymbolTable};
use crate::parser::ast::{ExpressionDeclaration, Unit};

pub(crate) fn generate_choice(
    decl: &ExpressionDeclaration,
    units: &[Unit],
    symbols: &SymbolTable,
) -> Result<String, GenerateError> {
    if units.len() < 2 {
        return Err(GenerateError::ShortChoice {
            declaration: decl.name.clone(),
            line: decl.line,
        });
    }

    let node = node_type(&decl.name);
    let mut variants: Vec<String> = Vec::new();
    let mut payloads: Vec<String> = Vec::new();
    let mut body = String::new();

    for (index, unit) in units.iter().enumerate() {
        let kind = symbols.resolve(unit, &decl.name)?;
        let variant = variant_name(&unit.name, index, &variants);

        match kind {
            SymbolKind::Token => {
                payloads.push("Token".to_string());
                body.push_str(&format!(
                    "    if token_matches(input, 0, {:?}, {}) {{\n",
                    unit.name,
                    literal_arg(unit)
                ));
                body.push_str(&format!(
                    "        return Ok(({}::{}(input[0].clone()), 1));\n",
                    node, variant
                ));
                body.push_str("    }\n");
            }
            SymbolKind::Expression => {
                if unit.literal.is_some() {
                    log::warn!(
                        "{}: literal on expression reference {} is ignored",
                        decl.name,
                        unit.name
                    );
                }
                payloads.push(format!("Box<{}>", node_type(&unit.name)));
                body.push_str(&format!(
                    "    if let Ok((node, consumed)) = {}(input) {{\n",
                    parse_fn(&unit.name)
                ));
                body.push_str(&format!(
                    "        return Ok(({}::{}(Box::new(node)), consumed));\n",
                    node, variant
                ));
                body.push_str("    }\n");
            }
        }
        variants.push(variant);
    }

    let mut out = String::new();
    out.push_str("\n#[derive(Debug, Clone, PartialEq, Eq)]\n");
    out.push_str(&format!("pub enum {} {{\n", node));
    for (variant, payload) in variants.iter().zip(&payloads) {
        out.push_str(&format!("    {}({}),\n", variant, payload));
    }
    out.push_str("}\n\n");

    out.push_str(&format!(
        "pub fn {}(input: &[Token]) -> Result<({}, usize), ParseError> {{\n",
        parse_fn(&decl.name),
        node
    ));
    out.push_str(&body);
    out.push_str(&format!(
        "    Err(ParseError::new({:?}, line_at(input, 0)))\n",
        format!("failed to parse {}", decl.name)
    ));
    out.push_str("}\n");

    Ok(out)
}
