//! Generator coordinator
//!
//! Classifies the grammar's identifiers, then emits one unit per expression
//! declaration, choosing the strategy from the declaration's body:
//! - [`Body::Choice`] → [`crate::codegen::choice`]
//! - [`Body::Sequence`] → [`crate::codegen::sequence`]
//!
//! Token declarations produce no code of their own; they only make their
//! names matchable.

use log::{debug, trace};
use rustc_hash::FxHashMap;

use crate::codegen::choice::generate_choice;
use crate::codegen::errors::GenerateError;
use crate::codegen::module::GeneratedModule;
use crate::codegen::naming::type_name;
use crate::codegen::preamble::PREAMBLE;
use crate::codegen::sequence::generate_sequence;
use crate::codegen::symbols::SymbolTable;
use crate::parser::ast::{Body, Grammar, Unit};

/// Generate the parser module for `grammar`.
pub fn generate(grammar: &Grammar) -> Result<GeneratedModule, GenerateError> {
    let symbols = SymbolTable::classify(grammar)?;
    generate_with(grammar, &symbols)
}

/// Generate with an already built symbol table.
pub fn generate_with(
    grammar: &Grammar,
    symbols: &SymbolTable,
) -> Result<GeneratedModule, GenerateError> {
    check_type_names(grammar)?;

    let mut module = GeneratedModule::new(PREAMBLE);

    for decl in grammar.expressions() {
        let text = match &decl.body {
            Body::Choice(units) => generate_choice(decl, units, symbols)?,
            Body::Sequence(elements) => generate_sequence(decl, elements, symbols)?,
        };
        trace!("generated {} ({} bytes)", decl.name, text.len());
        module.push(decl.name.clone(), text);
    }

    debug!("generated {} parse procedures", module.units.len());
    Ok(module)
}

/// Distinct declarations such as `foo-bar` and `fooBar` would both become
/// `NodeFooBar`.
fn check_type_names(grammar: &Grammar) -> Result<(), GenerateError> {
    let mut seen: FxHashMap<String, &str> = FxHashMap::default();

    for decl in grammar.expressions() {
        let generated = type_name(&decl.name);
        if let Some(first) = seen.get(&generated) {
            return Err(GenerateError::TypeNameCollision {
                type_name: generated,
                first: first.to_string(),
                second: decl.name.clone(),
            });
        }
        seen.insert(generated, &decl.name);
    }

    Ok(())
}

/// Rust expression for a unit's required token text.
pub(crate) fn literal_arg(unit: &Unit) -> String {
    match &unit.literal {
        Some(text) => format!("Some({:?})", text),
        None => "None".to_string(),
    }
}
