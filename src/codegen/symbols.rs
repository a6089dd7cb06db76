// Symbol classification: declared identifier → token or expression

use log::debug;
use rustc_hash::FxHashMap;

use crate::codegen::errors::GenerateError;
use crate::parser::ast::{Declaration, Grammar, Unit};

/// What a declared identifier stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Token,
    Expression,
}

/// Symbol table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    pub kind: SymbolKind,
    pub line: usize,
}

/// Every declared name of a grammar, built before any generation so that
/// expressions may reference names declared further down the file.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    symbols: FxHashMap<String, Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single pass over the declarations. Blank lines contribute nothing;
    /// a name declared twice is rejected.
    pub fn classify(grammar: &Grammar) -> Result<Self, GenerateError> {
        let mut table = SymbolTable::new();

        for declaration in &grammar.declarations {
            let (name, kind) = match declaration {
                Declaration::Token(token) => (&token.name, SymbolKind::Token),
                Declaration::Expression(expr) => (&expr.name, SymbolKind::Expression),
                Declaration::Empty { .. } => continue,
            };
            table.insert(name, kind, declaration.line())?;
        }

        debug!("classified {} symbols", table.len());
        Ok(table)
    }

    pub fn insert(&mut self, name: &str, kind: SymbolKind, line: usize) -> Result<(), GenerateError> {
        if let Some(existing) = self.symbols.get(name) {
            return Err(GenerateError::DuplicateDeclaration {
                name: name.to_string(),
                first_line: existing.line,
                line,
            });
        }
        self.symbols.insert(name.to_string(), Symbol { kind, line });
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    pub fn kind(&self, name: &str) -> Option<SymbolKind> {
        self.get(name).map(|symbol| symbol.kind)
    }

    /// Kind of the identifier `unit` references from inside `declaration`.
    pub fn resolve(&self, unit: &Unit, declaration: &str) -> Result<SymbolKind, GenerateError> {
        self.kind(&unit.name)
            .ok_or_else(|| GenerateError::UnknownIdentifier {
                name: unit.name.clone(),
                declaration: declaration.to_string(),
                line: unit.line,
            })
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
