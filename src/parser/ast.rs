// AST (Abstract Syntax Tree) definitions for grammar-definition files

/// A reference to a declared identifier, optionally pinned to one token text
/// (`ident<"token">`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    pub name: String,
    pub literal: Option<String>,
    pub line: usize,
}

impl Unit {
    pub fn new(name: impl Into<String>, line: usize) -> Self {
        Unit {
            name: name.into(),
            literal: None,
            line,
        }
    }

    pub fn with_literal(mut self, literal: impl Into<String>) -> Self {
        self.literal = Some(literal.into());
        self
    }
}

/// How many times a unit inside a sequence may match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Quantifier {
    /// Exactly once
    #[default]
    One,
    /// Zero or one time
    Optional,
    /// Zero or more times (`unit...`)
    Repeated,
}

/// One quantified unit of a sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub unit: Unit,
    pub quantifier: Quantifier,
}

impl Element {
    pub fn new(unit: Unit, quantifier: Quantifier) -> Self {
        Element { unit, quantifier }
    }
}

/// Right-hand side of an expression declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// Ordered alternation, at least two alternatives
    Choice(Vec<Unit>),
    /// Ordered conjunction, possibly empty
    Sequence(Vec<Element>),
}

/// `token name` or `token name = "text"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenDeclaration {
    pub name: String,
    pub literal: Option<String>,
    pub line: usize,
}

/// `name = body`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionDeclaration {
    pub name: String,
    pub body: Body,
    pub line: usize,
}

/// One statement of a grammar file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    Token(TokenDeclaration),
    Expression(ExpressionDeclaration),
    /// A blank line
    Empty { line: usize },
}

impl Declaration {
    /// Declared identifier, `None` for blank lines.
    pub fn name(&self) -> Option<&str> {
        match self {
            Declaration::Token(decl) => Some(&decl.name),
            Declaration::Expression(decl) => Some(&decl.name),
            Declaration::Empty { .. } => None,
        }
    }

    pub fn line(&self) -> usize {
        match self {
            Declaration::Token(decl) => decl.line,
            Declaration::Expression(decl) => decl.line,
            Declaration::Empty { line } => *line,
        }
    }
}

/// A whole grammar file, declarations in source order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grammar {
    pub declarations: Vec<Declaration>,
}

impl Grammar {
    pub fn new() -> Self {
        Grammar {
            declarations: Vec::new(),
        }
    }

    /// Expression declarations in source order.
    pub fn expressions(&self) -> impl Iterator<Item = &ExpressionDeclaration> {
        self.declarations.iter().filter_map(|decl| match decl {
            Declaration::Expression(expr) => Some(expr),
            _ => None,
        })
    }

    /// Token declarations in source order.
    pub fn tokens(&self) -> impl Iterator<Item = &TokenDeclaration> {
        self.declarations.iter().filter_map(|decl| match decl {
            Declaration::Token(token) => Some(token),
            _ => None,
        })
    }
}
