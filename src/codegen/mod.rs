//! Parser code generation
//!
//! Turns a [`crate::parser::ast::Grammar`] into Rust source for a
//! recursive-descent parser:
//! - [`symbols`]: identifier classification (token vs. expression)
//! - [`generate`]: per-declaration dispatch and the entry points
//! - [`choice`], [`sequence`]: the two generation strategies
//! - [`preamble`]: runtime support shared by all generated procedures
//! - [`module`]: assembly of the final text
//!
//! # Generated shape
//!
//! For `sum = ident plus ident` the generator emits
//!
//! ```text
//! pub struct NodeSum { pub i0: Token, pub i1: Token, pub i2: Token }
//! pub fn parse_sum(input: &[Token]) -> Result<(NodeSum, usize), ParseError>
//! ```
//!
//! Every procedure takes the unconsumed input as a slice and reports how many
//! tokens it used, exactly like the hand-written parser in [`crate::parser`].

pub mod choice;
pub mod errors;
pub mod generate;
pub mod module;
pub mod naming;
pub mod preamble;
pub mod sequence;
pub mod symbols;
