//! Textual IR parser
//!
//! This module reconstructs a [`crate::ir::module::Module`] from its
//! canonical text form (or hand-authored text following the same grammar):
//! - [`parse`]: the line-oriented parser and [`parse::ParseError`]
//!
//! # Grammar
//!
//! ```text
//! module      := "module" SP identifier NEWLINE function*
//! function    := "define" SP identifier SP "{" NEWLINE instruction* "}" NEWLINE
//! instruction := add_or_sub | return_instr
//! add_or_sub  := identifier SP "=" SP ("add"|"sub") SP identifier "," SP identifier NEWLINE
//! return_instr:= "return" SP identifier NEWLINE
//! ```
//!
//! # Parser Implementation
//!
//! Hand-written single forward pass over the input lines. No external parser
//! generator dependencies. Instruction lines are validated structurally at
//! parse time: operand counts must match the operator's arity and the
//! operator must be one of the known keywords, so a successfully parsed
//! module contains only well-formed instructions.

pub mod parse;
