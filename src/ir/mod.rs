//! In-memory IR data model
//!
//! This module defines the program representation and its canonical text
//! rendering:
//! - [`module`]: [`module::Module`], a named, ordered collection of functions
//! - [`function`]: [`function::Function`], a named, ordered instruction sequence
//! - [`instruction`]: [`instruction::Instruction`], the tagged operation variants
//!
//! # Text Form
//!
//! Every type implements [`std::fmt::Display`], and together the impls produce
//! the canonical text grammar:
//!
//! ```text
//! module <name>
//! define <name> {
//!     <dest> = add <lhs>, <rhs>
//!     <dest> = sub <lhs>, <rhs>
//!     return <operand>
//! }
//! ```
//!
//! Instruction lines are indented by exactly 4 spaces. The same text is what
//! [`crate::parser`] consumes, so `Display` here and the parser together
//! define the round-trip contract.
//!
//! # Identifiers
//!
//! Operand and destination identifiers are opaque strings, conventionally
//! prefixed with `%` (e.g. `%result`). The model does not validate the prefix.

pub mod function;
pub mod instruction;
pub mod module;
