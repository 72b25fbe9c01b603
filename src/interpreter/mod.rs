//! IR execution engine
//!
//! This module provides the core execution logic:
//! - [`engine`]: [`engine::Context`], [`engine::Interpreter`], and the
//!   [`engine::run`] convenience entry point
//! - [`errors`]: runtime error types
//!
//! # Execution Model
//!
//! Execution is a linear scan over one function's instruction sequence with
//! no instruction pointer jumps: `add`/`sub` bind values in the [`engine::Context`]
//! and fall through, `return` terminates immediately with its operand's value.
//! Reaching the end of the sequence without a `return` is a runtime error.
//!
//! Each run owns a private, freshly seeded Context; the module itself is
//! never mutated. There is no output from the execution path — callers who
//! want visibility install an [`engine::Tracer`].

pub mod engine;
pub mod errors;
