//! Runtime error types for the IR interpreter
//!
//! This module defines [`RuntimeError`], which represents all errors that can
//! occur during execution (as opposed to parse errors or storage failures).
//!
//! All runtime errors are fatal: they abort the current run with no partial
//! result and are never recovered internally.

use std::fmt;

/// Runtime errors that can occur during execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// An instruction read an identifier with no bound value
    UndefinedVariable { name: String },

    /// The instruction sequence ended without reaching a `return`
    MissingReturn { function: String },

    /// No function with the requested name exists in the module
    FunctionNotFound { name: String },
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::UndefinedVariable { name } => {
                write!(f, "undefined variable {}", name)
            }
            RuntimeError::MissingReturn { function } => {
                write!(f, "function '{}' did not return a value", function)
            }
            RuntimeError::FunctionNotFound { name } => {
                write!(f, "function not found: {}", name)
            }
        }
    }
}

impl std::error::Error for RuntimeError {}
