//! Module definitions
//!
//! A [`Module`] exclusively owns its functions. It is created empty with a
//! name, grown by appending functions one at a time, and treated as
//! read-only by the serializer and interpreter.

use crate::ir::function::Function;
use std::fmt;

/// A named, ordered collection of functions.
///
/// Function names are NOT required to be unique; lookup by the interpreter
/// uses first-match. That is a documented quirk of the format, not an
/// invariant callers may rely on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    pub name: String,
    pub functions: Vec<Function>,
}

impl Module {
    /// Create an empty module with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            functions: Vec::new(),
        }
    }

    /// Append a fully-built function
    pub fn add_function(&mut self, func: Function) {
        self.functions.push(func);
    }

    /// Append an empty function and return a handle for filling it in
    pub fn create_function(&mut self, name: impl Into<String>) -> &mut Function {
        self.functions.push(Function::new(name));
        // just pushed, so the list is non-empty
        self.functions.last_mut().unwrap()
    }

    /// Render the module in its canonical text form
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "module {}", self.name)?;
        for func in &self.functions {
            write!(f, "{}", func)?;
        }
        Ok(())
    }
}
