//! Function definitions

use crate::ir::instruction::Instruction;
use std::fmt;

/// A named, ordered sequence of instructions with no internal branching.
///
/// Instruction order is significant and preserved end-to-end through
/// serialization, parsing, and interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    pub name: String,
    pub instructions: Vec<Instruction>,
}

impl Function {
    /// Create an empty function with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            instructions: Vec::new(),
        }
    }

    /// Append an instruction to the end of the sequence
    pub fn add_instruction(&mut self, inst: Instruction) {
        self.instructions.push(inst);
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "define {} {{", self.name)?;
        for inst in &self.instructions {
            writeln!(f, "    {}", inst)?;
        }
        writeln!(f, "}}")
    }
}
