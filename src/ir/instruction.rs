//! Instruction definitions
//!
//! A single tagged [`Instruction`] enum is shared by the builder, the
//! serializer, the parser, and the interpreter. Operand counts are fixed by
//! the variant, so an instruction with the wrong arity is unrepresentable.

use std::fmt;

/// One straight-line operation.
///
/// The IR has no control flow: `Add` and `Sub` bind a new value and fall
/// through to the next instruction, `Return` terminates the enclosing
/// function with the value bound to its operand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// `<dest> = add <lhs>, <rhs>`
    Add {
        dest: String,
        lhs: String,
        rhs: String,
    },
    /// `<dest> = sub <lhs>, <rhs>`
    Sub {
        dest: String,
        lhs: String,
        rhs: String,
    },
    /// `return <value>`
    Return { value: String },
}

impl Instruction {
    /// Number of operands this instruction kind reads
    pub fn arity(&self) -> usize {
        match self {
            Instruction::Add { .. } | Instruction::Sub { .. } => 2,
            Instruction::Return { .. } => 1,
        }
    }

    /// The operator keyword as it appears in the text form
    pub fn op_name(&self) -> &'static str {
        match self {
            Instruction::Add { .. } => "add",
            Instruction::Sub { .. } => "sub",
            Instruction::Return { .. } => "return",
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Add { dest, lhs, rhs } => {
                write!(f, "{} = add {}, {}", dest, lhs, rhs)
            }
            Instruction::Sub { dest, lhs, rhs } => {
                write!(f, "{} = sub {}, {}", dest, lhs, rhs)
            }
            Instruction::Return { value } => write!(f, "return {}", value),
        }
    }
}
