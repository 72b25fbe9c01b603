//! # Introduction
//!
//! tinyir is a minimal textual intermediate-representation (IR) toolkit: it
//! builds straight-line integer programs in memory, serializes them to a
//! canonical text form, parses that text back, and interprets the result
//! against named integer inputs.
//!
//! ## Pipeline
//!
//! ```text
//! Builder → Module → Serializer → text → Parser → Module → Interpreter → i32
//! ```
//!
//! 1. [`ir`] — the data model: [`ir::module::Module`] owns ordered
//!    [`ir::function::Function`]s, each an ordered sequence of
//!    [`ir::instruction::Instruction`]s (`add`, `sub`, `return`). The same
//!    types render the canonical text form through their `Display` impls.
//! 2. [`parser`] — a hand-written, line-oriented parser that reconstructs a
//!    `Module` from the text form, validating operator keywords and operand
//!    arity as it goes.
//! 3. [`interpreter`] — executes one function's instruction sequence against
//!    an [`interpreter::engine::Context`] (identifier → `i32` bindings),
//!    yielding the returned value or a runtime error.
//! 4. [`storage`] — the file boundary: save a module as text, load one back.
//!    I/O absence is a soft outcome; malformed content is a parse error.
//!
//! ## Scope
//!
//! The IR models straight-line computation only: no control flow, no calls,
//! no types other than 32-bit signed integers, a single return point per
//! function. Function names need not be unique within a module; lookup is
//! first-match.
//!
//! ## Example
//!
//! ```rust
//! use tinyir::interpreter::engine;
//! use tinyir::ir::instruction::Instruction;
//! use tinyir::ir::module::Module;
//! use tinyir::parser::parse::parse_module;
//!
//! let mut module = Module::new("example");
//! let func = module.create_function("add");
//! func.add_instruction(Instruction::Add {
//!     dest: "%result".to_string(),
//!     lhs: "%x".to_string(),
//!     rhs: "%y".to_string(),
//! });
//! func.add_instruction(Instruction::Return {
//!     value: "%result".to_string(),
//! });
//!
//! // round-trip through the text form, then execute
//! let reloaded = parse_module(&module.to_text()).unwrap();
//! let result = engine::run(&reloaded, "add", &[("%x", 5), ("%y", 3)]).unwrap();
//! assert_eq!(result, 8);
//! ```

pub mod interpreter;
pub mod ir;
pub mod parser;
pub mod storage;
