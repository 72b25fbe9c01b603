//! Execution engine for the IR interpreter

use crate::interpreter::errors::RuntimeError;
use crate::ir::function::Function;
use crate::ir::instruction::Instruction;
use crate::ir::module::Module;
use rustc_hash::FxHashMap;

/// Variable bindings for one interpretation run.
///
/// Maps identifiers to 32-bit signed integers. A Context is created fresh
/// per run, seeded from the caller's initial bindings, mutated as
/// instructions execute, and discarded when the run ends.
#[derive(Debug, Clone, Default)]
pub struct Context {
    variables: FxHashMap<String, i32>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind (or rebind) an identifier to a value
    pub fn set_value(&mut self, id: impl Into<String>, value: i32) {
        self.variables.insert(id.into(), value);
    }

    /// Look up an identifier, failing if it has no binding
    pub fn get_value(&self, id: &str) -> Result<i32, RuntimeError> {
        self.variables
            .get(id)
            .copied()
            .ok_or_else(|| RuntimeError::UndefinedVariable {
                name: id.to_string(),
            })
    }
}

/// Observability hook for execution.
///
/// The execution path itself never prints; callers that want diagnostics
/// (the demo driver, a debugger) install a Tracer. All methods default to
/// no-ops so implementors override only what they need.
pub trait Tracer {
    /// Called once before the function lookup begins
    fn on_lookup(&mut self, _module: &Module, _func_name: &str) {}

    /// Called before each instruction executes
    fn on_instruction(&mut self, _function: &str, _inst: &Instruction) {}

    /// Called when a `return` terminates the function
    fn on_return(&mut self, _function: &str, _value: i32) {}
}

/// The interpreter for a single module.
///
/// Borrows the module immutably: interpretation never mutates the program,
/// and several interpreters may share one module.
pub struct Interpreter<'m> {
    module: &'m Module,
    tracer: Option<Box<dyn Tracer>>,
}

impl<'m> Interpreter<'m> {
    /// Create an interpreter with no tracer installed
    pub fn new(module: &'m Module) -> Self {
        Self {
            module,
            tracer: None,
        }
    }

    /// Create an interpreter that reports execution events to `tracer`
    pub fn with_tracer(module: &'m Module, tracer: Box<dyn Tracer>) -> Self {
        Self {
            module,
            tracer: Some(tracer),
        }
    }

    /// Run the named function against the given initial bindings.
    ///
    /// Function lookup is a linear scan with first-match semantics; duplicate
    /// names are not rejected, the earliest definition wins.
    pub fn run(
        &mut self,
        func_name: &str,
        bindings: &[(&str, i32)],
    ) -> Result<i32, RuntimeError> {
        if let Some(tracer) = self.tracer.as_mut() {
            tracer.on_lookup(self.module, func_name);
        }

        let func = self
            .module
            .functions
            .iter()
            .find(|f| f.name == func_name)
            .ok_or_else(|| RuntimeError::FunctionNotFound {
                name: func_name.to_string(),
            })?;

        let mut ctx = Context::new();
        for (id, value) in bindings {
            ctx.set_value(*id, *value);
        }

        self.interpret_func(func, &mut ctx)
    }

    /// Execute one function's instruction sequence against `ctx`.
    fn interpret_func(
        &mut self,
        func: &Function,
        ctx: &mut Context,
    ) -> Result<i32, RuntimeError> {
        for inst in &func.instructions {
            if let Some(tracer) = self.tracer.as_mut() {
                tracer.on_instruction(&func.name, inst);
            }

            match inst {
                Instruction::Add { dest, lhs, rhs } => {
                    let lhs = ctx.get_value(lhs)?;
                    let rhs = ctx.get_value(rhs)?;
                    // two's-complement wraparound, like the i32 it models
                    ctx.set_value(dest.clone(), lhs.wrapping_add(rhs));
                }
                Instruction::Sub { dest, lhs, rhs } => {
                    let lhs = ctx.get_value(lhs)?;
                    let rhs = ctx.get_value(rhs)?;
                    ctx.set_value(dest.clone(), lhs.wrapping_sub(rhs));
                }
                Instruction::Return { value } => {
                    let result = ctx.get_value(value)?;
                    if let Some(tracer) = self.tracer.as_mut() {
                        tracer.on_return(&func.name, result);
                    }
                    return Ok(result);
                }
            }
        }

        Err(RuntimeError::MissingReturn {
            function: func.name.clone(),
        })
    }
}

/// Run `func_name` in `module` with the given bindings and no tracer.
///
/// Convenience wrapper over [`Interpreter`] for the common one-shot case.
pub fn run(
    module: &Module,
    func_name: &str,
    bindings: &[(&str, i32)],
) -> Result<i32, RuntimeError> {
    Interpreter::new(module).run(func_name, bindings)
}
