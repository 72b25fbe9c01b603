// tinyir demo driver: build, persist, reload, and execute an example module

use std::path::Path;
use std::process;

use tinyir::interpreter::engine::{Interpreter, Tracer};
use tinyir::ir::instruction::Instruction;
use tinyir::ir::module::Module;
use tinyir::storage;

/// Tracer that mirrors execution to stderr, keeping the engine itself quiet
struct StderrTracer;

impl Tracer for StderrTracer {
    fn on_lookup(&mut self, module: &Module, func_name: &str) {
        eprintln!("searching for function: {}", func_name);
        eprintln!("available functions:");
        for func in &module.functions {
            eprintln!("- {}", func.name);
        }
    }

    fn on_instruction(&mut self, function: &str, inst: &Instruction) {
        eprintln!("[{}] {}", function, inst);
    }

    fn on_return(&mut self, function: &str, value: i32) {
        eprintln!("[{}] returned {}", function, value);
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let path = args.get(1).map(String::as_str).unwrap_or("example.ir");

    // Build the example module by hand
    let mut module = Module::new("example");
    let func = module.create_function("add");
    func.add_instruction(Instruction::Add {
        dest: "%result".to_string(),
        lhs: "%x".to_string(),
        rhs: "%y".to_string(),
    });
    func.add_instruction(Instruction::Return {
        value: "%result".to_string(),
    });

    // Persist it, then reload through the parser
    if !storage::save(&module, path) {
        eprintln!("error: could not write '{}'", path);
        process::exit(1);
    }
    println!("serialized module to {}", Path::new(path).display());

    let loaded = match storage::load(path) {
        Ok(Some(loaded)) => loaded,
        Ok(None) => {
            eprintln!("error: could not read '{}'", path);
            process::exit(1);
        }
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };
    println!("loaded module from {}", Path::new(path).display());
    print!("{}", loaded);

    // Execute the reloaded copy
    let mut interp = Interpreter::with_tracer(&loaded, Box::new(StderrTracer));
    match interp.run("add", &[("%x", 5), ("%y", 3)]) {
        Ok(result) => println!("result = {}", result),
        Err(e) => {
            eprintln!("error = {}", e);
            process::exit(1);
        }
    }
}
