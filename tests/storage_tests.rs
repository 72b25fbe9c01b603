// File persistence boundary tests

use tinyir::ir::instruction::Instruction;
use tinyir::ir::module::Module;
use tinyir::storage;

fn example_module() -> Module {
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
    module
}

#[test]
fn test_save_load_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir failed");
    let path = dir.path().join("example.ir");

    let module = example_module();
    assert!(storage::save(&module, &path));

    let loaded = storage::load(&path)
        .expect("load reported a parse error")
        .expect("load reported a missing file");
    assert_eq!(loaded, module);
}

#[test]
fn test_load_missing_file_is_soft() {
    let dir = tempfile::tempdir().expect("tempdir failed");
    let path = dir.path().join("does_not_exist.ir");

    let outcome = storage::load(&path).expect("missing file must not be a parse error");
    assert!(outcome.is_none());
}

#[test]
fn test_load_malformed_file_is_hard() {
    let dir = tempfile::tempdir().expect("tempdir failed");
    let path = dir.path().join("bad.ir");
    std::fs::write(&path, "not a module header\n").expect("write failed");

    let err = storage::load(&path).unwrap_err();
    assert!(err.message.contains("invalid module declaration"));
}

#[test]
fn test_save_to_unwritable_path() {
    let dir = tempfile::tempdir().expect("tempdir failed");
    let path = dir.path().join("missing_subdir").join("example.ir");

    assert!(!storage::save(&example_module(), &path));
}
