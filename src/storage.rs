//! File persistence boundary
//!
//! Modules persist as their canonical text form, UTF-8, one file per module.
//! I/O failures are soft outcomes here (`false` from [`save`], `Ok(None)`
//! from [`load`]): a missing or unreadable file is an expected condition at
//! this boundary. Malformed *content* is not, and surfaces as a hard
//! [`ParseError`]. Writes are single-shot with no partial-write recovery.

use crate::ir::module::Module;
use crate::parser::parse::{parse_module, ParseError};
use std::fs;
use std::path::Path;

/// Write the module's canonical text to `path`.
///
/// Returns `false` if the file could not be written; any partially written
/// content is left as-is.
pub fn save(module: &Module, path: impl AsRef<Path>) -> bool {
    fs::write(path, module.to_text()).is_ok()
}

/// Read and parse a module from `path`.
///
/// `Ok(None)` when the file cannot be opened or read, `Err` when its content
/// does not parse, `Ok(Some(module))` otherwise.
pub fn load(path: impl AsRef<Path>) -> Result<Option<Module>, ParseError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(_) => return Ok(None),
    };
    parse_module(&text).map(Some)
}
