//! Line-oriented IR parser
//!
//! This module provides the parse entry point [`parse_module`] and the
//! [`ParseError`] type.
//!
//! # Parsing Strategy
//!
//! The grammar is line-oriented, so the parser is a single forward pass over
//! the input lines rather than a token stream:
//! - the first line must be the `module <name>` header,
//! - `define <name> {` opens a function, a lone `}` commits it,
//! - every other non-blank line inside an open function is an instruction.
//!
//! Lines are trimmed of surrounding whitespace before matching, so the
//! canonical 4-space instruction indentation is convention, not syntax.
//!
//! # Quirks Preserved
//!
//! Non-blank lines outside an open function are silently ignored, matching
//! the established behavior of the format. A function still open at end of
//! input is committed as if a closing `}` had been seen.

use crate::ir::function::Function;
use crate::ir::instruction::Instruction;
use crate::ir::module::Module;
use std::fmt;

/// Parser error type
///
/// Carries the 1-based line number of the offending input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub line: usize,
}

impl ParseError {
    fn new(message: impl Into<String>, line: usize) -> Self {
        Self {
            message: message.into(),
            line,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "parse error at line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for ParseError {}

/// Parse a complete module from its text form.
///
/// The input must start with a `module <name>` header line; everything after
/// it is function bodies per the grammar in [`crate::parser`].
pub fn parse_module(text: &str) -> Result<Module, ParseError> {
    let mut lines = text.lines().enumerate();

    let (_, header) = lines
        .next()
        .ok_or_else(|| ParseError::new("missing module header", 1))?;
    let name = header
        .strip_prefix("module ")
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| {
            ParseError::new(format!("invalid module declaration @{}", header), 1)
        })?;

    let mut module = Module::new(name);
    let mut current: Option<Function> = None;

    for (index, raw_line) in lines {
        let line = raw_line.trim();
        let lineno = index + 1;

        if line.is_empty() {
            continue;
        }

        if let Some(rest) = line.strip_prefix("define ") {
            // A define while a function is open commits the open one first.
            if let Some(func) = current.take() {
                module.add_function(func);
            }
            let name = rest
                .strip_suffix('{')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .ok_or_else(|| {
                    ParseError::new(
                        format!("malformed function header @{}", line),
                        lineno,
                    )
                })?;
            current = Some(Function::new(name));
        } else if line == "}" {
            // A stray `}` with no open function is ignored.
            if let Some(func) = current.take() {
                module.add_function(func);
            }
        } else if let Some(func) = current.as_mut() {
            func.add_instruction(parse_instruction(line, lineno)?);
        }
        // Instruction lines outside an open function are silently ignored.
    }

    // Unterminated function at end of input: commit rather than drop.
    if let Some(func) = current.take() {
        module.add_function(func);
    }

    Ok(module)
}

/// Parse a single (already trimmed) instruction line.
fn parse_instruction(line: &str, lineno: usize) -> Result<Instruction, ParseError> {
    let mut tokens = line.split_whitespace();

    // first token decides the shape; split_whitespace on a non-empty
    // trimmed line always yields at least one token
    if tokens.next() == Some("return") {
        let operands: Vec<&str> = tokens.collect();
        if operands.len() != 1 {
            return Err(ParseError::new(
                format!("return expects 1 operand, got {}", operands.len()),
                lineno,
            ));
        }
        return Ok(Instruction::Return {
            value: operands[0].to_string(),
        });
    }

    let (dest, rest) = line.split_once('=').ok_or_else(|| {
        ParseError::new(format!("expected `=` in instruction @{}", line), lineno)
    })?;
    let dest = dest.trim();
    if dest.is_empty() {
        return Err(ParseError::new(
            format!("missing destination @{}", line),
            lineno,
        ));
    }

    let mut rest_tokens = rest.split_whitespace();
    let op = rest_tokens.next().ok_or_else(|| {
        ParseError::new(format!("missing operator @{}", line), lineno)
    })?;

    // each operand sheds at most one trailing comma
    let operands: Vec<&str> = rest_tokens
        .map(|arg| arg.strip_suffix(',').unwrap_or(arg))
        .collect();

    match op {
        "add" | "sub" => {
            if operands.len() != 2 {
                return Err(ParseError::new(
                    format!("{} expects 2 operands, got {}", op, operands.len()),
                    lineno,
                ));
            }
            let dest = dest.to_string();
            let lhs = operands[0].to_string();
            let rhs = operands[1].to_string();
            if op == "add" {
                Ok(Instruction::Add { dest, lhs, rhs })
            } else {
                Ok(Instruction::Sub { dest, lhs, rhs })
            }
        }
        _ => Err(ParseError::new(
            format!("unknown operator `{}`", op),
            lineno,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_module() {
        let text = "module example\ndefine add {\n    %result = add %x, %y\n    return %result\n}\n";
        let module = parse_module(text).unwrap();

        assert_eq!(module.name, "example");
        assert_eq!(module.functions.len(), 1);

        let func = &module.functions[0];
        assert_eq!(func.name, "add");
        assert_eq!(func.instructions.len(), 2);
        assert_eq!(
            func.instructions[0],
            Instruction::Add {
                dest: "%result".to_string(),
                lhs: "%x".to_string(),
                rhs: "%y".to_string(),
            }
        );
        assert_eq!(
            func.instructions[1],
            Instruction::Return {
                value: "%result".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_module_header() {
        let err = parse_module("define add {\n}\n").unwrap_err();
        assert_eq!(err.line, 1);
        assert!(err.message.contains("invalid module declaration"));

        let err = parse_module("").unwrap_err();
        assert!(err.message.contains("missing module header"));
    }

    #[test]
    fn test_header_reports_offending_line() {
        let err = parse_module("modul example\n").unwrap_err();
        assert!(err.message.contains("modul example"));
    }

    #[test]
    fn test_empty_module_name_rejected() {
        let err = parse_module("module \n").unwrap_err();
        assert_eq!(err.line, 1);
    }

    #[test]
    fn test_empty_module() {
        let module = parse_module("module empty\n").unwrap();
        assert_eq!(module.name, "empty");
        assert!(module.functions.is_empty());
    }

    #[test]
    fn test_blank_lines_skipped() {
        let text = "module m\n\ndefine f {\n\n    return %x\n\n}\n\n";
        let module = parse_module(text).unwrap();
        assert_eq!(module.functions.len(), 1);
        assert_eq!(module.functions[0].instructions.len(), 1);
    }

    #[test]
    fn test_irregular_whitespace_accepted() {
        let text = "module m\ndefine f {\n\t  %r = add %a,   %b  \n  return %r\n}\n";
        let module = parse_module(text).unwrap();
        assert_eq!(
            module.functions[0].instructions[0],
            Instruction::Add {
                dest: "%r".to_string(),
                lhs: "%a".to_string(),
                rhs: "%b".to_string(),
            }
        );
    }

    #[test]
    fn test_lines_outside_function_ignored() {
        let text = "module m\n%r = add %a, %b\ndefine f {\n    return %x\n}\nreturn %y\n";
        let module = parse_module(text).unwrap();
        assert_eq!(module.functions.len(), 1);
        assert_eq!(module.functions[0].instructions.len(), 1);
    }

    #[test]
    fn test_stray_close_brace_ignored() {
        let text = "module m\n}\ndefine f {\n    return %x\n}\n";
        let module = parse_module(text).unwrap();
        assert_eq!(module.functions.len(), 1);
    }

    #[test]
    fn test_define_commits_open_function() {
        let text = "module m\ndefine f {\n    return %x\ndefine g {\n    return %y\n}\n";
        let module = parse_module(text).unwrap();
        assert_eq!(module.functions.len(), 2);
        assert_eq!(module.functions[0].name, "f");
        assert_eq!(module.functions[1].name, "g");
    }

    #[test]
    fn test_unterminated_function_committed() {
        let text = "module m\ndefine f {\n    return %x\n";
        let module = parse_module(text).unwrap();
        assert_eq!(module.functions.len(), 1);
        assert_eq!(module.functions[0].instructions.len(), 1);
    }

    #[test]
    fn test_add_arity_too_few() {
        let text = "module m\ndefine f {\n    %r = add %a\n}\n";
        let err = parse_module(text).unwrap_err();
        assert_eq!(err.line, 3);
        assert!(err.message.contains("add expects 2 operands, got 1"));
    }

    #[test]
    fn test_sub_arity_too_many() {
        let text = "module m\ndefine f {\n    %r = sub %a, %b, %c\n}\n";
        let err = parse_module(text).unwrap_err();
        assert!(err.message.contains("sub expects 2 operands, got 3"));
    }

    #[test]
    fn test_return_arity() {
        let err = parse_module("module m\ndefine f {\n    return\n}\n").unwrap_err();
        assert!(err.message.contains("return expects 1 operand, got 0"));

        let err = parse_module("module m\ndefine f {\n    return %a %b\n}\n").unwrap_err();
        assert!(err.message.contains("return expects 1 operand, got 2"));
    }

    #[test]
    fn test_unknown_operator() {
        let text = "module m\ndefine f {\n    %r = mul %a, %b\n}\n";
        let err = parse_module(text).unwrap_err();
        assert!(err.message.contains("unknown operator `mul`"));
    }

    #[test]
    fn test_missing_equals() {
        let text = "module m\ndefine f {\n    %r add %a, %b\n}\n";
        let err = parse_module(text).unwrap_err();
        assert!(err.message.contains("expected `=`"));
    }

    #[test]
    fn test_missing_destination() {
        let text = "module m\ndefine f {\n    = add %a, %b\n}\n";
        let err = parse_module(text).unwrap_err();
        assert!(err.message.contains("missing destination"));
    }

    #[test]
    fn test_malformed_function_header() {
        let err = parse_module("module m\ndefine f\n").unwrap_err();
        assert_eq!(err.line, 2);
        assert!(err.message.contains("malformed function header"));

        let err = parse_module("module m\ndefine f {\ndefine  {\n}\n").unwrap_err();
        assert!(err.message.contains("malformed function header"));
    }

    #[test]
    fn test_operands_without_comma_accepted() {
        // the comma is stripped per-operand, not required
        let text = "module m\ndefine f {\n    %r = add %a %b\n}\n";
        let module = parse_module(text).unwrap();
        assert_eq!(
            module.functions[0].instructions[0],
            Instruction::Add {
                dest: "%r".to_string(),
                lhs: "%a".to_string(),
                rhs: "%b".to_string(),
            }
        );
    }
}
