//! Fatal conditions: unknown instructions, empty-stack pops, and
//! operations applied outside their domain.

use laserlang::LaserError;

use crate::common::{machine_with, run_err};

#[test]
fn test_unknown_instruction_fails_with_no_output() {
    let (err, output) = run_err("@");
    assert_eq!(err, LaserError::UnknownInstruction { glyph: '@', x: 0, y: 0 });
    assert_eq!(output, "");
}

#[test]
fn test_digits_are_not_instructions() {
    // Numbers are pushed as quoted literals; a bare digit is unknown.
    let (err, _) = run_err("7");
    assert!(matches!(err, LaserError::UnknownInstruction { glyph: '7', .. }));
}

#[test]
fn test_pop_from_empty_stack() {
    let (err, output) = run_err("p");
    assert_eq!(err, LaserError::StackUnderflow { operation: "p".to_string() });
    assert_eq!(output, "");
}

#[test]
fn test_print_from_empty_stack() {
    let (err, _) = run_err("o");
    assert!(matches!(err, LaserError::StackUnderflow { .. }));
}

#[test]
fn test_rotate_empty_stack() {
    let (err, _) = run_err("u");
    assert!(matches!(err, LaserError::StackUnderflow { .. }));
}

#[test]
fn test_coalesce_on_empty_stack_underflows() {
    // peek on empty yields integer zero, so 'B' tries to pop it.
    let (err, _) = run_err("B");
    assert!(matches!(err, LaserError::StackUnderflow { .. }));
}

#[test]
fn test_coalesce_with_only_integer_tokens_underflows() {
    // Without a non-integer cell below the code points, coalesce drains
    // the stack and the zero-default peek triggers one pop too many.
    let mut m = machine_with("Bo#", &["72", "105"]);
    let err = m.run().expect_err("coalesce should underflow");
    assert!(matches!(err, LaserError::StackUnderflow { .. }));
    assert_eq!(m.output, "");
}

#[test]
fn test_division_by_zero() {
    let (err, _) = run_err("\"1\"\"0\"÷#");
    assert_eq!(err, LaserError::DivisionByZero { operation: "÷".to_string() });
}

#[test]
fn test_modulo_by_zero() {
    let (err, _) = run_err("\"1\"\"0\"%#");
    assert!(matches!(err, LaserError::DivisionByZero { .. }));
}

#[test]
fn test_complement_of_string() {
    let (err, _) = run_err("\"a\"~#");
    assert_eq!(
        err,
        LaserError::TypeMismatch { operation: "~".to_string(), operand: "string" }
    );
}

#[test]
fn test_explode_of_integer() {
    let (err, _) = run_err("\"5\"n#");
    assert_eq!(
        err,
        LaserError::TypeMismatch { operation: "n".to_string(), operand: "integer" }
    );
}

#[test]
fn test_subtraction_of_strings() {
    let (err, _) = run_err("\"a\"\"b\"-#");
    assert!(matches!(err, LaserError::TypeMismatch { .. }));
}
