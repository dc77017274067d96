//! Per-instruction semantics, exercised through complete programs.
//!
//! Numbers enter programs as quoted literals: the coercing push turns
//! `"10"` into the integer 10.

use crate::common::{run_ok, run_ok_with};

#[test]
fn test_subtraction_operand_order() {
    // 10 then 3: the second pop is the left operand.
    assert_eq!(run_ok("\"10\"\"3\"-o#"), "7\n\n");
}

#[test]
fn test_addition() {
    assert_eq!(run_ok("\"10\"\"3\"+o#"), "13\n\n");
}

#[test]
fn test_multiplication() {
    assert_eq!(run_ok("\"10\"\"3\"×o#"), "30\n\n");
}

#[test]
fn test_true_division_is_float() {
    assert_eq!(run_ok("\"10\"\"4\"÷o#"), "2.5\n\n");
    assert_eq!(run_ok("\"10\"\"5\"÷o#"), "2.0\n\n");
}

#[test]
fn test_exponentiation() {
    assert_eq!(run_ok("\"2\"\"10\"*o#"), "1024\n\n");
}

#[test]
fn test_modulo() {
    assert_eq!(run_ok("\"10\"\"3\"%o#"), "1\n\n");
}

#[test]
fn test_comparisons() {
    assert_eq!(run_ok("\"10\"\"3\"go#"), "1\n\n");
    assert_eq!(run_ok("\"10\"\"3\"lo#"), "0\n\n");
    assert_eq!(run_ok("\"3\"\"3\"=o#"), "1\n\n");
    assert_eq!(run_ok("\"3\"\"4\"=o#"), "0\n\n");
}

#[test]
fn test_bitwise() {
    assert_eq!(run_ok("\"12\"\"10\"&o#"), "8\n\n");
    assert_eq!(run_ok("\"12\"\"10\"|o#"), "14\n\n");
    assert_eq!(run_ok("\"0\"~o#"), "-1\n\n");
}

#[test]
fn test_increment_decrement() {
    assert_eq!(run_ok("\"5\")o#"), "6\n\n");
    assert_eq!(run_ok("\"5\"(o#"), "4\n\n");
}

#[test]
fn test_boolean_negation() {
    assert_eq!(run_ok("\"0\"!o#"), "1\n\n");
    assert_eq!(run_ok("\"7\"!o#"), "0\n\n");
}

#[test]
fn test_chr() {
    assert_eq!(run_ok("\"72\"bo#"), "H\n\n");
}

#[test]
fn test_string_concatenation() {
    // Second pop comes first: "foo" then "bar" concatenate in push order.
    assert_eq!(run_ok("\"foo\"\"bar\"+o#"), "foobar\n\n");
}

#[test]
fn test_explode_then_coalesce_round_trips() {
    // Coalesce keeps popping while the top is an integer, and peek on an
    // empty stack yields integer zero, so a non-integer sentinel sits
    // below the code points.
    assert_eq!(run_ok("\"x\"\"Hi\"nBo#"), "Hi\nx \n");
}

#[test]
fn test_coalesce_assembles_in_pop_order() {
    // Bottom to top: a sentinel, then code points for 'o','l','l','e','H';
    // the top-most (most recently pushed) integer becomes the first
    // character.
    let tokens = ["72", "101", "108", "108", "111", "end"];
    assert_eq!(run_ok_with("Bo#", &tokens), "Hello\nend \n");
}

#[test]
fn test_count_pushes_height() {
    assert_eq!(run_ok("\"5\"\"6\"co#"), "2\n6 5 \n");
}

#[test]
fn test_duplicate_top() {
    assert_eq!(run_ok("\"5\"ro#"), "5\n5 \n");
}

#[test]
fn test_duplicate_on_empty_pushes_zero() {
    assert_eq!(run_ok("ro#"), "0\n\n");
}

#[test]
fn test_discard_aliases() {
    assert_eq!(run_ok("\"1\"\"2\"p o#"), "1\n\n");
    assert_eq!(run_ok("\"1\"\"2\"P o#"), "1\n\n");
}

#[test]
fn test_print_and_drain() {
    assert_eq!(run_ok("\"1\"\"2\"\"3\"O#"), "3 2 1 \n\n");
}

#[test]
fn test_rotations() {
    assert_eq!(run_ok("\"1\"\"2\"\"3\"uo#"), "1\n3 2 \n");
    assert_eq!(run_ok("\"1\"\"2\"\"3\"do#"), "2\n1 3 \n");
}

#[test]
fn test_switch_up_moves_cell_between_stacks() {
    assert_eq!(run_ok("\"1\"sUo#"), "1\n\n");
}

#[test]
fn test_replicate_is_deep() {
    // Pop from the replica, then read the untouched original above it.
    assert_eq!(run_ok("\"7\"RpUo#"), "7\n\n");
}

#[test]
fn test_stack_down_at_base_is_noop() {
    assert_eq!(run_ok("D\"5\"o#"), "5\n\n");
}

#[test]
fn test_switch_down_at_base_keeps_cell() {
    assert_eq!(run_ok("\"5\"wo#"), "5\n\n");
}

#[test]
fn test_initial_tokens_coerce_and_order() {
    // First listed token on top: pops 3 then 10, pushes 10 - 3.
    assert_eq!(run_ok_with("-o#", &["3", "10"]), "7\n\n");
    assert_eq!(run_ok_with("o#", &["laser"]), "laser\n\n");
}
