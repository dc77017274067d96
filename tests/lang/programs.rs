//! End-to-end programs: grids that exercise mirrors, wraparound, string
//! capture, and termination together.

use laserlang::StepStatus;

use crate::common::{machine, run_ok, run_ok_with};

#[test]
fn test_minimal_string_and_terminate() {
    // Drained stacks print space-terminated with one final newline.
    assert_eq!(run_ok("\"Hi\"#"), "Hi \n");
}

#[test]
fn test_terminate_on_empty_stack_prints_newline() {
    assert_eq!(run_ok("#"), "\n");
}

#[test]
fn test_hello_world_through_mirrors() {
    // The cursor bounces through mirrors while a string literal is open,
    // capturing characters from several rows and directions.
    let source = r#"\   /\
\"Hel/
/dlrow\
"   \ /
#"#;
    assert_eq!(run_ok(source), "Hello world \n");
}

#[test]
fn test_funnel_inside_string_passes_aligned_flow() {
    // '>' is a mirror even in string mode: it is not captured, and an
    // eastward cursor passes straight through it.
    assert_eq!(run_ok("\"a>b\"#"), "ab \n");
}

#[test]
fn test_conditional_mirror_redirects_on_zero_top() {
    // Empty stack peeks as zero, so the corner redirects North and the
    // cursor wraps to the bottom row's terminate instruction.
    let source = "⌞\"A\"#\n#";
    assert_eq!(run_ok(source), "\n");
}

#[test]
fn test_conditional_mirror_passes_on_nonzero_top() {
    let source = "⌞\"A\"#\n#";
    assert_eq!(run_ok_with(source, &["1"]), "A 1 \n");
}

#[test]
fn test_vertical_redirect() {
    assert_eq!(run_ok("v\n#"), "\n");
}

#[test]
fn test_cursor_stays_in_bounds_every_step() {
    let source = r#"\   /\
\"Hel/
/dlrow\
"   \ /
#"#;
    let mut m = machine(source);
    loop {
        let status = m.step().unwrap();
        let cursor = m.cursor();
        assert!(cursor.x < m.board().width());
        assert!(cursor.y < m.board().height());
        if status == StepStatus::Finished {
            break;
        }
    }
}

#[test]
fn test_arithmetic_pipeline() {
    // ((10 - 3) + 1) printed, then the empty stack drained.
    assert_eq!(run_ok("\"10\"\"3\"-)o#"), "8\n\n");
}
