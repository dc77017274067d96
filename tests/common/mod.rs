//! Shared test utilities for LaserLang integration tests.
//!
//! All helpers build quiet machines (no verbose trace, no stdout
//! mirroring) so assertions run byte-for-byte against the buffered
//! output.

use laserlang::{Board, LaserError, Machine, MachineConfig};

fn quiet_config() -> MachineConfig {
    MachineConfig { verbose: false, immediate_output: false }
}

/// Build a machine for a program with an empty initial stack.
pub fn machine(source: &str) -> Machine {
    Machine::new(Board::build(source), quiet_config())
}

/// Build a machine with an initial-stack payload (first token on top).
pub fn machine_with(source: &str, tokens: &[&str]) -> Machine {
    let tokens: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
    Machine::with_initial_stack(Board::build(source), quiet_config(), &tokens)
}

/// Run a program expected to terminate successfully; return its output.
pub fn run_ok(source: &str) -> String {
    let mut m = machine(source);
    m.run().expect("program should terminate successfully");
    m.output
}

/// Run a program with an initial-stack payload; return its output.
pub fn run_ok_with(source: &str, tokens: &[&str]) -> String {
    let mut m = machine_with(source, tokens);
    m.run().expect("program should terminate successfully");
    m.output
}

/// Run a program expected to fail; return the error and any output
/// produced before it.
pub fn run_err(source: &str) -> (LaserError, String) {
    let mut m = machine(source);
    let err = m.run().expect_err("program should fail");
    (err, m.output)
}
