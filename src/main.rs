use std::env;
use std::fs;
use std::process;

use anyhow::{Context, Result};
use laserlang::{Board, Machine, MachineConfig};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut verbose = false;
    let mut positional: Vec<String> = Vec::new();
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "-v" | "--verbose" => verbose = true,
            "-h" | "--help" => {
                usage();
                return Ok(());
            }
            _ => positional.push(arg),
        }
    }

    let Some(path) = positional.first() else {
        usage();
        process::exit(1);
    };

    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read program '{}'", path))?;

    let config = MachineConfig { verbose, immediate_output: true };
    let mut machine = Machine::with_initial_stack(Board::build(&source), config, &positional[1..]);
    machine.run()?;
    Ok(())
}

fn usage() {
    println!("Usage: laser [-v] <program.lsr> [initial stack items...]");
    println!();
    println!("Options:");
    println!("  -v, --verbose   Print the grid and a per-step machine trace");
    println!("  -h, --help      Show this help");
    println!();
    println!("Trailing operands are pushed onto the base stack in reverse");
    println!("order, so the first listed item ends up on top.");
}
