//! Interpreter for LaserLang, a two-dimensional direction-based stack
//! language: source code is a rectangular character grid, an instruction
//! pointer walks it in one of four cardinal directions (wrapping at the
//! edges), and mirror glyphs redirect the flow. Memory is a stack of
//! stacks of dynamically-typed cells addressed through an active-stack
//! register.
//!
//! ```
//! use laserlang::{Board, Machine, MachineConfig};
//!
//! let board = Board::build("\"Hi\"#");
//! let config = MachineConfig { verbose: false, immediate_output: false };
//! let mut machine = Machine::new(board, config);
//! machine.run().unwrap();
//! assert_eq!(machine.output, "Hi \n");
//! ```

// Layer 0: core (no internal dependencies)
pub mod core;

// Layer 1: program representation
pub mod grid;

// Layer 2: routing and dispatch tables
pub mod mirror;
pub mod ops;

// Layer 3: the machine
pub mod vm;

pub use crate::core::error::{LaserError, LaserResult};
pub use crate::core::memory::Memory;
pub use crate::core::value::Value;
pub use crate::grid::{Board, Cursor, Direction};
pub use crate::vm::{Machine, MachineConfig, ParseMode, StepStatus};
