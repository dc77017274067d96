//! Core layer: cell values, errors, and the stack-of-stacks memory.

pub mod error;
pub mod memory;
pub mod stack;
pub mod value;

pub use error::{LaserError, LaserResult};
pub use memory::Memory;
pub use stack::Stack;
pub use value::Value;
