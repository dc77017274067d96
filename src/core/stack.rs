//! A single LaserLang stack of cells.
//!
//! The top is the most recently pushed cell. Pop underflow is fatal and
//! carries the glyph of the instruction that caused it; peek is total and
//! yields integer zero on an empty stack, which loop idioms rely on to
//! test stack height.

use std::fmt;

use super::error::{LaserError, LaserResult};
use super::value::Value;

/// An ordered sequence of cells, last element on top.
#[derive(Clone, Default)]
pub struct Stack {
    cells: Vec<Value>,
}

impl Stack {
    pub fn new() -> Self {
        Self { cells: Vec::new() }
    }

    /// Number of cells on the stack.
    #[inline]
    pub fn height(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Append a cell. Coercion policy lives in [`Memory`](super::memory::Memory);
    /// this is the raw append used for cell migration between stacks.
    #[inline]
    pub fn push(&mut self, value: Value) {
        self.cells.push(value);
    }

    /// Remove and return the top cell; underflow is fatal.
    pub fn pop(&mut self, operation: char) -> LaserResult<Value> {
        self.cells.pop().ok_or_else(|| LaserError::StackUnderflow {
            operation: operation.to_string(),
        })
    }

    /// Top cell without removal; integer zero when empty.
    pub fn peek(&self) -> Value {
        self.cells.last().cloned().unwrap_or(Value::Int(0))
    }

    /// Move the bottom cell to the top.
    pub fn rotate_up(&mut self, operation: char) -> LaserResult<()> {
        if self.cells.is_empty() {
            return Err(LaserError::StackUnderflow { operation: operation.to_string() });
        }
        let bottom = self.cells.remove(0);
        self.cells.push(bottom);
        Ok(())
    }

    /// Move the top cell to the bottom.
    pub fn rotate_down(&mut self, operation: char) -> LaserResult<()> {
        let top = self.pop(operation)?;
        self.cells.insert(0, top);
        Ok(())
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.cells
    }
}

impl fmt::Debug for Stack {
    /// Renders top-first, the orientation the verbose trace uses.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let top_first: Vec<&Value> = self.cells.iter().rev().collect();
        write!(f, "{:?}", top_first)
    }
}
