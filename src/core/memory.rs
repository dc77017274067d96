//! Stack-of-stacks memory for the LaserLang machine.
//!
//! Memory is an arena of stacks plus an active index. Stack 0 always
//! exists; stacks above it are created lazily by upward movement or
//! replication and never destroyed during a run. Moving down from stack 0
//! saturates (a defined no-op) rather than producing a negative index.

use super::error::LaserResult;
use super::stack::Stack;
use super::value::Value;

/// The machine's memory: an ordered arena of stacks and the index of the
/// one currently addressed by push/pop/peek.
#[derive(Clone)]
pub struct Memory {
    stacks: Vec<Stack>,
    active: usize,
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl Memory {
    /// One empty base stack, active.
    pub fn new() -> Self {
        Self { stacks: vec![Stack::new()], active: 0 }
    }

    /// Index of the active stack.
    #[inline]
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Total number of stacks in the arena.
    #[inline]
    pub fn stack_count(&self) -> usize {
        self.stacks.len()
    }

    /// The active stack, read-only.
    pub fn active_stack(&self) -> &Stack {
        &self.stacks[self.active]
    }

    /// Height of the active stack.
    #[inline]
    pub fn height(&self) -> usize {
        self.stacks[self.active].height()
    }

    /// Push onto the active stack, applying the numeric-string coercion.
    pub fn push(&mut self, value: Value) {
        self.stacks[self.active].push(value.coerced());
    }

    /// Pop the active stack's top cell; underflow is fatal.
    pub fn pop(&mut self, operation: char) -> LaserResult<Value> {
        self.stacks[self.active].pop(operation)
    }

    /// Peek at the active stack's top cell; integer zero when empty.
    pub fn peek(&self) -> Value {
        self.stacks[self.active].peek()
    }

    /// `U` - move the active index up, growing the arena on demand.
    pub fn stack_up(&mut self) {
        self.active += 1;
        if self.active == self.stacks.len() {
            self.stacks.push(Stack::new());
        }
    }

    /// `D` - move the active index down; no-op at stack 0.
    pub fn stack_down(&mut self) {
        self.active = self.active.saturating_sub(1);
    }

    /// `s` - migrate the top cell to the stack above, creating it on
    /// demand when the active stack is topmost.
    pub fn switch_up(&mut self, operation: char) -> LaserResult<()> {
        let cell = self.stacks[self.active].pop(operation)?;
        if self.active == self.stacks.len() - 1 {
            self.stacks.push(Stack::new());
        }
        self.stacks[self.active + 1].push(cell);
        Ok(())
    }

    /// `w` - migrate the top cell to the stack below. At stack 0 the cell
    /// stays where it was; the pop is still underflow-checked.
    pub fn switch_down(&mut self, operation: char) -> LaserResult<()> {
        let cell = self.stacks[self.active].pop(operation)?;
        let below = self.active.saturating_sub(1);
        self.stacks[below].push(cell);
        Ok(())
    }

    /// `u` - rotate the active stack's bottom cell to the top.
    pub fn rotate_up(&mut self, operation: char) -> LaserResult<()> {
        self.stacks[self.active].rotate_up(operation)
    }

    /// `d` - rotate the active stack's top cell to the bottom.
    pub fn rotate_down(&mut self, operation: char) -> LaserResult<()> {
        self.stacks[self.active].rotate_down(operation)
    }

    /// `R` - deep-copy the active stack and insert the copy at the active
    /// index. Existing stacks shift up; the active index now addresses the
    /// copy.
    pub fn replicate(&mut self) {
        let copy = self.stacks[self.active].clone();
        self.stacks.insert(self.active, copy);
    }

    /// Top-first rendering of the active stack for the verbose trace.
    pub fn active_repr(&self) -> String {
        format!("{:?}", self.stacks[self.active])
    }
}
