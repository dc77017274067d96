//! The LaserLang machine: step loop, parse modes, dispatch, and output.
//!
//! One machine owns one board, one cursor, one memory, the current parse
//! mode, and the in-progress literal buffer. Each `step` is atomic: it
//! fetches the glyph under the cursor, routes or dispatches it, then
//! advances the cursor with wraparound.
//!
//! Output is appended to an owned buffer in emission order; with
//! `immediate_output` set it is simultaneously written to stdout. The
//! verbose trace goes through the same channel, interleaved with program
//! output in emission order.

use std::io::{self, Write};

use crate::core::error::{LaserError, LaserResult};
use crate::core::memory::Memory;
use crate::core::value::{code_to_char, Value};
use crate::grid::{Board, Cursor};
use crate::mirror;
use crate::ops::{self, Instruction, NullaryOp, StackOp};

/// How the next fetched character is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    /// Characters are instructions.
    Instruction,
    /// Accumulating a quoted string; `"` terminates. Mirrors still redirect.
    Str,
    /// Accumulating a raw literal; `` ` `` terminates. Mirrors are text.
    Raw,
}

impl ParseMode {
    /// The character that closes this literal mode.
    fn terminator(self) -> char {
        match self {
            ParseMode::Str => '"',
            ParseMode::Raw => '`',
            ParseMode::Instruction => '\0',
        }
    }
}

/// Outcome of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Running,
    /// The terminate instruction was reached.
    Finished,
}

/// Machine configuration.
#[derive(Debug, Clone)]
pub struct MachineConfig {
    /// Emit a per-step diagnostic trace (grid, fetched glyph, active stack).
    pub verbose: bool,
    /// Write output to stdout as it is produced, in addition to buffering.
    pub immediate_output: bool,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self { verbose: false, immediate_output: true }
    }
}

/// One self-contained LaserLang execution instance.
pub struct Machine {
    board: Board,
    cursor: Cursor,
    memory: Memory,
    mode: ParseMode,
    literal: String,
    config: MachineConfig,
    /// Everything printed so far, in emission order.
    pub output: String,
}

impl Machine {
    pub fn new(board: Board, config: MachineConfig) -> Self {
        Machine::with_initial_stack(board, config, &[])
    }

    /// Build a machine with an initial-stack payload. Tokens are pushed in
    /// reverse order so the first listed token ends up on top, through the
    /// coercing push (numeric-looking tokens become integers).
    pub fn with_initial_stack(board: Board, config: MachineConfig, tokens: &[String]) -> Self {
        let cursor = Cursor::new(&board);
        let mut machine = Machine {
            board,
            cursor,
            memory: Memory::new(),
            mode: ParseMode::Instruction,
            literal: String::new(),
            config,
            output: String::new(),
        };
        for token in tokens.iter().rev() {
            machine.memory.push(Value::Str(token.clone()));
        }
        if machine.config.verbose {
            let grid = machine.board.to_string();
            machine.emit(&grid);
            machine.trace();
        }
        machine
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn parse_mode(&self) -> ParseMode {
        self.mode
    }

    /// Run until the terminate instruction or a fatal error. A program
    /// without a terminate instruction runs forever; that is a property
    /// of the language, not a bug.
    pub fn run(&mut self) -> LaserResult<()> {
        loop {
            if self.step()? == StepStatus::Finished {
                return Ok(());
            }
        }
    }

    /// Execute one step: fetch, route or dispatch, advance.
    pub fn step(&mut self) -> LaserResult<StepStatus> {
        let glyph = self.board.char_at(self.cursor.x, self.cursor.y);
        if self.config.verbose {
            self.emit(&format!("{}\n", glyph));
        }

        // Raw literals swallow everything, mirrors included; in the other
        // two modes mirror glyphs take priority over mode dispatch, so a
        // mirror inside a quoted string still redirects the cursor.
        let status = if self.mode == ParseMode::Raw {
            self.accumulate(glyph);
            StepStatus::Running
        } else if mirror::is_mirror(glyph) {
            let top_is_zero = self.memory.peek().is_zero();
            self.cursor.direction = mirror::route(glyph, self.cursor.direction, top_is_zero);
            StepStatus::Running
        } else if self.mode == ParseMode::Str {
            self.accumulate(glyph);
            StepStatus::Running
        } else {
            self.dispatch(glyph)?
        };

        self.cursor.advance(self.board.width(), self.board.height());
        if self.config.verbose {
            self.trace();
        }
        Ok(status)
    }

    /// Literal accumulation: the mode's own terminator pushes the buffer
    /// as one string cell and returns to instruction mode.
    fn accumulate(&mut self, glyph: char) {
        if glyph == self.mode.terminator() {
            let literal = std::mem::take(&mut self.literal);
            self.memory.push(Value::Str(literal));
            self.mode = ParseMode::Instruction;
        } else {
            self.literal.push(glyph);
        }
    }

    fn dispatch(&mut self, glyph: char) -> LaserResult<StepStatus> {
        let Some(instruction) = ops::classify(glyph) else {
            return Err(LaserError::UnknownInstruction {
                glyph,
                x: self.cursor.x,
                y: self.cursor.y,
            });
        };
        match instruction {
            Instruction::BeginString => self.mode = ParseMode::Str,
            Instruction::BeginRaw => self.mode = ParseMode::Raw,
            Instruction::Terminate => {
                self.print_stack(glyph)?;
                return Ok(StepStatus::Finished);
            }
            Instruction::Nullary(op) => self.nullary(op, glyph)?,
            Instruction::Unary(op) => {
                let value = self.memory.pop(glyph)?;
                let result = op.apply(value)?;
                self.memory.push(result);
            }
            Instruction::Binary(op) => {
                let a = self.memory.pop(glyph)?;
                let b = self.memory.pop(glyph)?;
                let result = op.apply(b, a)?;
                self.memory.push(result);
            }
            Instruction::Stack(op) => match op {
                StackOp::Up => self.memory.stack_up(),
                StackOp::Down => self.memory.stack_down(),
                StackOp::RotateUp => self.memory.rotate_up(glyph)?,
                StackOp::RotateDown => self.memory.rotate_down(glyph)?,
                StackOp::SwitchUp => self.memory.switch_up(glyph)?,
                StackOp::SwitchDown => self.memory.switch_down(glyph)?,
            },
        }
        Ok(StepStatus::Running)
    }

    fn nullary(&mut self, op: NullaryOp, glyph: char) -> LaserResult<()> {
        match op {
            NullaryOp::Count => {
                let height = self.memory.height();
                self.memory.push(Value::Int(height as i64));
            }
            NullaryOp::Duplicate => {
                let top = self.memory.peek();
                self.memory.push(top);
            }
            NullaryOp::Replicate => self.memory.replicate(),
            NullaryOp::Discard => {
                self.memory.pop(glyph)?;
            }
            NullaryOp::PrintTop => {
                let value = self.memory.pop(glyph)?;
                self.emit(&format!("{}\n", value));
            }
            NullaryOp::PrintStack => self.print_stack(glyph)?,
            NullaryOp::Explode => match self.memory.pop(glyph)? {
                Value::Str(s) => {
                    // Reverse push order leaves the first character on top.
                    for c in s.chars().rev() {
                        self.memory.push(Value::Int(c as i64));
                    }
                }
                value => {
                    return Err(LaserError::TypeMismatch {
                        operation: glyph.to_string(),
                        operand: value.type_name(),
                    })
                }
            },
            NullaryOp::Coalesce => {
                // Characters assemble in pop order, so the most recently
                // pushed code point becomes the first character. On an
                // empty stack the peek yields integer zero and the pop
                // underflows.
                let mut assembled = String::new();
                while let Value::Int(_) = self.memory.peek() {
                    if let Value::Int(code) = self.memory.pop(glyph)? {
                        assembled.push(code_to_char(code)?);
                    }
                }
                self.memory.push(Value::Str(assembled));
            }
            NullaryOp::Nop => {}
        }
        Ok(())
    }

    /// Drain-print: every cell space-terminated, then one newline. The
    /// newline is emitted even when the stack is already empty.
    fn print_stack(&mut self, glyph: char) -> LaserResult<()> {
        while self.memory.height() > 0 {
            let value = self.memory.pop(glyph)?;
            self.emit(&format!("{} ", value));
        }
        self.emit("\n");
        Ok(())
    }

    fn emit(&mut self, text: &str) {
        self.output.push_str(text);
        if self.config.immediate_output {
            print!("{}", text);
            let _ = io::stdout().flush();
        }
    }

    fn trace(&mut self) {
        let line = format!(
            "addr: {} - stack: {}\n",
            self.memory.active_index(),
            self.memory.active_repr()
        );
        self.emit(&line);
    }
}
