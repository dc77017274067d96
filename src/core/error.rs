//! Error types for the LaserLang interpreter.
//!
//! Every error here is fatal: the step loop stops on the first one and the
//! hosting process reports failure. There is no recovery path, matching the
//! language definition (peek on an empty stack is the only forgiving
//! operation, and it is not an error at all).

use std::fmt;

/// Result alias used throughout the interpreter.
pub type LaserResult<T> = Result<T, LaserError>;

/// Fatal interpreter error.
#[derive(Debug, Clone, PartialEq)]
pub enum LaserError {
    /// An operation popped from an empty active stack.
    StackUnderflow {
        /// The instruction glyph that performed the pop.
        operation: String,
    },

    /// An instruction-mode character outside the instruction alphabet.
    UnknownInstruction {
        glyph: char,
        x: usize,
        y: usize,
    },

    /// An operation was applied to a cell outside its domain
    /// (e.g. bitwise complement of a string).
    TypeMismatch {
        operation: String,
        operand: &'static str,
    },

    /// Division or modulo with a zero divisor.
    DivisionByZero {
        operation: String,
    },

    /// An integer outside the valid Unicode scalar range was converted
    /// to a character.
    BadCodePoint {
        value: i64,
    },
}

impl fmt::Display for LaserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaserError::StackUnderflow { operation } => {
                write!(f, "pop from empty stack in '{}'", operation)
            }
            LaserError::UnknownInstruction { glyph, x, y } => {
                write!(f, "unknown instruction '{}' at ({}, {})", glyph, x, y)
            }
            LaserError::TypeMismatch { operation, operand } => {
                write!(f, "'{}' cannot be applied to a {}", operation, operand)
            }
            LaserError::DivisionByZero { operation } => {
                write!(f, "zero divisor in '{}'", operation)
            }
            LaserError::BadCodePoint { value } => {
                write!(f, "{} is not a valid character code point", value)
            }
        }
    }
}

impl std::error::Error for LaserError {}
