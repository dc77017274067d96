//! Instruction classification and dispatch descriptors.
//!
//! The instruction alphabet is closed and finite, so classification is a
//! single match from glyph to a tagged descriptor carrying the operation's
//! arity class. The machine evaluates the descriptor; the value-level
//! arithmetic lives on [`Value`](crate::core::value::Value).

use crate::core::error::LaserResult;
use crate::core::value::Value;

/// Operations that consume no operands from the dispatcher's point of
/// view (they may still pop internally, e.g. the print instructions).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullaryOp {
    /// `c` - push the active stack's height.
    Count,
    /// `r` - push a copy of the top cell (integer zero on an empty stack).
    Duplicate,
    /// `R` - replicate the active stack.
    Replicate,
    /// `p` / `P` - pop and discard.
    Discard,
    /// `o` - pop and print the top cell with a trailing newline.
    PrintTop,
    /// `O` - pop and print every cell space-separated, then a newline.
    PrintStack,
    /// `n` - pop a string, push its characters' code points (first char on top).
    Explode,
    /// `B` - pop integers while the top is one, push them as a string.
    Coalesce,
    /// Space - no operation.
    Nop,
}

/// Operations that pop one cell and push one result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Decrement,
    Increment,
    Complement,
    Negate,
    Chr,
}

impl UnaryOp {
    pub fn apply(self, value: Value) -> LaserResult<Value> {
        match self {
            UnaryOp::Decrement => value.decrement(),
            UnaryOp::Increment => value.increment(),
            UnaryOp::Complement => value.complement(),
            UnaryOp::Negate => value.negate(),
            UnaryOp::Chr => value.to_char(),
        }
    }
}

/// Operations that pop two cells and push one result. The first pop is
/// the right operand, the second the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Gt,
    Lt,
    Eq,
    And,
    Or,
    Mod,
}

impl BinaryOp {
    /// Evaluate `f(b, a)` where `a` was popped first and `b` second.
    pub fn apply(self, b: Value, a: Value) -> LaserResult<Value> {
        match self {
            BinaryOp::Add => b.add(a),
            BinaryOp::Sub => b.sub(a),
            BinaryOp::Mul => b.mul(a),
            BinaryOp::Div => b.div(a),
            BinaryOp::Pow => b.pow(a),
            BinaryOp::Gt => b.gt(a),
            BinaryOp::Lt => b.lt(a),
            BinaryOp::Eq => b.eq_cells(a),
            BinaryOp::And => b.bitand(a),
            BinaryOp::Or => b.bitor(a),
            BinaryOp::Mod => b.rem(a),
        }
    }
}

/// Memory-level stack management operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackOp {
    /// `U` - move the active index up.
    Up,
    /// `D` - move the active index down.
    Down,
    /// `u` - rotate the bottom cell to the top.
    RotateUp,
    /// `d` - rotate the top cell to the bottom.
    RotateDown,
    /// `s` - migrate the top cell one stack up.
    SwitchUp,
    /// `w` - migrate the top cell one stack down.
    SwitchDown,
}

/// A classified instruction-mode glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Nullary(NullaryOp),
    Unary(UnaryOp),
    Binary(BinaryOp),
    Stack(StackOp),
    /// `"` - enter quoted-string mode.
    BeginString,
    /// `` ` `` - enter raw-literal mode.
    BeginRaw,
    /// `#` - drain-print the active stack and halt with success.
    Terminate,
}

/// Classify an instruction-mode glyph. `None` is the fatal
/// unknown-instruction case; mirrors are routed before classification
/// and never reach here.
pub fn classify(glyph: char) -> Option<Instruction> {
    use Instruction::{Binary, Nullary, Stack, Unary};
    Some(match glyph {
        '"' => Instruction::BeginString,
        '`' => Instruction::BeginRaw,
        '#' => Instruction::Terminate,

        'c' => Nullary(NullaryOp::Count),
        'r' => Nullary(NullaryOp::Duplicate),
        'R' => Nullary(NullaryOp::Replicate),
        'p' | 'P' => Nullary(NullaryOp::Discard),
        'o' => Nullary(NullaryOp::PrintTop),
        'O' => Nullary(NullaryOp::PrintStack),
        'n' => Nullary(NullaryOp::Explode),
        'B' => Nullary(NullaryOp::Coalesce),
        ' ' => Nullary(NullaryOp::Nop),

        '(' => Unary(UnaryOp::Decrement),
        ')' => Unary(UnaryOp::Increment),
        '~' => Unary(UnaryOp::Complement),
        '!' => Unary(UnaryOp::Negate),
        'b' => Unary(UnaryOp::Chr),

        '+' => Binary(BinaryOp::Add),
        '-' => Binary(BinaryOp::Sub),
        '×' => Binary(BinaryOp::Mul),
        '÷' => Binary(BinaryOp::Div),
        '*' => Binary(BinaryOp::Pow),
        'g' => Binary(BinaryOp::Gt),
        'l' => Binary(BinaryOp::Lt),
        '=' => Binary(BinaryOp::Eq),
        '&' => Binary(BinaryOp::And),
        '|' => Binary(BinaryOp::Or),
        '%' => Binary(BinaryOp::Mod),

        'U' => Stack(StackOp::Up),
        'D' => Stack(StackOp::Down),
        'u' => Stack(StackOp::RotateUp),
        'd' => Stack(StackOp::RotateDown),
        's' => Stack(StackOp::SwitchUp),
        'w' => Stack(StackOp::SwitchDown),

        _ => return None,
    })
}
