//! Cell values for LaserLang: a tagged union of integer, float, and string.
//!
//! A cell's type is fixed at creation. Operations discriminate on the
//! variant and fail with a [`LaserError::TypeMismatch`] when an operand is
//! outside their domain. Mixed integer/float arithmetic promotes to float.
//!
//! Binary operators receive the *second*-popped cell as the left operand:
//! pushing 10 then 3 and subtracting yields 7, not -7.

use std::fmt;

use super::error::{LaserError, LaserResult};

/// A dynamically-typed stack cell.
#[derive(Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
}

impl Value {
    /// Variant name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
        }
    }

    /// Apply the push-time coercion rule: a string whose entire contents
    /// parse as an integer becomes an integer cell.
    pub fn coerced(self) -> Value {
        match self {
            Value::Str(s) => match s.parse::<i64>() {
                Ok(n) => Value::Int(n),
                Err(_) => Value::Str(s),
            },
            v => v,
        }
    }

    /// Numeric zero test, used by conditional mirrors. Strings are never
    /// zero, whatever their contents.
    pub fn is_zero(&self) -> bool {
        match self {
            Value::Int(n) => *n == 0,
            Value::Float(x) => *x == 0.0,
            Value::Str(_) => false,
        }
    }

    /// Truthiness: zero and the empty string are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Int(n) => *n != 0,
            Value::Float(x) => *x != 0.0,
            Value::Str(s) => !s.is_empty(),
        }
    }

    fn as_number(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(x) => Some(*x),
            Value::Str(_) => None,
        }
    }

    fn mismatch(operation: char, operand: &Value) -> LaserError {
        LaserError::TypeMismatch {
            operation: operation.to_string(),
            operand: operand.type_name(),
        }
    }

    // ------------------------------------------------------------------
    // Unary operations
    // ------------------------------------------------------------------

    /// `(` - decrement.
    pub fn decrement(self) -> LaserResult<Value> {
        match self {
            Value::Int(n) => Ok(Value::Int(n.wrapping_sub(1))),
            Value::Float(x) => Ok(Value::Float(x - 1.0)),
            v @ Value::Str(_) => Err(Value::mismatch('(', &v)),
        }
    }

    /// `)` - increment.
    pub fn increment(self) -> LaserResult<Value> {
        match self {
            Value::Int(n) => Ok(Value::Int(n.wrapping_add(1))),
            Value::Float(x) => Ok(Value::Float(x + 1.0)),
            v @ Value::Str(_) => Err(Value::mismatch(')', &v)),
        }
    }

    /// `~` - bitwise complement.
    pub fn complement(self) -> LaserResult<Value> {
        match self {
            Value::Int(n) => Ok(Value::Int(!n)),
            v => Err(Value::mismatch('~', &v)),
        }
    }

    /// `!` - boolean negation: 1 for a falsy cell, 0 otherwise. Total.
    pub fn negate(self) -> LaserResult<Value> {
        Ok(Value::Int(if self.is_truthy() { 0 } else { 1 }))
    }

    /// `b` - integer to one-character string.
    pub fn to_char(self) -> LaserResult<Value> {
        match self {
            Value::Int(n) => Ok(Value::Str(code_to_char(n)?.to_string())),
            v => Err(Value::mismatch('b', &v)),
        }
    }

    // ------------------------------------------------------------------
    // Binary operations: `self` is the second-popped (left) operand
    // ------------------------------------------------------------------

    /// `+` - addition; string + string concatenates, left operand first.
    pub fn add(self, rhs: Value) -> LaserResult<Value> {
        match (self, rhs) {
            (Value::Int(b), Value::Int(a)) => Ok(Value::Int(b.wrapping_add(a))),
            (Value::Str(b), Value::Str(a)) => Ok(Value::Str(b + &a)),
            (b, a) => numeric_pair('+', b, a).map(|(b, a)| Value::Float(b + a)),
        }
    }

    /// `-` - subtraction.
    pub fn sub(self, rhs: Value) -> LaserResult<Value> {
        match (self, rhs) {
            (Value::Int(b), Value::Int(a)) => Ok(Value::Int(b.wrapping_sub(a))),
            (b, a) => numeric_pair('-', b, a).map(|(b, a)| Value::Float(b - a)),
        }
    }

    /// `×` - multiplication; a string times an integer repeats it.
    pub fn mul(self, rhs: Value) -> LaserResult<Value> {
        match (self, rhs) {
            (Value::Int(b), Value::Int(a)) => Ok(Value::Int(b.wrapping_mul(a))),
            (Value::Str(s), Value::Int(n)) | (Value::Int(n), Value::Str(s)) => {
                Ok(Value::Str(s.repeat(n.max(0) as usize)))
            }
            (b, a) => numeric_pair('×', b, a).map(|(b, a)| Value::Float(b * a)),
        }
    }

    /// `÷` - true division; the result is always a float.
    pub fn div(self, rhs: Value) -> LaserResult<Value> {
        let (b, a) = numeric_pair('÷', self, rhs)?;
        if a == 0.0 {
            return Err(LaserError::DivisionByZero { operation: "÷".to_string() });
        }
        Ok(Value::Float(b / a))
    }

    /// `*` - exponentiation. Integer base and non-negative integer exponent
    /// stay integer (wrapping); a negative exponent promotes to float.
    pub fn pow(self, rhs: Value) -> LaserResult<Value> {
        match (self, rhs) {
            (Value::Int(b), Value::Int(a)) if a >= 0 => {
                let exp = u32::try_from(a).unwrap_or(u32::MAX);
                Ok(Value::Int(b.wrapping_pow(exp)))
            }
            (Value::Int(b), Value::Int(a)) => {
                let exp = i32::try_from(a).unwrap_or(i32::MIN);
                Ok(Value::Float((b as f64).powi(exp)))
            }
            (b, a) => numeric_pair('*', b, a).map(|(b, a)| Value::Float(b.powf(a))),
        }
    }

    /// `g` - greater-than: 1 if `b > a`.
    pub fn gt(self, rhs: Value) -> LaserResult<Value> {
        match (self, rhs) {
            (Value::Str(b), Value::Str(a)) => Ok(Value::Int((b > a) as i64)),
            (b, a) => numeric_pair('g', b, a).map(|(b, a)| Value::Int((b > a) as i64)),
        }
    }

    /// `l` - less-than: 1 if `b < a`.
    pub fn lt(self, rhs: Value) -> LaserResult<Value> {
        match (self, rhs) {
            (Value::Str(b), Value::Str(a)) => Ok(Value::Int((b < a) as i64)),
            (b, a) => numeric_pair('l', b, a).map(|(b, a)| Value::Int((b < a) as i64)),
        }
    }

    /// `=` - equality: 1 or 0. Integer and float compare numerically;
    /// a string never equals a number. Total.
    pub fn eq_cells(self, rhs: Value) -> LaserResult<Value> {
        let equal = match (&self, &rhs) {
            (Value::Str(b), Value::Str(a)) => b == a,
            (b, a) => match (b.as_number(), a.as_number()) {
                (Some(b), Some(a)) => b == a,
                _ => false,
            },
        };
        Ok(Value::Int(equal as i64))
    }

    /// `&` - bitwise AND.
    pub fn bitand(self, rhs: Value) -> LaserResult<Value> {
        match (self, rhs) {
            (Value::Int(b), Value::Int(a)) => Ok(Value::Int(b & a)),
            (Value::Int(_), a) => Err(Value::mismatch('&', &a)),
            (b, _) => Err(Value::mismatch('&', &b)),
        }
    }

    /// `|` - bitwise OR.
    pub fn bitor(self, rhs: Value) -> LaserResult<Value> {
        match (self, rhs) {
            (Value::Int(b), Value::Int(a)) => Ok(Value::Int(b | a)),
            (Value::Int(_), a) => Err(Value::mismatch('|', &a)),
            (b, _) => Err(Value::mismatch('|', &b)),
        }
    }

    /// `%` - modulo, `b % a`.
    pub fn rem(self, rhs: Value) -> LaserResult<Value> {
        match (self, rhs) {
            (Value::Int(_), Value::Int(0)) => {
                Err(LaserError::DivisionByZero { operation: "%".to_string() })
            }
            (Value::Int(b), Value::Int(a)) => Ok(Value::Int(b.wrapping_rem(a))),
            (b, a) => {
                let (b, a) = numeric_pair('%', b, a)?;
                if a == 0.0 {
                    return Err(LaserError::DivisionByZero { operation: "%".to_string() });
                }
                Ok(Value::Float(b % a))
            }
        }
    }
}

/// Convert an integer cell's value to a character, failing on code points
/// outside the Unicode scalar range.
pub fn code_to_char(code: i64) -> LaserResult<char> {
    u32::try_from(code)
        .ok()
        .and_then(char::from_u32)
        .ok_or(LaserError::BadCodePoint { value: code })
}

fn numeric_pair(operation: char, b: Value, a: Value) -> LaserResult<(f64, f64)> {
    let bn = b.as_number().ok_or_else(|| Value::mismatch(operation, &b))?;
    let an = a.as_number().ok_or_else(|| Value::mismatch(operation, &a))?;
    Ok((bn, an))
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            // Integral floats keep their fractional marker ("2.0", not "2"),
            // so division results are distinguishable in program output.
            Value::Float(x) if x.is_finite() && x.fract() == 0.0 && x.abs() < 1e16 => {
                write!(f, "{:.1}", x)
            }
            Value::Float(x) => write!(f, "{}", x),
            Value::Str(s) => write!(f, "{}", s),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{:?}", s),
            v => write!(f, "{}", v),
        }
    }
}
