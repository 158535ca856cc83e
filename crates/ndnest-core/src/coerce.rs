//! Numeric coercion and the binary operator table
//!
//! Every accepted scalar kind ([`Number`]) widens to `f64`, and all array
//! arithmetic is expressed as a [`BinaryOp`] applied to two such values.
//!
//! Widening uses plain `as` conversion: 64-bit integers beyond 2^53 lose
//! precision and nothing is range-checked.

use crate::error::{ArrayError, Result};
use std::fmt;
use std::str::FromStr;

/// A scalar of any native integer or floating-point width.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Number {
    I64(i64),
    U64(u64),
    F64(f64),
    I8(i8),
    I16(i16),
    I32(i32),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    Usize(usize),
    F32(f32),
}

impl Number {
    /// Widen to the canonical floating representation.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::I8(v) => v as f64,
            Number::I16(v) => v as f64,
            Number::I32(v) => v as f64,
            Number::I64(v) => v as f64,
            Number::Isize(v) => v as f64,
            Number::U8(v) => v as f64,
            Number::U16(v) => v as f64,
            Number::U32(v) => v as f64,
            Number::U64(v) => v as f64,
            Number::Usize(v) => v as f64,
            Number::F32(v) => v as f64,
            Number::F64(v) => v,
        }
    }
}

macro_rules! impl_number_from {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$ty> for Number {
                fn from(v: $ty) -> Self {
                    Number::$variant(v)
                }
            }
        )+
    };
}

impl_number_from!(
    i8 => I8, i16 => I16, i32 => I32, i64 => I64, isize => Isize,
    u8 => U8, u16 => U16, u32 => U32, u64 => U64, usize => Usize,
    f32 => F32, f64 => F64,
);

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::I8(v) => write!(f, "{v}"),
            Number::I16(v) => write!(f, "{v}"),
            Number::I32(v) => write!(f, "{v}"),
            Number::I64(v) => write!(f, "{v}"),
            Number::Isize(v) => write!(f, "{v}"),
            Number::U8(v) => write!(f, "{v}"),
            Number::U16(v) => write!(f, "{v}"),
            Number::U32(v) => write!(f, "{v}"),
            Number::U64(v) => write!(f, "{v}"),
            Number::Usize(v) => write!(f, "{v}"),
            Number::F32(v) => write!(f, "{v}"),
            Number::F64(v) => write!(f, "{v}"),
        }
    }
}

/// Binary operators supported by elementwise and scalar arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    /// Real division truncated toward zero (not floored).
    FloorDiv,
    /// Remainder of the truncated integer operands.
    Rem,
    Pow,
}

impl BinaryOp {
    /// Apply the operator to two widened operands.
    ///
    /// Division follows IEEE-754, so `x / 0.0` is infinite or NaN. Only
    /// [`BinaryOp::Rem`] can fail, because it works on integers.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndnest_core::BinaryOp;
    ///
    /// assert_eq!(BinaryOp::FloorDiv.apply(-7.0, 2.0).unwrap(), -3.0);
    /// assert_eq!(BinaryOp::Rem.apply(7.9, 3.2).unwrap(), 1.0);
    /// assert!(BinaryOp::Rem.apply(1.0, 0.5).is_err());
    /// ```
    pub fn apply(self, a: f64, b: f64) -> Result<f64> {
        Ok(match self {
            BinaryOp::Add => a + b,
            BinaryOp::Sub => a - b,
            BinaryOp::Mul => a * b,
            BinaryOp::Div => a / b,
            BinaryOp::FloorDiv => (a / b).trunc(),
            BinaryOp::Rem => {
                let lhs = a.trunc() as i64;
                let rhs = b.trunc() as i64;
                if rhs == 0 {
                    return Err(ArrayError::DivisionByZero);
                }
                lhs.wrapping_rem(rhs) as f64
            }
            BinaryOp::Pow => a.powf(b),
        })
    }

    /// Neutral starting value for folds, where one exists.
    pub fn identity(self) -> Option<f64> {
        match self {
            BinaryOp::Add => Some(0.0),
            BinaryOp::Mul => Some(1.0),
            _ => None,
        }
    }

    /// Canonical token for this operator.
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::FloorDiv => "//",
            BinaryOp::Rem => "%",
            BinaryOp::Pow => "pow",
        }
    }
}

impl FromStr for BinaryOp {
    type Err = ArrayError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "+" | "add" | "sum" => Ok(BinaryOp::Add),
            "-" | "sub" => Ok(BinaryOp::Sub),
            "*" | "mul" => Ok(BinaryOp::Mul),
            "/" | "div" => Ok(BinaryOp::Div),
            "//" | "floordiv" => Ok(BinaryOp::FloorDiv),
            "%" | "rem" => Ok(BinaryOp::Rem),
            "pow" => Ok(BinaryOp::Pow),
            other => Err(ArrayError::UnknownOperator(other.to_string())),
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
