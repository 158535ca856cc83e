//! Nested input values
//!
//! [`Value`] is the raw, not-yet-validated form of an array: a tree of
//! sequences whose leaves should be numbers. Nested Rust vectors and arrays
//! convert into it directly:
//!
//! ```
//! use ndnest_core::Value;
//!
//! let v = Value::from(vec![vec![1, 2, 3], vec![4, 5, 6]]);
//! assert_eq!(v.to_string(), "[[1, 2, 3], [4, 5, 6]]");
//! ```
//!
//! Leaves that are not numbers are representable so that input assembled at
//! runtime can be rejected with a precise error instead of failing to build.

use crate::coerce::Number;
use crate::error::{ArrayError, Result};
use std::fmt;

/// Raw nested value accepted by array construction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    Number(Number),
    Bool(bool),
    Text(String),
    Seq(Vec<Value>),
    Null,
}

/// Coarse classification of a [`Value`], used in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Number,
    Sequence,
    Bool,
    Text,
    Null,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueKind::Number => "number",
            ValueKind::Sequence => "sequence",
            ValueKind::Bool => "bool",
            ValueKind::Text => "string",
            ValueKind::Null => "null",
        })
    }
}

impl Value {
    /// Build a sequence value from any iterator of convertible items.
    pub fn seq<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::Seq(items.into_iter().map(Into::into).collect())
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Number(_) => ValueKind::Number,
            Value::Seq(_) => ValueKind::Sequence,
            Value::Bool(_) => ValueKind::Bool,
            Value::Text(_) => ValueKind::Text,
            Value::Null => ValueKind::Null,
        }
    }

    #[inline]
    pub fn is_seq(&self) -> bool {
        matches!(self, Value::Seq(_))
    }

    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Value::Seq(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Coerce a scalar leaf to `f64`.
    ///
    /// # Errors
    ///
    /// [`ArrayError::NotNumeric`] for sequences and non-numeric leaves.
    pub fn to_f64(&self) -> Result<f64> {
        self.as_number()
            .map(Number::to_f64)
            .ok_or(ArrayError::NotNumeric { kind: self.kind() })
    }
}

// Input depth is unbounded; children are torn down from a heap stack.
impl Drop for Value {
    fn drop(&mut self) {
        let Value::Seq(items) = self else { return };
        if items.is_empty() {
            return;
        }
        let mut stack = std::mem::take(items);
        while let Some(mut child) = stack.pop() {
            if let Value::Seq(grandchildren) = &mut child {
                stack.append(grandchildren);
            }
        }
    }
}

macro_rules! impl_value_from_number {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::Number(Number::from(v))
                }
            }
        )+
    };
}

impl_value_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::seq(items)
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Value::seq(items)
    }
}

impl<T: Clone + Into<Value>> From<&[T]> for Value {
    fn from(items: &[T]) -> Self {
        Value::seq(items.iter().cloned())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Text(s) => write!(f, "{s:?}"),
            Value::Null => f.write_str("null"),
            Value::Seq(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}
