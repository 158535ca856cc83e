//! Error types for array construction and arithmetic
//!
//! Every fallible operation in ndnest-core returns [`Result`], whose error
//! side is [`ArrayError`]. Construction failures are surfaced before an
//! [`NdArray`](crate::NdArray) exists, so no downstream operation can run on
//! an array whose shape was never validated.
//!
//! # Examples
//!
//! ```
//! use ndnest_core::{ArrayError, NdArray, Value};
//!
//! let ragged = Value::from(vec![vec![1, 2], vec![3]]);
//! match NdArray::new(ragged) {
//!     Err(ArrayError::InconsistentLength { depth, expected, got }) => {
//!         assert_eq!((depth, expected, got), (1, 2, 1));
//!     }
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

use crate::value::ValueKind;
use thiserror::Error;

/// Top-level error type for all array operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArrayError {
    /// The root value handed to construction was not a sequence
    #[error("expected a nested sequence, got a bare {kind}")]
    NotArray { kind: ValueKind },

    /// A terminal value inside the nested structure is not numeric
    #[error("array elements must be numeric, found {kind} at depth {depth}")]
    NonNumericLeaf { kind: ValueKind, depth: usize },

    /// Sibling sequences at the same depth differ in length
    #[error("inconsistent length at depth {depth}: expected {expected}, got {got}")]
    InconsistentLength {
        depth: usize,
        expected: usize,
        got: usize,
    },

    /// Scalars and sequences are mixed at the same depth
    #[error("mixed scalars and sequences at depth {depth}")]
    MixedNesting { depth: usize },

    /// Nesting is deeper than the configured maximum
    #[error("nesting exceeds the maximum depth of {limit}")]
    DepthLimitExceeded { limit: usize },

    /// A scalar operand is not an accepted numeric kind
    #[error("expected a numeric value, got {kind}")]
    NotNumeric { kind: ValueKind },

    /// An operator token outside the supported set
    #[error("unknown operator {0:?}")]
    UnknownOperator(String),

    /// Integer remainder with a zero divisor
    #[error("integer remainder by zero")]
    DivisionByZero,

    /// Axis index is not below the array's dimensionality
    #[error("axis {axis} out of range for array with {ndim} dimensions")]
    AxisOutOfRange { axis: usize, ndim: usize },

    /// Axis list is not a permutation of `0..ndim`
    #[error("{axes:?} is not a permutation of the {ndim} axes")]
    InvalidPermutation { axes: Vec<usize>, ndim: usize },

    /// Operand shapes differ
    #[error("shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch { expected: Vec<usize>, got: Vec<usize> },
}

/// Convenience alias used throughout ndnest-core.
pub type Result<T> = std::result::Result<T, ArrayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = ArrayError::InconsistentLength {
            depth: 1,
            expected: 3,
            got: 2,
        };
        assert_eq!(
            err.to_string(),
            "inconsistent length at depth 1: expected 3, got 2"
        );

        let err = ArrayError::AxisOutOfRange { axis: 4, ndim: 2 };
        assert_eq!(
            err.to_string(),
            "axis 4 out of range for array with 2 dimensions"
        );

        let err = ArrayError::NotArray {
            kind: ValueKind::Number,
        };
        assert_eq!(err.to_string(), "expected a nested sequence, got a bare number");
    }

    #[test]
    fn test_unknown_operator_quotes_token() {
        let err = ArrayError::UnknownOperator("^".into());
        assert_eq!(err.to_string(), "unknown operator \"^\"");
    }

    #[test]
    fn test_into_anyhow() {
        fn fails() -> anyhow::Result<()> {
            Err::<(), _>(ArrayError::DivisionByZero)?;
            Ok(())
        }
        let err = fails().unwrap_err();
        assert!(err.downcast_ref::<ArrayError>().is_some());
    }
}
