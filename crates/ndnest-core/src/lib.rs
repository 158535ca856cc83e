//! # ndnest-core
//!
//! Dense N-dimensional numeric arrays built from nested sequences.
//!
//! This crate provides the building blocks of ndnest:
//!
//! - **Nested input values** ([`Value`]) with conversions from nested Rust
//!   vectors and arrays
//! - **Shape inference** ([`infer_shape`]) that rejects ragged and
//!   non-numeric input
//! - **Numeric coercion** ([`Number`], [`BinaryOp`]) widening every native
//!   integer and float width to `f64`
//! - **Dense arrays** ([`NdArray`]) with element-wise arithmetic, axis
//!   transposition and axis-wise reduction
//!
//! ## Quick Start
//!
//! ```
//! use ndnest_core::NdArray;
//!
//! let a = NdArray::new(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
//! assert_eq!(a.shape(), &[2, 3]);
//! assert_eq!(a.ndim(), 2);
//! assert_eq!(a.sum(), 21.0);
//! ```
//!
//! ## Shape Inference
//!
//! Every sequence at a given depth must have the same length, and every
//! leaf must be a number:
//!
//! ```
//! use ndnest_core::{ArrayError, NdArray, Value};
//!
//! let ragged = NdArray::new(vec![vec![1, 2, 3], vec![4, 5]]);
//! assert!(matches!(ragged, Err(ArrayError::InconsistentLength { .. })));
//!
//! let text = Value::seq(vec![Value::from(1), Value::from("2")]);
//! assert!(matches!(NdArray::new(text), Err(ArrayError::NonNumericLeaf { .. })));
//! ```
//!
//! ## Arithmetic
//!
//! ```
//! use ndnest_core::NdArray;
//!
//! let a = NdArray::new(vec![1, 2, 3]).unwrap();
//! let b = NdArray::new(vec![10, 20, 30]).unwrap();
//!
//! assert_eq!(a.add_all([&b]).unwrap().as_slice(), &[11.0, 22.0, 33.0]);
//! assert_eq!(a.mul_all([&b, &b]).unwrap().as_slice(), &[100.0, 800.0, 2700.0]);
//! assert_eq!(a.add_scalar(10).unwrap().as_slice(), &[11.0, 12.0, 13.0]);
//! assert_eq!(a.pow_scalar(2).unwrap().as_slice(), &[1.0, 4.0, 9.0]);
//! ```
//!
//! ## Transpose and Reduction
//!
//! ```
//! use ndnest_core::NdArray;
//!
//! let a = NdArray::new(vec![vec![1, 2], vec![3, 4]]).unwrap();
//!
//! let t = a.transpose(1).unwrap();
//! assert_eq!(t.to_string(), "[[1, 3], [2, 4]]");
//!
//! assert_eq!(a.sum_axis(0).unwrap().as_slice(), &[4.0, 6.0]);
//! assert_eq!(a.sum_axis(1).unwrap().as_slice(), &[3.0, 7.0]);
//! ```
//!
//! ## Error Handling
//!
//! Operations return [`Result`] with [`ArrayError`]. Construction errors
//! are reported before an array exists, so every array reaching an
//! operation has a validated shape.
//!
//! ## Features
//!
//! - `serde`: Serialize/deserialize [`Value`], [`Number`] and [`NdArray`]
//!   (arrays go through their nested form and are re-validated on input;
//!   0-dimensional arrays serialize as a bare number)

#![deny(warnings)]

pub mod coerce;
pub mod config;
pub mod dense;
pub mod error;
pub mod shape;
pub mod types;
pub mod value;

mod layout;

#[cfg(test)]
mod property_tests;

pub use coerce::{BinaryOp, Number};
pub use config::{ArrayConfig, Validation};
pub use dense::{invert_permutation, NdArray, Operand};
pub use error::{ArrayError, Result};
pub use shape::infer_shape;
pub use types::{Axis, Rank, Shape};
pub use value::{Value, ValueKind};
