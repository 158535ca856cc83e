//! # ndnest
//!
//! Nested numeric arrays for Rust.
//!
//! This is the **meta crate**: it re-exports [`ndnest_core`] and adds
//! subscriber setup for the structured logs the core emits.
//!
//! ## Quick Start
//!
//! ```
//! use ndnest::prelude::*;
//!
//! let a = NdArray::new(vec![vec![1, 2], vec![3, 4]])?;
//! assert_eq!(a.sum_axis(0)?.as_slice(), &[4.0, 6.0]);
//! assert_eq!(a.transpose(1)?.to_string(), "[[1, 3], [2, 4]]");
//! # Ok::<(), ndnest::core::ArrayError>(())
//! ```
//!
//! ## Logging
//!
//! Array construction, transposes and reductions emit `tracing` events at
//! `debug`/`trace` level. Install a subscriber once at startup:
//!
//! ```no_run
//! use ndnest::logging::{init_tracing, TracingConfig};
//!
//! init_tracing(TracingConfig::default()).unwrap();
//! ```
//!
//! ## Features
//!
//! - `tracing` *(default)*: subscriber installation via `tracing-subscriber`
//! - `serde`: serialization support for values and arrays

#![deny(warnings)]

pub use ndnest_core as core;

pub mod logging;

/// Glob-import convenience: `use ndnest::prelude::*;`
pub mod prelude {
    pub use ndnest_core::{
        infer_shape, invert_permutation, ArrayConfig, ArrayError, Axis, BinaryOp, NdArray,
        Number, Operand, Rank, Shape, Validation, Value, ValueKind,
    };
}
