//! Dense array implementation and operations
//!
//! The array type lives in [`types`]; operations are grouped by concern into
//! the private sub-modules below and exposed as inherent methods.

pub mod types;

mod creation;
mod elementwise;
mod reduction;
mod shape_ops;
mod traits;

pub use elementwise::Operand;
pub use shape_ops::invert_permutation;
pub use types::NdArray;
