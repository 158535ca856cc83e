//! Dimension type aliases shared across ndnest-core.

use smallvec::SmallVec;

/// Zero-based axis index (0 is the outermost nesting level).
pub type Axis = usize;

/// Number of dimensions of an array.
pub type Rank = usize;

/// Shape type using SmallVec to avoid heap allocation for common cases.
///
/// Inline capacity covers arrays up to six dimensions; deeper shapes spill to
/// the heap transparently.
///
/// # Examples
///
/// ```
/// use ndnest_core::{NdArray, Shape};
///
/// let a = NdArray::zeros(&[2, 3, 4]);
/// let shape: Shape = a.shape().iter().copied().collect();
/// assert_eq!(&shape[..], &[2, 3, 4]);
/// ```
pub type Shape = SmallVec<[usize; 6]>;
