//! Filled array creation
//!
//! Result buffers for arithmetic and reductions are allocated here at their
//! final size, so no operation ever grows a buffer while writing into it.

use super::types::NdArray;
use crate::layout::numel;

impl NdArray {
    /// Create an array of the given shape with every position set to `value`.
    ///
    /// An empty shape yields a 0-dimensional array holding `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndnest_core::NdArray;
    ///
    /// let a = NdArray::full(&[2, 3], 0.0);
    /// assert_eq!(a.to_value().to_string(), "[[0, 0, 0], [0, 0, 0]]");
    /// ```
    pub fn full(shape: &[usize], value: f64) -> Self {
        Self::from_raw(vec![value; numel(shape)], shape.iter().copied().collect())
    }

    pub fn zeros(shape: &[usize]) -> Self {
        Self::full(shape, 0.0)
    }

    pub fn ones(shape: &[usize]) -> Self {
        Self::full(shape, 1.0)
    }

    /// A filled array with the same shape as `self`.
    pub fn full_like(&self, value: f64) -> Self {
        Self::full(self.shape(), value)
    }
}
