//! Sum reductions

use super::elementwise::fold_into;
use super::types::NdArray;
use crate::coerce::BinaryOp;
use crate::error::{ArrayError, Result};
use crate::layout::numel;
use crate::types::Axis;
use std::borrow::Cow;

impl NdArray {
    /// Sum of every element. An empty array sums to `0.0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndnest_core::NdArray;
    ///
    /// assert_eq!(NdArray::new(vec![1, 2, 3]).unwrap().sum(), 6.0);
    /// assert_eq!(NdArray::new(vec![vec![1, 2], vec![3, 4]]).unwrap().sum(), 10.0);
    /// ```
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Sum along `axis`, removing it from the shape.
    ///
    /// The axis is first moved to the front, then the resulting top-level
    /// slices are added together position by position. Reducing a 1-d array
    /// yields a 0-dimensional array; a 0-dimensional array is returned
    /// unchanged. A zero-length axis reduces to zeros.
    ///
    /// # Errors
    ///
    /// [`ArrayError::AxisOutOfRange`] if `axis >= self.ndim()` (for arrays
    /// with at least one dimension).
    ///
    /// # Examples
    ///
    /// ```
    /// use ndnest_core::NdArray;
    ///
    /// let a = NdArray::new(vec![vec![1, 2], vec![3, 4]]).unwrap();
    /// assert_eq!(a.sum_axis(0).unwrap().as_slice(), &[4.0, 6.0]);
    /// assert_eq!(a.sum_axis(1).unwrap().as_slice(), &[3.0, 7.0]);
    /// ```
    pub fn sum_axis(&self, axis: Axis) -> Result<NdArray> {
        let ndim = self.ndim();
        if ndim == 0 {
            return Ok(self.clone());
        }
        if axis >= ndim {
            return Err(ArrayError::AxisOutOfRange { axis, ndim });
        }

        let front = if axis == 0 {
            Cow::Borrowed(self)
        } else {
            Cow::Owned(self.transpose(axis)?)
        };

        let rest: Vec<usize> = front.shape[1..].iter().copied().collect();
        let slice_len = numel(&rest);
        let mut out = NdArray::zeros(&rest);
        if slice_len > 0 {
            let slices: Vec<&[f64]> = front.data.chunks(slice_len).collect();
            fold_into(&mut out.data, &slices, BinaryOp::Add)?;
        }

        tracing::debug!(axis, from = ?self.shape(), to = ?out.shape(), "sum_axis");
        Ok(out)
    }
}
