//! Axis permutation
//!
//! Both operations materialize a new array; there are no strided views.

use super::types::NdArray;
use crate::error::{ArrayError, Result};
use crate::layout::{compute_strides, for_each_index};
use crate::types::{Axis, Shape};

/// Compute the inverse of an axis permutation.
///
/// `a.permute(p)?.permute(&invert_permutation(p)?)?` reproduces `a`.
///
/// # Examples
///
/// ```
/// use ndnest_core::invert_permutation;
///
/// assert_eq!(invert_permutation(&[2, 0, 1]).unwrap(), vec![1, 2, 0]);
/// ```
pub fn invert_permutation(axes: &[Axis]) -> Result<Vec<Axis>> {
    validate_permutation(axes, axes.len())?;
    let mut inverse = vec![0; axes.len()];
    for (i, &a) in axes.iter().enumerate() {
        inverse[a] = i;
    }
    Ok(inverse)
}

fn validate_permutation(axes: &[Axis], ndim: usize) -> Result<()> {
    let invalid = || ArrayError::InvalidPermutation {
        axes: axes.to_vec(),
        ndim,
    };
    if axes.len() != ndim {
        return Err(invalid());
    }
    let mut seen = vec![false; ndim];
    for &axis in axes {
        if axis >= ndim || seen[axis] {
            return Err(invalid());
        }
        seen[axis] = true;
    }
    Ok(())
}

impl NdArray {
    /// Move `axis` to the front, keeping the other axes in order.
    ///
    /// The result has shape `[shape[axis], shape[0], .., shape[axis-1],
    /// shape[axis+1], ..]`.
    ///
    /// # Errors
    ///
    /// [`ArrayError::AxisOutOfRange`] if `axis >= self.ndim()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndnest_core::NdArray;
    ///
    /// let a = NdArray::new(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
    /// let t = a.transpose(1).unwrap();
    /// assert_eq!(t.shape(), &[3, 2]);
    /// assert_eq!(t.to_value().to_string(), "[[1, 4], [2, 5], [3, 6]]");
    /// ```
    pub fn transpose(&self, axis: Axis) -> Result<NdArray> {
        let ndim = self.ndim();
        if axis >= ndim {
            return Err(ArrayError::AxisOutOfRange { axis, ndim });
        }
        let axes: Vec<Axis> = std::iter::once(axis)
            .chain((0..ndim).filter(|&a| a != axis))
            .collect();
        tracing::debug!(axis, shape = ?self.shape(), "transpose");
        Ok(self.scatter_permuted(&axes))
    }

    /// Reorder axes: output axis `k` is input axis `axes[k]`.
    ///
    /// # Errors
    ///
    /// [`ArrayError::InvalidPermutation`] unless `axes` contains each of
    /// `0..ndim` exactly once.
    pub fn permute(&self, axes: &[Axis]) -> Result<NdArray> {
        validate_permutation(axes, self.ndim())?;
        Ok(self.scatter_permuted(axes))
    }

    /// Visit every source element with its index and write it to the
    /// destination position whose coordinates are the source coordinates
    /// reordered by `axes`.
    fn scatter_permuted(&self, axes: &[Axis]) -> NdArray {
        let new_shape: Shape = axes.iter().map(|&a| self.shape[a]).collect();
        let dest_strides = compute_strides(&new_shape);
        let mut data = vec![0.0; self.len()];

        for_each_index(&self.shape, |index, flat| {
            let offset: usize = axes
                .iter()
                .zip(dest_strides.iter())
                .map(|(&a, &stride)| index[a] * stride)
                .sum();
            data[offset] = self.data[flat];
        });

        NdArray::from_raw(data, new_shape)
    }
}
