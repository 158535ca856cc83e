//! Dense array type definition and basic accessors
//!
//! This module defines the core `NdArray` type together with construction
//! from nested values. Arithmetic, shape manipulation and reductions live in
//! sibling modules.

use crate::config::ArrayConfig;
use crate::error::{ArrayError, Result};
use crate::layout::{compute_strides, numel};
use crate::shape::flatten;
use crate::types::{Rank, Shape};
use crate::value::Value;

/// Dense N-dimensional numeric array.
///
/// Elements are widened to `f64` and stored contiguously in row-major order.
/// Arrays are immutable values: every operation returns a new array and
/// leaves its inputs untouched.
///
/// # Examples
///
/// ```
/// use ndnest_core::NdArray;
///
/// let a = NdArray::new(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
/// assert_eq!(a.shape(), &[2, 3]);
/// assert_eq!(a.ndim(), 2);
/// assert_eq!(a.sum(), 21.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Value", into = "Value"))]
pub struct NdArray {
    pub(crate) data: Vec<f64>,
    pub(crate) shape: Shape,
    pub(crate) strides: Shape,
}

impl NdArray {
    /// Build an array from a nested value using the default [`ArrayConfig`].
    ///
    /// # Errors
    ///
    /// - [`ArrayError::NotArray`] if the root is not a sequence
    /// - [`ArrayError::NonNumericLeaf`] if any leaf is not a number
    /// - [`ArrayError::InconsistentLength`] / [`ArrayError::MixedNesting`]
    ///   if the input is ragged
    ///
    /// # Examples
    ///
    /// ```
    /// use ndnest_core::{ArrayError, NdArray};
    ///
    /// assert!(NdArray::new(vec![vec![1.0, 2.0], vec![3.0]]).is_err());
    /// assert!(matches!(NdArray::new(5), Err(ArrayError::NotArray { .. })));
    /// ```
    pub fn new(value: impl Into<Value>) -> Result<Self> {
        Self::with_config(&value.into(), &ArrayConfig::default())
    }

    /// Build an array from a nested value with explicit settings.
    ///
    /// Construction always validates every element; the configured
    /// [`Validation`](crate::Validation) mode only affects
    /// [`infer_shape`](crate::infer_shape).
    pub fn with_config(value: &Value, config: &ArrayConfig) -> Result<Self> {
        let (shape, data) = flatten(value, config.max_depth)?;
        tracing::debug!(shape = ?&shape[..], ndim = shape.len(), "array constructed");
        Ok(Self::from_raw(data, shape))
    }

    /// Rebuild an array from the output of [`NdArray::to_value`].
    ///
    /// Unlike [`NdArray::new`], a bare number is accepted and becomes a
    /// 0-dimensional array, so every array survives a round trip through its
    /// nested form.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndnest_core::NdArray;
    ///
    /// let total = NdArray::new(vec![1, 2, 3]).unwrap().sum_axis(0).unwrap();
    /// let back = NdArray::from_value(total.to_value()).unwrap();
    /// assert_eq!(back.ndim(), 0);
    /// assert_eq!(back, total);
    /// ```
    pub fn from_value(value: impl Into<Value>) -> Result<Self> {
        let value = value.into();
        match value.as_number() {
            Some(n) => Ok(Self::scalar(n.to_f64())),
            None => Self::with_config(&value, &ArrayConfig::default()),
        }
    }

    /// Create an array from flat row-major data and a shape.
    ///
    /// # Errors
    ///
    /// [`ArrayError::ShapeMismatch`] if `data.len()` is not the product of
    /// `shape`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndnest_core::NdArray;
    ///
    /// let a = NdArray::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
    /// assert_eq!(a.to_value().to_string(), "[[1, 2], [3, 4]]");
    /// ```
    pub fn from_vec(data: Vec<f64>, shape: &[usize]) -> Result<Self> {
        if data.len() != numel(shape) {
            return Err(ArrayError::ShapeMismatch {
                expected: shape.to_vec(),
                got: vec![data.len()],
            });
        }
        Ok(Self::from_raw(data, shape.iter().copied().collect()))
    }

    /// Create a 0-dimensional array holding a single value.
    pub fn scalar(value: f64) -> Self {
        Self::from_raw(vec![value], Shape::new())
    }

    pub(crate) fn from_raw(data: Vec<f64>, shape: Shape) -> Self {
        debug_assert_eq!(data.len(), numel(&shape));
        let strides = compute_strides(&shape);
        Self {
            data,
            shape,
            strides,
        }
    }

    /// Size of each dimension, outermost first.
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Row-major strides, in elements.
    #[inline]
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Number of dimensions (nesting levels).
    #[inline]
    pub fn ndim(&self) -> Rank {
        self.shape.len()
    }

    /// Total number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Elements in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Consume the array, returning its row-major elements.
    #[inline]
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Rebuild the nested representation.
    ///
    /// A 0-dimensional array becomes a bare number. For every array,
    /// [`NdArray::from_value`] applied to the result reproduces it.
    pub fn to_value(&self) -> Value {
        nest(&self.data, &self.shape)
    }
}

fn nest(data: &[f64], shape: &[usize]) -> Value {
    match shape.split_first() {
        None => Value::from(data[0]),
        Some((&len, rest)) => {
            let step = numel(rest);
            Value::Seq(
                (0..len)
                    .map(|i| nest(&data[i * step..(i + 1) * step], rest))
                    .collect(),
            )
        }
    }
}
