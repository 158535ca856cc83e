//! Element-wise arithmetic
//!
//! Two families of operations live here:
//!
//! - **Positional folds** ([`NdArray::add_all`], [`NdArray::mul_all`],
//!   [`NdArray::combine_all`]) combine the receiver with any number of
//!   operands of the same shape, position by position. No broadcasting is
//!   performed; every operand shape is checked before arithmetic starts.
//! - **Scalar operations** ([`NdArray::add_scalar`] and friends) apply one
//!   operator between every element and a fixed scalar.
//!
//! The first failing operator application aborts the whole operation.

use super::types::NdArray;
use crate::coerce::BinaryOp;
use crate::error::{ArrayError, Result};
use crate::value::Value;
use std::borrow::Cow;

/// An operand for positional folds: an existing array or a raw nested value.
#[derive(Debug, Clone)]
pub enum Operand<'a> {
    Array(&'a NdArray),
    Raw(Value),
}

impl<'a> From<&'a NdArray> for Operand<'a> {
    fn from(a: &'a NdArray) -> Self {
        Operand::Array(a)
    }
}

impl From<Value> for Operand<'_> {
    fn from(v: Value) -> Self {
        Operand::Raw(v)
    }
}

impl<'a> Operand<'a> {
    fn resolve(self) -> Result<Cow<'a, NdArray>> {
        match self {
            Operand::Array(a) => Ok(Cow::Borrowed(a)),
            Operand::Raw(v) => NdArray::new(v).map(Cow::Owned),
        }
    }
}

/// Fold every source into `dest` position by position: `dest[i] = op(dest[i], src[i])`.
///
/// Sources are applied left to right, so each position sees the same
/// sequence of operations as a per-position fold. All slices must have the
/// length of `dest`.
pub(crate) fn fold_into(dest: &mut [f64], sources: &[&[f64]], op: BinaryOp) -> Result<()> {
    for src in sources {
        debug_assert_eq!(src.len(), dest.len());
        for (d, &s) in dest.iter_mut().zip(src.iter()) {
            *d = op.apply(*d, s)?;
        }
    }
    Ok(())
}

impl NdArray {
    /// Element-wise sum of `self` and every operand.
    ///
    /// # Errors
    ///
    /// - Construction errors of raw operands
    /// - [`ArrayError::ShapeMismatch`] if any operand differs in shape
    ///
    /// # Examples
    ///
    /// ```
    /// use ndnest_core::{NdArray, Value};
    ///
    /// let a = NdArray::new(vec![1, 2]).unwrap();
    /// let b = NdArray::new(vec![10, 20]).unwrap();
    /// assert_eq!(a.add_all([&b]).unwrap().as_slice(), &[11.0, 22.0]);
    ///
    /// let raw = Value::from(vec![100, 200]);
    /// assert_eq!(a.add_all([raw]).unwrap().as_slice(), &[101.0, 202.0]);
    /// ```
    pub fn add_all<'a, I>(&self, operands: I) -> Result<NdArray>
    where
        I: IntoIterator,
        I::Item: Into<Operand<'a>>,
    {
        self.combine_all(BinaryOp::Add, operands)
    }

    /// Element-wise product of `self` and every operand.
    pub fn mul_all<'a, I>(&self, operands: I) -> Result<NdArray>
    where
        I: IntoIterator,
        I::Item: Into<Operand<'a>>,
    {
        self.combine_all(BinaryOp::Mul, operands)
    }

    /// Fold `op` across `self` and every operand, position by position.
    ///
    /// Operators with an identity (add, multiply) start from a buffer filled
    /// with it; the others start from a copy of `self`.
    pub fn combine_all<'a, I>(&self, op: BinaryOp, operands: I) -> Result<NdArray>
    where
        I: IntoIterator,
        I::Item: Into<Operand<'a>>,
    {
        let resolved = operands
            .into_iter()
            .map(|o| o.into().resolve())
            .collect::<Result<Vec<_>>>()?;

        for other in &resolved {
            if other.shape() != self.shape() {
                return Err(ArrayError::ShapeMismatch {
                    expected: self.shape().to_vec(),
                    got: other.shape().to_vec(),
                });
            }
        }

        let mut sources: Vec<&[f64]> = Vec::with_capacity(resolved.len() + 1);
        let mut out = match op.identity() {
            Some(identity) => {
                sources.push(self.as_slice());
                self.full_like(identity)
            }
            None => self.clone(),
        };
        sources.extend(resolved.iter().map(|o| o.as_slice()));

        tracing::trace!(%op, operands = resolved.len(), "positional fold");
        fold_into(&mut out.data, &sources, op)?;
        Ok(out)
    }

    /// Apply `op` between every element and the scalar `n`.
    ///
    /// # Errors
    ///
    /// - [`ArrayError::NotNumeric`] if `n` is not a number
    /// - [`ArrayError::DivisionByZero`] for an integer remainder by zero
    ///
    /// # Examples
    ///
    /// ```
    /// use ndnest_core::{BinaryOp, NdArray};
    ///
    /// let a = NdArray::new(vec![2, 3]).unwrap();
    /// let op: BinaryOp = "pow".parse().unwrap();
    /// assert_eq!(a.scalar_op(op, 2).unwrap().as_slice(), &[4.0, 9.0]);
    /// ```
    pub fn scalar_op(&self, op: BinaryOp, n: impl Into<Value>) -> Result<NdArray> {
        let rhs = n.into().to_f64()?;
        let data = self
            .data
            .iter()
            .map(|&x| op.apply(x, rhs))
            .collect::<Result<Vec<_>>>()?;
        tracing::trace!(%op, rhs, "scalar op");
        Ok(NdArray::from_raw(data, self.shape.clone()))
    }

    pub fn add_scalar(&self, n: impl Into<Value>) -> Result<NdArray> {
        self.scalar_op(BinaryOp::Add, n)
    }

    pub fn sub_scalar(&self, n: impl Into<Value>) -> Result<NdArray> {
        self.scalar_op(BinaryOp::Sub, n)
    }

    pub fn mul_scalar(&self, n: impl Into<Value>) -> Result<NdArray> {
        self.scalar_op(BinaryOp::Mul, n)
    }

    /// Real division by `n`; dividing by zero gives IEEE infinities or NaN.
    pub fn div_scalar(&self, n: impl Into<Value>) -> Result<NdArray> {
        self.scalar_op(BinaryOp::Div, n)
    }

    /// Division truncated toward zero (`-7 // 2 == -3`).
    pub fn floor_div_scalar(&self, n: impl Into<Value>) -> Result<NdArray> {
        self.scalar_op(BinaryOp::FloorDiv, n)
    }

    /// Remainder of truncated integer operands (`7.9 % 3.2 == 1`).
    pub fn rem_scalar(&self, n: impl Into<Value>) -> Result<NdArray> {
        self.scalar_op(BinaryOp::Rem, n)
    }

    pub fn pow_scalar(&self, n: impl Into<Value>) -> Result<NdArray> {
        self.scalar_op(BinaryOp::Pow, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ValueKind;

    fn arr(v: impl Into<Value>) -> NdArray {
        NdArray::new(v).unwrap()
    }

    #[test]
    fn test_add_all_arrays() {
        let a = arr(vec![1, 2]);
        let b = arr(vec![10, 20]);
        assert_eq!(a.add_all([&b]).unwrap(), arr(vec![11.0, 22.0]));
    }

    #[test]
    fn test_add_all_many_operands() {
        let a = arr(vec![vec![1, 2], vec![3, 4]]);
        let b = arr(vec![vec![10, 20], vec![30, 40]]);
        let c = arr(vec![vec![100, 200], vec![300, 400]]);
        let sum = a.add_all([&b, &c]).unwrap();
        assert_eq!(sum.shape(), &[2, 2]);
        assert_eq!(sum.as_slice(), &[111.0, 222.0, 333.0, 444.0]);
    }

    #[test]
    fn test_add_all_no_operands_copies() {
        let a = arr(vec![1.5, -2.0]);
        assert_eq!(a.add_all(Vec::<&NdArray>::new()).unwrap(), a);
    }

    #[test]
    fn test_mixed_operands() {
        let a = arr(vec![1, 2, 3]);
        let b = arr(vec![2, 2, 2]);
        let prod = a
            .mul_all([Operand::from(&b), Operand::from(Value::from(vec![1, 0, -1]))])
            .unwrap();
        assert_eq!(prod.as_slice(), &[2.0, 0.0, -6.0]);
    }

    #[test]
    fn test_shape_mismatch_rejected() {
        let a = arr(vec![1, 2]);
        let b = arr(vec![1, 2, 3]);
        assert_eq!(
            a.add_all([&b]),
            Err(ArrayError::ShapeMismatch {
                expected: vec![2],
                got: vec![3]
            })
        );
    }

    #[test]
    fn test_raw_operand_errors_propagate() {
        let a = arr(vec![1, 2]);
        let ragged = Value::from(vec![vec![1], vec![1, 2]]);
        assert!(matches!(
            a.add_all([ragged]),
            Err(ArrayError::InconsistentLength { .. })
        ));
    }

    #[test]
    fn test_combine_all_without_identity() {
        let a = arr(vec![10, 20]);
        let b = arr(vec![1, 2]);
        let c = arr(vec![2, 3]);
        let diff = a.combine_all(BinaryOp::Sub, [&b, &c]).unwrap();
        assert_eq!(diff.as_slice(), &[7.0, 15.0]);
    }

    #[test]
    fn test_combine_all_aborts_on_error() {
        let a = arr(vec![5, 6]);
        let b = arr(vec![2, 0]);
        assert_eq!(
            a.combine_all(BinaryOp::Rem, [&b]),
            Err(ArrayError::DivisionByZero)
        );
    }

    #[test]
    fn test_inputs_untouched() {
        let a = arr(vec![1, 2]);
        let b = arr(vec![3, 4]);
        let _ = a.add_all([&b]).unwrap();
        assert_eq!(a.as_slice(), &[1.0, 2.0]);
        assert_eq!(b.as_slice(), &[3.0, 4.0]);
    }

    #[test]
    fn test_scalar_ops() {
        let a = arr(vec![1, 2, 3]);
        assert_eq!(a.add_scalar(10).unwrap().as_slice(), &[11.0, 12.0, 13.0]);
        assert_eq!(a.sub_scalar(1.5).unwrap().as_slice(), &[-0.5, 0.5, 1.5]);
        assert_eq!(a.mul_scalar(2u8).unwrap().as_slice(), &[2.0, 4.0, 6.0]);
        assert_eq!(a.div_scalar(2).unwrap().as_slice(), &[0.5, 1.0, 1.5]);
        assert_eq!(a.floor_div_scalar(2).unwrap().as_slice(), &[0.0, 1.0, 1.0]);
        assert_eq!(a.rem_scalar(2).unwrap().as_slice(), &[1.0, 0.0, 1.0]);
        assert_eq!(arr(vec![2, 3]).pow_scalar(2).unwrap().as_slice(), &[4.0, 9.0]);
    }

    #[test]
    fn test_scalar_op_keeps_shape() {
        let a = arr(vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
        let b = a.mul_scalar(-1).unwrap();
        assert_eq!(b.shape(), &[3, 2]);
        assert_eq!(b.sum(), -21.0);
    }

    #[test]
    fn test_scalar_not_numeric() {
        let a = arr(vec![1, 2]);
        assert_eq!(
            a.add_scalar("1"),
            Err(ArrayError::NotNumeric {
                kind: ValueKind::Text
            })
        );
        assert!(a.mul_scalar(vec![1, 2]).is_err());
    }

    #[test]
    fn test_scalar_division_by_zero() {
        let a = arr(vec![1.0, -1.0]);
        let d = a.div_scalar(0).unwrap();
        assert_eq!(d.as_slice(), &[f64::INFINITY, f64::NEG_INFINITY]);
        assert_eq!(a.rem_scalar(0), Err(ArrayError::DivisionByZero));
    }

    #[test]
    fn test_fold_into_left_to_right() {
        let mut dest = vec![100.0, 100.0];
        fold_into(&mut dest, &[&[10.0, 1.0], &[5.0, 2.0]], BinaryOp::Div).unwrap();
        assert_eq!(dest, vec![2.0, 50.0]);
    }
}
