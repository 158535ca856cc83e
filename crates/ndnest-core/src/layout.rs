//! Row-major layout arithmetic: strides, element counts and index traversal.

use crate::types::Shape;

/// Compute row-major (C-order) strides from a shape.
pub(crate) fn compute_strides(shape: &[usize]) -> Shape {
    let mut strides: Shape = smallvec::smallvec![1; shape.len()];
    for i in (0..shape.len().saturating_sub(1)).rev() {
        strides[i] = strides[i + 1] * shape[i + 1];
    }
    strides
}

/// Number of elements held by an array of this shape.
#[inline]
pub(crate) fn numel(shape: &[usize]) -> usize {
    shape.iter().product()
}

/// Visit every multi-dimensional index of `shape` in row-major order.
///
/// The callback receives the index together with its flat row-major offset.
/// Nothing is visited when a dimension is zero; a 0-dimensional shape visits
/// the empty index once.
pub(crate) fn for_each_index<F>(shape: &[usize], mut f: F)
where
    F: FnMut(&[usize], usize),
{
    let total = numel(shape);
    let mut index: Shape = smallvec::smallvec![0; shape.len()];
    for flat in 0..total {
        f(&index, flat);

        // odometer increment
        for d in (0..shape.len()).rev() {
            index[d] += 1;
            if index[d] < shape[d] {
                break;
            }
            index[d] = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_strides() {
        assert_eq!(&compute_strides(&[2, 3, 4])[..], &[12, 4, 1]);
        assert_eq!(&compute_strides(&[5])[..], &[1]);
        assert!(compute_strides(&[]).is_empty());
    }

    #[test]
    fn test_for_each_index_order() {
        let mut seen = Vec::new();
        for_each_index(&[2, 3], |idx, flat| seen.push((idx.to_vec(), flat)));
        assert_eq!(seen.len(), 6);
        assert_eq!(seen[0], (vec![0, 0], 0));
        assert_eq!(seen[2], (vec![0, 2], 2));
        assert_eq!(seen[3], (vec![1, 0], 3));
        assert_eq!(seen[5], (vec![1, 2], 5));
    }

    #[test]
    fn test_for_each_index_degenerate() {
        let mut count = 0;
        for_each_index(&[3, 0, 2], |_, _| count += 1);
        assert_eq!(count, 0);

        let mut scalar = Vec::new();
        for_each_index(&[], |idx, flat| scalar.push((idx.len(), flat)));
        assert_eq!(scalar, vec![(0, 0)]);
    }
}
