//! Property-based tests for array operations
//!
//! These use proptest to check shape bookkeeping and arithmetic invariants
//! over randomly generated rectangular inputs.

#[cfg(test)]
mod tests {
    use crate::{invert_permutation, ArrayError, NdArray, Value};
    use proptest::prelude::*;

    // Small integer-valued elements keep every sum exact in f64.
    fn array_strategy() -> impl Strategy<Value = NdArray> {
        prop::collection::vec(1usize..5, 1..=4).prop_flat_map(|shape| {
            let n: usize = shape.iter().product();
            prop::collection::vec(-100i32..100, n).prop_map(move |data| {
                let data = data.into_iter().map(f64::from).collect();
                NdArray::from_vec(data, &shape).unwrap()
            })
        })
    }

    fn array_and_axis() -> impl Strategy<Value = (NdArray, usize)> {
        array_strategy().prop_flat_map(|a| {
            let ndim = a.ndim();
            (Just(a), 0..ndim)
        })
    }

    fn array_and_permutation() -> impl Strategy<Value = (NdArray, Vec<usize>)> {
        array_strategy().prop_flat_map(|a| {
            let axes: Vec<usize> = (0..a.ndim()).collect();
            (Just(a), Just(axes).prop_shuffle())
        })
    }

    /// Shorten the last innermost sequence by one element.
    fn make_ragged(value: &mut Value) -> bool {
        match value {
            Value::Seq(items) => match items.last_mut() {
                Some(last) if last.is_seq() => make_ragged(last),
                Some(_) => {
                    items.pop();
                    true
                }
                None => false,
            },
            _ => false,
        }
    }

    #[test]
    fn test_proptest_smoke() {
        let a = NdArray::zeros(&[2, 3]);
        assert_eq!(a.shape(), &[2, 3]);
    }

    proptest! {
        #[test]
        fn prop_construct_infers_literal_shape(a in array_strategy()) {
            let rebuilt = NdArray::new(a.to_value()).unwrap();
            prop_assert_eq!(rebuilt.shape(), a.shape());
            prop_assert_eq!(rebuilt.ndim(), a.shape().len());
            prop_assert_eq!(rebuilt, a);
        }

        #[test]
        fn prop_ragged_rejected(a in array_strategy()) {
            // the shortened sequence needs a sibling at its depth
            let outer: usize = a.shape()[..a.ndim() - 1].iter().product();
            prop_assume!(outer >= 2);
            let mut v = a.to_value();
            prop_assume!(make_ragged(&mut v));
            let result = NdArray::new(v);
            let is_inconsistent = matches!(result, Err(ArrayError::InconsistentLength { .. }));
            prop_assert!(is_inconsistent);
        }

        #[test]
        fn prop_transpose_moves_axis_to_front((a, axis) in array_and_axis()) {
            let t = a.transpose(axis).unwrap();
            let mut expected = vec![a.shape()[axis]];
            expected.extend(a.shape().iter().enumerate().filter(|&(i, _)| i != axis).map(|(_, &d)| d));
            prop_assert_eq!(t.shape(), expected.as_slice());
            prop_assert_eq!(t.sum(), a.sum());
        }

        #[test]
        fn prop_permute_inverse_restores((a, axes) in array_and_permutation()) {
            let inverse = invert_permutation(&axes).unwrap();
            let restored = a.permute(&axes).unwrap().permute(&inverse).unwrap();
            prop_assert_eq!(restored, a);
        }

        #[test]
        fn prop_sum_axis_preserves_total((a, axis) in array_and_axis()) {
            let reduced = a.sum_axis(axis).unwrap();
            prop_assert_eq!(reduced.ndim(), a.ndim() - 1);
            prop_assert_eq!(reduced.sum(), a.sum());
        }

        #[test]
        fn prop_add_self_doubles(a in array_strategy()) {
            let doubled = a.add_all([&a]).unwrap();
            prop_assert_eq!(doubled, a.mul_scalar(2).unwrap());
        }

        #[test]
        fn prop_scalar_add_sub_inverse(a in array_strategy(), n in -50i32..50) {
            let back = a.add_scalar(n).unwrap().sub_scalar(n).unwrap();
            prop_assert_eq!(back, a);
        }
    }
}
