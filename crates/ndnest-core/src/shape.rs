//! Shape inference over nested values
//!
//! The walk uses an explicit stack, so input depth is bounded by
//! [`ArrayConfig::max_depth`] rather than by the call stack. Sequences at
//! depth `d` contribute `shape[d]`; every later sequence at that depth must
//! have the same length, and every numeric leaf must sit at depth
//! `shape.len()`.

use crate::config::{ArrayConfig, Validation};
use crate::error::{ArrayError, Result};
use crate::types::Shape;
use crate::value::Value;

/// Infer the shape of `value` without collecting its elements.
///
/// With [`Validation::Probe`] only the first element of each sequence is
/// followed, which is enough to size the array but will not notice ragged
/// siblings.
///
/// # Examples
///
/// ```
/// use ndnest_core::{infer_shape, ArrayConfig, Validation, Value};
///
/// let ragged = Value::from(vec![vec![1, 2], vec![3]]);
/// assert!(infer_shape(&ragged, &ArrayConfig::default()).is_err());
///
/// let probe = ArrayConfig::default().validation(Validation::Probe);
/// assert_eq!(&infer_shape(&ragged, &probe).unwrap()[..], &[2, 2]);
/// ```
pub fn infer_shape(value: &Value, config: &ArrayConfig) -> Result<Shape> {
    let probe = config.validation == Validation::Probe;
    walk(value, config.max_depth, probe, |_| {})
}

/// Validate `value` exhaustively and flatten its leaves in row-major order.
pub fn flatten(value: &Value, max_depth: usize) -> Result<(Shape, Vec<f64>)> {
    let mut data = Vec::new();
    let shape = walk(value, max_depth, false, |x| data.push(x))?;
    Ok((shape, data))
}

fn walk<F>(root: &Value, max_depth: usize, probe: bool, mut on_leaf: F) -> Result<Shape>
where
    F: FnMut(f64),
{
    if !root.is_seq() {
        return Err(ArrayError::NotArray { kind: root.kind() });
    }

    let mut shape = Shape::new();
    let mut leaf_depth: Option<usize> = None;
    let mut stack: Vec<(&Value, usize)> = vec![(root, 0)];

    while let Some((node, depth)) = stack.pop() {
        match node {
            Value::Seq(items) => {
                if depth >= max_depth {
                    return Err(ArrayError::DepthLimitExceeded { limit: max_depth });
                }
                if leaf_depth.is_some_and(|ld| depth >= ld) {
                    return Err(ArrayError::MixedNesting { depth });
                }
                if depth == shape.len() {
                    shape.push(items.len());
                } else if shape[depth] != items.len() {
                    return Err(ArrayError::InconsistentLength {
                        depth,
                        expected: shape[depth],
                        got: items.len(),
                    });
                }

                if probe {
                    if let Some(first) = items.first() {
                        stack.push((first, depth + 1));
                    }
                } else {
                    // reversed so leaves pop in row-major order
                    stack.extend(items.iter().rev().map(|item| (item, depth + 1)));
                }
            }
            leaf => {
                let n = leaf.as_number().ok_or(ArrayError::NonNumericLeaf {
                    kind: leaf.kind(),
                    depth,
                })?;
                if depth < shape.len() || leaf_depth.is_some_and(|ld| ld != depth) {
                    return Err(ArrayError::MixedNesting { depth });
                }
                leaf_depth = Some(depth);
                on_leaf(n.to_f64());
            }
        }
    }

    tracing::trace!(shape = ?&shape[..], probe, "shape inferred");
    Ok(shape)
}
