//! Conversion and formatting trait implementations for `NdArray`.

use super::types::NdArray;
use crate::error::ArrayError;
use crate::value::Value;
use std::fmt;

impl TryFrom<Value> for NdArray {
    type Error = ArrayError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        NdArray::from_value(value)
    }
}

impl From<&NdArray> for Value {
    fn from(a: &NdArray) -> Self {
        a.to_value()
    }
}

impl From<NdArray> for Value {
    fn from(a: NdArray) -> Self {
        a.to_value()
    }
}

impl fmt::Display for NdArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_value() {
        let a = NdArray::try_from(Value::from(vec![vec![1, 2], vec![3, 4]])).unwrap();
        assert_eq!(a.shape(), &[2, 2]);
        assert!(NdArray::try_from(Value::from("1")).is_err());
        assert_eq!(NdArray::try_from(Value::from(1)).unwrap().ndim(), 0);
    }

    #[test]
    fn test_display_nested() {
        let a = NdArray::new(vec![vec![1.5, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(a.to_string(), "[[1.5, 2], [3, 4]]");
        assert_eq!(NdArray::scalar(7.0).to_string(), "7");
    }

    #[test]
    fn test_into_value() {
        let a = NdArray::new(vec![1, 2]).unwrap();
        let v: Value = (&a).into();
        assert_eq!(v, Value::from(vec![1.0, 2.0]));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_goes_through_nested_form() {
        let a = NdArray::new(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, "[[1.0,2.0],[3.0,4.0]]");

        let back: NdArray = serde_json::from_str(&json).unwrap();
        assert_eq!(back, a);

        assert!(serde_json::from_str::<NdArray>("[[1],[2,3]]").is_err());
        assert!(serde_json::from_str::<NdArray>("[1,\"x\"]").is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_zero_dim_round_trip() {
        let a = NdArray::new(vec![1, 2, 3]).unwrap().sum_axis(0).unwrap();
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, "6.0");

        let back: NdArray = serde_json::from_str(&json).unwrap();
        assert_eq!(back.ndim(), 0);
        assert_eq!(back, a);
    }
}
