//! Basic array usage: construction, arithmetic, transpose and reduction.
//!
//! Run with:
//! ```bash
//! cargo run --example basic_array
//! ```

use ndnest_core::{ArrayError, NdArray, Value};

fn main() -> anyhow::Result<()> {
    let a = NdArray::new(vec![vec![1, 2, 3], vec![4, 5, 6]])?;
    println!("a          = {a}");
    println!("shape      = {:?} (ndim {})", a.shape(), a.ndim());
    println!("sum        = {}", a.sum());

    let b = NdArray::full(&[2, 3], 10.0);
    println!("a + b      = {}", a.add_all([&b])?);
    println!("a * b * b  = {}", a.mul_all([&b, &b])?);
    println!("a ** 2     = {}", a.pow_scalar(2)?);
    println!("a // 4     = {}", a.floor_div_scalar(4)?);

    println!("transpose  = {}", a.transpose(1)?);
    println!("sum axis 0 = {}", a.sum_axis(0)?);
    println!("sum axis 1 = {}", a.sum_axis(1)?);

    let ragged = Value::from(vec![vec![1, 2, 3], vec![4, 5]]);
    match NdArray::new(ragged) {
        Err(err @ ArrayError::InconsistentLength { .. }) => println!("ragged     : {err}"),
        other => println!("unexpected : {other:?}"),
    }

    Ok(())
}
