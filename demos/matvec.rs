//! Parses a matrix and a vector from inline text, then runs the whole
//! operation set on them.
//!
//! Run with `cargo run --example matvec`; set `RUST_LOG=trace` to watch
//! the formatted reads.

use std::io::Cursor;

use anyhow::{Context, Result};

use dynamat::{DynMatrix, DynVector};

const MATRIX_TEXT: &str = "2 0 1\n0 3 0\n1 0 2\n";
const VECTOR_TEXT: &str = "1 2 3";

fn main() -> Result<()> {
    env_logger::init();

    let mut m: DynMatrix<f64> = DynMatrix::new(3)?;
    m.read_from(&mut Cursor::new(MATRIX_TEXT))
        .context("parsing the matrix")?;

    let mut v: DynVector<f64> = DynVector::new(3)?;
    v.read_from(&mut Cursor::new(VECTOR_TEXT))
        .context("parsing the vector")?;

    log::info!("parsed a {0}x{0} matrix and a length-{1} vector", m.size(), v.len());

    println!("m =\n{m}");
    println!("v = {v}\n");

    println!("m * 2 =\n{}", &m * 2.0);
    println!("m + m =\n{}", m.add_checked(&m)?);
    println!("m - m =\n{}", m.sub_checked(&m)?);
    println!("m * m =\n{}", m.mul_checked(&m)?);
    println!("m * v = {}\n", m.mul_vector(&v)?);

    println!("v + 10 = {}", &v + 10.0);
    println!("v . v = {}", v.dot(&v));

    // Mixed lengths are defined: the longer tail carries through.
    let short = DynVector::from_slice(&[10.0, 20.0])?;
    println!("v + [10 20] = {}", &v + &short);
    println!("[10 20] - v = {}", &short - &v);

    Ok(())
}
