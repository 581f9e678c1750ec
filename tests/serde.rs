#![cfg(feature = "serde")]

//! Round-trip coverage for the optional serde support.

use dynamat::{DynMatrix, DynVector};

#[test]
fn vector_round_trips_through_json() {
    let v = DynVector::from_slice(&[1.5f64, -2.0, 3.25]).unwrap();
    let json = serde_json::to_string(&v).unwrap();
    let back: DynVector<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, v);
}

#[test]
fn matrix_round_trips_through_json() {
    let mut m: DynMatrix<i32> = DynMatrix::new(3).unwrap();
    for i in 0..3 {
        for j in 0..3 {
            m[i][j] = (i * 3 + j) as i32;
        }
    }
    let json = serde_json::to_string(&m).unwrap();
    let back: DynMatrix<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, m);
}
