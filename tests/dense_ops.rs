//! Integration tests for dense operations
//!
//! Tests verify:
//! - Dimension checks on add, subtract and multiply
//! - Rounding under a precision context
//! - Reductions and transpose

mod common;

use common::{dec, dense, sample_dense};
use decimat::prelude::*;

// ============================================================================
// Dimension Checks
// ============================================================================

#[test]
fn test_add_subtract_reject_transposed_shapes() {
    let a = DenseMatrix::zeros(2, 3);
    let b = DenseMatrix::zeros(3, 2);

    let err = dense_add(&a, &b, None).unwrap_err();
    assert_eq!(err, Error::dimension_mismatch("dense_add", [2, 3], [3, 2]));
    assert!(matches!(
        dense_subtract(&a, &b, None),
        Err(Error::DimensionMismatch { .. })
    ));
}

#[test]
fn test_multiply_inner_dimension_checks() {
    let a = DenseMatrix::zeros(2, 3);
    assert!(matches!(
        dense_multiply(&a, &DenseMatrix::zeros(2, 2), None),
        Err(Error::DimensionMismatch { .. })
    ));

    let c = dense_multiply(&a, &DenseMatrix::zeros(3, 4), None).unwrap();
    assert_eq!(c.shape(), [2, 4]);
}

// ============================================================================
// Arithmetic
// ============================================================================

#[test]
fn test_add_is_commutative() {
    let a = sample_dense(3, 4, 1);
    let b = sample_dense(3, 4, 2);
    assert_eq!(
        dense_add(&a, &b, None).unwrap(),
        dense_add(&b, &a, None).unwrap()
    );
}

#[test]
fn test_subtract_self_is_zero() {
    let a = sample_dense(4, 2, 5);
    let zero = dense_subtract(&a, &a, None).unwrap();
    assert_eq!(zero, DenseMatrix::zeros(4, 2));
}

#[test]
fn test_identity_multiply() {
    let m = dense(&[&["1.5", "-2"], &["0", "7.25"], &["3", "4"]]);
    let product = dense_multiply(&DenseMatrix::identity(3), &m, None).unwrap();
    assert_eq!(product, m);
}

#[test]
fn test_multiply_with_context_rounds_each_step() {
    let ctx = MathContext::with_digits(2, Rounding::HalfEven).unwrap();
    // 1.25 * 1 -> 1.2, then 1.2 + 0.04 -> 1.2
    let a = dense(&[&["1.25", "0.2"]]);
    let b = dense(&[&["1"], &["0.2"]]);
    let c = dense_multiply(&a, &b, Some(&ctx)).unwrap();
    assert_eq!(*c.get(0, 0), dec("1.2"));

    let exact = dense_multiply(&a, &b, None).unwrap();
    assert_eq!(*exact.get(0, 0), dec("1.29"));
}

#[test]
fn test_multiply_scalar_and_element_operation_agree() {
    let a = sample_dense(3, 3, 9);
    let factor = dec("-0.5");
    let scaled = dense_multiply_scalar(&a, &factor, None).unwrap();
    let mapped = dense_element_operation(&a, |v| v * &factor);
    assert_eq!(scaled, mapped);
}

// ============================================================================
// Structure, Reductions, Rounding
// ============================================================================

#[test]
fn test_transpose_twice_is_identity() {
    let a = sample_dense(2, 5, 3);
    let t = dense_transpose(&a);
    assert_eq!(t.shape(), [5, 2]);
    assert_eq!(dense_transpose(&t), a);
}

#[test]
fn test_sum_and_product() {
    let a = dense(&[&["0.1", "0.2"], &["0.3", "0.4"]]);
    assert_eq!(dense_sum(&a, None).unwrap(), dec("1.0"));
    assert_eq!(dense_product(&a, None).unwrap(), dec("0.0024"));

    let ctx = MathContext::with_digits(1, Rounding::Down).unwrap();
    assert_eq!(dense_product(&dense(&[&["9", "9"]]), Some(&ctx)).unwrap(), dec("80"));
}

#[test]
fn test_round_is_idempotent() {
    let ctx = MathContext::with_digits(3, Rounding::HalfUp).unwrap();
    let a = dense(&[&["3.14159", "2.71828"], &["-1.41421", "12345.678"]]);
    let once = dense_round(&a, &ctx).unwrap();
    let twice = dense_round(&once, &ctx).unwrap();
    assert_eq!(once, twice);
    assert_eq!(once, dense(&[&["3.14", "2.72"], &["-1.41", "12300"]]));
}

#[test]
fn test_equals_is_reflexive_and_symmetric() {
    let a = sample_dense(3, 3, 4);
    let b = DenseMatrix::from_matrix(&a);
    assert!(dense_equals(&a, &a));
    assert!(dense_equals(&a, &b));
    assert!(dense_equals(&b, &a));
    assert!(!dense_equals(&a, &sample_dense(3, 3, 5)));
}
