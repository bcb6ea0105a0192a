//! Integration tests for sparse operations
//!
//! Tests verify:
//! - Default values derived analytically for every operation
//! - Dimension checks
//! - The zero short-circuit of the product reduction
//! - Equality across differing defaults

mod common;

use common::{dec, sparse};
use decimat::prelude::*;
use num_traits::Zero;

// ============================================================================
// Pairwise
// ============================================================================

#[test]
fn test_sparse_add_commutative_with_defaults() {
    let a = sparse(3, 3, "1", &[(0, 0, "4"), (2, 1, "-1")]);
    let b = sparse(3, 3, "0.5", &[(0, 0, "1"), (1, 2, "2.5")]);
    let ab = sparse_add(&a, &b, None).unwrap();
    let ba = sparse_add(&b, &a, None).unwrap();
    assert_eq!(ab, ba);
    assert_eq!(*ab.sparse_default_value(), dec("1.5"));
    assert_eq!(*ab.get(1, 2), dec("3.5"));
}

#[test]
fn test_sparse_dimension_checks() {
    let a = SparseMatrix::new(2, 3);
    let b = SparseMatrix::new(3, 2);
    assert!(matches!(
        sparse_add(&a, &b, None),
        Err(Error::DimensionMismatch { .. })
    ));
    assert!(matches!(
        sparse_subtract(&a, &b, None),
        Err(Error::DimensionMismatch { .. })
    ));
    assert!(matches!(
        sparse_multiply(&a, &SparseMatrix::new(2, 2), None),
        Err(Error::DimensionMismatch { .. })
    ));
    assert_eq!(
        sparse_multiply(&a, &SparseMatrix::new(3, 4), None)
            .unwrap()
            .shape(),
        [2, 4]
    );
}

#[test]
fn test_sparse_multiply_identity() {
    let identity = SparseMatrix::from_matrix(&DenseMatrix::identity(3), dec("0"));
    let m = sparse(3, 2, "0", &[(0, 0, "2"), (1, 1, "-3.5"), (2, 0, "9")]);
    let product = sparse_multiply(&identity, &m, None).unwrap();
    assert_eq!(product, m);
    assert_eq!(product.explicit_len(), 3);
}

#[test]
fn test_sparse_multiply_large_extent_stays_sparse() {
    let n = 100_000;
    let a = sparse(n, n, "0", &[(10, 20, "2"), (500, 7, "3")]);
    let b = sparse(n, n, "0", &[(20, 99_999, "4"), (7, 7, "5")]);
    let c = sparse_multiply(&a, &b, None).unwrap();
    assert_eq!(c.explicit_len(), 2);
    assert_eq!(*c.get(10, 99_999), dec("8"));
    assert_eq!(*c.get(500, 7), dec("15"));
}

// ============================================================================
// Unary
// ============================================================================

#[test]
fn test_sparse_transpose_twice() {
    let a = sparse(2, 4, "3", &[(0, 3, "1"), (1, 0, "2")]);
    let t = sparse_transpose(&a);
    assert_eq!(t.shape(), [4, 2]);
    assert_eq!(sparse_transpose(&t), a);
}

#[test]
fn test_sparse_round_idempotent() {
    let ctx = MathContext::with_digits(2, Rounding::HalfEven).unwrap();
    let a = sparse(2, 2, "0.125", &[(0, 0, "9.87"), (1, 1, "-0.0456")]);
    let once = sparse_round(&a, &ctx).unwrap();
    let twice = sparse_round(&once, &ctx).unwrap();
    assert_eq!(once, twice);
    assert_eq!(*once.sparse_default_value(), dec("0.12"));
    assert_eq!(*once.get(0, 0), dec("9.9"));
    assert_eq!(*once.get(1, 1), dec("-0.046"));
}

#[test]
fn test_sparse_scalar_zero_collapses() {
    let a = sparse(3, 3, "2", &[(0, 0, "1"), (1, 1, "5")]);
    let z = sparse_multiply_scalar(&a, &dec("0"), None).unwrap();
    assert!(z.sparse_default_value().is_zero());
    assert_eq!(z.explicit_len(), 0);
    assert_eq!(z, SparseMatrix::new(3, 3));
}

// ============================================================================
// Reductions
// ============================================================================

#[test]
fn test_sparse_sum_huge_extent() {
    let a = sparse(1_000_000, 1_000_000, "0.5", &[(0, 0, "1.5")]);
    // (10^12 - 1) * 0.5 + 1.5 = 500000000001
    assert_eq!(sparse_sum(&a, None).unwrap(), dec("500000000001"));
}

#[test]
fn test_sparse_product_zero_default_short_circuit() {
    let ctx = MathContext::with_digits(1, Rounding::Unnecessary).unwrap();
    let a = sparse(3, 3, "0", &[(0, 0, "1.23"), (2, 2, "4.56")]);
    assert_eq!(sparse_product(&a, Some(&ctx)).unwrap(), dec("0"));
    // Without implicit cells the explicit values are evaluated and fail
    let full = sparse(1, 2, "7", &[(0, 0, "1.23"), (0, 1, "4.56")]);
    assert!(matches!(
        sparse_product(&full, Some(&ctx)),
        Err(Error::Arithmetic { .. })
    ));
}

// ============================================================================
// Equality
// ============================================================================

#[test]
fn test_sparse_equals_reflexive_symmetric() {
    let a = sparse(2, 3, "1", &[(0, 0, "0")]);
    let b = DenseMatrix::from_matrix(&a);
    assert!(sparse_equals(&a, &a));
    assert!(sparse_equals(&a, &b));
    assert!(sparse_equals(&b, &a));
}

#[test]
fn test_sparse_equals_fully_set_with_different_defaults() {
    // Both hold [5, 1] in every cell; only the declared defaults differ
    let a = sparse(1, 2, "5", &[(0, 0, "5"), (0, 1, "1")]);
    let b = sparse(1, 2, "1", &[(0, 0, "5"), (0, 1, "1")]);
    assert_eq!(a.explicit_len(), 2);
    assert_eq!(a.sparse_empty_size(), 0);
    assert!(dense_equals(&a, &b));
    assert!(sparse_equals(&a, &b));
    assert!(sparse_equals(&b, &a));
    assert_eq!(a, b);
}

#[test]
fn test_equality_against_matrix_enum_both_ways() {
    let s = sparse(2, 2, "0", &[(0, 0, "1"), (1, 1, "1")]);
    let product = dense_multiply(&s, &DenseMatrix::identity(2), None).unwrap();
    assert_eq!(product, s);
    assert_eq!(s, product);
    assert_eq!(DenseMatrix::identity(2), product);
    assert_eq!(product, DenseMatrix::identity(2));
}

#[test]
fn test_empty_sparse_equals_dense_zero() {
    assert!(sparse_equals(&SparseMatrix::new(4, 2), &DenseMatrix::zeros(4, 2)));
    assert_eq!(SparseMatrix::new(4, 2), DenseMatrix::zeros(4, 2));
    assert_ne!(SparseMatrix::new(4, 2), DenseMatrix::zeros(2, 4));
}
