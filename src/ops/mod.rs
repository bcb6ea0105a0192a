//! Matrix operations engine
//!
//! Two parallel algorithm families over the same [`BigMatrix`] contract:
//!
//! ```text
//! ops
//!   ├── dense    full row/column iteration, dense results
//!   │     ├── dense_add, dense_subtract, dense_multiply_scalar
//!   │     ├── dense_multiply (picks a sparse or dense result)
//!   │     ├── dense_element_operation, dense_transpose, dense_round
//!   │     └── dense_sum, dense_product
//!   ├── sparse   explicit coordinates + default value, sparse results
//!   │     ├── sparse_add, sparse_subtract, sparse_multiply_scalar, sparse_multiply
//!   │     ├── sparse_element_operation, sparse_transpose, sparse_round
//!   │     └── sparse_sum, sparse_product
//!   └── compare  dense_equals, sparse_equals
//! ```
//!
//! Operands are only read. Every operation allocates a private builder,
//! fills it, and returns the frozen result, so calls are safe to run
//! concurrently on shared operands.
//!
//! Arithmetic goes through [`crate::arith`] with an `Option<&MathContext>`:
//! `None` keeps every digit, `Some(ctx)` rounds after each primitive.
//!
//! The family is picked by the caller; any matrix type can be fed to either
//! family, since a dense matrix reports every coordinate as explicit.
//!
//! [`BigMatrix`]: crate::matrix::BigMatrix
//! [`MathContext`]: crate::context::MathContext

mod compare;
mod dense;
mod sparse;

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::matrix::{BigMatrix, Coord};

pub use compare::{dense_equals, sparse_equals};
pub use dense::{
    dense_add, dense_element_operation, dense_multiply, dense_multiply_scalar,
    dense_multiply_with, dense_product, dense_round, dense_subtract, dense_sum, dense_transpose,
};
pub use sparse::{
    sparse_add, sparse_element_operation, sparse_multiply, sparse_multiply_scalar,
    sparse_product, sparse_round, sparse_subtract, sparse_sum, sparse_transpose,
};

/// Validate that both operands have the same shape
pub(crate) fn check_same_size<L, R>(operation: &'static str, left: &L, right: &R) -> Result<()>
where
    L: BigMatrix + ?Sized,
    R: BigMatrix + ?Sized,
{
    if left.shape() != right.shape() {
        return Err(Error::dimension_mismatch(
            operation,
            left.shape(),
            right.shape(),
        ));
    }
    Ok(())
}

/// Validate that `left.columns() == right.rows()`
pub(crate) fn check_columns_other_rows<L, R>(
    operation: &'static str,
    left: &L,
    right: &R,
) -> Result<()>
where
    L: BigMatrix + ?Sized,
    R: BigMatrix + ?Sized,
{
    if left.columns() != right.rows() {
        return Err(Error::dimension_mismatch(
            operation,
            left.shape(),
            right.shape(),
        ));
    }
    Ok(())
}

/// Union of both operands' explicit coordinates
pub(crate) fn merged_coords<L, R>(left: &L, right: &R) -> HashSet<Coord>
where
    L: BigMatrix + ?Sized,
    R: BigMatrix + ?Sized,
{
    let mut merged: HashSet<Coord> = HashSet::with_capacity(left.explicit_len());
    merged.extend(left.coords());
    merged.extend(right.coords());
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::{DenseMatrix, SparseMatrix};
    use bigdecimal::BigDecimal;

    #[test]
    fn test_check_same_size() {
        let a = DenseMatrix::zeros(2, 3);
        let b = SparseMatrix::new(3, 2);
        assert!(check_same_size("op", &a, &a).is_ok());
        assert_eq!(
            check_same_size("op", &a, &b),
            Err(Error::dimension_mismatch("op", [2, 3], [3, 2]))
        );
    }

    #[test]
    fn test_check_columns_other_rows() {
        let a = DenseMatrix::zeros(2, 3);
        assert!(check_columns_other_rows("op", &a, &DenseMatrix::zeros(3, 4)).is_ok());
        assert!(check_columns_other_rows("op", &a, &DenseMatrix::zeros(2, 2)).is_err());
    }

    #[test]
    fn test_merged_coords_deduplicates() {
        let a = SparseMatrix::from_entries(
            2,
            2,
            BigDecimal::from(0),
            [(0, 0, BigDecimal::from(1)), (1, 1, BigDecimal::from(2))],
        )
        .unwrap();
        let b = SparseMatrix::from_entries(
            2,
            2,
            BigDecimal::from(0),
            [(1, 1, BigDecimal::from(3)), (0, 1, BigDecimal::from(4))],
        )
        .unwrap();
        let merged = merged_coords(&a, &b);
        assert_eq!(merged.len(), 3);
        assert!(merged.contains(&Coord::new(0, 1)));
    }
}
