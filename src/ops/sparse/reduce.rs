//! Sparse sum and product reductions

use bigdecimal::BigDecimal;
use num_traits::{One, Zero};

use crate::arith;
use crate::context::MathContext;
use crate::error::Result;
use crate::matrix::BigMatrix;

/// Sum of every cell
///
/// Computed as `default * sparse_empty_size() + sum(explicit values)`, so the
/// implicit cells are never enumerated.
pub fn sparse_sum<M>(matrix: &M, ctx: Option<&MathContext>) -> Result<BigDecimal>
where
    M: BigMatrix + ?Sized,
{
    let empty_size = BigDecimal::from(matrix.sparse_empty_size() as u64);
    let common = arith::multiply(&empty_size, matrix.sparse_default_value(), ctx)?;

    let mut values_sum = BigDecimal::zero();
    for cv in matrix.coord_values() {
        values_sum = arith::add(&values_sum, cv.value, ctx)?;
    }

    arith::add(&common, &values_sum, ctx)
}

/// Product of every cell
///
/// Computed as `default ^ sparse_empty_size() * product(explicit values)`.
/// The power is exact without a context and precision-aware with one. If the
/// power is zero (a zero default with at least one implicit cell) the result
/// is zero and the explicit values are not evaluated at all.
///
/// # Example
///
/// ```
/// use bigdecimal::BigDecimal;
/// use decimat::prelude::*;
///
/// let m = SparseMatrix::from_entries(
///     1000,
///     1000,
///     BigDecimal::from(0),
///     [(0, 0, BigDecimal::from(5))],
/// )?;
/// assert_eq!(sparse_product(&m, None)?, BigDecimal::from(0));
/// # Ok::<(), decimat::Error>(())
/// ```
pub fn sparse_product<M>(matrix: &M, ctx: Option<&MathContext>) -> Result<BigDecimal>
where
    M: BigMatrix + ?Sized,
{
    let common = arith::pow(
        matrix.sparse_default_value(),
        matrix.sparse_empty_size() as u64,
        ctx,
    )?;
    if common.is_zero() {
        return Ok(common);
    }

    let mut values_product = BigDecimal::one();
    for cv in matrix.coord_values() {
        values_product = arith::multiply(&values_product, cv.value, ctx)?;
    }

    arith::multiply(&common, &values_product, ctx)
}
