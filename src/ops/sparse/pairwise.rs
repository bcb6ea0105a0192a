//! Sparse add, subtract, scalar multiply and matrix product

use bigdecimal::BigDecimal;
use num_traits::Zero;
use tracing::{debug, trace};

use crate::arith;
use crate::context::MathContext;
use crate::error::Result;
use crate::matrix::{BigMatrix, SparseBuilder, SparseMatrix};
use crate::ops::{check_columns_other_rows, check_same_size, merged_coords};

/// Combine two same-shaped operands over the union of their explicit sets
fn combine_union<L, R, F>(
    left: &L,
    right: &R,
    default_value: BigDecimal,
    combine: F,
) -> Result<SparseMatrix>
where
    L: BigMatrix + ?Sized,
    R: BigMatrix + ?Sized,
    F: Fn(&BigDecimal, &BigDecimal) -> Result<BigDecimal>,
{
    let mut builder = SparseBuilder::new(default_value, left.rows(), left.columns());
    for coord in merged_coords(left, right) {
        let value = combine(
            left.get(coord.row, coord.column),
            right.get(coord.row, coord.column),
        )?;
        builder.internal_set(coord.row, coord.column, value);
    }
    Ok(builder.build())
}

/// Element-wise sum of two sparse operands: C = A + B
///
/// The result default is `left.default + right.default`. Only coordinates
/// explicit in either operand are computed, so the cost is proportional to
/// the explicit entries rather than to `rows * columns`.
///
/// # Errors
///
/// - [`Error::DimensionMismatch`](crate::Error::DimensionMismatch) if the
///   shapes differ
/// - [`Error::Arithmetic`](crate::Error::Arithmetic) from the context
///
/// # Example
///
/// ```
/// use bigdecimal::BigDecimal;
/// use decimat::prelude::*;
///
/// // A (default 1):   B (default 0):   C = A + B (default 1):
/// // [5, 1]           [0, 2]           [5, 3]
/// // [1, 1]       +   [0, 0]       =   [1, 1]
/// let a = SparseMatrix::from_entries(2, 2, BigDecimal::from(1), [(0, 0, BigDecimal::from(5))])?;
/// let b = SparseMatrix::from_entries(2, 2, BigDecimal::from(0), [(0, 1, BigDecimal::from(2))])?;
/// let c = sparse_add(&a, &b, None)?;
/// assert_eq!(*c.sparse_default_value(), BigDecimal::from(1));
/// assert_eq!(*c.get(0, 1), BigDecimal::from(3));
/// # Ok::<(), decimat::Error>(())
/// ```
pub fn sparse_add<L, R>(left: &L, right: &R, ctx: Option<&MathContext>) -> Result<SparseMatrix>
where
    L: BigMatrix + ?Sized,
    R: BigMatrix + ?Sized,
{
    check_same_size("sparse_add", left, right)?;
    trace!(shape = ?left.shape(), "sparse_add");
    let default_value = arith::add(
        left.sparse_default_value(),
        right.sparse_default_value(),
        ctx,
    )?;
    combine_union(left, right, default_value, |a, b| arith::add(a, b, ctx))
}

/// Element-wise difference of two sparse operands: C = A - B
///
/// The result default is `left.default - right.default`.
///
/// # Errors
///
/// Same as [`sparse_add`].
pub fn sparse_subtract<L, R>(
    left: &L,
    right: &R,
    ctx: Option<&MathContext>,
) -> Result<SparseMatrix>
where
    L: BigMatrix + ?Sized,
    R: BigMatrix + ?Sized,
{
    check_same_size("sparse_subtract", left, right)?;
    trace!(shape = ?left.shape(), "sparse_subtract");
    let default_value = arith::subtract(
        left.sparse_default_value(),
        right.sparse_default_value(),
        ctx,
    )?;
    combine_union(left, right, default_value, |a, b| {
        arith::subtract(a, b, ctx)
    })
}

/// Scalar product of a sparse operand: C = A * s
///
/// The result default is `default * s`; each explicit value is multiplied
/// in place.
pub fn sparse_multiply_scalar<M>(
    matrix: &M,
    scalar: &BigDecimal,
    ctx: Option<&MathContext>,
) -> Result<SparseMatrix>
where
    M: BigMatrix + ?Sized,
{
    let default_value = arith::multiply(matrix.sparse_default_value(), scalar, ctx)?;
    let mut builder = SparseBuilder::new(default_value, matrix.rows(), matrix.columns());
    for cv in matrix.coord_values() {
        let value = arith::multiply(cv.value, scalar, ctx)?;
        builder.internal_set(cv.coord.row, cv.coord.column, value);
    }
    Ok(builder.build())
}

/// Sparse matrix product: C = A @ B
///
/// Left's explicit entries are grouped by row and right's by column. For
/// every (left row, right column) pair the two inner index sets are
/// intersected, and the dot product runs over the shared indices only, in
/// ascending order. Pairs with no shared index stay implicit. The result has
/// a zero default.
///
/// The grouping treats implicit cells as zero. When either operand has a
/// nonzero default, every output cell is accumulated over the full shared
/// dimension instead, so the defaults are honored; the result is still
/// sparse.
///
/// # Errors
///
/// - [`Error::DimensionMismatch`](crate::Error::DimensionMismatch) if
///   `left.columns() != right.rows()`
/// - [`Error::Arithmetic`](crate::Error::Arithmetic) from the context
pub fn sparse_multiply<L, R>(
    left: &L,
    right: &R,
    ctx: Option<&MathContext>,
) -> Result<SparseMatrix>
where
    L: BigMatrix + ?Sized,
    R: BigMatrix + ?Sized,
{
    check_columns_other_rows("sparse_multiply", left, right)?;

    let rows = left.rows();
    let columns = right.columns();
    let mut builder = SparseBuilder::new(BigDecimal::zero(), rows, columns);

    if !left.sparse_default_value().is_zero() || !right.sparse_default_value().is_zero() {
        debug!(
            rows,
            columns,
            shared = left.columns(),
            "sparse_multiply: nonzero default, accumulating every cell"
        );
        for row in 0..rows {
            for column in 0..columns {
                let mut sum = BigDecimal::zero();
                for index in 0..left.columns() {
                    let product =
                        arith::multiply(left.get(row, index), right.get(index, column), ctx)?;
                    sum = arith::add(&sum, &product, ctx)?;
                }
                builder.internal_set(row, column, sum);
            }
        }
        return Ok(builder.build());
    }

    let left_by_row = left.to_sparse_nested_map();
    let right_by_column = right.to_transposed_sparse_nested_map();
    debug!(
        rows,
        columns,
        left_rows = left_by_row.len(),
        right_columns = right_by_column.len(),
        "sparse_multiply: intersecting explicit entries"
    );

    let mut shared: Vec<usize> = Vec::new();
    for (&row, left_row) in &left_by_row {
        for (&column, right_column) in &right_by_column {
            shared.clear();
            if left_row.len() <= right_column.len() {
                shared.extend(left_row.keys().copied().filter(|k| right_column.contains_key(k)));
            } else {
                shared.extend(right_column.keys().copied().filter(|k| left_row.contains_key(k)));
            }
            if shared.is_empty() {
                continue;
            }
            shared.sort_unstable();

            let mut sum = BigDecimal::zero();
            for index in &shared {
                let product = arith::multiply(left_row[index], right_column[index], ctx)?;
                sum = arith::add(&sum, &product, ctx)?;
            }
            builder.internal_set(row, column, sum);
        }
    }

    Ok(builder.build())
}
