//! Dense algorithms: full row/column iteration into a dense builder

use bigdecimal::BigDecimal;
use num_traits::{One, Zero};
use tracing::debug;

use super::{check_columns_other_rows, check_same_size};
use crate::arith;
use crate::config::SparsityPolicy;
use crate::context::MathContext;
use crate::error::Result;
use crate::matrix::{BigMatrix, DenseBuilder, DenseMatrix, Matrix, SparseBuilder};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Fill a `rows x columns` dense result, stopping at the first failing cell
fn try_from_cells<F>(rows: usize, columns: usize, mut cell: F) -> Result<DenseMatrix>
where
    F: FnMut(usize, usize) -> Result<BigDecimal>,
{
    let mut builder = DenseBuilder::new(rows, columns);
    for row in 0..rows {
        for column in 0..columns {
            builder.internal_set(row, column, cell(row, column)?);
        }
    }
    Ok(builder.build())
}

/// Element-wise sum: C = A + B
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
/// let a = DenseMatrix::identity(2);
/// let c = dense_add(&a, &a, None)?;
/// assert_eq!(*c.get(1, 1), BigDecimal::from(2));
/// # Ok::<(), decimat::Error>(())
/// ```
pub fn dense_add<L, R>(left: &L, right: &R, ctx: Option<&MathContext>) -> Result<DenseMatrix>
where
    L: BigMatrix + ?Sized,
    R: BigMatrix + ?Sized,
{
    check_same_size("dense_add", left, right)?;
    try_from_cells(left.rows(), left.columns(), |row, column| {
        arith::add(left.get(row, column), right.get(row, column), ctx)
    })
}

/// Element-wise difference: C = A - B
///
/// # Errors
///
/// Same as [`dense_add`].
pub fn dense_subtract<L, R>(left: &L, right: &R, ctx: Option<&MathContext>) -> Result<DenseMatrix>
where
    L: BigMatrix + ?Sized,
    R: BigMatrix + ?Sized,
{
    check_same_size("dense_subtract", left, right)?;
    try_from_cells(left.rows(), left.columns(), |row, column| {
        arith::subtract(left.get(row, column), right.get(row, column), ctx)
    })
}

/// Scalar product: C = A * s
pub fn dense_multiply_scalar<M>(
    matrix: &M,
    scalar: &BigDecimal,
    ctx: Option<&MathContext>,
) -> Result<DenseMatrix>
where
    M: BigMatrix + ?Sized,
{
    try_from_cells(matrix.rows(), matrix.columns(), |row, column| {
        arith::multiply(matrix.get(row, column), scalar, ctx)
    })
}

/// Matrix product: C = A @ B
///
/// Uses [`SparsityPolicy::default()`]; see [`dense_multiply_with`].
pub fn dense_multiply<L, R>(left: &L, right: &R, ctx: Option<&MathContext>) -> Result<Matrix>
where
    L: BigMatrix + ?Sized,
    R: BigMatrix + ?Sized,
{
    dense_multiply_with(left, right, ctx, &SparsityPolicy::default())
}

/// Matrix product with an explicit strategy policy: C = A @ B
///
/// Each output cell is the running sum of `left[row, k] * right[k, column]`
/// over the shared dimension in ascending `k`, with the context applied to
/// every multiply and add. The final sum is stored without trailing zeros.
///
/// The result is sparse (zero default) when both operands are sparse with
/// lots of zeroes under `policy`, and dense otherwise. The accumulation is
/// the same either way. With the `rayon` feature, output rows are computed in
/// parallel once there are at least `policy.parallel_min_rows()` of them.
///
/// # Errors
///
/// - [`Error::DimensionMismatch`](crate::Error::DimensionMismatch) if
///   `left.columns() != right.rows()`
/// - [`Error::Arithmetic`](crate::Error::Arithmetic) from the context
pub fn dense_multiply_with<L, R>(
    left: &L,
    right: &R,
    ctx: Option<&MathContext>,
    policy: &SparsityPolicy,
) -> Result<Matrix>
where
    L: BigMatrix + ?Sized,
    R: BigMatrix + ?Sized,
{
    check_columns_other_rows("dense_multiply", left, right)?;

    let rows = left.rows();
    let columns = right.columns();
    let sparse_result =
        left.is_sparse_with_lots_of_zeroes(policy) && right.is_sparse_with_lots_of_zeroes(policy);
    debug!(
        rows,
        columns,
        shared = left.columns(),
        sparse_result,
        "dense_multiply strategy selected"
    );

    let computed = multiply_rows(left, right, ctx, policy)?;

    if sparse_result {
        let mut builder = SparseBuilder::new(BigDecimal::zero(), rows, columns);
        for (row, values) in computed.into_iter().enumerate() {
            for (column, value) in values.into_iter().enumerate() {
                builder.internal_set(row, column, value);
            }
        }
        Ok(Matrix::Sparse(builder.build()))
    } else {
        let mut builder = DenseBuilder::new(rows, columns);
        for (row, values) in computed.into_iter().enumerate() {
            builder.internal_set_row(row, values);
        }
        Ok(Matrix::Dense(builder.build()))
    }
}

fn multiply_rows<L, R>(
    left: &L,
    right: &R,
    ctx: Option<&MathContext>,
    policy: &SparsityPolicy,
) -> Result<Vec<Vec<BigDecimal>>>
where
    L: BigMatrix + ?Sized,
    R: BigMatrix + ?Sized,
{
    let rows = left.rows();

    #[cfg(feature = "rayon")]
    {
        if rows >= policy.parallel_min_rows() {
            tracing::trace!(rows, "dense_multiply rows computed in parallel");
            return (0..rows)
                .into_par_iter()
                .map(|row| multiply_row(left, right, row, ctx))
                .collect();
        }
    }

    #[cfg(not(feature = "rayon"))]
    let _ = policy;

    (0..rows)
        .map(|row| multiply_row(left, right, row, ctx))
        .collect()
}

fn multiply_row<L, R>(
    left: &L,
    right: &R,
    row: usize,
    ctx: Option<&MathContext>,
) -> Result<Vec<BigDecimal>>
where
    L: BigMatrix + ?Sized,
    R: BigMatrix + ?Sized,
{
    (0..right.columns())
        .map(|column| {
            let mut sum = BigDecimal::zero();
            for index in 0..left.columns() {
                let product = arith::multiply(left.get(row, index), right.get(index, column), ctx)?;
                sum = arith::add(&sum, &product, ctx)?;
            }
            Ok(sum.normalized())
        })
        .collect()
}

/// Apply `operation` to every cell
pub fn dense_element_operation<M, F>(matrix: &M, operation: F) -> DenseMatrix
where
    M: BigMatrix + ?Sized,
    F: Fn(&BigDecimal) -> BigDecimal,
{
    DenseMatrix::from_fn(matrix.rows(), matrix.columns(), |row, column| {
        operation(matrix.get(row, column))
    })
}

/// Transpose: B = A^T, shape `[columns, rows]`
pub fn dense_transpose<M>(matrix: &M) -> DenseMatrix
where
    M: BigMatrix + ?Sized,
{
    DenseMatrix::from_fn(matrix.columns(), matrix.rows(), |row, column| {
        matrix.get(column, row).clone()
    })
}

/// Sum of every cell, folded in row-major order
///
/// An empty matrix sums to zero.
pub fn dense_sum<M>(matrix: &M, ctx: Option<&MathContext>) -> Result<BigDecimal>
where
    M: BigMatrix + ?Sized,
{
    let mut result = BigDecimal::zero();
    for row in 0..matrix.rows() {
        for column in 0..matrix.columns() {
            result = arith::add(&result, matrix.get(row, column), ctx)?;
        }
    }
    Ok(result)
}

/// Product of every cell, folded in row-major order
///
/// An empty matrix has product one.
pub fn dense_product<M>(matrix: &M, ctx: Option<&MathContext>) -> Result<BigDecimal>
where
    M: BigMatrix + ?Sized,
{
    let mut result = BigDecimal::one();
    for row in 0..matrix.rows() {
        for column in 0..matrix.columns() {
            result = arith::multiply(&result, matrix.get(row, column), ctx)?;
        }
    }
    Ok(result)
}

/// Round every cell to the context's precision, stripping trailing zeros
///
/// # Errors
///
/// Returns [`Error::Arithmetic`](crate::Error::Arithmetic) under
/// [`Rounding::Unnecessary`](crate::context::Rounding::Unnecessary) if a cell
/// does not fit.
pub fn dense_round<M>(matrix: &M, ctx: &MathContext) -> Result<DenseMatrix>
where
    M: BigMatrix + ?Sized,
{
    try_from_cells(matrix.rows(), matrix.columns(), |row, column| {
        arith::round_canonical(matrix.get(row, column), ctx)
    })
}
