//! Sparse element operation, transpose and round

use bigdecimal::BigDecimal;

use crate::arith;
use crate::context::MathContext;
use crate::error::Result;
use crate::matrix::{BigMatrix, SparseBuilder, SparseMatrix};

/// Apply `operation` to the default value and to every explicit value
///
/// Implicit cells of the result read as `operation(default)`.
pub fn sparse_element_operation<M, F>(matrix: &M, operation: F) -> SparseMatrix
where
    M: BigMatrix + ?Sized,
    F: Fn(&BigDecimal) -> BigDecimal,
{
    let default_value = operation(matrix.sparse_default_value());
    let mut builder = SparseBuilder::new(default_value, matrix.rows(), matrix.columns());
    for cv in matrix.coord_values() {
        builder.internal_set(cv.coord.row, cv.coord.column, operation(cv.value));
    }
    builder.build()
}

/// Transpose: B = A^T, shape `[columns, rows]`, same default
pub fn sparse_transpose<M>(matrix: &M) -> SparseMatrix
where
    M: BigMatrix + ?Sized,
{
    let mut builder = SparseBuilder::new(
        matrix.sparse_default_value().clone(),
        matrix.columns(),
        matrix.rows(),
    );
    for cv in matrix.coord_values() {
        let coord = cv.coord.transposed();
        builder.internal_set(coord.row, coord.column, cv.value.clone());
    }
    builder.build()
}

/// Round the default and every explicit value, stripping trailing zeros
///
/// The shape is preserved.
///
/// # Errors
///
/// Returns [`Error::Arithmetic`](crate::Error::Arithmetic) under
/// [`Rounding::Unnecessary`](crate::context::Rounding::Unnecessary) if a value
/// does not fit.
pub fn sparse_round<M>(matrix: &M, ctx: &MathContext) -> Result<SparseMatrix>
where
    M: BigMatrix + ?Sized,
{
    let default_value = arith::round_canonical(matrix.sparse_default_value(), ctx)?;
    let mut builder = SparseBuilder::new(default_value, matrix.rows(), matrix.columns());
    for cv in matrix.coord_values() {
        let value = arith::round_canonical(cv.value, ctx)?;
        builder.internal_set(cv.coord.row, cv.coord.column, value);
    }
    Ok(builder.build())
}
