//! Dense matrix storage: struct, builder, creation, getters

use bigdecimal::BigDecimal;
use num_traits::{One, Zero};

use super::{BigMatrix, Coord, CoordValue, Storage, zero};
use crate::error::{Error, Result};

/// Immutable matrix storing every cell in row-major order
#[derive(Debug, Clone)]
pub struct DenseMatrix {
    pub(crate) rows: usize,
    pub(crate) columns: usize,
    pub(crate) values: Vec<BigDecimal>,
}

impl DenseMatrix {
    /// Create a dense matrix from row-major values
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `values.len() != rows * columns`.
    ///
    /// # Example
    ///
    /// ```
    /// use bigdecimal::BigDecimal;
    /// use decimat::prelude::*;
    ///
    /// let m = DenseMatrix::new(2, 2, vec![
    ///     BigDecimal::from(1), BigDecimal::from(2),
    ///     BigDecimal::from(3), BigDecimal::from(4),
    /// ])?;
    /// assert_eq!(*m.get(1, 0), BigDecimal::from(3));
    /// # Ok::<(), decimat::Error>(())
    /// ```
    pub fn new(rows: usize, columns: usize, values: Vec<BigDecimal>) -> Result<Self> {
        if values.len() != rows * columns {
            return Err(Error::invalid_argument(
                "values",
                format!(
                    "expected {} values for a {rows}x{columns} matrix, got {}",
                    rows * columns,
                    values.len()
                ),
            ));
        }
        Ok(Self {
            rows,
            columns,
            values,
        })
    }

    /// Create a dense matrix from a vector of rows
    ///
    /// An empty outer vector yields a 0x0 matrix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the rows have different lengths.
    pub fn from_rows(rows: Vec<Vec<BigDecimal>>) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        let mut values = Vec::with_capacity(nrows * ncols);
        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != ncols {
                return Err(Error::invalid_argument(
                    "rows",
                    format!("row {index} has {} columns, expected {ncols}", row.len()),
                ));
            }
            values.extend(row);
        }
        Self::new(nrows, ncols, values)
    }

    /// Create a dense matrix by evaluating `f(row, column)` for every cell
    pub fn from_fn<F>(rows: usize, columns: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> BigDecimal,
    {
        let mut values = Vec::with_capacity(rows * columns);
        for row in 0..rows {
            for column in 0..columns {
                values.push(f(row, column));
            }
        }
        Self {
            rows,
            columns,
            values,
        }
    }

    /// Create a matrix filled with zeros
    pub fn zeros(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            values: vec![BigDecimal::zero(); rows * columns],
        }
    }

    /// Create the `n x n` identity matrix
    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |row, column| {
            if row == column {
                BigDecimal::one()
            } else {
                BigDecimal::zero()
            }
        })
    }

    /// Row-major view of every cell
    pub fn values(&self) -> &[BigDecimal] {
        &self.values
    }

    /// Values of one row
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.rows()`.
    pub fn row(&self, row: usize) -> &[BigDecimal] {
        assert!(row < self.rows, "row {row} out of bounds for {} rows", self.rows);
        &self.values[row * self.columns..(row + 1) * self.columns]
    }
}

impl BigMatrix for DenseMatrix {
    fn rows(&self) -> usize {
        self.rows
    }

    fn columns(&self) -> usize {
        self.columns
    }

    fn storage(&self) -> Storage {
        Storage::Dense
    }

    fn try_get(&self, row: usize, column: usize) -> Option<&BigDecimal> {
        if row < self.rows && column < self.columns {
            self.values.get(row * self.columns + column)
        } else {
            None
        }
    }

    fn sparse_default_value(&self) -> &BigDecimal {
        zero()
    }

    fn explicit_len(&self) -> usize {
        self.values.len()
    }

    fn coord_values(&self) -> Box<dyn Iterator<Item = CoordValue<'_>> + '_> {
        let columns = self.columns;
        Box::new(
            self.values
                .iter()
                .enumerate()
                .map(move |(index, value)| CoordValue {
                    coord: Coord::new(index / columns, index % columns),
                    value,
                }),
        )
    }
}

impl PartialEq for DenseMatrix {
    fn eq(&self, other: &Self) -> bool {
        crate::ops::dense_equals(self, other)
    }
}

impl PartialEq<super::SparseMatrix> for DenseMatrix {
    fn eq(&self, other: &super::SparseMatrix) -> bool {
        crate::ops::sparse_equals(self, other)
    }
}

impl PartialEq<super::Matrix> for DenseMatrix {
    fn eq(&self, other: &super::Matrix) -> bool {
        crate::ops::sparse_equals(self, other)
    }
}

/// Single-writer builder for a [`DenseMatrix`]
///
/// Starts zero-filled; `build()` freezes it.
#[derive(Debug, Clone)]
pub struct DenseBuilder {
    inner: DenseMatrix,
}

impl DenseBuilder {
    /// Create a zero-filled builder of the given shape
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            inner: DenseMatrix::zeros(rows, columns),
        }
    }

    /// Number of rows being built
    pub fn rows(&self) -> usize {
        self.inner.rows
    }

    /// Number of columns being built
    pub fn columns(&self) -> usize {
        self.inner.columns
    }

    /// Store `value` at `(row, column)`
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the coordinate is out of range.
    pub fn set(&mut self, row: usize, column: usize, value: BigDecimal) -> Result<()> {
        if row >= self.inner.rows || column >= self.inner.columns {
            return Err(Error::invalid_argument(
                "coord",
                format!(
                    "({row}, {column}) out of bounds for {}x{} matrix",
                    self.inner.rows, self.inner.columns
                ),
            ));
        }
        self.internal_set(row, column, value);
        Ok(())
    }

    /// Store `value` at an in-range coordinate
    #[inline]
    pub(crate) fn internal_set(&mut self, row: usize, column: usize, value: BigDecimal) {
        debug_assert!(row < self.inner.rows && column < self.inner.columns);
        self.inner.values[row * self.inner.columns + column] = value;
    }

    /// Overwrite a whole row with `values`
    pub(crate) fn internal_set_row(&mut self, row: usize, values: Vec<BigDecimal>) {
        debug_assert_eq!(values.len(), self.inner.columns);
        let start = row * self.inner.columns;
        for (offset, value) in values.into_iter().enumerate() {
            self.inner.values[start + offset] = value;
        }
    }

    /// Freeze into an immutable matrix
    pub fn build(self) -> DenseMatrix {
        self.inner
    }
}
