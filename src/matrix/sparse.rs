//! Sparse matrix storage: struct, builder, creation, getters

use std::collections::HashMap;

use bigdecimal::BigDecimal;
use num_traits::Zero;

use super::{BigMatrix, Coord, CoordValue, Storage};
use crate::error::{Error, Result};

/// Immutable matrix storing a shared default value plus explicit deviations
///
/// Every coordinate without an explicit entry reads as the default value. An
/// explicit entry may hold a value equal to the default.
#[derive(Debug, Clone)]
pub struct SparseMatrix {
    pub(crate) rows: usize,
    pub(crate) columns: usize,
    pub(crate) default_value: BigDecimal,
    pub(crate) entries: HashMap<Coord, BigDecimal>,
}

impl SparseMatrix {
    /// Create an all-zero sparse matrix
    pub fn new(rows: usize, columns: usize) -> Self {
        Self::with_default(BigDecimal::zero(), rows, columns)
    }

    /// Create a sparse matrix where every cell reads as `default_value`
    pub fn with_default(default_value: BigDecimal, rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            default_value,
            entries: HashMap::new(),
        }
    }

    /// Create a sparse matrix from `(row, column, value)` triplets
    ///
    /// Later triplets overwrite earlier ones at the same coordinate. Every
    /// triplet is stored, including values equal to the default.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if a coordinate is out of range.
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
    ///     [(3, 7, BigDecimal::from(42))],
    /// )?;
    /// assert_eq!(m.explicit_len(), 1);
    /// assert_eq!(m.sparse_empty_size(), 999_999);
    /// # Ok::<(), decimat::Error>(())
    /// ```
    pub fn from_entries<I>(
        rows: usize,
        columns: usize,
        default_value: BigDecimal,
        entries: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, BigDecimal)>,
    {
        let mut builder = SparseBuilder::new(default_value, rows, columns);
        for (row, column, value) in entries {
            builder.set(row, column, value)?;
        }
        Ok(builder.build())
    }

    /// Returns true if `(row, column)` has an explicit entry
    pub fn is_explicit(&self, row: usize, column: usize) -> bool {
        self.entries.contains_key(&Coord::new(row, column))
    }
}

impl BigMatrix for SparseMatrix {
    fn rows(&self) -> usize {
        self.rows
    }

    fn columns(&self) -> usize {
        self.columns
    }

    fn storage(&self) -> Storage {
        Storage::Sparse
    }

    fn try_get(&self, row: usize, column: usize) -> Option<&BigDecimal> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        Some(
            self.entries
                .get(&Coord::new(row, column))
                .unwrap_or(&self.default_value),
        )
    }

    fn sparse_default_value(&self) -> &BigDecimal {
        &self.default_value
    }

    fn explicit_len(&self) -> usize {
        self.entries.len()
    }

    fn coord_values(&self) -> Box<dyn Iterator<Item = CoordValue<'_>> + '_> {
        Box::new(
            self.entries
                .iter()
                .map(|(coord, value)| CoordValue { coord: *coord, value }),
        )
    }

    fn coords(&self) -> Box<dyn Iterator<Item = Coord> + '_> {
        Box::new(self.entries.keys().copied())
    }
}

impl PartialEq for SparseMatrix {
    fn eq(&self, other: &Self) -> bool {
        crate::ops::sparse_equals(self, other)
    }
}

impl PartialEq<super::DenseMatrix> for SparseMatrix {
    fn eq(&self, other: &super::DenseMatrix) -> bool {
        crate::ops::sparse_equals(self, other)
    }
}

impl PartialEq<super::Matrix> for SparseMatrix {
    fn eq(&self, other: &super::Matrix) -> bool {
        crate::ops::sparse_equals(self, other)
    }
}

/// Single-writer builder for a [`SparseMatrix`]
///
/// [`set`](Self::set) always stores an explicit entry. Operation results are
/// assembled through a crate-internal path that leaves default-valued cells
/// implicit.
#[derive(Debug, Clone)]
pub struct SparseBuilder {
    inner: SparseMatrix,
}

impl SparseBuilder {
    /// Create a builder where every cell starts as `default_value`
    pub fn new(default_value: BigDecimal, rows: usize, columns: usize) -> Self {
        Self {
            inner: SparseMatrix::with_default(default_value, rows, columns),
        }
    }

    /// The shared default of the matrix being built
    pub fn default_value(&self) -> &BigDecimal {
        &self.inner.default_value
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
        self.inner.entries.insert(Coord::new(row, column), value);
        Ok(())
    }

    /// Store `value` at an in-range coordinate, or leave the cell implicit if
    /// `value` equals the default
    pub(crate) fn internal_set(&mut self, row: usize, column: usize, value: BigDecimal) {
        debug_assert!(row < self.inner.rows && column < self.inner.columns);
        let coord = Coord::new(row, column);
        if value == self.inner.default_value {
            self.inner.entries.remove(&coord);
        } else {
            self.inner.entries.insert(coord, value);
        }
    }

    /// Freeze into an immutable matrix
    pub fn build(self) -> SparseMatrix {
        self.inner
    }
}
