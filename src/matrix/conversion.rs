//! Conversions between dense and sparse storage

use bigdecimal::BigDecimal;

use super::{BigMatrix, DenseBuilder, DenseMatrix, SparseBuilder, SparseMatrix};

impl DenseMatrix {
    /// Copy any matrix into dense storage
    ///
    /// Default-valued cells of a sparse source are filled in, so the cost is
    /// O(rows * columns).
    pub fn from_matrix<M: BigMatrix + ?Sized>(source: &M) -> Self {
        let default_value = source.sparse_default_value();
        let mut builder = DenseBuilder::new(source.rows(), source.columns());
        if source.sparse_empty_size() > 0 {
            for row in 0..source.rows() {
                for column in 0..source.columns() {
                    builder.internal_set(row, column, default_value.clone());
                }
            }
        }
        for cv in source.coord_values() {
            builder.internal_set(cv.coord.row, cv.coord.column, cv.value.clone());
        }
        builder.build()
    }
}

impl SparseMatrix {
    /// Copy any matrix into sparse storage with the given default
    ///
    /// When the source has no implicit cells, or already shares this
    /// default, only its explicit entries are visited. Otherwise every cell
    /// is read.
    pub fn from_matrix<M: BigMatrix + ?Sized>(source: &M, default_value: BigDecimal) -> Self {
        let mut builder = SparseBuilder::new(default_value, source.rows(), source.columns());
        if source.sparse_empty_size() == 0
            || source.sparse_default_value() == builder.default_value()
        {
            for cv in source.coord_values() {
                builder.internal_set(cv.coord.row, cv.coord.column, cv.value.clone());
            }
        } else {
            for row in 0..source.rows() {
                for column in 0..source.columns() {
                    builder.internal_set(row, column, source.get(row, column).clone());
                }
            }
        }
        builder.build()
    }
}
