//! Immutable decimal matrices
//!
//! Two storage strategies share one read-only contract, [`BigMatrix`]:
//!
//! - **Dense** ([`DenseMatrix`]): every cell is stored. Every coordinate
//!   counts as explicit, and the default value is zero but never observed.
//!
//! - **Sparse** ([`SparseMatrix`]): a single shared default value plus a map
//!   of coordinates whose value deviates from it. O(explicit) storage.
//!
//! Results are assembled through a single-writer builder
//! ([`DenseBuilder`], [`SparseBuilder`]) and frozen with `build()`. Nothing
//! writes to a matrix after it has been built, so matrices can be shared
//! freely across threads.
//!
//! [`Matrix`] wraps either representation and is returned where the
//! representation is chosen at run time.

mod conversion;
mod dense;
mod sparse;

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use bigdecimal::BigDecimal;
use num_traits::Zero;

use crate::config::SparsityPolicy;

pub use dense::{DenseBuilder, DenseMatrix};
pub use sparse::{SparseBuilder, SparseMatrix};

/// Explicit entries grouped by an outer index, then an inner index
///
/// Produced by [`BigMatrix::to_sparse_nested_map`] (row -> column -> value)
/// and [`BigMatrix::to_transposed_sparse_nested_map`] (column -> row -> value).
pub type NestedMap<'a> = HashMap<usize, HashMap<usize, &'a BigDecimal>>;

pub(crate) fn zero() -> &'static BigDecimal {
    static ZERO: OnceLock<BigDecimal> = OnceLock::new();
    ZERO.get_or_init(BigDecimal::zero)
}

/// A cell position: zero-based (row, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Row index
    pub row: usize,
    /// Column index
    pub column: usize,
}

impl Coord {
    /// Create a coordinate
    #[inline]
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// The same cell seen through a transpose
    #[inline]
    pub fn transposed(self) -> Self {
        Self {
            row: self.column,
            column: self.row,
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// An explicit entry: a coordinate and the value stored there
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordValue<'a> {
    /// Where the value lives
    pub coord: Coord,
    /// The stored value
    pub value: &'a BigDecimal,
}

/// Storage strategy of a matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Storage {
    /// Every cell stored
    Dense,
    /// Shared default plus explicit deviations
    Sparse,
}

impl Storage {
    /// Returns the storage name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Storage::Dense => "dense",
            Storage::Sparse => "sparse",
        }
    }
}

impl fmt::Display for Storage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Read-only matrix contract consumed by every operation
///
/// Implementors must keep `rows()` and `columns()` fixed for the matrix's
/// lifetime, and the explicit entries must lie inside that extent without
/// duplicates.
pub trait BigMatrix: Send + Sync {
    /// Number of rows
    fn rows(&self) -> usize;

    /// Number of columns
    fn columns(&self) -> usize;

    /// Storage strategy
    fn storage(&self) -> Storage;

    /// Value at `(row, column)`, or `None` if the coordinate is out of range
    fn try_get(&self, row: usize, column: usize) -> Option<&BigDecimal>;

    /// Shared fill value of non-explicit coordinates (zero for dense matrices)
    fn sparse_default_value(&self) -> &BigDecimal;

    /// Number of explicitly stored coordinates
    fn explicit_len(&self) -> usize;

    /// Iterate over exactly the explicit coordinates and their values
    ///
    /// Enumeration order is unspecified.
    fn coord_values(&self) -> Box<dyn Iterator<Item = CoordValue<'_>> + '_>;

    /// Shape as [rows, columns]
    #[inline]
    fn shape(&self) -> [usize; 2] {
        [self.rows(), self.columns()]
    }

    /// Total number of cells
    #[inline]
    fn len(&self) -> usize {
        self.rows() * self.columns()
    }

    /// Returns true if the matrix has no cells
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value at `(row, column)`
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of range.
    fn get(&self, row: usize, column: usize) -> &BigDecimal {
        match self.try_get(row, column) {
            Some(value) => value,
            None => panic!(
                "coordinate ({row}, {column}) out of bounds for {}x{} matrix",
                self.rows(),
                self.columns()
            ),
        }
    }

    /// Number of coordinates not explicitly stored
    #[inline]
    fn sparse_empty_size(&self) -> usize {
        self.len() - self.explicit_len()
    }

    /// Iterate over exactly the explicit coordinates
    fn coords(&self) -> Box<dyn Iterator<Item = Coord> + '_> {
        Box::new(self.coord_values().map(|cv| cv.coord))
    }

    /// Explicit entries grouped row -> column -> value
    fn to_sparse_nested_map(&self) -> NestedMap<'_> {
        let mut map: NestedMap<'_> = HashMap::new();
        for cv in self.coord_values() {
            map.entry(cv.coord.row)
                .or_default()
                .insert(cv.coord.column, cv.value);
        }
        map
    }

    /// Explicit entries grouped column -> row -> value
    fn to_transposed_sparse_nested_map(&self) -> NestedMap<'_> {
        let mut map: NestedMap<'_> = HashMap::new();
        for cv in self.coord_values() {
            map.entry(cv.coord.column)
                .or_default()
                .insert(cv.coord.row, cv.value);
        }
        map
    }

    /// Fraction of cells that are explicitly stored
    ///
    /// An empty matrix has density 0.
    fn density(&self) -> f64 {
        let total = self.len();
        if total == 0 {
            0.0
        } else {
            self.explicit_len() as f64 / total as f64
        }
    }

    /// Returns true for sparse matrices with a zero default whose explicit
    /// density does not exceed the policy's `max_density`
    fn is_sparse_with_lots_of_zeroes(&self, policy: &SparsityPolicy) -> bool {
        self.storage() == Storage::Sparse
            && self.sparse_default_value().is_zero()
            && self.density() <= policy.max_density()
    }
}

impl<M: BigMatrix + ?Sized> BigMatrix for &M {
    fn rows(&self) -> usize {
        (**self).rows()
    }

    fn columns(&self) -> usize {
        (**self).columns()
    }

    fn storage(&self) -> Storage {
        (**self).storage()
    }

    fn try_get(&self, row: usize, column: usize) -> Option<&BigDecimal> {
        (**self).try_get(row, column)
    }

    fn sparse_default_value(&self) -> &BigDecimal {
        (**self).sparse_default_value()
    }

    fn explicit_len(&self) -> usize {
        (**self).explicit_len()
    }

    fn coord_values(&self) -> Box<dyn Iterator<Item = CoordValue<'_>> + '_> {
        (**self).coord_values()
    }
}

/// A matrix in either representation
///
/// Returned by operations that choose the result representation at run time,
/// such as [`crate::ops::dense_multiply`].
#[derive(Debug, Clone)]
pub enum Matrix {
    /// Dense storage
    Dense(DenseMatrix),
    /// Sparse storage
    Sparse(SparseMatrix),
}

impl Matrix {
    /// Returns true if the matrix uses dense storage
    pub fn is_dense(&self) -> bool {
        matches!(self, Matrix::Dense(_))
    }

    /// Returns true if the matrix uses sparse storage
    pub fn is_sparse(&self) -> bool {
        matches!(self, Matrix::Sparse(_))
    }

    /// Borrow the dense matrix, if that is the representation
    pub fn as_dense(&self) -> Option<&DenseMatrix> {
        match self {
            Matrix::Dense(m) => Some(m),
            Matrix::Sparse(_) => None,
        }
    }

    /// Borrow the sparse matrix, if that is the representation
    pub fn as_sparse(&self) -> Option<&SparseMatrix> {
        match self {
            Matrix::Sparse(m) => Some(m),
            Matrix::Dense(_) => None,
        }
    }

    /// Convert into dense storage, copying only if the matrix is sparse
    pub fn into_dense(self) -> DenseMatrix {
        match self {
            Matrix::Dense(m) => m,
            Matrix::Sparse(m) => DenseMatrix::from_matrix(&m),
        }
    }

    /// Convert into sparse storage, copying only if the matrix is dense
    ///
    /// A dense matrix is converted with a zero default.
    pub fn into_sparse(self) -> SparseMatrix {
        match self {
            Matrix::Sparse(m) => m,
            Matrix::Dense(m) => SparseMatrix::from_matrix(&m, BigDecimal::zero()),
        }
    }

    fn inner(&self) -> &dyn BigMatrix {
        match self {
            Matrix::Dense(m) => m,
            Matrix::Sparse(m) => m,
        }
    }
}

impl BigMatrix for Matrix {
    fn rows(&self) -> usize {
        self.inner().rows()
    }

    fn columns(&self) -> usize {
        self.inner().columns()
    }

    fn storage(&self) -> Storage {
        self.inner().storage()
    }

    fn try_get(&self, row: usize, column: usize) -> Option<&BigDecimal> {
        self.inner().try_get(row, column)
    }

    fn sparse_default_value(&self) -> &BigDecimal {
        self.inner().sparse_default_value()
    }

    fn explicit_len(&self) -> usize {
        self.inner().explicit_len()
    }

    fn coord_values(&self) -> Box<dyn Iterator<Item = CoordValue<'_>> + '_> {
        self.inner().coord_values()
    }
}

impl From<DenseMatrix> for Matrix {
    fn from(m: DenseMatrix) -> Self {
        Matrix::Dense(m)
    }
}

impl From<SparseMatrix> for Matrix {
    fn from(m: SparseMatrix) -> Self {
        Matrix::Sparse(m)
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        crate::ops::sparse_equals(self, other)
    }
}

impl PartialEq<DenseMatrix> for Matrix {
    fn eq(&self, other: &DenseMatrix) -> bool {
        crate::ops::sparse_equals(self, other)
    }
}

impl PartialEq<SparseMatrix> for Matrix {
    fn eq(&self, other: &SparseMatrix) -> bool {
        crate::ops::sparse_equals(self, other)
    }
}
