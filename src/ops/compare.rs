//! Value equality for dense and sparse matrices
//!
//! Cells are compared numerically, so `1.0` equals `1.00`. Neither function
//! looks at the storage strategy: any two matrices can be compared with
//! either one.

use crate::matrix::BigMatrix;
use crate::ops::merged_coords;

/// Returns true if both matrices have the same shape and equal cells
///
/// Every cell is compared. Returns early when both arguments are the same
/// object.
pub fn dense_equals<L, R>(left: &L, right: &R) -> bool
where
    L: BigMatrix + ?Sized,
    R: BigMatrix + ?Sized,
{
    if std::ptr::addr_eq(left, right) {
        return true;
    }
    if left.shape() != right.shape() {
        return false;
    }
    for row in 0..left.rows() {
        for column in 0..left.columns() {
            if left.get(row, column) != right.get(row, column) {
                return false;
            }
        }
    }
    true
}

/// Returns true if both matrices have the same shape and equal cells,
/// visiting only explicit coordinates
///
/// The union of both explicit sets is compared cell by cell. The default
/// values are compared only when some coordinate is implicit in both
/// operands; a default that no cell reads is irrelevant. Matrices with
/// different defaults are therefore equal when every coordinate is explicit
/// in at least one of them.
pub fn sparse_equals<L, R>(left: &L, right: &R) -> bool
where
    L: BigMatrix + ?Sized,
    R: BigMatrix + ?Sized,
{
    if std::ptr::addr_eq(left, right) {
        return true;
    }
    if left.shape() != right.shape() {
        return false;
    }
    let merged = merged_coords(left, right);
    if merged.len() < left.len() && left.sparse_default_value() != right.sparse_default_value() {
        return false;
    }
    merged
        .into_iter()
        .all(|coord| left.get(coord.row, coord.column) == right.get(coord.row, coord.column))
}
