//! Sparse algorithms
//!
//! Each operation touches only the explicit coordinates of its operands plus
//! their default values, and returns a [`SparseMatrix`] whose default is
//! derived analytically:
//!
//! - add / subtract: `left.default (+|-) right.default`
//! - scalar multiply, element operation, round: `f(default)`
//! - transpose: the default unchanged
//! - matrix product: zero
//!
//! [`SparseMatrix`]: crate::matrix::SparseMatrix

mod pairwise;
mod reduce;
mod unary;

pub use pairwise::{sparse_add, sparse_multiply, sparse_multiply_scalar, sparse_subtract};
pub use reduce::{sparse_product, sparse_sum};
pub use unary::{sparse_element_operation, sparse_round, sparse_transpose};
