//! # decimat
//!
//! **Immutable arbitrary-precision decimal matrices with dense and sparse storage.**
//!
//! decimat provides add, subtract, multiply, transpose, reduce, round and
//! equality over matrices of [`BigDecimal`] values, with results that are
//! consistent under a caller-supplied precision context.
//!
//! ## Why decimat?
//!
//! - **Exact by default**: pass no context and every digit is kept
//! - **Precision-consistent**: pass a [`MathContext`] and every primitive
//!   rounds the same way, across dense and sparse algorithms
//! - **Sparsity-aware**: sparse algorithms visit only explicit entries plus a
//!   shared default value, never the full grid
//! - **Immutable**: operands are never written, so they can be shared
//!   across threads without locking
//!
//! ## Quick Start
//!
//! ```rust
//! use bigdecimal::BigDecimal;
//! use decimat::prelude::*;
//!
//! let a = DenseMatrix::identity(3);
//! let b = SparseMatrix::from_entries(3, 3, BigDecimal::from(0), [
//!     (0, 2, BigDecimal::from(7)),
//! ])?;
//!
//! let sum = sparse_add(&a, &b, None)?;
//! let product = dense_multiply(&a, &b, Some(&MathContext::decimal64()))?;
//! assert_eq!(product, b);
//! assert_eq!(sparse_sum(&sum, None)?, BigDecimal::from(10));
//! # Ok::<(), decimat::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `rayon` (default): compute rows of dense matrix products in parallel
//!
//! [`BigDecimal`]: bigdecimal::BigDecimal

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod arith;
pub mod config;
pub mod context;
pub mod error;
pub mod matrix;
pub mod ops;

pub use context::{MathContext, Rounding};
pub use error::{Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::SparsityPolicy;
    pub use crate::context::{MathContext, Rounding};
    pub use crate::error::{Error, Result};
    pub use crate::matrix::{
        BigMatrix, Coord, CoordValue, DenseBuilder, DenseMatrix, Matrix, SparseBuilder,
        SparseMatrix, Storage,
    };
    pub use crate::ops::*;
}
