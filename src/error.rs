//! Error types for decimat

use thiserror::Error;

/// Result type alias using decimat's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in decimat operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Operand shapes are not conformable for the operation
    ///
    /// Raised when add/subtract operands differ in shape, or when the inner
    /// dimensions of a matrix product disagree.
    #[error("Dimension mismatch in '{operation}': left is {left:?}, right is {right:?}")]
    DimensionMismatch {
        /// The operation name
        operation: &'static str,
        /// Left operand shape as [rows, columns]
        left: [usize; 2],
        /// Right operand shape as [rows, columns]
        right: [usize; 2],
    },

    /// The precision-aware arithmetic layer could not produce a result
    #[error("Arithmetic failure: {reason}")]
    Arithmetic {
        /// Description of the failure
        reason: String,
    },

    /// Invalid argument provided to a constructor
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },
}

impl Error {
    /// Create a dimension mismatch error from two `[rows, columns]` shapes
    pub fn dimension_mismatch(operation: &'static str, left: [usize; 2], right: [usize; 2]) -> Self {
        Self::DimensionMismatch {
            operation,
            left,
            right,
        }
    }

    /// Create an arithmetic failure
    pub fn arithmetic(reason: impl Into<String>) -> Self {
        Self::Arithmetic {
            reason: reason.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }
}
