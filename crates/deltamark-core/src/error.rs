//! Error types for the core crate.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The error type for core date and curve operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Error in date calculations or an invalid date.
    #[error("invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Day count calculation error.
    #[error("day count error: {reason}")]
    DayCount {
        /// Description of the error.
        reason: String,
    },

    /// Curve evaluation failed behind the [`crate::traits::YieldCurve`] seam.
    #[error("curve error: {reason}")]
    Curve {
        /// Description of the failure.
        reason: String,
    },
}

impl CoreError {
    /// Creates an [`CoreError::InvalidDate`] with the given message.
    pub fn invalid_date(message: impl Into<String>) -> Self {
        CoreError::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates a [`CoreError::Curve`] with the given reason.
    pub fn curve(reason: impl Into<String>) -> Self {
        CoreError::Curve {
            reason: reason.into(),
        }
    }
}
