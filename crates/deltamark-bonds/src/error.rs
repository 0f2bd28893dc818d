//! Error types for bond construction and pricing.

use rust_decimal::Decimal;
use thiserror::Error;

use deltamark_core::{CoreError, Date};

/// A specialized Result type for bond operations.
pub type BondResult<T> = Result<T, BondError>;

/// The error type for bond operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BondError {
    /// Invalid coupon schedule configuration.
    #[error("invalid schedule: {message}")]
    InvalidSchedule {
        /// Description of the problem.
        message: String,
    },

    /// Invalid bond specification.
    #[error("invalid bond specification: {reason}")]
    InvalidBondSpec {
        /// Description of what is invalid.
        reason: String,
    },

    /// A coupon period has already started but its index fixing is absent.
    #[error("missing {index} fixing for {date}")]
    MissingFixing {
        /// Index name.
        index: String,
        /// The fixing date that was looked up.
        date: Date,
    },

    /// A fixing was added twice with different values and overwriting was
    /// not requested.
    #[error("conflicting fixing for {date}: stored {existing}, new {new}")]
    ConflictingFixing {
        /// The fixing date.
        date: Date,
        /// The value already in the store.
        existing: Decimal,
        /// The rejected new value.
        new: Decimal,
    },

    /// Curve evaluation failed while pricing.
    #[error(transparent)]
    Curve(#[from] CoreError),
}

impl BondError {
    /// Creates an [`BondError::InvalidSchedule`] with the given message.
    pub fn invalid_schedule(message: impl Into<String>) -> Self {
        BondError::InvalidSchedule {
            message: message.into(),
        }
    }

    /// Creates an [`BondError::InvalidBondSpec`] with the given reason.
    pub fn invalid_spec(reason: impl Into<String>) -> Self {
        BondError::InvalidBondSpec {
            reason: reason.into(),
        }
    }
}
