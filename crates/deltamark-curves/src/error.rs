//! Error types for curve construction and evaluation.

use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// The error type for curve operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurveError {
    /// The spec contained no pillars.
    #[error("curve has no pillars")]
    EmptyCurve,

    /// Pillar dates are not strictly increasing.
    #[error("pillar dates must be strictly increasing: {previous} then {current}")]
    UnsortedPillars {
        /// The earlier pillar in spec order.
        previous: String,
        /// The offending pillar.
        current: String,
    },

    /// A pillar date precedes the reference date.
    #[error("pillar {pillar} precedes reference date {reference}")]
    PillarBeforeReference {
        /// The offending pillar date.
        pillar: String,
        /// The curve reference date.
        reference: String,
    },

    /// Interpolation failed.
    #[error("interpolation error: {reason}")]
    Interpolation {
        /// Description of the failure.
        reason: String,
    },

    /// Invalid curve data.
    #[error("invalid curve data: {reason}")]
    InvalidData {
        /// Description of the problem.
        reason: String,
    },
}

impl CurveError {
    /// Creates an [`CurveError::Interpolation`] with the given reason.
    pub fn interpolation(reason: impl Into<String>) -> Self {
        CurveError::Interpolation {
            reason: reason.into(),
        }
    }

    /// Creates an [`CurveError::InvalidData`] with the given reason.
    pub fn invalid_data(reason: impl Into<String>) -> Self {
        CurveError::InvalidData {
            reason: reason.into(),
        }
    }
}
