//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid date format.
    #[error("Invalid date: {0}. Use YYYY-MM-DD.")]
    InvalidDate(String),

    /// Invalid tenor.
    #[error("Invalid tenor: {0}. Use <n>m or <n>y, e.g. 6m or 5y.")]
    InvalidTenor(String),

    /// Invalid rate.
    #[error("Invalid rate: {0}. Expected a decimal percentage.")]
    InvalidRate(String),

    /// Invalid fixing.
    #[error("Invalid fixing: {0}. Use DATE=RATE, e.g. 2014-08-06=0.2.")]
    InvalidFixing(String),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
