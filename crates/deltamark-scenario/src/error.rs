//! Error types for the scenario PnL calculator.
//!
//! All conditions are fatal: the batch either produces its full output or
//! fails. The only non-error irregularity, an unmatched transaction, is a
//! defined inner-join semantic and is silently dropped.

use thiserror::Error;

use crate::records::TransactionId;

/// A specialized Result type for scenario operations.
pub type ScenarioResult<T> = Result<T, ScenarioError>;

/// The error type for the scenario PnL calculator.
#[derive(Error, Debug)]
pub enum ScenarioError {
    /// A field value does not conform to its expected format.
    #[error("{path}:{line}: cannot parse {column} value {value:?}")]
    Parse {
        /// Source file path.
        path: String,
        /// 1-based line number, counting the header.
        line: usize,
        /// Column whose value failed.
        column: &'static str,
        /// The offending value, verbatim.
        value: String,
    },

    /// A configured input path does not exist or is unreadable.
    #[error("input file not found or unreadable: {path}")]
    MissingInput {
        /// The missing path.
        path: String,
    },

    /// A required column is absent from an input file.
    #[error("{path}: missing required column {column:?}")]
    Schema {
        /// Source file path.
        path: String,
        /// The missing column name.
        column: &'static str,
    },

    /// More than one baseline row shares a transaction. Joining would
    /// emit one row per combination, so the run is rejected.
    #[error("ambiguous baseline: {count} rows for transaction {transaction_id}")]
    AmbiguousBaseline {
        /// The duplicated transaction.
        transaction_id: TransactionId,
        /// How many baseline rows carry it.
        count: usize,
    },

    /// CSV layer failure.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
