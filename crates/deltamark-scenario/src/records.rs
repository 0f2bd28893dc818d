//! Record types for the scenario PnL calculator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use deltamark_core::Date;

/// The fixed textual date format of scenario inputs and outputs.
pub const SCENARIO_DATE_FORMAT: &str = "%Y/%m/%d";

/// An opaque transaction identifier.
///
/// Kept verbatim as text: parsing identifiers as numbers would lose
/// leading zeros and mangle identifiers wider than the numeric type.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    /// Creates an identifier from its textual form.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        TransactionId(id.into())
    }

    /// Returns the identifier as text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TransactionId {
    fn from(s: &str) -> Self {
        TransactionId::new(s)
    }
}

impl From<String> for TransactionId {
    fn from(s: String) -> Self {
        TransactionId(s)
    }
}

/// One mark-to-market observation: a transaction valued under one
/// scenario date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MtmRecord {
    /// Transaction identifier, verbatim from the source.
    pub transaction_id: TransactionId,
    /// The scenario date of the valuation.
    pub scenario_date: Date,
    /// The mark-to-market value.
    pub mtm: Decimal,
}

impl MtmRecord {
    /// Creates a record.
    #[must_use]
    pub fn new(transaction_id: impl Into<TransactionId>, scenario_date: Date, mtm: Decimal) -> Self {
        Self {
            transaction_id: transaction_id.into(),
            scenario_date,
            mtm,
        }
    }
}

/// One computed PnL row: the MTM difference between a scenario date and
/// the baseline for one transaction. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct PnlRecord {
    /// The non-baseline scenario date.
    pub scenario_date: Date,
    /// Transaction identifier shared by both sides of the join.
    pub transaction_id: TransactionId,
    /// Scenario MTM minus baseline MTM.
    pub pnl: Decimal,
}
