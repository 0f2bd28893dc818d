//! # Deltamark Scenario
//!
//! Scenario PnL calculation from mark-to-market records.
//!
//! Given MTM records keyed by transaction and scenario date, the
//! calculator computes, for every non-baseline scenario date, the
//! per-transaction PnL relative to a configured baseline (valuation)
//! date:
//!
//! 1. records are split into the baseline set and the remainder;
//! 2. each distinct non-baseline date is inner-joined against the
//!    baseline set on transaction identity;
//! 3. every matched pair yields one PnL row, `pnl = scenario - baseline`.
//!
//! The transform is a pure, single-pass batch job: no retries, no partial
//! output, no hidden state. Input arrives as CSV files listed in a CSV
//! manifest; output is a three-column table
//! (`ScenarioDate,TransactionID,pnl`).
//!
//! ## Example
//!
//! ```rust,ignore
//! use deltamark_core::Date;
//! use deltamark_scenario::ScenarioRun;
//!
//! let baseline = Date::from_ymd(2020, 6, 11)?;
//! let pnl = ScenarioRun::new("./config.csv", baseline).run()?;
//! deltamark_scenario::write_pnl_file(&pnl, "./pnl.csv")?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod loader;
pub mod manifest;
pub mod pipeline;
pub mod pnl;
pub mod records;
pub mod writer;

pub use error::{ScenarioError, ScenarioResult};
pub use loader::{load_all, load_mtm_file};
pub use manifest::Manifest;
pub use pipeline::ScenarioRun;
pub use pnl::compute_pnl;
pub use records::{MtmRecord, PnlRecord, TransactionId, SCENARIO_DATE_FORMAT};
pub use writer::{write_pnl, write_pnl_file};
