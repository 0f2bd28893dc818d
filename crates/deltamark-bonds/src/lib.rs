//! # Deltamark Bonds
//!
//! Floating-rate bond construction and discounting.
//!
//! Construction is spec-driven: a [`FloatingRateBondSpec`] fully describes
//! the instrument and [`FloatingRateBond::new`] is the single constructor
//! that validates it and generates the coupon [`Schedule`]. Pricing is a
//! pure function: [`DiscountingEngine::npv`] takes the bond, a curve, the
//! historical fixings, and an explicit valuation date, and returns the net
//! present value.
//!
//! ## Example
//!
//! ```rust,ignore
//! use deltamark_bonds::{DiscountingEngine, FixingStore, FloatingRateBond,
//!     FloatingRateBondSpec, RateIndex};
//!
//! let spec = FloatingRateBondSpec::new(issue, maturity, RateIndex::euribor_6m());
//! let bond = FloatingRateBond::new(spec)?;
//!
//! let mut fixings = FixingStore::new();
//! fixings.add_fixing(fixing_date, rate, false)?;
//!
//! let npv = DiscountingEngine::new().npv(&bond, &curve, &fixings, valuation_date)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod engine;
pub mod error;
pub mod floating;
pub mod index;
pub mod schedule;
pub mod types;

pub use engine::{CashFlowKind, DiscountingEngine, ProjectedCashFlow};
pub use error::{BondError, BondResult};
pub use floating::{FloatingRateBond, FloatingRateBondSpec};
pub use index::{FixingStore, RateIndex};
pub use schedule::{CouponPeriod, Schedule, ScheduleConfig};
pub use types::{CalendarId, DateGeneration};
