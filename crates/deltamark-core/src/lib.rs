//! # Deltamark Core
//!
//! Core types and abstractions shared across the Deltamark workspace:
//!
//! - **Types**: [`Date`], [`Frequency`], [`Compounding`]
//! - **Day Count Conventions**: ACT/360 and ACT/365F year fractions
//! - **Business Day Calendars**: weekend-only and TARGET (Eurozone)
//! - **Traits**: the [`YieldCurve`] seam used by curves and pricing engines
//!
//! Every date-dependent computation in the workspace takes its valuation
//! date explicitly; there is no process-wide evaluation-date setting.
//!
//! ## Example
//!
//! ```rust
//! use deltamark_core::prelude::*;
//!
//! let start = Date::from_ymd(2014, 8, 8).unwrap();
//! let end = start.add_months(6).unwrap();
//! let tau = DayCountConvention::Act360.year_fraction(start, end);
//! assert!(tau > rust_decimal::Decimal::ZERO);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]

pub mod calendars;
pub mod daycounts;
pub mod error;
pub mod traits;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::{BusinessDayConvention, Calendar, TargetCalendar, WeekendCalendar};
    pub use crate::daycounts::{DayCount, DayCountConvention};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::traits::YieldCurve;
    pub use crate::types::{Compounding, Date, Frequency};
}

// Re-export commonly used items at crate root
pub use error::{CoreError, CoreResult};
pub use traits::YieldCurve;
pub use types::{Compounding, Date, Frequency};
