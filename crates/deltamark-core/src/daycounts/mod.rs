//! Day count conventions.
//!
//! A day count convention turns a pair of dates into a year fraction used
//! for accrual and discounting. Only the two conventions the workspace
//! actually prices with are provided.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::Date;

mod act360;
mod act365;

pub use act360::Act360;
pub use act365::Act365;

/// Trait for day count conventions.
pub trait DayCount: Send + Sync {
    /// Returns the conventional name, e.g. `"ACT/360"`.
    fn name(&self) -> &'static str;

    /// Returns the year fraction between two dates.
    fn year_fraction(&self, start: Date, end: Date) -> Decimal;

    /// Returns the signed day count between two dates.
    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

/// Enumerated day count convention for use in configuration structs.
///
/// Dispatches to the concrete [`DayCount`] implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DayCountConvention {
    /// Actual/360
    #[default]
    Act360,
    /// Actual/365 Fixed
    Act365,
}

impl DayCountConvention {
    /// Returns the year fraction between two dates under this convention.
    #[must_use]
    pub fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        match self {
            DayCountConvention::Act360 => Act360.year_fraction(start, end),
            DayCountConvention::Act365 => Act365.year_fraction(start, end),
        }
    }

    /// Returns the signed day count between two dates.
    #[must_use]
    pub fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }

    /// Returns the conventional name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::Act360 => Act360.name(),
            DayCountConvention::Act365 => Act365.name(),
        }
    }
}

impl fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
