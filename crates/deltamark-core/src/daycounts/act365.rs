//! Actual/365 Fixed day count convention.

use rust_decimal::Decimal;

use super::DayCount;
use crate::types::Date;

/// Actual/365 Fixed day count convention.
///
/// Actual days between the dates over a fixed 365-day year, leap years
/// included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act365;

impl DayCount for Act365 {
    fn name(&self) -> &'static str {
        "ACT/365F"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        Decimal::from(start.days_between(&end)) / Decimal::from(365)
    }
}
