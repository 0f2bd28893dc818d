//! Calendar date type for financial calculations.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};

/// A calendar date.
///
/// Newtype over `chrono::NaiveDate` carrying the handful of operations the
/// workspace needs: construction, fixed-format parsing, month arithmetic
/// with end-of-month clamping, and day counting.
///
/// # Example
///
/// ```rust
/// use deltamark_core::types::Date;
///
/// let issue = Date::from_ymd(2014, 8, 8).unwrap();
/// let first_coupon = issue.add_months(6).unwrap();
/// assert_eq!(first_coupon, Date::from_ymd(2015, 2, 8).unwrap());
/// assert_eq!(issue.days_between(&first_coupon), 184);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidDate`] if the combination is not a real
    /// calendar date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> CoreResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| CoreError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Parses an ISO 8601 date string (`YYYY-MM-DD`).
    pub fn parse(s: &str) -> CoreResult<Self> {
        Self::parse_with_format(s, "%Y-%m-%d")
    }

    /// Parses a date string with an explicit `chrono` format.
    ///
    /// Scenario inputs use the fixed `%Y/%m/%d` format; the CLI uses ISO.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidDate`] if the value does not conform to
    /// the format.
    pub fn parse_with_format(s: &str, format: &str) -> CoreResult<Self> {
        NaiveDate::parse_from_str(s, format)
            .map(Date)
            .map_err(|_| CoreError::invalid_date(format!("cannot parse {s:?} as {format}")))
    }

    /// Formats the date with an explicit `chrono` format.
    #[must_use]
    pub fn format_with(&self, format: &str) -> String {
        self.0.format(format).to_string()
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns true if the date falls on a Saturday or Sunday.
    #[must_use]
    pub fn is_weekend(&self) -> bool {
        matches!(self.0.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Adds a (possibly negative) number of calendar days.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Adds a (possibly negative) number of months.
    ///
    /// When the target month is shorter than the source day, the day is
    /// clamped to the last day of the target month (Jan 31 + 1 month is
    /// Feb 28/29).
    pub fn add_months(&self, months: i32) -> CoreResult<Self> {
        let total = self.year() * 12 + self.month() as i32 - 1 + months;
        let year = total.div_euclid(12);
        let month = (total.rem_euclid(12) + 1) as u32;
        let day = self.day().min(days_in_month(year, month));
        Self::from_ymd(year, month, day)
    }

    /// Returns the signed number of days from `self` to `other`.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the underlying `chrono::NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for Date {
    fn from(d: NaiveDate) -> Self {
        Date(d)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Number of days in the given month.
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if NaiveDate::from_ymd_opt(year, 2, 29).is_some() => 29,
        _ => 28,
    }
}
