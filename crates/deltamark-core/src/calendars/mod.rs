//! Business day calendars and adjustment conventions.

use crate::types::Date;

mod conventions;
mod target;

pub use conventions::BusinessDayConvention;
pub use target::TargetCalendar;

/// Trait for business day calendars.
///
/// A calendar decides which days are business days for a market; the
/// default methods build date rolling and business-day stepping on top of
/// that single decision.
pub trait Calendar: Send + Sync {
    /// Returns the name of the calendar.
    fn name(&self) -> &'static str;

    /// Returns true if the date is a business day.
    fn is_business_day(&self, date: Date) -> bool;

    /// Returns true if the date is a holiday or weekend.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Adjusts a date according to the given business day convention.
    fn adjust(&self, date: Date, convention: BusinessDayConvention) -> Date {
        conventions::adjust(date, convention, self)
    }

    /// Advances a date by a signed number of business days.
    fn add_business_days(&self, date: Date, days: i32) -> Date {
        let step: i64 = if days >= 0 { 1 } else { -1 };
        let mut remaining = days.abs();
        let mut result = date;

        while remaining > 0 {
            result = result.add_days(step);
            if self.is_business_day(result) {
                remaining -= 1;
            }
        }

        result
    }

    /// Returns the first business day on or after the given date.
    fn next_business_day(&self, date: Date) -> Date {
        let mut result = date;
        while !self.is_business_day(result) {
            result = result.add_days(1);
        }
        result
    }

    /// Returns the last business day on or before the given date.
    fn previous_business_day(&self, date: Date) -> Date {
        let mut result = date;
        while !self.is_business_day(result) {
            result = result.add_days(-1);
        }
        result
    }
}

/// A weekend-only calendar: Saturdays and Sundays are the only holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendCalendar;

impl Calendar for WeekendCalendar {
    fn name(&self) -> &'static str {
        "WEEKEND"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !date.is_weekend()
    }
}
