//! Business day adjustment conventions.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Calendar;
use crate::types::Date;

/// How a date falling on a non-business day is rolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BusinessDayConvention {
    /// Roll forward to the next business day.
    #[default]
    Following,
    /// Roll forward, unless that crosses a month boundary, in which case
    /// roll backward.
    ModifiedFollowing,
    /// Roll backward to the previous business day.
    Preceding,
    /// Leave the date unchanged.
    Unadjusted,
}

impl fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BusinessDayConvention::Following => "Following",
            BusinessDayConvention::ModifiedFollowing => "Modified Following",
            BusinessDayConvention::Preceding => "Preceding",
            BusinessDayConvention::Unadjusted => "Unadjusted",
        };
        write!(f, "{name}")
    }
}

/// Adjusts a date under the given convention and calendar.
pub(super) fn adjust<C>(date: Date, convention: BusinessDayConvention, calendar: &C) -> Date
where
    C: Calendar + ?Sized,
{
    if calendar.is_business_day(date) {
        return date;
    }

    match convention {
        BusinessDayConvention::Unadjusted => date,
        BusinessDayConvention::Following => calendar.next_business_day(date),
        BusinessDayConvention::Preceding => calendar.previous_business_day(date),
        BusinessDayConvention::ModifiedFollowing => {
            let rolled = calendar.next_business_day(date);
            if rolled.month() == date.month() {
                rolled
            } else {
                calendar.previous_business_day(date)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::WeekendCalendar;

    #[test]
    fn test_following_rolls_forward() {
        let cal = WeekendCalendar;
        // 2015-02-08 is a Sunday
        let sunday = Date::from_ymd(2015, 2, 8).unwrap();
        assert_eq!(
            cal.adjust(sunday, BusinessDayConvention::Following),
            Date::from_ymd(2015, 2, 9).unwrap()
        );
    }

    #[test]
    fn test_business_day_untouched() {
        let cal = WeekendCalendar;
        let wednesday = Date::from_ymd(2015, 2, 11).unwrap();
        for convention in [
            BusinessDayConvention::Following,
            BusinessDayConvention::ModifiedFollowing,
            BusinessDayConvention::Preceding,
            BusinessDayConvention::Unadjusted,
        ] {
            assert_eq!(cal.adjust(wednesday, convention), wednesday);
        }
    }

    #[test]
    fn test_modified_following_respects_month_end() {
        let cal = WeekendCalendar;
        // 2025-08-31 is a Sunday; Following would land in September.
        let month_end = Date::from_ymd(2025, 8, 31).unwrap();
        assert_eq!(
            cal.adjust(month_end, BusinessDayConvention::Following),
            Date::from_ymd(2025, 9, 1).unwrap()
        );
        assert_eq!(
            cal.adjust(month_end, BusinessDayConvention::ModifiedFollowing),
            Date::from_ymd(2025, 8, 29).unwrap()
        );
    }

    #[test]
    fn test_preceding_and_unadjusted() {
        let cal = WeekendCalendar;
        let saturday = Date::from_ymd(2025, 1, 4).unwrap();
        assert_eq!(
            cal.adjust(saturday, BusinessDayConvention::Preceding),
            Date::from_ymd(2025, 1, 3).unwrap()
        );
        assert_eq!(
            cal.adjust(saturday, BusinessDayConvention::Unadjusted),
            saturday
        );
    }
}
