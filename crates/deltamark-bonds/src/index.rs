//! Floating rate indices and historical fixings.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use deltamark_core::daycounts::DayCountConvention;
use deltamark_core::{CoreResult, Date, YieldCurve};

use crate::error::{BondError, BondResult};
use crate::types::CalendarId;

/// A floating rate index such as EURIBOR-6M.
///
/// Carries the conventions needed to project a coupon: the tenor, the
/// fixing lag, the day count of the quoted rate, and the fixing calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateIndex {
    name: String,
    tenor_months: u32,
    fixing_days: i32,
    day_count: DayCountConvention,
    calendar: CalendarId,
}

impl RateIndex {
    /// Creates an index with explicit conventions.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        tenor_months: u32,
        fixing_days: i32,
        day_count: DayCountConvention,
        calendar: CalendarId,
    ) -> Self {
        Self {
            name: name.into(),
            tenor_months,
            fixing_days,
            day_count,
            calendar,
        }
    }

    /// The standard EURIBOR 6-month index: two TARGET business days of
    /// fixing lag, ACT/360.
    #[must_use]
    pub fn euribor_6m() -> Self {
        Self::new(
            "EURIBOR-6M",
            6,
            2,
            DayCountConvention::Act360,
            CalendarId::Target,
        )
    }

    /// An index with the given tenor and EUR money-market conventions.
    #[must_use]
    pub fn ibor(tenor_months: u32) -> Self {
        Self::new(
            format!("IBOR-{tenor_months}M"),
            tenor_months,
            2,
            DayCountConvention::Act360,
            CalendarId::Target,
        )
    }

    /// Returns the index name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the tenor in months.
    #[must_use]
    pub fn tenor_months(&self) -> u32 {
        self.tenor_months
    }

    /// Returns the fixing lag in business days.
    #[must_use]
    pub fn fixing_days(&self) -> i32 {
        self.fixing_days
    }

    /// Returns the day count of the quoted rate.
    #[must_use]
    pub fn day_count(&self) -> DayCountConvention {
        self.day_count
    }

    /// Returns the fixing calendar.
    #[must_use]
    pub fn calendar(&self) -> CalendarId {
        self.calendar
    }

    /// Returns the fixing date for an accrual period starting at
    /// `period_start`: the fixing lag counted backward in business days.
    #[must_use]
    pub fn fixing_date(&self, period_start: Date) -> Date {
        self.calendar
            .resolve()
            .add_business_days(period_start, -self.fixing_days)
    }

    /// Projects the forward rate for an accrual period off a curve, using
    /// the index's day count.
    pub fn forward_rate(
        &self,
        curve: &dyn YieldCurve,
        start: Date,
        end: Date,
    ) -> CoreResult<Decimal> {
        curve.forward_rate(start, end, self.day_count)
    }
}

/// Historical fixings for one index, keyed by fixing date.
#[derive(Debug, Clone, Default)]
pub struct FixingStore {
    fixings: BTreeMap<Date, Decimal>,
}

impl FixingStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a fixing.
    ///
    /// Re-adding the same value is a no-op. A different value for an
    /// existing date is rejected unless `overwrite` is set, in which case
    /// the replacement is logged.
    pub fn add_fixing(&mut self, date: Date, rate: Decimal, overwrite: bool) -> BondResult<()> {
        if let Some(existing) = self.fixings.get(&date) {
            if *existing == rate {
                return Ok(());
            }
            if !overwrite {
                return Err(BondError::ConflictingFixing {
                    date,
                    existing: *existing,
                    new: rate,
                });
            }
            log::warn!("overwriting fixing for {date}: {existing} -> {rate}");
        }

        self.fixings.insert(date, rate);
        Ok(())
    }

    /// Returns the fixing for a date, if present.
    #[must_use]
    pub fn get(&self, date: Date) -> Option<Decimal> {
        self.fixings.get(&date).copied()
    }

    /// Returns the number of stored fixings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fixings.len()
    }

    /// Returns true when the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fixings.is_empty()
    }
}
