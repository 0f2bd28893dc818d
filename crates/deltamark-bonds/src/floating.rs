//! Floating rate bond.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use deltamark_core::calendars::BusinessDayConvention;
use deltamark_core::daycounts::DayCountConvention;
use deltamark_core::{Date, Frequency};

use crate::error::{BondError, BondResult};
use crate::index::RateIndex;
use crate::schedule::{Schedule, ScheduleConfig};
use crate::types::{CalendarId, DateGeneration};

/// Complete specification of a floating rate bond.
///
/// One plain struct describes the instrument; [`FloatingRateBond::new`] is
/// the single constructor consuming it. There is no builder chain whose
/// call order matters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloatingRateBondSpec {
    /// Settlement lag in business days.
    pub settlement_days: u32,
    /// Face value per unit.
    pub face_value: Decimal,
    /// Issue date (start of the first accrual period).
    pub issue_date: Date,
    /// Maturity date.
    pub maturity_date: Date,
    /// Coupon frequency.
    pub frequency: Frequency,
    /// Reference rate index.
    pub index: RateIndex,
    /// Additive spread over the index, as a decimal rate.
    pub spread: Decimal,
    /// Accrual day count convention.
    pub day_count: DayCountConvention,
    /// Calendar for settlement and schedule adjustments.
    pub calendar: CalendarId,
    /// Business day convention for schedule adjustments.
    pub convention: BusinessDayConvention,
    /// Schedule anchor generation direction.
    pub generation: DateGeneration,
}

impl FloatingRateBondSpec {
    /// Creates a spec with EUR market defaults: three settlement days,
    /// face 100, semi-annual coupons, zero spread, ACT/360, TARGET
    /// calendar, Following adjustment, backward generation.
    #[must_use]
    pub fn new(issue_date: Date, maturity_date: Date, index: RateIndex) -> Self {
        Self {
            settlement_days: 3,
            face_value: dec!(100),
            issue_date,
            maturity_date,
            frequency: Frequency::SemiAnnual,
            index,
            spread: Decimal::ZERO,
            day_count: DayCountConvention::Act360,
            calendar: CalendarId::Target,
            convention: BusinessDayConvention::Following,
            generation: DateGeneration::Backward,
        }
    }
}

/// A floating rate bond with its generated coupon schedule.
#[derive(Debug, Clone)]
pub struct FloatingRateBond {
    spec: FloatingRateBondSpec,
    schedule: Schedule,
}

impl FloatingRateBond {
    /// Validates the spec and generates the coupon schedule.
    ///
    /// # Errors
    ///
    /// Returns [`BondError::InvalidBondSpec`] for a non-positive face
    /// value or a zero-coupon frequency, and
    /// [`BondError::InvalidSchedule`] when the dates cannot produce a
    /// schedule.
    pub fn new(spec: FloatingRateBondSpec) -> BondResult<Self> {
        if spec.face_value <= Decimal::ZERO {
            return Err(BondError::invalid_spec(format!(
                "face value must be positive, got {}",
                spec.face_value
            )));
        }
        if spec.frequency.is_zero() {
            return Err(BondError::invalid_spec(
                "floating rate bond needs a periodic coupon frequency",
            ));
        }

        let schedule = Schedule::generate(
            ScheduleConfig::new(spec.issue_date, spec.maturity_date, spec.frequency)
                .with_calendar(spec.calendar)
                .with_convention(spec.convention)
                .with_generation(spec.generation),
        )?;

        Ok(Self { spec, schedule })
    }

    /// Returns the settlement lag in business days.
    #[must_use]
    pub fn settlement_days(&self) -> u32 {
        self.spec.settlement_days
    }

    /// Returns the face value.
    #[must_use]
    pub fn face_value(&self) -> Decimal {
        self.spec.face_value
    }

    /// Returns the issue date.
    #[must_use]
    pub fn issue_date(&self) -> Date {
        self.spec.issue_date
    }

    /// Returns the maturity date.
    #[must_use]
    pub fn maturity_date(&self) -> Date {
        self.spec.maturity_date
    }

    /// Returns the reference rate index.
    #[must_use]
    pub fn index(&self) -> &RateIndex {
        &self.spec.index
    }

    /// Returns the spread over the index as a decimal rate.
    #[must_use]
    pub fn spread(&self) -> Decimal {
        self.spec.spread
    }

    /// Returns the accrual day count convention.
    #[must_use]
    pub fn day_count(&self) -> DayCountConvention {
        self.spec.day_count
    }

    /// Returns the bond calendar.
    #[must_use]
    pub fn calendar(&self) -> CalendarId {
        self.spec.calendar
    }

    /// Returns the generated coupon schedule.
    #[must_use]
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Returns the settlement date for a trade on `valuation_date`: the
    /// settlement lag in business days on the bond calendar.
    #[must_use]
    pub fn settlement_date(&self, valuation_date: Date) -> Date {
        self.spec
            .calendar
            .resolve()
            .add_business_days(valuation_date, self.spec.settlement_days as i32)
    }
}
