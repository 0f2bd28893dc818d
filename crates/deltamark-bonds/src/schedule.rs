//! Coupon schedule generation.
//!
//! A [`Schedule`] is generated from a single [`ScheduleConfig`]: anchor
//! dates are stepped from the termination date (backward, the market
//! default for bonds) or from the effective date (forward), then adjusted
//! for business days. Uneven divisions produce a short stub at the
//! generation origin's far end.

use serde::{Deserialize, Serialize};

use deltamark_core::calendars::BusinessDayConvention;
use deltamark_core::{Date, Frequency};

use crate::error::{BondError, BondResult};
use crate::types::{CalendarId, DateGeneration};

/// Configuration for schedule generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Start of the first accrual period (issue date).
    pub effective_date: Date,
    /// End of the last accrual period (maturity).
    pub termination_date: Date,
    /// Coupon frequency.
    pub frequency: Frequency,
    /// Calendar for business day adjustments.
    pub calendar: CalendarId,
    /// Business day adjustment convention.
    pub convention: BusinessDayConvention,
    /// Anchor generation direction.
    pub generation: DateGeneration,
}

impl ScheduleConfig {
    /// Creates a configuration with the market defaults: TARGET calendar,
    /// Following adjustment, backward generation.
    #[must_use]
    pub fn new(effective_date: Date, termination_date: Date, frequency: Frequency) -> Self {
        Self {
            effective_date,
            termination_date,
            frequency,
            calendar: CalendarId::Target,
            convention: BusinessDayConvention::Following,
            generation: DateGeneration::Backward,
        }
    }

    /// Sets the calendar.
    #[must_use]
    pub fn with_calendar(mut self, calendar: CalendarId) -> Self {
        self.calendar = calendar;
        self
    }

    /// Sets the business day convention.
    #[must_use]
    pub fn with_convention(mut self, convention: BusinessDayConvention) -> Self {
        self.convention = convention;
        self
    }

    /// Sets the generation direction.
    #[must_use]
    pub fn with_generation(mut self, generation: DateGeneration) -> Self {
        self.generation = generation;
        self
    }
}

/// One coupon accrual period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CouponPeriod {
    /// Adjusted accrual start.
    pub start: Date,
    /// Adjusted accrual end.
    pub end: Date,
    /// Payment date (the adjusted accrual end; no payment delay).
    pub payment: Date,
}

/// A generated coupon schedule.
#[derive(Debug, Clone)]
pub struct Schedule {
    unadjusted: Vec<Date>,
    adjusted: Vec<Date>,
    periods: Vec<CouponPeriod>,
}

impl Schedule {
    /// Generates a schedule from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BondError::InvalidSchedule`] when the termination date is
    /// not after the effective date or date arithmetic fails.
    pub fn generate(config: ScheduleConfig) -> BondResult<Self> {
        if config.termination_date <= config.effective_date {
            return Err(BondError::invalid_schedule(format!(
                "termination {} must be after effective {}",
                config.termination_date, config.effective_date
            )));
        }

        let unadjusted = if config.frequency.is_zero() {
            vec![config.effective_date, config.termination_date]
        } else {
            generate_anchors(&config)?
        };

        let calendar = config.calendar.resolve();
        let adjusted: Vec<Date> = unadjusted
            .iter()
            .map(|d| calendar.adjust(*d, config.convention))
            .collect();

        let periods = adjusted
            .windows(2)
            .map(|pair| CouponPeriod {
                start: pair[0],
                end: pair[1],
                payment: pair[1],
            })
            .collect();

        Ok(Self {
            unadjusted,
            adjusted,
            periods,
        })
    }

    /// Returns the unadjusted anchor dates.
    #[must_use]
    pub fn unadjusted_dates(&self) -> &[Date] {
        &self.unadjusted
    }

    /// Returns the adjusted schedule dates.
    #[must_use]
    pub fn adjusted_dates(&self) -> &[Date] {
        &self.adjusted
    }

    /// Returns the accrual periods.
    #[must_use]
    pub fn periods(&self) -> &[CouponPeriod] {
        &self.periods
    }

    /// Returns the number of accrual periods.
    #[must_use]
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// Returns true when the schedule has no periods.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }
}

/// Steps unadjusted anchors from the generation origin.
///
/// Each anchor is computed from the origin in one jump (`origin + k
/// periods`) rather than by repeated stepping, so month-end clamping does
/// not accumulate drift.
fn generate_anchors(config: &ScheduleConfig) -> BondResult<Vec<Date>> {
    let months = config.frequency.months_per_period() as i32;
    let mut anchors = Vec::new();

    match config.generation {
        DateGeneration::Backward => {
            let mut k = 0;
            loop {
                let date = config
                    .termination_date
                    .add_months(-k * months)
                    .map_err(|e| BondError::invalid_schedule(e.to_string()))?;
                if date <= config.effective_date {
                    anchors.push(config.effective_date);
                    break;
                }
                anchors.push(date);
                k += 1;
            }
            anchors.reverse();
        }
        DateGeneration::Forward => {
            let mut k = 0;
            loop {
                let date = config
                    .effective_date
                    .add_months(k * months)
                    .map_err(|e| BondError::invalid_schedule(e.to_string()))?;
                if date >= config.termination_date {
                    anchors.push(config.termination_date);
                    break;
                }
                anchors.push(date);
                k += 1;
            }
        }
    }

    Ok(anchors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_backward_semiannual_even_division() {
        let config = ScheduleConfig::new(ymd(2014, 8, 8), ymd(2019, 8, 8), Frequency::SemiAnnual);
        let schedule = Schedule::generate(config).unwrap();

        assert_eq!(schedule.len(), 10);
        assert_eq!(schedule.unadjusted_dates().len(), 11);
        assert_eq!(schedule.unadjusted_dates()[0], ymd(2014, 8, 8));
        assert_eq!(schedule.unadjusted_dates()[1], ymd(2015, 2, 8));
        assert_eq!(schedule.unadjusted_dates()[10], ymd(2019, 8, 8));
    }

    #[test]
    fn test_following_adjustment_on_target() {
        let config = ScheduleConfig::new(ymd(2014, 8, 8), ymd(2019, 8, 8), Frequency::SemiAnnual);
        let schedule = Schedule::generate(config).unwrap();

        // 2015-02-08 is a Sunday, 2015-08-08 a Saturday; both roll forward.
        assert_eq!(schedule.adjusted_dates()[1], ymd(2015, 2, 9));
        assert_eq!(schedule.adjusted_dates()[2], ymd(2015, 8, 10));
        // First period accrues from the (business day) issue date.
        let first = schedule.periods()[0];
        assert_eq!(first.start, ymd(2014, 8, 8));
        assert_eq!(first.end, ymd(2015, 2, 9));
        assert_eq!(first.payment, first.end);
    }

    #[test]
    fn test_backward_short_front_stub() {
        // 14 months semiannually: backward generation leaves a 2-month
        // stub at the front.
        let config = ScheduleConfig::new(ymd(2020, 1, 15), ymd(2021, 3, 15), Frequency::SemiAnnual)
            .with_calendar(CalendarId::Weekend)
            .with_convention(BusinessDayConvention::Unadjusted);
        let schedule = Schedule::generate(config).unwrap();

        assert_eq!(
            schedule.unadjusted_dates(),
            &[
                ymd(2020, 1, 15),
                ymd(2020, 3, 15),
                ymd(2020, 9, 15),
                ymd(2021, 3, 15),
            ]
        );
    }

    #[test]
    fn test_forward_short_back_stub() {
        let config = ScheduleConfig::new(ymd(2020, 1, 15), ymd(2021, 3, 15), Frequency::SemiAnnual)
            .with_calendar(CalendarId::Weekend)
            .with_convention(BusinessDayConvention::Unadjusted)
            .with_generation(DateGeneration::Forward);
        let schedule = Schedule::generate(config).unwrap();

        assert_eq!(
            schedule.unadjusted_dates(),
            &[
                ymd(2020, 1, 15),
                ymd(2020, 7, 15),
                ymd(2021, 1, 15),
                ymd(2021, 3, 15),
            ]
        );
    }

    #[test]
    fn test_zero_coupon_schedule() {
        let config = ScheduleConfig::new(ymd(2020, 1, 15), ymd(2025, 1, 15), Frequency::Zero)
            .with_calendar(CalendarId::Weekend);
        let schedule = Schedule::generate(config).unwrap();

        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule.periods()[0].start, ymd(2020, 1, 15));
        assert_eq!(schedule.periods()[0].end, ymd(2025, 1, 15));
    }

    #[test]
    fn test_rejects_inverted_dates() {
        let config = ScheduleConfig::new(ymd(2021, 1, 1), ymd(2020, 1, 1), Frequency::SemiAnnual);
        assert!(matches!(
            Schedule::generate(config),
            Err(BondError::InvalidSchedule { .. })
        ));
    }
}
