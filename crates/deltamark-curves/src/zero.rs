//! Zero-coupon yield curve.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use deltamark_core::daycounts::DayCountConvention;
use deltamark_core::{Compounding, CoreError, CoreResult, Date, YieldCurve};

use crate::error::{CurveError, CurveResult};
use crate::interpolation::{Interpolator, LinearInterpolator};

/// Configuration for building a [`ZeroCurve`].
///
/// The curve is fully described by this one struct; there is no builder
/// chain and no ambient evaluation-date state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZeroCurveSpec {
    /// Reference (valuation) date the curve discounts to.
    pub reference_date: Date,
    /// Pillar dates with their zero rates, in ascending date order.
    pub pillars: Vec<(Date, Decimal)>,
    /// Day count used to convert dates into curve times.
    pub day_count: DayCountConvention,
    /// Compounding convention of the quoted zero rates.
    pub compounding: Compounding,
}

/// A zero-coupon yield curve.
///
/// Zero rates between pillars are linearly interpolated in time; beyond
/// the first and last pillar the curve is flat.
#[derive(Debug, Clone)]
pub struct ZeroCurve {
    reference_date: Date,
    dates: Vec<Date>,
    rates: Vec<Decimal>,
    day_count: DayCountConvention,
    compounding: Compounding,

    // Pillar times and rates as f64 for interpolation.
    times: Vec<f64>,
    rates_f64: Vec<f64>,
}

impl ZeroCurve {
    /// Builds a curve from its spec.
    ///
    /// # Errors
    ///
    /// Fails if the spec has no pillars, a pillar precedes the reference
    /// date, or the pillar dates are not strictly increasing.
    pub fn new(spec: ZeroCurveSpec) -> CurveResult<Self> {
        if spec.pillars.is_empty() {
            return Err(CurveError::EmptyCurve);
        }

        for window in spec.pillars.windows(2) {
            if window[1].0 <= window[0].0 {
                return Err(CurveError::UnsortedPillars {
                    previous: window[0].0.to_string(),
                    current: window[1].0.to_string(),
                });
            }
        }

        if let Some((first, _)) = spec.pillars.first() {
            if *first < spec.reference_date {
                return Err(CurveError::PillarBeforeReference {
                    pillar: first.to_string(),
                    reference: spec.reference_date.to_string(),
                });
            }
        }

        let (dates, rates): (Vec<Date>, Vec<Decimal>) = spec.pillars.into_iter().unzip();

        let times: Vec<f64> = dates
            .iter()
            .map(|d| {
                spec.day_count
                    .year_fraction(spec.reference_date, *d)
                    .to_f64()
                    .unwrap_or(0.0)
            })
            .collect();
        let rates_f64: Vec<f64> = rates.iter().map(|r| r.to_f64().unwrap_or(0.0)).collect();

        Ok(Self {
            reference_date: spec.reference_date,
            dates,
            rates,
            day_count: spec.day_count,
            compounding: spec.compounding,
            times,
            rates_f64,
        })
    }

    /// Returns the reference date.
    #[must_use]
    pub fn reference_date(&self) -> Date {
        self.reference_date
    }

    /// Returns the pillar dates.
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Returns the pillar zero rates.
    #[must_use]
    pub fn rates(&self) -> &[Decimal] {
        &self.rates
    }

    /// Returns the compounding convention of the zero rates.
    #[must_use]
    pub fn compounding(&self) -> Compounding {
        self.compounding
    }

    /// Returns the day count convention of the curve.
    #[must_use]
    pub fn day_count(&self) -> DayCountConvention {
        self.day_count
    }

    /// Returns the interpolated zero rate at a given date.
    pub fn zero_rate_at(&self, date: Date) -> CurveResult<Decimal> {
        let rate = self.zero_rate_f64(date)?;
        Ok(Decimal::from_f64_retain(rate).unwrap_or(Decimal::ZERO))
    }

    /// Returns the discount factor for a given date.
    ///
    /// One for dates on or before the reference date; otherwise derived
    /// from the interpolated zero rate under the curve's compounding.
    pub fn discount_factor_at(&self, date: Date) -> CurveResult<Decimal> {
        if date <= self.reference_date {
            return Ok(Decimal::ONE);
        }

        let t = self
            .day_count
            .year_fraction(self.reference_date, date)
            .to_f64()
            .unwrap_or(0.0);
        let rate = self.zero_rate_f64(date)?;
        let df = discount_from_zero(rate, t, self.compounding);

        Ok(Decimal::from_f64_retain(df).unwrap_or(Decimal::ONE))
    }

    fn zero_rate_f64(&self, date: Date) -> CurveResult<f64> {
        if self.rates_f64.len() == 1 || date <= self.dates[0] {
            return Ok(self.rates_f64[0]);
        }

        let t = self
            .day_count
            .year_fraction(self.reference_date, date)
            .to_f64()
            .unwrap_or(0.0);

        LinearInterpolator::new(self.times.clone(), self.rates_f64.clone())?
            .with_flat_extrapolation()
            .interpolate(t)
    }
}

/// Discount factor implied by a zero rate over `t` years.
fn discount_from_zero(rate: f64, t: f64, compounding: Compounding) -> f64 {
    match compounding.periods_per_year() {
        Some(m) => {
            let m = f64::from(m);
            (1.0 + rate / m).powf(-m * t)
        }
        None => match compounding {
            Compounding::Simple => 1.0 / (1.0 + rate * t),
            _ => (-rate * t).exp(),
        },
    }
}

impl YieldCurve for ZeroCurve {
    fn reference_date(&self) -> Date {
        self.reference_date
    }

    fn discount_factor(&self, date: Date) -> CoreResult<Decimal> {
        self.discount_factor_at(date)
            .map_err(|e| CoreError::curve(e.to_string()))
    }

    fn zero_rate(&self, date: Date) -> CoreResult<Decimal> {
        self.zero_rate_at(date)
            .map_err(|e| CoreError::curve(e.to_string()))
    }

    fn max_date(&self) -> Date {
        self.dates[self.dates.len() - 1]
    }
}
