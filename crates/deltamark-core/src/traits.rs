//! Core abstractions shared across the workspace.
//!
//! The single seam here is [`YieldCurve`]: pricing code depends on it
//! rather than on a concrete curve implementation.

use rust_decimal::Decimal;

use crate::daycounts::DayCountConvention;
use crate::error::CoreResult;
use crate::types::Date;

/// Trait for yield curves.
///
/// A yield curve provides discount factors and zero rates for any date at
/// or after its reference date. The reference date is the date the curve
/// discounts to; it is carried by the curve itself, never by global state.
pub trait YieldCurve: Send + Sync {
    /// Returns the curve's reference (valuation) date.
    fn reference_date(&self) -> Date;

    /// Returns the discount factor for a given date.
    ///
    /// The present value of one unit of currency received at `date`;
    /// equals one when `date` is on or before the reference date.
    fn discount_factor(&self, date: Date) -> CoreResult<Decimal>;

    /// Returns the interpolated zero rate for a given date.
    fn zero_rate(&self, date: Date) -> CoreResult<Decimal>;

    /// Returns the simple (money-market) forward rate between two dates.
    ///
    /// Computed from the discount factor ratio:
    /// `f = (df(start)/df(end) - 1) / tau`, with `tau` the year fraction
    /// under `day_count`.
    fn forward_rate(
        &self,
        start: Date,
        end: Date,
        day_count: DayCountConvention,
    ) -> CoreResult<Decimal> {
        let tau = day_count.year_fraction(start, end);
        if tau <= Decimal::ZERO {
            return Ok(Decimal::ZERO);
        }

        let df_start = self.discount_factor(start)?;
        let df_end = self.discount_factor(end)?;
        if df_end == Decimal::ZERO {
            return Ok(Decimal::ZERO);
        }

        Ok((df_start / df_end - Decimal::ONE) / tau)
    }

    /// Returns the last date for which the curve has pillar data.
    fn max_date(&self) -> Date;
}
