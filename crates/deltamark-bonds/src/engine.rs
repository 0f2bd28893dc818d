//! Discounting engine for floating rate bonds.

use rust_decimal::Decimal;
use serde::Serialize;

use deltamark_core::{Date, YieldCurve};

use crate::error::{BondError, BondResult};
use crate::floating::FloatingRateBond;
use crate::index::FixingStore;

/// The kind of a projected cash flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CashFlowKind {
    /// A floating coupon, fixed or projected.
    Coupon,
    /// The face value repaid at maturity.
    Redemption,
}

/// One projected and discounted cash flow.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectedCashFlow {
    /// Payment date.
    pub payment_date: Date,
    /// Kind of flow.
    pub kind: CashFlowKind,
    /// Annualised coupon rate applied (zero for the redemption).
    pub rate: Decimal,
    /// Undiscounted amount.
    pub amount: Decimal,
    /// Discount factor at the payment date.
    pub discount_factor: Decimal,
    /// Present value.
    pub present_value: Decimal,
}

/// Prices a floating rate bond by discounting its projected cash flows.
///
/// The engine is stateless. Coupons whose fixing date is on or before the
/// valuation date must have a historical fixing in the store; later
/// coupons are projected forward off the curve. All flows paying after the
/// settlement date are discounted to the curve's reference date.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscountingEngine;

impl DiscountingEngine {
    /// Creates a new engine.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Projects and discounts the bond's remaining cash flows.
    ///
    /// # Errors
    ///
    /// Returns [`BondError::MissingFixing`] when a started period has no
    /// stored fixing, or a curve error if discounting fails.
    pub fn cash_flows(
        &self,
        bond: &FloatingRateBond,
        curve: &dyn YieldCurve,
        fixings: &FixingStore,
        valuation_date: Date,
    ) -> BondResult<Vec<ProjectedCashFlow>> {
        let settlement = bond.settlement_date(valuation_date);
        let mut flows = Vec::new();

        for period in bond.schedule().periods() {
            if period.payment <= settlement {
                continue;
            }

            let fixing_date = bond.index().fixing_date(period.start);
            let index_rate = if fixing_date <= valuation_date {
                fixings
                    .get(fixing_date)
                    .ok_or_else(|| BondError::MissingFixing {
                        index: bond.index().name().to_string(),
                        date: fixing_date,
                    })?
            } else {
                bond.index().forward_rate(curve, period.start, period.end)?
            };

            let rate = index_rate + bond.spread();
            let tau = bond.day_count().year_fraction(period.start, period.end);
            let amount = bond.face_value() * rate * tau;
            let discount_factor = curve.discount_factor(period.payment)?;

            flows.push(ProjectedCashFlow {
                payment_date: period.payment,
                kind: CashFlowKind::Coupon,
                rate,
                amount,
                discount_factor,
                present_value: amount * discount_factor,
            });
        }

        if let Some(last) = bond.schedule().periods().last() {
            if last.payment > settlement {
                let discount_factor = curve.discount_factor(last.payment)?;
                flows.push(ProjectedCashFlow {
                    payment_date: last.payment,
                    kind: CashFlowKind::Redemption,
                    rate: Decimal::ZERO,
                    amount: bond.face_value(),
                    discount_factor,
                    present_value: bond.face_value() * discount_factor,
                });
            }
        }

        Ok(flows)
    }

    /// Returns the net present value of the bond at the valuation date.
    pub fn npv(
        &self,
        bond: &FloatingRateBond,
        curve: &dyn YieldCurve,
        fixings: &FixingStore,
        valuation_date: Date,
    ) -> BondResult<Decimal> {
        let flows = self.cash_flows(bond, curve, fixings, valuation_date)?;
        Ok(flows.iter().map(|f| f.present_value).sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::prelude::ToPrimitive;
    use rust_decimal_macros::dec;

    use deltamark_core::daycounts::DayCountConvention;
    use deltamark_core::CoreResult;

    use crate::floating::FloatingRateBondSpec;
    use crate::index::RateIndex;

    /// A deterministic flat test curve; discount factors fall linearly in
    /// time so expectations can be computed by hand.
    struct FlatCurve {
        reference: Date,
        rate: Decimal,
    }

    impl YieldCurve for FlatCurve {
        fn reference_date(&self) -> Date {
            self.reference
        }

        fn discount_factor(&self, date: Date) -> CoreResult<Decimal> {
            if date <= self.reference {
                return Ok(Decimal::ONE);
            }
            let t = DayCountConvention::Act360.year_fraction(self.reference, date);
            Ok(Decimal::ONE / (Decimal::ONE + self.rate * t))
        }

        fn zero_rate(&self, _date: Date) -> CoreResult<Decimal> {
            Ok(self.rate)
        }

        fn max_date(&self) -> Date {
            self.reference.add_days(36500)
        }
    }

    fn ymd(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn test_bond() -> FloatingRateBond {
        FloatingRateBond::new(FloatingRateBondSpec::new(
            ymd(2014, 8, 8),
            ymd(2019, 8, 8),
            RateIndex::euribor_6m(),
        ))
        .unwrap()
    }

    #[test]
    fn test_missing_fixing_for_started_period() {
        let bond = test_bond();
        let curve = FlatCurve {
            reference: ymd(2014, 10, 8),
            rate: dec!(0.002),
        };
        let fixings = FixingStore::new();

        let err = DiscountingEngine::new()
            .npv(&bond, &curve, &fixings, ymd(2014, 10, 8))
            .unwrap_err();
        assert_eq!(
            err,
            BondError::MissingFixing {
                index: "EURIBOR-6M".to_string(),
                date: ymd(2014, 8, 6),
            }
        );
    }

    #[test]
    fn test_flow_count_and_first_coupon_uses_fixing() {
        let bond = test_bond();
        let curve = FlatCurve {
            reference: ymd(2014, 10, 8),
            rate: dec!(0.002),
        };
        let mut fixings = FixingStore::new();
        fixings.add_fixing(ymd(2014, 8, 6), dec!(0.004), false).unwrap();

        let flows = DiscountingEngine::new()
            .cash_flows(&bond, &curve, &fixings, ymd(2014, 10, 8))
            .unwrap();

        // Ten coupons plus the redemption.
        assert_eq!(flows.len(), 11);
        assert!(matches!(flows[0].kind, CashFlowKind::Coupon));
        assert!(matches!(flows[10].kind, CashFlowKind::Redemption));

        // First period 2014-08-08 -> 2015-02-09 accrues 185/360 at the
        // stored fixing, not the curve rate.
        let first = &flows[0];
        assert_eq!(first.payment_date, ymd(2015, 2, 9));
        assert_eq!(first.rate, dec!(0.004));
        let expected = 100.0 * 0.004 * 185.0 / 360.0;
        assert!((first.amount.to_f64().unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_spread_raises_every_coupon() {
        let curve = FlatCurve {
            reference: ymd(2014, 10, 8),
            rate: dec!(0.002),
        };
        let mut fixings = FixingStore::new();
        fixings.add_fixing(ymd(2014, 8, 6), dec!(0.002), false).unwrap();

        let flat = test_bond();
        let mut spec = FloatingRateBondSpec::new(
            ymd(2014, 8, 8),
            ymd(2019, 8, 8),
            RateIndex::euribor_6m(),
        );
        spec.spread = dec!(0.005);
        let spread_bond = FloatingRateBond::new(spec).unwrap();

        let engine = DiscountingEngine::new();
        let base = engine.npv(&flat, &curve, &fixings, ymd(2014, 10, 8)).unwrap();
        let with_spread = engine
            .npv(&spread_bond, &curve, &fixings, ymd(2014, 10, 8))
            .unwrap();

        assert!(with_spread > base);
    }

    #[test]
    fn test_past_maturity_prices_to_zero() {
        let bond = test_bond();
        let curve = FlatCurve {
            reference: ymd(2020, 1, 15),
            rate: dec!(0.002),
        };
        let fixings = FixingStore::new();

        // All payment dates precede the settlement date, so nothing flows.
        let npv = DiscountingEngine::new()
            .npv(&bond, &curve, &fixings, ymd(2020, 1, 15))
            .unwrap();
        assert_eq!(npv, Decimal::ZERO);
    }
}
