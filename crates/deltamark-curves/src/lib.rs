//! # Deltamark Curves
//!
//! Zero curve construction and discounting.
//!
//! A [`ZeroCurve`] is built from a single [`ZeroCurveSpec`] configuration
//! struct: a reference date, pillar dates with zero rates, a day count, and
//! a compounding convention. Rates between pillars are linearly
//! interpolated; beyond the pillars the curve is flat.
//!
//! ## Example
//!
//! ```rust
//! use deltamark_core::prelude::*;
//! use deltamark_curves::{ZeroCurve, ZeroCurveSpec};
//! use rust_decimal_macros::dec;
//!
//! let reference = Date::from_ymd(2014, 10, 8).unwrap();
//! let spec = ZeroCurveSpec {
//!     reference_date: reference,
//!     pillars: vec![
//!         (reference.add_months(6).unwrap(), dec!(0.002)),
//!         (reference.add_months(60).unwrap(), dec!(0.002)),
//!     ],
//!     day_count: DayCountConvention::Act360,
//!     compounding: Compounding::SemiAnnual,
//! };
//!
//! let curve = ZeroCurve::new(spec).unwrap();
//! let df = curve.discount_factor_at(reference.add_months(12).unwrap()).unwrap();
//! assert!(df < rust_decimal::Decimal::ONE);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]

pub mod error;
pub mod interpolation;
mod zero;

pub use error::{CurveError, CurveResult};
pub use interpolation::{Interpolator, LinearInterpolator};
pub use zero::{ZeroCurve, ZeroCurveSpec};
