//! Interpolation over curve pillars.

use crate::error::{CurveError, CurveResult};

/// Trait for one-dimensional interpolators.
pub trait Interpolator {
    /// Returns the interpolated value at `x`.
    fn interpolate(&self, x: f64) -> CurveResult<f64>;
}

/// Piecewise-linear interpolation between data points.
///
/// Construction validates that the x values are strictly increasing. By
/// default queries outside the data range fail; with
/// [`with_flat_extrapolation`](LinearInterpolator::with_flat_extrapolation)
/// they clamp to the boundary values instead.
#[derive(Debug, Clone)]
pub struct LinearInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
    flat_extrapolation: bool,
}

impl LinearInterpolator {
    /// Creates a new linear interpolator over the given points.
    ///
    /// # Errors
    ///
    /// Fails if fewer than two points are supplied, if the lengths differ,
    /// or if the x values are not strictly increasing.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> CurveResult<Self> {
        if xs.len() < 2 {
            return Err(CurveError::invalid_data(format!(
                "interpolation needs at least 2 points, got {}",
                xs.len()
            )));
        }
        if xs.len() != ys.len() {
            return Err(CurveError::invalid_data(format!(
                "xs and ys must have same length: {} vs {}",
                xs.len(),
                ys.len()
            )));
        }
        if xs.windows(2).any(|w| w[1] <= w[0]) {
            return Err(CurveError::invalid_data(
                "x values must be strictly increasing",
            ));
        }

        Ok(Self {
            xs,
            ys,
            flat_extrapolation: false,
        })
    }

    /// Enables flat extrapolation beyond the data range.
    #[must_use]
    pub fn with_flat_extrapolation(mut self) -> Self {
        self.flat_extrapolation = true;
        self
    }

    /// Finds the segment index `i` with `xs[i] <= x < xs[i+1]`.
    fn segment(&self, x: f64) -> usize {
        match self
            .xs
            .binary_search_by(|probe| probe.partial_cmp(&x).unwrap_or(std::cmp::Ordering::Equal))
        {
            Ok(i) => i.min(self.xs.len() - 2),
            Err(i) => i.saturating_sub(1).min(self.xs.len() - 2),
        }
    }
}

impl Interpolator for LinearInterpolator {
    fn interpolate(&self, x: f64) -> CurveResult<f64> {
        let first = self.xs[0];
        let last = self.xs[self.xs.len() - 1];

        if x < first || x > last {
            if !self.flat_extrapolation {
                return Err(CurveError::interpolation(format!(
                    "{x} outside data range [{first}, {last}]"
                )));
            }
            return Ok(if x < first {
                self.ys[0]
            } else {
                self.ys[self.ys.len() - 1]
            });
        }

        let i = self.segment(x);
        let (x0, x1) = (self.xs[i], self.xs[i + 1]);
        let (y0, y1) = (self.ys[i], self.ys[i + 1]);

        let t = (x - x0) / (x1 - x0);
        Ok(y0 + t * (y1 - y0))
    }
}
