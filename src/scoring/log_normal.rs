//! Log-normal CDF scoring.
//!
//! A raw metric is mapped onto `[0, 1]` through the complementary CDF of a
//! log-normal distribution fitted to two calibration points: the median
//! (score 0.5) and the point of diminishing returns. The shape is chosen so
//! that the curve flattens out near the point of diminishing returns; values
//! at or below it score exactly 1.0.

use std::f64::consts::SQRT_2;

use crate::config::CurveParams;
use crate::errors::{Error, Result};

const MIN_SPREAD: f64 = 1e-12;

/// A scoring curve with its distribution parameters precomputed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogNormalCurve {
    params: CurveParams,
    location: f64,
    shape: f64,
}

impl LogNormalCurve {
    /// Fit the distribution to `params`.
    ///
    /// Fails with [`Error::InvalidConfiguration`] unless
    /// `median > point_of_diminishing_returns > 0`.
    pub fn new(params: CurveParams) -> Result<Self> {
        params.validate()?;

        let location = params.median.ln();
        let log_ratio = (params.point_of_diminishing_returns / params.median).ln();
        let spread = 1.0 - 3.0 * log_ratio - ((log_ratio - 3.0).powi(2) - 8.0).sqrt();

        // podr/median within float noise of 1 collapses the shape to zero
        if spread.is_nan() || spread <= MIN_SPREAD {
            return Err(Error::invalid_configuration(format!(
                "curve between {} and {} is too narrow to score",
                params.point_of_diminishing_returns, params.median
            )));
        }

        Ok(Self {
            params,
            location,
            shape: spread.sqrt() / 2.0,
        })
    }

    pub fn params(&self) -> CurveParams {
        self.params
    }

    /// The unclamped complementary percentile of `value`.
    ///
    /// Non-positive values map to 1.0.
    pub fn complementary_percentile(&self, value: f64) -> f64 {
        if value <= 0.0 {
            return 1.0;
        }
        let standardized = (value.ln() - self.location) / (SQRT_2 * self.shape);
        ((1.0 - erf(standardized)) / 2.0).clamp(0.0, 1.0)
    }

    /// Score `value` in `[0, 1]`; larger values never score higher.
    ///
    /// NaN and infinities are [`Error::InvalidMetric`].
    pub fn score(&self, value: f64) -> Result<f64> {
        if !value.is_finite() {
            return Err(Error::invalid_metric(format!("cannot score {}", value)));
        }
        if value <= self.params.point_of_diminishing_returns {
            return Ok(1.0);
        }
        Ok(self.complementary_percentile(value))
    }

    /// Score on the 0-100 scale, rounded to the nearest integer.
    pub fn display_score(&self, value: f64) -> Result<u8> {
        let score = self.score(value)?;
        Ok((score * 100.0).round().clamp(0.0, 100.0) as u8)
    }
}

/// Score `value` against a curve in one call.
pub fn score(value: f64, params: CurveParams) -> Result<f64> {
    LogNormalCurve::new(params)?.score(value)
}

/// [`score`] on the 0-100 scale.
pub fn display_score(value: f64, params: CurveParams) -> Result<u8> {
    LogNormalCurve::new(params)?.display_score(value)
}

/// Error function, Abramowitz & Stegun 7.1.26 (max abs error 1.5e-7).
fn erf(x: f64) -> f64 {
    let a1 = 0.254829592;
    let a2 = -0.284496736;
    let a3 = 1.421413741;
    let a4 = -1.453152027;
    let a5 = 1.061405429;
    let p = 0.3275911;

    // The coefficients sum to 1 - 1e-9; keep erf(0) exact so the median
    // scores exactly one half
    if x == 0.0 {
        return 0.0;
    }

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + p * x);
    let y = 1.0 - (((((a5 * t + a4) * t) + a3) * t + a2) * t + a1) * t * (-x * x).exp();

    sign * y
}
