//! Scoring curve configuration
//!
//! Every numerically scored audit is calibrated by a pair of constants: the
//! point of diminishing returns (values at or below it are fully
//! acceptable) and the median (the value that scores exactly 0.5). The
//! defaults track the HTTP Archive distributions the curves were fitted to.

use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};

/// Calibration constants for one log-normal scoring curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveParams {
    /// Raw value at or below which the metric scores 1.0
    pub point_of_diminishing_returns: f64,
    /// Raw value that scores exactly 0.5
    pub median: f64,
}

impl CurveParams {
    pub const fn new(point_of_diminishing_returns: f64, median: f64) -> Self {
        Self {
            point_of_diminishing_returns,
            median,
        }
    }

    /// Check `median > point_of_diminishing_returns > 0`, both finite.
    pub fn validate(&self) -> Result<()> {
        let podr = self.point_of_diminishing_returns;
        let median = self.median;

        if !podr.is_finite() || !median.is_finite() {
            return Err(Error::invalid_configuration(format!(
                "curve parameters must be finite (podr={}, median={})",
                podr, median
            )));
        }
        if podr <= 0.0 {
            return Err(Error::invalid_configuration(format!(
                "point of diminishing returns must be positive, got {}",
                podr
            )));
        }
        if median <= podr {
            return Err(Error::invalid_configuration(format!(
                "median ({}) must be greater than point of diminishing returns ({})",
                median, podr
            )));
        }
        Ok(())
    }
}

/// Per-metric curve parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Total bytes transferred over the network
    #[serde(default = "default_byte_weight_curve")]
    pub byte_weight: CurveParams,

    /// Total DOM element count
    #[serde(default = "default_dom_size_curve")]
    pub dom_size: CurveParams,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            byte_weight: default_byte_weight_curve(),
            dom_size: default_dom_size_curve(),
        }
    }
}

impl ScoringConfig {
    /// Validate every curve, naming the offending metric on failure
    pub fn validate(&self) -> Result<()> {
        self.byte_weight
            .validate()
            .map_err(|e| e.for_field("scoring.byte_weight"))?;
        self.dom_size
            .validate()
            .map_err(|e| e.for_field("scoring.dom_size"))?;
        Ok(())
    }
}

// ~75th and ~90th percentile page weights: 2500 KiB and 4000 KiB
pub fn default_byte_weight_curve() -> CurveParams {
    CurveParams::new(2500.0 * 1024.0, 4000.0 * 1024.0)
}

pub fn default_dom_size_curve() -> CurveParams {
    CurveParams::new(2400.0, 3000.0)
}
