//! Graded scoring for numeric audit metrics.

pub mod log_normal;

pub use crate::config::CurveParams;
pub use log_normal::{display_score, score, LogNormalCurve};
