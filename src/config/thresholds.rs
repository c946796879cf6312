use serde::{Deserialize, Serialize};

/// Upper bound on the largest-requests report
pub const MAX_LARGEST_REQUESTS: usize = 10;

/// Recommended limits reported alongside audit results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThresholdsConfig {
    #[serde(default = "default_max_dom_nodes")]
    pub max_dom_nodes: u64,

    #[serde(default = "default_max_dom_depth")]
    pub max_dom_depth: u64,

    #[serde(default = "default_max_dom_width")]
    pub max_dom_width: u64,

    /// Server response time budget for the main document, in ms
    #[serde(default = "default_response_time_ms")]
    pub response_time_ms: f64,

    /// How many requests the byte weight audit lists
    #[serde(default = "default_largest_requests")]
    pub largest_requests: usize,
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        Self {
            max_dom_nodes: default_max_dom_nodes(),
            max_dom_depth: default_max_dom_depth(),
            max_dom_width: default_max_dom_width(),
            response_time_ms: default_response_time_ms(),
            largest_requests: default_largest_requests(),
        }
    }
}

impl ThresholdsConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !self.response_time_ms.is_finite() || self.response_time_ms <= 0.0 {
            return Err(format!(
                "response_time_ms must be a positive number, got {}",
                self.response_time_ms
            ));
        }
        if self.largest_requests == 0 || self.largest_requests > MAX_LARGEST_REQUESTS {
            return Err(format!(
                "largest_requests must be between 1 and {}, got {}",
                MAX_LARGEST_REQUESTS, self.largest_requests
            ));
        }
        Ok(())
    }
}

pub fn default_max_dom_nodes() -> u64 {
    1500
}

pub fn default_max_dom_depth() -> u64 {
    32
}

pub fn default_max_dom_width() -> u64 {
    60
}

pub fn default_response_time_ms() -> f64 {
    600.0
}

pub fn default_largest_requests() -> usize {
    10
}
