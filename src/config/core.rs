use serde::{Deserialize, Serialize};

use super::scoring::ScoringConfig;
use super::thresholds::ThresholdsConfig;

/// Root configuration structure for pagescore
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PageScoreConfig {
    /// Log-normal curve parameters per metric
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Recommended limits used by the audits
    #[serde(default)]
    pub thresholds: ThresholdsConfig,

    /// Critical request chain analysis settings
    #[serde(default)]
    pub chains: ChainConfig,
}

/// Limits for walking request chain trees
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainConfig {
    /// Deepest chain the analyzer will follow before giving up
    #[serde(default = "default_max_chain_depth")]
    pub max_depth: usize,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_chain_depth(),
        }
    }
}

impl ChainConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.max_depth == 0 {
            Err("chains.max_depth must be at least 1".to_string())
        } else {
            Ok(())
        }
    }
}

pub fn default_max_chain_depth() -> usize {
    256
}
