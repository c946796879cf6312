//! Audits built on the scoring and chain engines.
//!
//! Each audit module exposes a free `audit` function taking explicit
//! curves and limits. [`PageAuditor`] bundles them with a validated
//! [`PageScoreConfig`] so the curves are fitted once per configuration.

pub mod byte_weight;
pub mod critical_chains;
pub mod dom_size;
pub mod response_time;

pub use byte_weight::{ByteWeightEntry, ByteWeightResult, ByteWeightTotals};
pub use critical_chains::CriticalChainsResult;
pub use dom_size::{DomExtent, DomMeasure, DomSizeResult, DomStats};
pub use response_time::ResponseTimeResult;

use tracing::debug_span;

use crate::chains::{ChainAnalyzer, ChainTree};
use crate::config::PageScoreConfig;
use crate::core::RequestRecord;
use crate::errors::Result;
use crate::scoring::LogNormalCurve;

#[derive(Debug, Clone)]
pub struct PageAuditor {
    config: PageScoreConfig,
    byte_weight_curve: LogNormalCurve,
    dom_size_curve: LogNormalCurve,
    chains: ChainAnalyzer,
}

impl PageAuditor {
    /// Fails with `InvalidConfiguration` if any curve is malformed
    pub fn new(config: PageScoreConfig) -> Result<Self> {
        let byte_weight_curve = LogNormalCurve::new(config.scoring.byte_weight)
            .map_err(|e| e.for_field("scoring.byte_weight"))?;
        let dom_size_curve = LogNormalCurve::new(config.scoring.dom_size)
            .map_err(|e| e.for_field("scoring.dom_size"))?;
        let chains = ChainAnalyzer::from_config(&config.chains);

        Ok(Self {
            config,
            byte_weight_curve,
            dom_size_curve,
            chains,
        })
    }

    pub fn config(&self) -> &PageScoreConfig {
        &self.config
    }

    pub fn chain_analyzer(&self) -> &ChainAnalyzer {
        &self.chains
    }

    pub fn total_byte_weight(
        &self,
        records: &[RequestRecord],
        throughput: Option<f64>,
    ) -> Result<ByteWeightResult> {
        let _span = debug_span!("total_byte_weight", records = records.len()).entered();
        byte_weight::audit(
            records,
            &self.byte_weight_curve,
            self.config.thresholds.largest_requests,
            throughput,
        )
    }

    pub fn critical_request_chains(&self, tree: &ChainTree) -> Result<CriticalChainsResult> {
        let _span = debug_span!("critical_request_chains").entered();
        critical_chains::audit(tree, &self.chains)
    }

    pub fn dom_size(&self, stats: &DomStats) -> Result<DomSizeResult> {
        let _span = debug_span!("dom_size", nodes = stats.total_dom_nodes).entered();
        dom_size::audit(stats, &self.dom_size_curve, &self.config.thresholds)
    }

    pub fn server_response_time(
        &self,
        records: &[RequestRecord],
        final_url: &str,
    ) -> Result<ResponseTimeResult> {
        let _span = debug_span!("server_response_time", url = final_url).entered();
        response_time::audit(records, final_url, self.config.thresholds.response_time_ms)
    }
}
