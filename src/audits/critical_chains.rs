use serde::{Deserialize, Serialize};

use crate::chains::{ChainAnalyzer, ChainStats, ChainTree};
use crate::errors::Result;

/// Informative result: the audit passes only when nothing chains off the
/// navigation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriticalChainsResult {
    pub passed: bool,
    pub chain_count: usize,
    pub longest_chain: ChainStats,
}

pub fn audit(tree: &ChainTree, analyzer: &ChainAnalyzer) -> Result<CriticalChainsResult> {
    let chain_count = analyzer.count_terminal_chains(tree)?;
    let longest_chain = analyzer.longest_chain(tree)?;

    Ok(CriticalChainsResult {
        passed: chain_count == 0,
        chain_count,
        longest_chain,
    })
}
