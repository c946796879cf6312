//! Critical request chain trees and their analysis.

pub mod analyzer;
pub mod tree;

pub use analyzer::{ChainAnalyzer, ChainStats, ChainVisit, ChainWalk};
pub use tree::{ChainNode, ChainTree};
