//! Quality signals for captured web page loads.
//!
//! Two engines sit at the core:
//!
//! - [`scoring`] maps a raw metric (bytes, DOM nodes, milliseconds) onto a
//!   `[0, 1]` score with a log-normal curve calibrated per metric.
//! - [`chains`] walks the tree of render-blocking requests and summarizes
//!   every chain in it.
//!
//! [`audits`] combines them with per-audit constants from [`config`].
//!
//! ```
//! use pagescore::{ChainAnalyzer, ChainNode, ChainTree, RequestRecord};
//!
//! let css = RequestRecord::new("https://example.com/app.css", "https")
//!     .finished_with(500)
//!     .with_times(0.0, 0.1);
//! let tree = ChainTree::new().with_root(
//!     "nav",
//!     ChainNode::new(RequestRecord::new("https://example.com/", "https"))
//!         .with_child("css", ChainNode::new(css)),
//! );
//!
//! let analyzer = ChainAnalyzer::default();
//! let longest = analyzer.longest_chain(&tree)?;
//! assert_eq!(longest.length, 1);
//! assert_eq!(longest.transfer_size, 500);
//! assert_eq!(analyzer.count_terminal_chains(&tree)?, 1);
//! # Ok::<(), pagescore::Error>(())
//! ```

pub mod audits;
pub mod chains;
pub mod config;
pub mod core;
pub mod errors;
pub mod observability;
pub mod scoring;

// Re-export commonly used types
pub use crate::audits::{
    ByteWeightResult, CriticalChainsResult, DomSizeResult, DomStats, PageAuditor,
    ResponseTimeResult,
};
pub use crate::chains::{ChainAnalyzer, ChainNode, ChainStats, ChainTree, ChainVisit, ChainWalk};
pub use crate::config::{CurveParams, PageScoreConfig};
pub use crate::core::{RequestRecord, RequestTiming};
pub use crate::errors::{Error, Result};
pub use crate::scoring::{display_score, score, LogNormalCurve};
