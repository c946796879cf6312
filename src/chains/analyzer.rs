//! Statistics over critical request chains.
//!
//! Every path from a root's child down to any node is a chain. The walk
//! reports, for each node, how long the chain ending there took and how
//! many bytes it moved:
//!
//! - `chain_duration` is measured from the start of the first request of the
//!   root's branch (its first child), so sibling chains share one origin.
//! - `chain_transfer_size` is cumulative over the whole path, the node's own
//!   bytes plus those of every ancestor below the root.

use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::tree::{ChainNode, ChainTree};
use crate::config::{default_max_chain_depth, ChainConfig};
use crate::errors::{Error, Result};

/// One node reached by the chain walk
#[derive(Debug, Clone, Copy)]
pub struct ChainVisit<'a> {
    /// Distance from the root; the root's children sit at depth 0
    pub depth: usize,
    pub id: &'a str,
    pub node: &'a ChainNode,
    /// Milliseconds from the branch start to this request's end
    pub chain_duration: f64,
    /// Bytes transferred along the path ending at this node
    pub chain_transfer_size: u64,
}

/// Summary of a single chain
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainStats {
    /// Milliseconds
    pub duration: f64,
    /// Number of requests in the chain
    pub length: usize,
    pub transfer_size: u64,
}

#[derive(Debug, Clone, Copy)]
struct Frame<'a> {
    id: &'a str,
    node: &'a ChainNode,
    depth: usize,
    inherited_transfer: u64,
}

/// Lazy pre-order walk over a chain tree.
///
/// Yields an error and stops if a node sits at or beyond the depth limit.
#[derive(Debug)]
pub struct ChainWalk<'a> {
    roots: std::vec::IntoIter<&'a ChainNode>,
    stack: Vec<Frame<'a>>,
    branch_start: f64,
    max_depth: usize,
    done: bool,
}

impl<'a> ChainWalk<'a> {
    fn new(roots: Vec<&'a ChainNode>, max_depth: usize) -> Self {
        Self {
            roots: roots.into_iter(),
            stack: Vec::new(),
            branch_start: 0.0,
            max_depth,
            done: false,
        }
    }

    fn push_children(&mut self, node: &'a ChainNode, depth: usize, inherited_transfer: u64) {
        // Reversed so the first child is popped first
        for (id, child) in node.children.iter().rev() {
            self.stack.push(Frame {
                id,
                node: child,
                depth,
                inherited_transfer,
            });
        }
    }

    fn open_next_root(&mut self) -> bool {
        match self.roots.next() {
            Some(root) => {
                if let Some(first) = root.children.values().next() {
                    self.branch_start = first.request.start_time;
                }
                self.push_children(root, 0, 0);
                true
            }
            None => false,
        }
    }
}

impl<'a> Iterator for ChainWalk<'a> {
    type Item = Result<ChainVisit<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let frame = loop {
            if let Some(frame) = self.stack.pop() {
                break frame;
            }
            if !self.open_next_root() {
                self.done = true;
                return None;
            }
        };

        if frame.depth >= self.max_depth {
            self.done = true;
            self.stack.clear();
            return Some(Err(Error::ChainTooDeep {
                id: frame.id.to_string(),
                depth: frame.depth,
                max_depth: self.max_depth,
            }));
        }

        let request = &frame.node.request;
        let chain_transfer_size = frame
            .inherited_transfer
            .saturating_add(request.transfer_size);
        self.push_children(frame.node, frame.depth + 1, chain_transfer_size);

        Some(Ok(ChainVisit {
            depth: frame.depth,
            id: frame.id,
            node: frame.node,
            chain_duration: (request.end_time - self.branch_start) * 1000.0,
            chain_transfer_size,
        }))
    }
}

impl FusedIterator for ChainWalk<'_> {}

/// Walks critical request chain trees and summarizes them.
#[derive(Debug, Clone)]
pub struct ChainAnalyzer {
    max_depth: usize,
}

impl Default for ChainAnalyzer {
    fn default() -> Self {
        Self::new(default_max_chain_depth())
    }
}

impl ChainAnalyzer {
    /// `max_depth` bounds how many requests a single chain may hold
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub fn from_config(config: &ChainConfig) -> Self {
        Self::new(config.max_depth)
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Lazily walk every chain of every root, depth first.
    pub fn walk<'a>(&self, tree: &'a ChainTree) -> ChainWalk<'a> {
        ChainWalk::new(tree.roots().values().collect(), self.max_depth)
    }

    /// Walk the chains hanging off a single root node.
    pub fn walk_from<'a>(&self, root: &'a ChainNode) -> ChainWalk<'a> {
        ChainWalk::new(vec![root], self.max_depth)
    }

    /// Call `visit` for every node below the roots.
    pub fn traverse<'a, F>(&self, tree: &'a ChainTree, mut visit: F) -> Result<()>
    where
        F: FnMut(ChainVisit<'a>),
    {
        for visit_result in self.walk(tree) {
            visit(visit_result?);
        }
        Ok(())
    }

    pub fn visits<'a>(&self, tree: &'a ChainTree) -> Result<Vec<ChainVisit<'a>>> {
        self.walk(tree).collect()
    }

    /// The chain with the greatest duration.
    ///
    /// Only chains longer than zero milliseconds qualify, and ties go to the
    /// chain visited first. Without a qualifying chain the result is all
    /// zeros.
    pub fn longest_chain(&self, tree: &ChainTree) -> Result<ChainStats> {
        let mut stats = ChainStats::default();

        self.traverse(tree, |visit| {
            if visit.chain_duration > stats.duration {
                trace!(id = visit.id, duration = visit.chain_duration, "new longest chain");
                stats = ChainStats {
                    duration: visit.chain_duration,
                    length: visit.depth + 1,
                    transfer_size: visit.chain_transfer_size,
                };
            }
        })?;

        debug!(
            duration = stats.duration,
            length = stats.length,
            transfer_size = stats.transfer_size,
            "longest request chain"
        );
        Ok(stats)
    }

    /// Count the leaves below the navigation root.
    ///
    /// The navigation root itself never counts, even when it has no children.
    pub fn count_terminal_chains(&self, tree: &ChainTree) -> Result<usize> {
        let Some((_, navigation)) = tree.navigation_root() else {
            return Ok(0);
        };

        let mut count = 0;
        for visit in self.walk_from(navigation) {
            if visit?.node.is_leaf() {
                count += 1;
            }
        }
        Ok(count)
    }
}
