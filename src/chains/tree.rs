//! Critical request chain trees.
//!
//! A [`ChainTree`] maps each top-level request id to a [`ChainNode`]. The
//! top-level entries are the roots of the chains (in practice the single
//! navigation request) and are never part of a chain themselves; chains
//! begin at their children. Nodes own their children, so a tree is always
//! finite and acyclic.
//!
//! The serde representation matches the nested-object shape produced by
//! initiator-graph builders:
//!
//! ```json
//! { "1": { "request": { ... }, "children": { "2": { ... } } } }
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::RequestRecord;
use crate::errors::{Error, Result, ResultExt};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChainNode {
    pub request: RequestRecord,
    #[serde(default)]
    pub children: IndexMap<String, ChainNode>,
}

impl ChainNode {
    pub fn new(request: RequestRecord) -> Self {
        Self {
            request,
            children: IndexMap::new(),
        }
    }

    pub fn with_child(mut self, id: impl Into<String>, child: ChainNode) -> Self {
        self.children.insert(id.into(), child);
        self
    }

    /// A leaf ends a chain
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainTree {
    roots: IndexMap<String, ChainNode>,
}

impl ChainTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(mut self, id: impl Into<String>, root: ChainNode) -> Self {
        self.insert_root(id, root);
        self
    }

    /// Insert a top-level entry, replacing any previous entry with that id
    pub fn insert_root(&mut self, id: impl Into<String>, root: ChainNode) -> Option<ChainNode> {
        self.roots.insert(id.into(), root)
    }

    pub fn roots(&self) -> &IndexMap<String, ChainNode> {
        &self.roots
    }

    /// The first top-level entry, which the chains hang off
    pub fn navigation_root(&self) -> Option<(&str, &ChainNode)> {
        self.roots
            .first()
            .map(|(id, node)| (id.as_str(), node))
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(Error::from)
            .context("Failed to parse request chain tree")
    }
}

impl FromIterator<(String, ChainNode)> for ChainTree {
    fn from_iter<I: IntoIterator<Item = (String, ChainNode)>>(iter: I) -> Self {
        Self {
            roots: iter.into_iter().collect(),
        }
    }
}
