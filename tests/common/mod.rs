// Test utility module for pagescore integration tests
#![allow(dead_code)]

use pagescore::{ChainNode, ChainTree, RequestRecord};

/// A finished https request with the given timing (seconds) and size
pub fn request(url: &str, start: f64, end: f64, transfer_size: u64) -> RequestRecord {
    RequestRecord::new(url, "https")
        .finished_with(transfer_size)
        .with_times(start, end)
}

pub fn node(url: &str, start: f64, end: f64, transfer_size: u64) -> ChainNode {
    ChainNode::new(request(url, start, end, transfer_size))
}

/// A tree whose single root is the navigation request for `https://example.com/`
pub fn navigation_tree(children: Vec<(&str, ChainNode)>) -> ChainTree {
    let root = children.into_iter().fold(
        node("https://example.com/", 0.0, 0.05, 12_000),
        |root, (id, child)| root.with_child(id, child),
    );
    ChainTree::new().with_root("navigation", root)
}

/// Number of nodes strictly below `node`
pub fn descendant_count(node: &ChainNode) -> usize {
    node.children
        .values()
        .map(|child| 1 + descendant_count(child))
        .sum()
}

/// Number of leaves strictly below `node`
pub fn leaf_count(node: &ChainNode) -> usize {
    node.children
        .values()
        .map(|child| {
            if child.is_leaf() {
                1
            } else {
                leaf_count(child)
            }
        })
        .sum()
}

/// Deepest descendant, with the root's children at depth 0
pub fn max_depth(node: &ChainNode) -> Option<usize> {
    node.children
        .values()
        .map(|child| max_depth(child).map_or(0, |depth| depth + 1))
        .max()
}
