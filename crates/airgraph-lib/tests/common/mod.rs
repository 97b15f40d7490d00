// Shared helpers for airgraph-lib integration tests
#![allow(dead_code)]

use std::collections::HashMap;

use airgraph_lib::{Edge, Node, NodeId};

/// Node with an explicit, symmetric cost table. Pairs missing from the
/// table cost zero, which keeps the heuristic admissible.
#[derive(Debug, Clone, PartialEq)]
pub struct TestNode {
    pub id: String,
    costs: HashMap<String, f64>,
}

impl TestNode {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            costs: HashMap::new(),
        }
    }
}

impl Node for TestNode {
    fn id(&self) -> NodeId {
        NodeId::from(self.id.as_str())
    }

    fn cost(&self, other: &Self) -> f64 {
        self.costs.get(&other.id).copied().unwrap_or(0.0)
    }
}

/// Build nodes for `ids` with the given symmetric costs.
pub fn weighted_nodes(ids: &[&str], costs: &[(&str, &str, f64)]) -> Vec<TestNode> {
    let mut nodes: Vec<TestNode> = ids.iter().map(|id| TestNode::new(id)).collect();
    for node in &mut nodes {
        for &(a, b, cost) in costs {
            if node.id == a {
                node.costs.insert(b.to_string(), cost);
            } else if node.id == b {
                node.costs.insert(a.to_string(), cost);
            }
        }
    }
    nodes
}

pub fn plain_nodes(ids: &[&str]) -> Vec<TestNode> {
    weighted_nodes(ids, &[])
}

pub fn edges(pairs: &[(&str, &str)]) -> Vec<Edge> {
    pairs
        .iter()
        .map(|&(a, b)| (NodeId::from(a), NodeId::from(b)))
        .collect()
}

pub fn ids<'a>(path: &[&'a TestNode]) -> Vec<&'a str> {
    path.iter().map(|&node| node.id.as_str()).collect()
}
