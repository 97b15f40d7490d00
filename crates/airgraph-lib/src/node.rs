//! Capability contract for graph participants.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identity of a node within a [`Graph`](crate::Graph).
///
/// Graph operations take ids as `&str`; `NodeId` borrows as `str` so lookups
/// never need to allocate.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl PartialEq<str> for NodeId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for NodeId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Minimal interface any graph element must satisfy.
///
/// `cost` serves both as the edge weight between neighbours and as the
/// heuristic estimate towards a search target. A* only guarantees optimal
/// paths when `cost` is a consistent, symmetric metric (for example a
/// geometric distance); any other cost still guides the search but may yield
/// suboptimal routes.
pub trait Node {
    /// Identifier of this node, unique within a graph and stable for the
    /// node's lifetime.
    fn id(&self) -> NodeId;

    /// Non-negative cost between this node and `other`.
    fn cost(&self, other: &Self) -> f64;
}
