use indexmap::{IndexMap, IndexSet};
use tracing::trace;

use crate::error::{Error, Result};
use crate::node::{Node, NodeId};

/// Unordered pair of node identifiers describing an undirected edge.
pub type Edge = (NodeId, NodeId);

/// Undirected simple graph owning its nodes.
///
/// Nodes are stored by id alongside a separate adjacency map of neighbour
/// ids; no node ever refers to another directly. Both maps always share the
/// same key set, adjacency is symmetric and never contains self-loops.
///
/// Neighbour sets preserve the order in which edges were inserted. Searches
/// enumerate neighbours in that order, so it decides which of several equally
/// good paths is returned.
///
/// Every operation that dereferences an id fails with
/// [`Error::NodeNotFound`] when the id is absent, except [`Graph::has`],
/// [`Graph::remove_node`] and [`Graph::remove_edge`].
#[derive(Debug, Clone)]
pub struct Graph<T: Node> {
    nodes: IndexMap<NodeId, T>,
    adjacency: IndexMap<NodeId, IndexSet<NodeId>>,
}

impl<T: Node> Default for Graph<T> {
    fn default() -> Self {
        Self {
            nodes: IndexMap::new(),
            adjacency: IndexMap::new(),
        }
    }
}

impl<T: Node> Graph<T> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from an initial node collection and edge list.
    ///
    /// Nodes with an id already seen are ignored. The first edge that fails
    /// validation aborts construction.
    pub fn from_parts<N, E>(nodes: N, edges: E) -> Result<Self>
    where
        N: IntoIterator<Item = T>,
        E: IntoIterator<Item = Edge>,
    {
        let mut graph = Self::new();
        graph.add_nodes(nodes);
        graph.add_edges(edges)?;
        Ok(graph)
    }

    /// Number of nodes in the graph.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of undirected edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(IndexSet::len).sum::<usize>() / 2
    }

    /// Iterate over the owned nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &T> {
        self.nodes.values()
    }

    /// Iterate over node identifiers in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &NodeId> {
        self.nodes.keys()
    }

    pub fn has(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Return the node stored under `id`.
    pub fn get(&self, id: &str) -> Result<&T> {
        self.nodes.get(id).ok_or_else(|| Error::node_not_found(id))
    }

    /// Resolve `id` to the graph-owned key and node.
    pub(crate) fn entry(&self, id: &str) -> Result<(&NodeId, &T)> {
        self.nodes
            .get_key_value(id)
            .ok_or_else(|| Error::node_not_found(id))
    }

    /// Return the (possibly empty) neighbour set of `id`.
    pub fn neighbours(&self, id: &str) -> Result<&IndexSet<NodeId>> {
        self.adjacency
            .get(id)
            .ok_or_else(|| Error::node_not_found(id))
    }

    /// Whether an edge between `a` and `b` exists. Unknown ids yield `false`.
    pub fn contains_edge(&self, a: &str, b: &str) -> bool {
        self.adjacency
            .get(a)
            .is_some_and(|neighbours| neighbours.contains(b))
    }

    /// Insert `node` unless a node with the same id is already present.
    ///
    /// Returns `true` when the node was inserted. The first insertion wins;
    /// later nodes with the same id are dropped without error.
    pub fn add_node(&mut self, node: T) -> bool {
        let id = node.id();
        if self.nodes.contains_key(&id) {
            return false;
        }
        self.adjacency.insert(id.clone(), IndexSet::new());
        self.nodes.insert(id, node);
        true
    }

    /// Apply [`Graph::add_node`] to each node in order.
    pub fn add_nodes<I>(&mut self, nodes: I)
    where
        I: IntoIterator<Item = T>,
    {
        for node in nodes {
            self.add_node(node);
        }
    }

    /// Remove the node and every edge referencing it.
    ///
    /// Returns the removed node, or `None` when `id` was not present.
    pub fn remove_node(&mut self, id: &str) -> Option<T> {
        let neighbours = self.adjacency.shift_remove(id)?;
        for neighbour in &neighbours {
            if let Some(set) = self.adjacency.get_mut(neighbour) {
                set.shift_remove(id);
            }
        }
        trace!(node = id, edges = neighbours.len(), "removed node");
        self.nodes.shift_remove(id)
    }

    /// Connect `a` and `b`. Adding an existing edge is a no-op.
    pub fn add_edge(&mut self, a: &str, b: &str) -> Result<()> {
        if a == b {
            return Err(Error::SelfLoopNotAllowed { id: a.to_string() });
        }
        if !self.has(a) {
            return Err(Error::node_not_found(a));
        }
        if !self.has(b) {
            return Err(Error::node_not_found(b));
        }

        if let Some(set) = self.adjacency.get_mut(a) {
            set.insert(NodeId::from(b));
        }
        if let Some(set) = self.adjacency.get_mut(b) {
            set.insert(NodeId::from(a));
        }
        Ok(())
    }

    /// Apply [`Graph::add_edge`] to each pair in order.
    ///
    /// Stops at the first failing edge; edges applied before it are kept.
    pub fn add_edges<I>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = Edge>,
    {
        for (a, b) in edges {
            self.add_edge(a.as_str(), b.as_str())?;
        }
        Ok(())
    }

    /// Disconnect `a` and `b` if both exist. Never fails.
    pub fn remove_edge(&mut self, a: &str, b: &str) {
        if !self.has(a) || !self.has(b) {
            return;
        }
        if let Some(set) = self.adjacency.get_mut(a) {
            set.shift_remove(b);
        }
        if let Some(set) = self.adjacency.get_mut(b) {
            set.shift_remove(a);
        }
    }
}

impl<T: Node> FromIterator<T> for Graph<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.add_nodes(iter);
        graph
    }
}

impl<T: Node> Extend<T> for Graph<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_nodes(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Point {
        id: &'static str,
        x: f64,
    }

    impl Node for Point {
        fn id(&self) -> NodeId {
            NodeId::from(self.id)
        }

        fn cost(&self, other: &Self) -> f64 {
            (self.x - other.x).abs()
        }
    }

    fn point(id: &'static str, x: f64) -> Point {
        Point { id, x }
    }

    #[test]
    fn edge_count_counts_each_pair_once() {
        let mut graph: Graph<Point> = [point("a", 0.0), point("b", 1.0), point("c", 2.0)]
            .into_iter()
            .collect();
        graph.add_edge("a", "b").unwrap();
        graph.add_edge("b", "a").unwrap();
        graph.add_edge("b", "c").unwrap();

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.len(), 3);
    }

    #[test]
    fn neighbour_order_survives_removal() {
        let mut graph: Graph<Point> = [
            point("a", 0.0),
            point("b", 1.0),
            point("c", 2.0),
            point("d", 3.0),
        ]
        .into_iter()
        .collect();
        graph.add_edge("a", "b").unwrap();
        graph.add_edge("a", "c").unwrap();
        graph.add_edge("a", "d").unwrap();

        graph.remove_edge("a", "b");
        let order: Vec<&str> = graph
            .neighbours("a")
            .unwrap()
            .iter()
            .map(NodeId::as_str)
            .collect();
        assert_eq!(order, vec!["c", "d"]);
    }
}
