//! A* shortest-path search over a [`Graph`].
//!
//! The node cost function is used twice: as the heuristic from a node to the
//! target and as the weight of the edge between two neighbours. The result is
//! optimal whenever that cost is a consistent, symmetric metric.

use std::collections::{HashMap, HashSet};

use indexmap::IndexSet;
use tracing::{debug, trace};

use crate::error::Result;
use crate::graph::Graph;
use crate::node::Node;
use crate::traversal::resolve;

/// A* search engine bound to a graph.
///
/// The engine holds no search state between calls, so one instance can
/// answer any number of queries against the same graph.
#[derive(Debug)]
pub struct Astar<'g, T: Node> {
    graph: &'g Graph<T>,
}

impl<'g, T: Node> Clone for Astar<'g, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'g, T: Node> Copy for Astar<'g, T> {}

impl<'g, T: Node> Astar<'g, T> {
    pub fn new(graph: &'g Graph<T>) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &'g Graph<T> {
        self.graph
    }

    /// Find the lowest-cost path from `start` to `target`, both inclusive.
    ///
    /// Fails with [`Error::NodeNotFound`](crate::Error::NodeNotFound) when
    /// either endpoint is missing. An unreachable target yields an empty
    /// path. Among open nodes with equal `f = g + h` the one with the smaller
    /// `h` is expanded first; remaining ties go to the node discovered first.
    pub fn find_path(&self, start: &str, target: &str) -> Result<Vec<&'g T>> {
        let (start, start_node) = self.graph.entry(start)?;
        let (target, target_node) = self.graph.entry(target)?;
        let (start, target) = (start.as_str(), target.as_str());

        debug!(start, target, "starting a* search");

        let mut state = SearchState::default();
        state.open.insert(start);
        state.parents.insert(start, None);
        state.h_cost.insert(start, start_node.cost(target_node));
        state.g_cost.insert(start, 0.0);

        while let Some(current) = state.lowest_f_cost() {
            state.open.shift_remove(current);
            state.closed.insert(current);
            trace!(node = current, "expanding");

            if current == target {
                let path = state.reconstruct_path(start, target);
                debug!(
                    start,
                    target,
                    expanded = state.closed.len(),
                    hops = path.len() - 1,
                    "a* reached target"
                );
                return resolve(self.graph, path);
            }

            self.expand(&mut state, current, target_node)?;
        }

        debug!(
            start,
            target,
            expanded = state.closed.len(),
            "a* exhausted open set"
        );
        Ok(Vec::new())
    }

    fn expand(&self, state: &mut SearchState<'g>, current: &'g str, target: &T) -> Result<()> {
        let current_node = self.graph.get(current)?;
        let current_g = state.g_cost.get(current).copied().unwrap_or_default();

        for neighbour in self.graph.neighbours(current)? {
            let neighbour = neighbour.as_str();
            if state.closed.contains(neighbour) {
                continue;
            }

            let neighbour_node = self.graph.get(neighbour)?;
            state.open.insert(neighbour);
            state
                .h_cost
                .insert(neighbour, neighbour_node.cost(target));

            let tentative_g = current_g + current_node.cost(neighbour_node);
            let improves = state
                .g_cost
                .get(neighbour)
                .map_or(true, |&known| tentative_g < known);
            if improves {
                state.g_cost.insert(neighbour, tentative_g);
                state.parents.insert(neighbour, Some(current));
            }
        }

        Ok(())
    }
}

/// Sum of the costs between consecutive nodes of `path`.
pub fn path_cost<T: Node>(path: &[&T]) -> f64 {
    path.windows(2).map(|pair| pair[0].cost(pair[1])).sum()
}

#[derive(Debug, Default)]
struct SearchState<'g> {
    open: IndexSet<&'g str>,
    closed: HashSet<&'g str>,
    g_cost: HashMap<&'g str, f64>,
    h_cost: HashMap<&'g str, f64>,
    parents: HashMap<&'g str, Option<&'g str>>,
}

impl<'g> SearchState<'g> {
    /// Open node with minimum `g + h`, preferring the smaller `h` on equal
    /// totals. Float comparisons are exact.
    fn lowest_f_cost(&self) -> Option<&'g str> {
        let mut best: Option<(&'g str, f64, f64)> = None;
        for &id in &self.open {
            let h = self.h_cost.get(id).copied().unwrap_or_default();
            let f = self.g_cost.get(id).copied().unwrap_or_default() + h;
            match best {
                Some((_, best_f, best_h)) if !(f < best_f || (f == best_f && h < best_h)) => {}
                _ => best = Some((id, f, h)),
            }
        }
        best.map(|(id, _, _)| id)
    }

    fn reconstruct_path(&self, start: &'g str, goal: &'g str) -> Vec<&'g str> {
        let mut path = Vec::new();
        let mut current = Some(goal);
        while let Some(node) = current {
            path.push(node);
            if node == start {
                break;
            }
            current = self.parents.get(node).copied().flatten();
        }
        path.reverse();
        path
    }
}
