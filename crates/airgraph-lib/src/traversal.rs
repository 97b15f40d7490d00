//! Unweighted path search over a [`Graph`].
//!
//! Both searches ignore [`Node::cost`](crate::Node::cost) and enumerate
//! neighbours in edge insertion order. A missing start or target fails with
//! [`Error::NodeNotFound`](crate::Error::NodeNotFound); an unreachable target
//! yields an empty path.

use std::collections::{HashMap, HashSet, VecDeque};

use tracing::debug;

use crate::error::Result;
use crate::graph::Graph;
use crate::node::Node;

/// Breadth-first search from `start` to `target`.
///
/// Stops as soon as the target is discovered, so the returned path is a
/// shortest path in edge count.
pub fn bfs<'g, T: Node>(graph: &'g Graph<T>, start: &str, target: &str) -> Result<Vec<&'g T>> {
    let (start, start_node) = graph.entry(start)?;
    let (target, _) = graph.entry(target)?;
    let (start, target) = (start.as_str(), target.as_str());

    if start == target {
        return Ok(vec![start_node]);
    }

    let mut parents: HashMap<&'g str, Option<&'g str>> = HashMap::new();
    let mut queue = VecDeque::new();

    parents.insert(start, None);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for next in graph.neighbours(current)? {
            let next = next.as_str();
            if parents.contains_key(next) {
                continue;
            }

            parents.insert(next, Some(current));
            if next == target {
                debug!(start, target, visited = parents.len(), "bfs reached target");
                return resolve(graph, reconstruct_path(&parents, start, target));
            }
            queue.push_back(next);
        }
    }

    debug!(start, target, visited = parents.len(), "bfs exhausted graph");
    Ok(Vec::new())
}

/// Depth-first search from `start` to `target`.
///
/// Returns the first path found when descending neighbours in order, which
/// is not necessarily the shortest. Nodes are visited at most once across
/// the whole search.
pub fn dfs<'g, T: Node>(graph: &'g Graph<T>, start: &str, target: &str) -> Result<Vec<&'g T>> {
    let (start, start_node) = graph.entry(start)?;
    let (target, _) = graph.entry(target)?;
    let (start, target) = (start.as_str(), target.as_str());

    if start == target {
        return Ok(vec![start_node]);
    }

    let mut visited: HashSet<&'g str> = HashSet::from([start]);
    // Each frame holds a node on the current branch and the index of the
    // next neighbour to descend into.
    let mut stack: Vec<(&'g str, usize)> = vec![(start, 0)];

    while let Some(frame) = stack.last_mut() {
        let (current, cursor) = *frame;
        let Some(next) = graph.neighbours(current)?.get_index(cursor) else {
            stack.pop();
            continue;
        };
        frame.1 += 1;

        let next = next.as_str();
        if next == target {
            let mut path: Vec<&'g str> = stack.iter().map(|(id, _)| *id).collect();
            path.push(next);
            debug!(start, target, visited = visited.len(), "dfs reached target");
            return resolve(graph, path);
        }
        if visited.insert(next) {
            stack.push((next, 0));
        }
    }

    debug!(start, target, visited = visited.len(), "dfs exhausted graph");
    Ok(Vec::new())
}

fn reconstruct_path<'a>(
    parents: &HashMap<&'a str, Option<&'a str>>,
    start: &'a str,
    goal: &'a str,
) -> Vec<&'a str> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        if node == start {
            break;
        }
        current = parents.get(node).copied().flatten();
    }
    path.reverse();
    path
}

pub(crate) fn resolve<'g, T: Node>(graph: &'g Graph<T>, ids: Vec<&str>) -> Result<Vec<&'g T>> {
    ids.into_iter().map(|id| graph.get(id)).collect()
}
