use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::astar::{path_cost, Astar};
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::node::Node;
use crate::traversal::{bfs, dfs};

/// Supported search algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteAlgorithm {
    /// Breadth-first search (fewest hops).
    Bfs,
    /// Depth-first search (first path found).
    Dfs,
    /// A* search (lowest total cost).
    #[default]
    #[serde(rename = "a_star")]
    AStar,
}

impl fmt::Display for RouteAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteAlgorithm::Bfs => "bfs",
            RouteAlgorithm::Dfs => "dfs",
            RouteAlgorithm::AStar => "a_star",
        };
        f.write_str(value)
    }
}

impl FromStr for RouteAlgorithm {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "bfs" => Ok(RouteAlgorithm::Bfs),
            "dfs" => Ok(RouteAlgorithm::Dfs),
            "a_star" | "a-star" | "astar" => Ok(RouteAlgorithm::AStar),
            other => Err(format!("unknown route algorithm: {other}")),
        }
    }
}

/// High-level route planning request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
    pub algorithm: RouteAlgorithm,
}

impl RouteRequest {
    /// Convenience constructor for A* routes.
    pub fn a_star(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            algorithm: RouteAlgorithm::AStar,
        }
    }

    pub fn with_algorithm(mut self, algorithm: RouteAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}

/// Planned route borrowing its steps from the searched graph.
#[derive(Debug, Clone)]
pub struct RoutePlan<'g, T> {
    pub algorithm: RouteAlgorithm,
    pub steps: Vec<&'g T>,
}

impl<'g, T: Node> RoutePlan<'g, T> {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Total cost of the route according to [`Node::cost`].
    pub fn total_cost(&self) -> f64 {
        path_cost(&self.steps)
    }
}

/// Run the requested search and treat an empty result as a missing route.
pub fn plan_route<'g, T: Node>(
    graph: &'g Graph<T>,
    request: &RouteRequest,
) -> Result<RoutePlan<'g, T>> {
    let (start, goal) = (request.start.as_str(), request.goal.as_str());
    let steps = match request.algorithm {
        RouteAlgorithm::Bfs => bfs(graph, start, goal)?,
        RouteAlgorithm::Dfs => dfs(graph, start, goal)?,
        RouteAlgorithm::AStar => Astar::new(graph).find_path(start, goal)?,
    };

    if steps.is_empty() {
        return Err(Error::RouteNotFound {
            start: request.start.clone(),
            goal: request.goal.clone(),
        });
    }

    Ok(RoutePlan {
        algorithm: request.algorithm,
        steps,
    })
}
