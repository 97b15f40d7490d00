//! airgraph library entry points.
//!
//! This crate exposes a generic undirected simple graph over caller-supplied
//! node types, the A* engine and BFS/DFS traversals that search it, and an
//! airport node type with helpers to load airport datasets from JSON.
//! Higher-level consumers (the CLI) should only depend on the items exported
//! here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod airport;
pub mod astar;
pub mod dataset;
pub mod error;
pub mod geo;
pub mod graph;
pub mod node;
pub mod output;
pub mod routing;
pub mod traversal;

pub use airport::{is_valid_code, is_valid_name, Airport};
pub use astar::{path_cost, Astar};
pub use dataset::{
    load_airport_graph, load_airports, load_routes, parse_airports, parse_routes, AirportRecord,
};
pub use error::{Error, Result};
pub use geo::{Angle, GeoLocation, EARTH_RADIUS_KM};
pub use graph::{Edge, Graph};
pub use node::{Node, NodeId};
pub use output::{format_airport_table, AirportEntry, RouteSummary, RouteSummaryStep};
pub use routing::{plan_route, RouteAlgorithm, RoutePlan, RouteRequest};
pub use traversal::{bfs, dfs};
