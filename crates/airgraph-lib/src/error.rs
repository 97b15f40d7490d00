use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the airgraph library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when an operation dereferences a node id absent from the graph.
    #[error("no node with id {id} in graph")]
    NodeNotFound { id: String },

    /// Raised when an edge operation is given identical endpoints.
    #[error("loop edge from node {id} to itself is not allowed")]
    SelfLoopNotAllowed { id: String },

    /// Raised when a latitude or longitude lies outside its valid range.
    #[error("invalid coordinate: {message}")]
    InvalidCoordinate { message: String },

    /// Raised when an airport field does not match its expected format.
    #[error("invalid format of airport {field}: {value:?}")]
    InvalidAirport { field: &'static str, value: String },

    /// Dataset file could not be located at the given path.
    #[error("dataset not found at {path}")]
    DatasetNotFound { path: PathBuf },

    /// Raised when no route could be found between two nodes.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Raised when a route plan lacks any steps.
    #[error("route plan was empty")]
    EmptyRoutePlan,

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON decoding errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn node_not_found(id: impl Into<String>) -> Self {
        Error::NodeNotFound { id: id.into() }
    }
}
