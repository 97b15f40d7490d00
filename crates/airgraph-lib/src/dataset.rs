//! JSON airport and route datasets.
//!
//! Airports are stored as an array of records using the field names of the
//! published example data; routes are an array of two-element code arrays.
//! Both loaders also accept a single bare record.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::airport::Airport;
use crate::error::{Error, Result};
use crate::graph::{Edge, Graph};
use crate::node::{Node, NodeId};

/// Raw airport record as found in dataset files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AirportRecord {
    pub airport: String,
    pub country: String,
    pub iata_airport_code: String,
    pub timezone: f64,
    pub altitude_feet: f64,
    pub altitude_meter: f64,
    pub latitude: f64,
    pub longitude: f64,
}

impl TryFrom<AirportRecord> for Airport {
    type Error = Error;

    fn try_from(record: AirportRecord) -> Result<Self> {
        Airport::new(
            record.airport,
            record.country,
            record.iata_airport_code,
            record.latitude,
            record.longitude,
        )
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> From<OneOrMany<T>> for Vec<T> {
    fn from(value: OneOrMany<T>) -> Self {
        match value {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

fn parse_one_or_many<T: DeserializeOwned>(data: &str) -> Result<Vec<T>> {
    let parsed: OneOrMany<T> = serde_json::from_str(data)?;
    Ok(parsed.into())
}

/// Parse airport records and validate each into an [`Airport`].
pub fn parse_airports(data: &str) -> Result<Vec<Airport>> {
    parse_one_or_many::<AirportRecord>(data)?
        .into_iter()
        .map(Airport::try_from)
        .collect()
}

/// Parse route pairs of airport codes.
pub fn parse_routes(data: &str) -> Result<Vec<Edge>> {
    let pairs = parse_one_or_many::<(String, String)>(data)?;
    Ok(pairs
        .into_iter()
        .map(|(a, b)| (NodeId::from(a), NodeId::from(b)))
        .collect())
}

fn read_dataset(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(Error::DatasetNotFound {
            path: path.to_path_buf(),
        });
    }
    debug!(path = %path.display(), "reading dataset file");
    Ok(fs::read_to_string(path)?)
}

/// Load and validate airports from a JSON file.
pub fn load_airports(path: &Path) -> Result<Vec<Airport>> {
    let airports = parse_airports(&read_dataset(path)?)?;
    info!(path = %path.display(), count = airports.len(), "loaded airports");
    Ok(airports)
}

/// Load route pairs from a JSON file.
pub fn load_routes(path: &Path) -> Result<Vec<Edge>> {
    let routes = parse_routes(&read_dataset(path)?)?;
    info!(path = %path.display(), count = routes.len(), "loaded routes");
    Ok(routes)
}

/// Build an airport graph from an airport file and a route file.
///
/// Duplicate airport codes keep the first record. A route naming an unknown
/// airport fails with [`Error::NodeNotFound`].
pub fn load_airport_graph(airports_path: &Path, routes_path: &Path) -> Result<Graph<Airport>> {
    let airports = load_airports(airports_path)?;
    let routes = load_routes(routes_path)?;

    let mut graph = Graph::new();
    for airport in airports {
        let code = airport.id();
        if !graph.add_node(airport) {
            warn!(code = %code, "ignoring duplicate airport record");
        }
    }
    graph.add_edges(routes)?;

    info!(
        airports = graph.len(),
        routes = graph.edge_count(),
        "built airport graph"
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD: &str = r#"{
        "airport": "Manchester Airport",
        "country": "United Kingdom",
        "iataAirportCode": "MAN",
        "timezone": 0,
        "altitudeFeet": 257,
        "altitudeMeter": 78,
        "latitude": 53.35,
        "longitude": -2.275
    }"#;

    #[test]
    fn single_record_is_treated_as_list() {
        let airports = parse_airports(RECORD).unwrap();
        assert_eq!(airports.len(), 1);
        assert_eq!(airports[0].code, "MAN");
    }

    #[test]
    fn single_route_pair_is_treated_as_list() {
        let routes = parse_routes(r#"["MAN", "FCO"]"#).unwrap();
        assert_eq!(routes, vec![(NodeId::from("MAN"), NodeId::from("FCO"))]);
    }

    #[test]
    fn malformed_route_is_rejected() {
        assert!(matches!(
            parse_routes(r#"[["MAN", "FCO", "CPH"]]"#),
            Err(Error::Json(_))
        ));
        assert!(matches!(parse_routes(r#"[["MAN", 3]]"#), Err(Error::Json(_))));
    }
}
