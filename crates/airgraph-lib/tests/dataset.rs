use std::fs;
use std::path::PathBuf;

use airgraph_lib::{
    load_airport_graph, load_airports, load_routes, parse_airports, plan_route, Airport, Error,
    RouteAlgorithm, RoutePlan, RouteRequest, RouteSummary,
};
use tempfile::tempdir;

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data")
}

fn airports_path() -> PathBuf {
    data_dir().join("airports.json")
}

fn routes_path() -> PathBuf {
    data_dir().join("routes.json")
}

fn codes<'g>(plan: &RoutePlan<'g, Airport>) -> Vec<&'g str> {
    plan.steps.iter().map(|&airport| airport.code.as_str()).collect()
}

#[test]
fn demo_dataset_loads() {
    let airports = load_airports(&airports_path()).expect("airports load");
    let routes = load_routes(&routes_path()).expect("routes load");
    assert_eq!(airports.len(), 15);
    assert_eq!(routes.len(), 25);

    let graph = load_airport_graph(&airports_path(), &routes_path()).expect("graph builds");
    assert_eq!(graph.len(), 15);
    assert_eq!(graph.edge_count(), 25);
    assert!(graph.neighbours("KEF").unwrap().is_empty());
}

#[test]
fn a_star_prefers_shorter_distance_over_fewer_hops() {
    let graph = load_airport_graph(&airports_path(), &routes_path()).unwrap();

    let a_star = plan_route(&graph, &RouteRequest::a_star("ARN", "MAD")).unwrap();
    let by_bfs = plan_route(
        &graph,
        &RouteRequest::a_star("ARN", "MAD").with_algorithm(RouteAlgorithm::Bfs),
    )
    .unwrap();

    assert_eq!(codes(&a_star), vec!["ARN", "CPH", "AMS", "LHR", "MAD"]);
    assert_eq!(codes(&by_bfs), vec!["ARN", "FRA", "LHR", "MAD"]);
    assert!(a_star.total_cost() < by_bfs.total_cost());
    assert!(a_star.hop_count() > by_bfs.hop_count());
}

#[test]
fn dfs_returns_first_found_route() {
    let graph = load_airport_graph(&airports_path(), &routes_path()).unwrap();
    let plan = plan_route(
        &graph,
        &RouteRequest::a_star("DUB", "VIE").with_algorithm(RouteAlgorithm::Dfs),
    )
    .unwrap();

    assert_eq!(
        codes(&plan),
        vec!["DUB", "MAN", "LHR", "CDG", "FCO", "FRA", "MUC", "VIE"]
    );
}

#[test]
fn manchester_to_rome_summary() {
    let graph = load_airport_graph(&airports_path(), &routes_path()).unwrap();
    let plan = plan_route(&graph, &RouteRequest::a_star("MAN", "FCO")).unwrap();
    assert_eq!(codes(&plan), vec!["MAN", "LHR", "CDG", "FCO"]);

    let summary = RouteSummary::from_plan(&plan).unwrap();
    assert_eq!(summary.hops, 3);
    assert!((summary.total_distance_km - 1690.68).abs() < 1.0);

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["algorithm"], "a_star");
    assert_eq!(json["steps"][0]["code"], "MAN");
    assert!(json["steps"][0].get("leg_km").is_none());
}

#[test]
fn isolated_airport_has_no_route() {
    let graph = load_airport_graph(&airports_path(), &routes_path()).unwrap();
    let err = plan_route(&graph, &RouteRequest::a_star("MAN", "KEF")).unwrap_err();
    assert!(matches!(err, Error::RouteNotFound { .. }));
    assert_eq!(format!("{err}"), "no route found between MAN and KEF");
}

#[test]
fn route_to_unknown_airport_fails_graph_construction() {
    let dir = tempdir().unwrap();
    let routes = dir.path().join("routes.json");
    fs::write(&routes, r#"[["MAN", "LHR"], ["MAN", "XXX"]]"#).unwrap();

    let err = load_airport_graph(&airports_path(), &routes).unwrap_err();
    assert!(matches!(err, Error::NodeNotFound { id } if id == "XXX"));
}

#[test]
fn missing_dataset_file_is_reported() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.json");

    let err = load_airports(&missing).unwrap_err();
    assert!(matches!(err, Error::DatasetNotFound { path } if path == missing));
}

#[test]
fn invalid_records_are_rejected() {
    let bad_code = r#"[{
        "airport": "Manchester Airport",
        "country": "United Kingdom",
        "iataAirportCode": "man",
        "timezone": 0,
        "altitudeFeet": 257,
        "altitudeMeter": 78,
        "latitude": 53.35,
        "longitude": -2.27
    }]"#;
    assert!(matches!(
        parse_airports(bad_code),
        Err(Error::InvalidAirport { field: "code", .. })
    ));

    let missing_field = r#"[{ "airport": "Manchester Airport", "country": "United Kingdom" }]"#;
    assert!(matches!(parse_airports(missing_field), Err(Error::Json(_))));

    let bad_latitude = bad_code
        .replace("\"man\"", "\"MAN\"")
        .replace("53.35", "153.35");
    assert!(matches!(
        parse_airports(&bad_latitude),
        Err(Error::InvalidCoordinate { .. })
    ));
}
