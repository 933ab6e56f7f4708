//! Integration tests for routing over a saved graph.

use railnet_cli::commands::{build, route};
use railnet_core::Error;

use crate::common::TestHarness;

fn saved_graph(harness: &TestHarness) -> std::path::PathBuf {
    build::run(&harness.config, Some(2020)).unwrap().outputs.graph
}

#[test]
fn test_route_follows_shortest_lengths() {
    let harness = TestHarness::with_yearly_tables();
    let graph = saved_graph(&harness);

    let outcome = route::run(&graph, "S3", "S2").expect("route should succeed");

    assert!(outcome.route.found);
    let ids: Vec<&str> = outcome.route.stations.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["S3", "S1", "S2"]);
    assert!((outcome.route.total_km - 398.0).abs() < 1e-9, "collapsed S1-S2 keeps the last length");

    let text = outcome.to_string();
    assert!(text.starts_with("Route from S3 to S2: 3 stations, 398.0 km\n"));
    assert!(text.contains(" 1. S3 (S3)"));
    assert!(text.contains("   | 280.0 km"));
}

#[test]
fn test_route_same_station() {
    let harness = TestHarness::with_yearly_tables();
    let graph = saved_graph(&harness);

    let outcome = route::run(&graph, "S5", "S5").unwrap();
    assert!(outcome.route.found);
    assert_eq!(outcome.route.stations.len(), 1);
    assert_eq!(outcome.route.total_km, 0.0);
}

#[test]
fn test_route_between_disconnected_stations() {
    let harness = TestHarness::with_yearly_tables();
    let graph = build::run(&harness.config, Some(2015)).unwrap().outputs.graph;

    let outcome = route::run(&graph, "S1", "S4").unwrap();
    assert!(!outcome.route.found);
    assert_eq!(outcome.to_string(), "No route from S1 to S4");
}

#[test]
fn test_route_unknown_station() {
    let harness = TestHarness::with_yearly_tables();
    let graph = saved_graph(&harness);

    let err = route::run(&graph, "S1", "S42").unwrap_err();
    let cause = err.downcast_ref::<Error>().expect("a railnet error");
    assert!(matches!(cause, Error::NotFound { id, .. } if id == "S42"));
    assert!(cause.is_user_error());
}

#[test]
fn test_route_missing_graph_file() {
    let harness = TestHarness::new();
    let err = route::run(&harness.output("rail_network_2020.json"), "S1", "S2").unwrap_err();
    let cause = err.downcast_ref::<Error>().expect("context keeps the source error");
    assert!(matches!(cause, Error::MissingFile { .. }));
}
