//! Integration tests for the yearly network pipeline.

use railnet_cli::commands::{assign, build};
use railnet_data::export::read_graph_json;
use railnet_data::load::{load_edge_dataset, load_station_dataset};

use crate::common::TestHarness;

#[test]
fn test_build_latest_year_without_provinces() {
    let harness = TestHarness::with_yearly_tables();

    let outcome = build::run(&harness.config, None).expect("build should succeed");

    assert_eq!(outcome.stats.year, 2020);
    assert!(outcome.assignments.is_none());
    assert_eq!(outcome.stations, 4);
    assert_eq!(outcome.segments, 5);
    assert_eq!(outcome.stats.nodes, 4);
    assert_eq!(outcome.stats.edges, 3, "S1-S2 collapses, S9 is unknown");
    assert_eq!(outcome.stats.connected_components, 1);
    assert_eq!(outcome.stats.stations_with_province, 0);
    assert_eq!(outcome.stats.unique_provinces, 0);

    for path in [
        &outcome.outputs.graph,
        &outcome.outputs.stats,
        &outcome.outputs.map,
        &outcome.outputs.stations,
        &outcome.outputs.edges,
    ] {
        assert!(path.is_file(), "missing {}", path.display());
    }
    assert_eq!(outcome.outputs.graph, harness.output("rail_network_2020.json"));

    let stats = TestHarness::read(&outcome.outputs.stats);
    assert!(stats.starts_with(
        "Railway Network Statistics for 2020\n========================================\n"
    ));
    assert!(stats.contains("nodes: 4\nedges: 3\nconnected_components: 1\n"));

    let map = TestHarness::read(&outcome.outputs.map);
    assert!(map.contains("Unknown Province"));
    assert!(map.contains("Railway Lines"));
}

#[test]
fn test_build_selected_year() {
    let harness = TestHarness::with_yearly_tables();
    let outcome = build::run(&harness.config, Some(2015)).unwrap();

    assert_eq!(outcome.stats.year, 2015);
    assert_eq!(outcome.stats.nodes, 4);
    assert_eq!(outcome.stats.edges, 2);
    assert_eq!(outcome.stats.connected_components, 2, "S4 is isolated");

    let stations = load_station_dataset(&outcome.outputs.stations).unwrap();
    assert_eq!(stations.len(), 4);
    assert!(stations.iter().all(|s| s.year() == Some(2015)));
    let edges = load_edge_dataset(&outcome.outputs.edges).unwrap();
    assert_eq!(edges.len(), 2);
}

#[test]
fn test_build_merges_assigned_provinces() {
    let harness = TestHarness::with_yearly_tables();
    assign::run(&harness.config).unwrap();

    let outcome = build::run(&harness.config, None).unwrap();

    assert_eq!(
        outcome.assignments.as_deref(),
        Some(harness.output("stations_with_province.csv").as_path())
    );
    assert_eq!(outcome.stats.stations_with_province, 4);
    assert_eq!(outcome.stats.unique_provinces, 3);

    let stations = load_station_dataset(&outcome.outputs.stations).unwrap();
    let s5 = stations.iter().find(|s| s.station_id == "S5").unwrap();
    assert_eq!(s5.province_code.as_deref(), Some("HEBEI"));

    let graph = read_graph_json(&outcome.outputs.graph).unwrap();
    assert_eq!(
        graph.station("S5").unwrap().province_name.as_deref(),
        Some("河北省")
    );

    let map = TestHarness::read(&outcome.outputs.map);
    assert!(map.contains("河北省"));

    let text = outcome.to_string();
    assert!(text.contains("- Year: 2020"));
    assert!(text.contains("- Network graph: 4 nodes, 3 edges"));
    assert!(text.contains("- Unique provinces: 3"));
}

#[test]
fn test_build_year_without_stations_fails() {
    let harness = TestHarness::with_yearly_tables();
    let outcome = build::run(&harness.config, Some(1990));
    assert!(outcome.is_err(), "no stations to map for a year without data");
}
