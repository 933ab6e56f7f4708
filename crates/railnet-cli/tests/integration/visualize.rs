//! Integration tests for the track-type network pipeline.

use railnet_cli::commands::visualize;
use railnet_core::Error;

use crate::common::TestHarness;

#[test]
fn test_visualize_builds_network_and_map() {
    let harness = TestHarness::with_legacy_tables();

    let outcome = visualize::run(&harness.config).expect("visualize should succeed");

    assert_eq!(outcome.summary.nodes, 5);
    assert_eq!(outcome.summary.edges, 4, "parallel tracks are kept");
    assert_eq!(outcome.summary.components, 2);
    assert_eq!(outcome.summary.largest_component, 4);
    assert_eq!(outcome.unresolved, vec!["Atlantis".to_string()]);

    assert_eq!(outcome.map_stats.stations, 5);
    assert_eq!(outcome.map_stats.connections, 3, "road tracks are not drawn");
    assert_eq!(outcome.map_stats.track_types, 3);
    assert_eq!(outcome.map_stats.provinces, 4);

    assert_eq!(outcome.map_path, harness.output("railway_network_map.html"));
    let html = TestHarness::read(&outcome.map_path);
    assert!(html.contains("leaflet"));
    assert!(html.contains("rail_good (1 tracks)"));
    assert!(!html.contains("road (1 tracks)"));
}

#[test]
fn test_visualize_analysis_text() {
    let harness = TestHarness::with_legacy_tables();
    let text = visualize::run(&harness.config).unwrap().to_string();

    assert!(text.contains("- Nodes: 5"));
    assert!(text.contains("- Edges: 4"));
    assert!(text.contains("- Connected Components: 2"));
    assert!(text.contains("- Largest Connected Component: 4 stations"));
    assert!(!text.contains("fully connected"));
    assert!(text.contains("Covers 4 provinces:\n  河北省: 2 stations"));
}

#[test]
fn test_visualize_fully_connected() {
    let harness = TestHarness::new();
    harness.write_data(
        "stations.csv",
        "station_id,station_name,province,latitude,longitude\n\
         1,A,,30.0,110.0\n\
         2,B,,31.0,111.0\n",
    );
    harness.write_data(
        "tracks.csv",
        "start_station,end_station,length,year,type\nA,B,150,1999,rail_both\n",
    );

    let outcome = visualize::run(&harness.config).unwrap();
    assert!(outcome.summary.is_connected());
    let text = outcome.to_string();
    assert!(text.contains("Network is fully connected"));
    assert!(text.contains("Covers 0 provinces:"));
}

#[test]
fn test_visualize_requires_both_tables() {
    let harness = TestHarness::new();
    harness.write_data("stations.csv", crate::common::LEGACY_STATIONS);

    let err = visualize::run(&harness.config).unwrap_err();
    let cause = err.downcast_ref::<Error>().expect("a railnet error");
    assert!(matches!(cause, Error::MissingFile { path } if path.ends_with("tracks.csv")));
    assert!(!harness.output("railway_network_map.html").exists());
}
