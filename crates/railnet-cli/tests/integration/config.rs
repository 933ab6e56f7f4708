//! Integration tests for configuration files driving the pipelines.

use railnet_cli::commands::visualize;
use railnet_cli::config_handlers::{cmd_config_get, cmd_config_init, cmd_config_set};
use railnet_cli::{ConfigManager, RailnetConfig};

use crate::common::TestHarness;

#[test]
fn test_init_set_and_run_from_config_file() {
    let harness = TestHarness::with_legacy_tables();
    let config_file = harness.root.path().join("railnet.toml");
    let config_arg = config_file.to_str().unwrap();

    cmd_config_init::<RailnetConfig>(Some(config_arg), false).unwrap();
    cmd_config_set::<RailnetConfig>(
        Some(config_arg),
        "data.dir",
        harness.config.data.dir.to_str().unwrap(),
    )
    .unwrap();
    cmd_config_set::<RailnetConfig>(
        Some(config_arg),
        "output.dir",
        harness.config.output.dir.to_str().unwrap(),
    )
    .unwrap();
    cmd_config_set::<RailnetConfig>(Some(config_arg), "output.map_file", "network.html").unwrap();

    assert_eq!(
        cmd_config_get::<RailnetConfig>(Some(config_arg), "output.map_file").unwrap(),
        "network.html"
    );

    let config = RailnetConfig::load(Some(config_arg)).unwrap();
    let outcome = visualize::run(&config).unwrap();
    assert_eq!(outcome.map_path, harness.output("network.html"));
    assert!(outcome.map_path.is_file());
}

#[test]
fn test_zoom_from_config_reaches_the_map() {
    let harness = TestHarness::with_legacy_tables();
    let mut config = harness.config.clone();
    config.map.zoom = 9;

    let outcome = visualize::run(&config).unwrap();
    let html = TestHarness::read(&outcome.map_path);
    assert!(html.contains("\"zoom\":9"));
}
