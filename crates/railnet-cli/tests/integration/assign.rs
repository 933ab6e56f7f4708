//! Integration tests for nearest-city province assignment.

use railnet_cli::commands::assign;
use railnet_data::load::load_province_assignments;

use crate::common::TestHarness;

#[test]
fn test_assign_writes_table_and_report() {
    let harness = TestHarness::with_yearly_tables();

    let outcome = assign::run(&harness.config).expect("assignment should succeed");

    assert_eq!(outcome.report.total_stations, 5);
    assert_eq!(outcome.report.assigned, 4);
    assert_eq!(outcome.report.no_coords, 1);
    assert_eq!(
        outcome.report.distribution[0],
        ("河北省".to_string(), 2),
        "Shijiazhuang and Langfang"
    );

    let rows = load_province_assignments(&outcome.stations_path).unwrap();
    assert_eq!(rows.len(), 5);
    let s1 = rows.iter().find(|r| r.station_id == "S1").unwrap();
    assert_eq!(s1.province_code, "BEIJING");
    assert_eq!(s1.province_name, "北京市");
    assert_eq!(s1.nearest_city, "Beijing");
    assert_eq!(s1.prov_assign_method, "assigned_by_nearest_city");
    assert_eq!(s1.year.as_deref(), Some("2015"), "first occurrence wins");
    let s4 = rows.iter().find(|r| r.station_id == "S4").unwrap();
    assert_eq!(s4.prov_assign_method, "no_coords");
    assert!(s4.province_code.is_empty());
    assert!(s4.distance_to_city_km.is_none());

    let report = TestHarness::read(&outcome.report_path);
    assert!(report.starts_with("Station Province Assignment Report\n"));
    assert!(report.contains("Total unique stations: 5"));
    assert!(report.contains("  河北省: 2 stations"));
    assert!(report.contains("Distance to nearest city statistics:"));
}

#[test]
fn test_assign_summary_text() {
    let harness = TestHarness::with_yearly_tables();
    let text = assign::run(&harness.config).unwrap().to_string();
    assert!(text.contains("Assigned province for 4 stations by nearest city"));
    assert!(text.contains("Skipped 1 stations without valid coordinates"));
    assert!(text.contains("stations_with_province.csv"));
}

#[test]
fn test_assign_without_usable_cities() {
    let harness = TestHarness::with_yearly_tables();
    harness.write_data(
        &harness.config.data.cities_file,
        "Name EN;Lat;Long;Province\nNowhere;;;GANSU\n",
    );
    let err = assign::run(&harness.config).unwrap_err();
    assert!(err.to_string().contains("no cities"));
}
