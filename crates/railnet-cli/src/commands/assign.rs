//! `railnet assign-provinces`: nearest-city province assignment.

use crate::config::RailnetConfig;
use anyhow::{Context, Result};
use railnet_data::export::{write_csv, write_text};
use railnet_data::load::{load_cities, load_station_dataset, require_files};
use railnet_data::{AssignmentReport, assign_provinces};
use std::fmt;
use std::path::PathBuf;

/// What `assign-provinces` produced.
#[derive(Clone, Debug)]
pub struct AssignOutcome {
    pub stations_path: PathBuf,
    pub report_path: PathBuf,
    pub report: AssignmentReport,
}

/// Assign every unique station to a province and write the table and report.
pub fn run(config: &RailnetConfig) -> Result<AssignOutcome> {
    let stations_path = config.data_path(&config.data.station_dataset);
    let cities_path = config.data_path(&config.data.cities_file);
    require_files(&[&stations_path, &cities_path])?;

    tracing::info!(path = %stations_path.display(), "Reading station data");
    let stations = load_station_dataset(&stations_path)?;
    tracing::info!(path = %cities_path.display(), "Reading city info");
    let cities = load_cities(&cities_path)?;
    tracing::info!(
        stations = stations.len(),
        cities = cities.len(),
        "Found station records and cities with valid coordinates"
    );

    let assignment = assign_provinces(stations, &cities)?;
    tracing::info!(
        assigned = assignment.assigned,
        no_coords = assignment.no_coords,
        "Assigned provinces by nearest city"
    );

    let output_path = config.output_path(&config.output.provinces_file);
    write_csv(&output_path, &assignment.rows)
        .with_context(|| format!("writing {}", output_path.display()))?;

    let report = AssignmentReport::from_assignment(&assignment);
    let report_path = config.output_path(&config.output.assignment_report);
    write_text(&report_path, &report.to_string())
        .with_context(|| format!("writing {}", report_path.display()))?;

    Ok(AssignOutcome {
        stations_path: output_path,
        report_path,
        report,
    })
}

impl fmt::Display for AssignOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Assigned province for {} stations by nearest city",
            self.report.assigned
        )?;
        writeln!(
            f,
            "Skipped {} stations without valid coordinates",
            self.report.no_coords
        )?;
        writeln!(f, "Wrote updated stations to {}", self.stations_path.display())?;
        write!(f, "Wrote report to {}", self.report_path.display())
    }
}
