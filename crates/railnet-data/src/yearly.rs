//! Year selection and province merging for the yearly datasets.

use crate::records::{EdgeRow, ProvinceAssignmentRow, StationRow};
use railnet_core::{Error, Result};
use std::collections::{HashMap, HashSet};

/// Stations and edges of a single dataset year.
#[derive(Clone, Debug)]
pub struct YearSlice {
    /// Selected year.
    pub year: i32,
    /// Stations recorded for that year.
    pub stations: Vec<StationRow>,
    /// Edges recorded for that year.
    pub edges: Vec<EdgeRow>,
}

/// Province coverage of a station table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProvinceCoverage {
    /// Stations with a non-empty province code.
    pub stations_with_province: usize,
    /// Distinct non-empty province codes.
    pub unique_provinces: usize,
}

/// Latest year present in the station table.
pub fn latest_year(stations: &[StationRow]) -> Option<i32> {
    stations.iter().filter_map(StationRow::year).max()
}

/// Keep the rows of one year.
///
/// With `year = None` the latest station year is used.
pub fn select_year(
    stations: Vec<StationRow>,
    edges: Vec<EdgeRow>,
    year: Option<i32>,
) -> Result<YearSlice> {
    let year = match year {
        Some(year) => {
            log::info!("Filtering data for year: {year}");
            year
        }
        None => {
            let year = latest_year(&stations)
                .ok_or_else(|| Error::data("station dataset has no usable year values"))?;
            log::info!("Using latest available year: {year}");
            year
        }
    };

    let stations: Vec<StationRow> = stations
        .into_iter()
        .filter(|s| s.year() == Some(year))
        .collect();
    let edges: Vec<EdgeRow> = edges
        .into_iter()
        .filter(|e| e.year() == Some(year))
        .collect();

    log::info!(
        "Found {} stations and {} edges for year {year}",
        stations.len(),
        edges.len()
    );

    Ok(YearSlice {
        year,
        stations,
        edges,
    })
}

/// Copy province code and name from an assignment table onto stations,
/// joined by station ID. The first assignment per ID wins; stations without
/// one get empty province fields. An empty assignment table clears them all.
pub fn merge_provinces(
    stations: &mut [StationRow],
    assignments: &[ProvinceAssignmentRow],
) -> ProvinceCoverage {
    let mut lookup: HashMap<&str, &ProvinceAssignmentRow> = HashMap::new();
    for row in assignments {
        lookup.entry(row.station_id.as_str()).or_insert(row);
    }

    for station in stations.iter_mut() {
        match lookup.get(station.station_id.as_str()) {
            Some(row) => {
                station.province_code = Some(row.province_code.clone());
                station.province_name = Some(row.province_name.clone());
            }
            None => {
                station.province_code = Some(String::new());
                station.province_name = Some(String::new());
            }
        }
    }

    let coverage = province_coverage(stations);
    log::info!(
        "Merged province information for {} stations in {} provinces",
        coverage.stations_with_province,
        coverage.unique_provinces
    );
    coverage
}

/// Count stations with a province and distinct provinces.
pub fn province_coverage(stations: &[StationRow]) -> ProvinceCoverage {
    let codes: Vec<&str> = stations.iter().filter_map(StationRow::province).collect();
    let unique: HashSet<&str> = codes.iter().copied().collect();
    ProvinceCoverage {
        stations_with_province: codes.len(),
        unique_provinces: unique.len(),
    }
}
