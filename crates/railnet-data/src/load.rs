//! Typed CSV loaders.

use crate::records::{
    CityRow, EdgeRow, LegacyStationRow, LegacyTrackRow, ProvinceAssignmentRow, StationRow,
};
use railnet_core::{Error, Result};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Field delimiter of the city reference table.
pub const CITY_DELIMITER: u8 = b';';

/// Check that every path exists before any work starts.
///
/// Returns [`Error::MissingFile`] for the first path that does not.
pub fn require_files<P: AsRef<Path>>(paths: &[P]) -> Result<()> {
    for path in paths {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::missing_file(path));
        }
    }
    Ok(())
}

/// Read a headed CSV file into typed rows.
///
/// Header cells are trimmed. Rows may have fewer or more cells than the
/// header; absent optional fields read as missing.
pub fn read_csv<T: DeserializeOwned>(path: &Path, delimiter: u8) -> Result<Vec<T>> {
    if !path.is_file() {
        return Err(Error::missing_file(path));
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_path(path)
        .map_err(|e| Error::csv_with_path(e, path))?;

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record.map_err(|e| Error::csv_with_path(e, path))?);
    }

    log::info!("Loaded {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Load `stations.csv`.
pub fn load_legacy_stations(path: &Path) -> Result<Vec<LegacyStationRow>> {
    read_csv(path, b',')
}

/// Load `tracks.csv`.
pub fn load_legacy_tracks(path: &Path) -> Result<Vec<LegacyTrackRow>> {
    read_csv(path, b',')
}

/// Load `station_dataset.csv`.
pub fn load_station_dataset(path: &Path) -> Result<Vec<StationRow>> {
    read_csv(path, b',')
}

/// Load `edge_dataset.csv`.
pub fn load_edge_dataset(path: &Path) -> Result<Vec<EdgeRow>> {
    read_csv(path, b',')
}

/// Load `stations_with_province.csv`.
pub fn load_province_assignments(path: &Path) -> Result<Vec<ProvinceAssignmentRow>> {
    read_csv(path, b',')
}

/// Load the city table, keeping only cities with valid coordinates.
pub fn load_cities(path: &Path) -> Result<Vec<CityRow>> {
    let rows: Vec<CityRow> = read_csv(path, CITY_DELIMITER)?;
    let total = rows.len();
    let cities: Vec<CityRow> = rows
        .into_iter()
        .filter(|c| c.coordinates().is_some())
        .collect();
    if cities.len() < total {
        log::debug!(
            "Dropped {} city rows without valid coordinates",
            total - cities.len()
        );
    }
    Ok(cities)
}
