//! Province assignment by nearest city.

use crate::records::{CityRow, ProvinceAssignmentRow, StationRow};
use railnet_core::{Coordinates, Error, Result, display_name, nearest};
use std::collections::HashSet;

/// Method recorded for stations placed by their nearest city.
pub const METHOD_NEAREST_CITY: &str = "assigned_by_nearest_city";

/// Method recorded for stations without usable coordinates.
pub const METHOD_NO_COORDS: &str = "no_coords";

/// Result of a province assignment run.
#[derive(Clone, Debug, Default)]
pub struct Assignment {
    /// One row per unique station, in first-seen order.
    pub rows: Vec<ProvinceAssignmentRow>,
    /// Stations that received a province.
    pub assigned: usize,
    /// Stations skipped for lack of coordinates.
    pub no_coords: usize,
}

/// Drop repeated station IDs, keeping the first occurrence.
pub fn unique_stations(stations: Vec<StationRow>) -> Vec<StationRow> {
    let mut seen = HashSet::new();
    stations
        .into_iter()
        .filter(|s| seen.insert(s.station_id.clone()))
        .collect()
}

/// Assign every unique station the province of its nearest city.
pub fn assign_provinces(stations: Vec<StationRow>, cities: &[CityRow]) -> Result<Assignment> {
    let located: Vec<(&CityRow, Coordinates)> = cities
        .iter()
        .filter_map(|c| c.coordinates().map(|coords| (c, coords)))
        .collect();
    if located.is_empty() {
        return Err(Error::data("no cities with valid coordinates"));
    }

    let stations = unique_stations(stations);
    log::info!(
        "Assigning provinces for {} unique stations against {} cities",
        stations.len(),
        located.len()
    );

    let mut assignment = Assignment::default();
    for station in stations {
        let coords = station.coordinates();
        let mut row = ProvinceAssignmentRow::from_station(station);

        let hit = coords.and_then(|origin| nearest(&origin, located.iter().map(|(_, c)| c)));
        match hit {
            Some((idx, distance)) => {
                let (city, _) = located[idx];
                let code = city.province.clone().unwrap_or_default();
                row.province_name = display_name(&code);
                row.province_code = code;
                row.prov_assign_method = METHOD_NEAREST_CITY.to_string();
                row.nearest_city = city.name_en.clone().unwrap_or_default();
                row.distance_to_city_km = Some(distance);
                assignment.assigned += 1;
            }
            None => {
                row.prov_assign_method = METHOD_NO_COORDS.to_string();
                assignment.no_coords += 1;
            }
        }
        assignment.rows.push(row);
    }

    log::info!(
        "Assigned province for {} stations by nearest city",
        assignment.assigned
    );
    if assignment.no_coords > 0 {
        log::warn!(
            "Skipped {} stations without valid coordinates",
            assignment.no_coords
        );
    }
    Ok(assignment)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn station(id: &str, lat: Option<f64>, lon: Option<f64>) -> StationRow {
        StationRow {
            station_id: id.to_string(),
            year: Some("2015".to_string()),
            longitude: lon,
            latitude: lat,
            city_id: None,
            city_name_chn: None,
            city_name_eng: None,
            province_code: None,
            province_name: None,
        }
    }

    fn city(name: &str, lat: f64, lon: f64, province: &str) -> CityRow {
        CityRow {
            name_en: Some(name.to_string()),
            lat: Some(lat),
            long: Some(lon),
            province: Some(province.to_string()),
        }
    }

    fn cities() -> Vec<CityRow> {
        vec![
            city("Beijing", 39.90, 116.40, "BEIJING"),
            city("Guangzhou", 23.13, 113.26, "GUANGDONG"),
            city("Lhasa", 29.65, 91.11, "XIZANG"),
        ]
    }

    #[test]
    fn test_unique_stations_keeps_first() {
        let mut later = station("1", Some(1.0), Some(1.0));
        later.year = Some("2020".to_string());
        let rows = unique_stations(vec![station("1", None, None), later, station("2", None, None)]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].year.as_deref(), Some("2015"));
        assert_eq!(rows[0].latitude, None);
    }

    #[test]
    fn test_assign_nearest_city() {
        let stations = vec![
            station("a", Some(39.95), Some(116.30)),
            station("b", Some(23.00), Some(113.40)),
            station("c", Some(29.60), Some(91.00)),
        ];
        let result = assign_provinces(stations, &cities()).unwrap();

        assert_eq!(result.assigned, 3);
        assert_eq!(result.no_coords, 0);

        let a = &result.rows[0];
        assert_eq!(a.province_code, "BEIJING");
        assert_eq!(a.province_name, "北京市");
        assert_eq!(a.prov_assign_method, METHOD_NEAREST_CITY);
        assert_eq!(a.nearest_city, "Beijing");
        assert!(a.distance_to_city_km.unwrap() < 15.0);

        assert_eq!(result.rows[1].province_code, "GUANGDONG");
        assert_eq!(result.rows[2].province_name, "西藏自治区");
    }

    #[test]
    fn test_assign_without_coordinates() {
        let stations = vec![station("a", None, Some(116.0)), station("a", Some(39.9), Some(116.4))];
        let result = assign_provinces(stations, &cities()).unwrap();

        assert_eq!(result.rows.len(), 1);
        assert_eq!(result.no_coords, 1);
        let row = &result.rows[0];
        assert_eq!(row.prov_assign_method, METHOD_NO_COORDS);
        assert!(row.province_code.is_empty());
        assert!(row.nearest_city.is_empty());
        assert_eq!(row.distance_to_city_km, None);
    }

    #[test]
    fn test_unknown_province_code_kept_as_name() {
        let cities = vec![city("Atlantis", 10.0, 100.0, "ATLANTIS")];
        let result = assign_provinces(vec![station("a", Some(10.0), Some(100.0))], &cities).unwrap();
        assert_eq!(result.rows[0].province_name, "ATLANTIS");
        assert_eq!(result.rows[0].distance_to_city_km, Some(0.0));
    }

    #[test]
    fn test_assign_requires_cities() {
        let err = assign_provinces(vec![station("a", Some(1.0), Some(1.0))], &[]).unwrap_err();
        assert!(matches!(err, Error::Data { .. }));
    }
}
