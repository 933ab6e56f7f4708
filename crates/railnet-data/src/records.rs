//! CSV row schemas.
//!
//! Numeric cells that fail to parse are read as missing rather than failing
//! the whole load; the source tables contain blanks, `nan` and stray text.

use railnet_core::Coordinates;
use railnet_graph::{Station, Track, TrackType};
use serde::{Deserialize, Serialize};

/// Parse a year cell without inferring anything: the numeric value truncated
/// to an integer, or `None`.
///
/// ```
/// use railnet_data::records::parse_year;
///
/// assert_eq!(parse_year("2008"), Some(2008));
/// assert_eq!(parse_year("2008.0"), Some(2008));
/// assert_eq!(parse_year(""), None);
/// assert_eq!(parse_year("nan"), None);
/// ```
pub fn parse_year(raw: &str) -> Option<i32> {
    let value: f64 = raw.trim().parse().ok()?;
    value.is_finite().then(|| value.trunc() as i32)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// ============================================================================
// Legacy network tables (stations.csv / tracks.csv)
// ============================================================================

/// Row of `stations.csv`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LegacyStationRow {
    /// Station identifier.
    pub station_id: String,
    /// Station name, referenced by the track table.
    #[serde(default)]
    pub station_name: Option<String>,
    /// Province name.
    #[serde(default)]
    pub province: Option<String>,
    /// Latitude in degrees.
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub latitude: Option<f64>,
    /// Longitude in degrees.
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub longitude: Option<f64>,
}

impl LegacyStationRow {
    /// Convert into a graph station. The province becomes the province name.
    pub fn into_station(self) -> Station {
        let mut station = Station::new(self.station_id);
        station.name = self.station_name;
        station.province_name = non_blank(self.province);
        station.latitude = self.latitude;
        station.longitude = self.longitude;
        station
    }
}

/// Row of `tracks.csv`. Endpoints are station names.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LegacyTrackRow {
    /// Name of the start station.
    #[serde(default)]
    pub start_station: String,
    /// Name of the end station.
    #[serde(default)]
    pub end_station: String,
    /// Length in kilometres.
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub length: Option<f64>,
    /// Construction year cell, verbatim.
    #[serde(default)]
    pub year: Option<String>,
    /// Raw track type label.
    #[serde(default, rename = "type")]
    pub track_type: Option<String>,
    /// Optional edge identifier.
    #[serde(default)]
    pub edge_id: Option<String>,
}

impl LegacyTrackRow {
    /// Convert into a track whose endpoints are station names.
    pub fn into_track(self) -> Track {
        let mut track = Track::new(self.start_station, self.end_station);
        track.length_km = self.length;
        track.year = self.year.as_deref().and_then(parse_year);
        track.year_raw = non_blank(self.year);
        track.track_type = non_blank(self.track_type).map(|t| TrackType::standardize(&t));
        track.edge_id = non_blank(self.edge_id);
        track
    }
}

// ============================================================================
// Yearly datasets (station_dataset.csv / edge_dataset.csv)
// ============================================================================

/// Row of `station_dataset.csv`: one station in one year.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StationRow {
    /// Station identifier, stable across years.
    pub station_id: String,
    /// Dataset year cell, verbatim.
    #[serde(default)]
    pub year: Option<String>,
    /// Longitude in degrees.
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub longitude: Option<f64>,
    /// Latitude in degrees.
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub latitude: Option<f64>,
    /// City identifier.
    #[serde(default)]
    pub city_id: Option<String>,
    /// City name in Chinese.
    #[serde(default)]
    pub city_name_chn: Option<String>,
    /// City name in English.
    #[serde(default)]
    pub city_name_eng: Option<String>,
    /// Province code, filled by province assignment.
    #[serde(default)]
    pub province_code: Option<String>,
    /// Province name, filled by province assignment.
    #[serde(default)]
    pub province_name: Option<String>,
}

impl StationRow {
    /// Parsed dataset year.
    pub fn year(&self) -> Option<i32> {
        self.year.as_deref().and_then(parse_year)
    }

    /// Position, when both components are present and finite.
    pub fn coordinates(&self) -> Option<Coordinates> {
        Coordinates::from_parts(self.latitude, self.longitude)
    }

    /// Non-empty province code.
    pub fn province(&self) -> Option<&str> {
        self.province_code.as_deref().filter(|c| !c.trim().is_empty())
    }

    /// Convert into a graph station.
    pub fn to_station(&self) -> Station {
        let mut station = Station::new(self.station_id.clone()).with_city(
            self.city_id.clone(),
            self.city_name_chn.clone(),
            self.city_name_eng.clone(),
        );
        station.latitude = self.latitude;
        station.longitude = self.longitude;
        station.province_code = non_blank(self.province_code.clone());
        station.province_name = non_blank(self.province_name.clone());
        station
    }
}

/// Row of `edge_dataset.csv`: one segment in one year. Endpoints are station IDs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeRow {
    /// Edge identifier.
    #[serde(default)]
    pub edge_id: Option<String>,
    /// Segment identifier.
    #[serde(default)]
    pub seg_id: Option<String>,
    /// Source station ID.
    pub source_station: String,
    /// Target station ID.
    pub target_station: String,
    /// Length in kilometres.
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub length_km: Option<f64>,
    /// Dataset year cell, verbatim.
    #[serde(default)]
    pub year: Option<String>,
}

impl EdgeRow {
    /// Parsed dataset year.
    pub fn year(&self) -> Option<i32> {
        self.year.as_deref().and_then(parse_year)
    }

    /// Convert into a track between station IDs.
    pub fn to_track(&self) -> Track {
        let mut track = Track::new(self.source_station.clone(), self.target_station.clone());
        track.length_km = self.length_km;
        track.year = self.year();
        track.year_raw = non_blank(self.year.clone());
        track.edge_id = non_blank(self.edge_id.clone());
        track.seg_id = non_blank(self.seg_id.clone());
        track
    }
}

// ============================================================================
// Reference and derived tables
// ============================================================================

/// Row of the `;`-separated city table (`ChinaCities_Swerts.csv`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CityRow {
    /// City name in English.
    #[serde(default, rename = "Name EN")]
    pub name_en: Option<String>,
    /// Latitude in degrees.
    #[serde(default, rename = "Lat", deserialize_with = "csv::invalid_option")]
    pub lat: Option<f64>,
    /// Longitude in degrees.
    #[serde(default, rename = "Long", deserialize_with = "csv::invalid_option")]
    pub long: Option<f64>,
    /// Province, upper-case English.
    #[serde(default, rename = "Province")]
    pub province: Option<String>,
}

impl CityRow {
    /// Position, when both components are present and finite.
    pub fn coordinates(&self) -> Option<Coordinates> {
        Coordinates::from_parts(self.lat, self.long)
    }
}

/// Row of `stations_with_province.csv`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProvinceAssignmentRow {
    /// Station identifier.
    pub station_id: String,
    /// Dataset year of the first occurrence.
    #[serde(default)]
    pub year: Option<String>,
    /// Longitude in degrees.
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub longitude: Option<f64>,
    /// Latitude in degrees.
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub latitude: Option<f64>,
    /// City identifier.
    #[serde(default)]
    pub city_id: Option<String>,
    /// City name in Chinese.
    #[serde(default)]
    pub city_name_chn: Option<String>,
    /// City name in English.
    #[serde(default)]
    pub city_name_eng: Option<String>,
    /// Province code (English), empty when unassigned.
    #[serde(default)]
    pub province_code: String,
    /// Province display name, empty when unassigned.
    #[serde(default)]
    pub province_name: String,
    /// How the province was determined.
    #[serde(default)]
    pub prov_assign_method: String,
    /// Name of the nearest city, empty when unassigned.
    #[serde(default)]
    pub nearest_city: String,
    /// Distance to the nearest city in kilometres.
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub distance_to_city_km: Option<f64>,
}

impl ProvinceAssignmentRow {
    /// Start a row from a station, with all assignment fields empty.
    pub fn from_station(station: StationRow) -> Self {
        Self {
            station_id: station.station_id,
            year: station.year,
            longitude: station.longitude,
            latitude: station.latitude,
            city_id: station.city_id,
            city_name_chn: station.city_name_chn,
            city_name_eng: station.city_name_eng,
            ..Self::default()
        }
    }
}
