//! Core graph types for railway networks.
//!
//! Stations are nodes and tracks are edges. The graph is stored directed so
//! that source tables with parallel or one-way segments survive intact;
//! connectivity queries treat it as undirected.

use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use railnet_core::{Coordinates, Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// ============================================================================
// TrackType enum
// ============================================================================

/// Kind of link between two stations.
///
/// The four kinds used by the source datasets are first-class variants;
/// anything else is carried verbatim in `Other`.
///
/// # Example
///
/// ```rust
/// use railnet_graph::TrackType;
///
/// assert_eq!(TrackType::standardize("rail pass"), TrackType::RailPassenger);
/// assert!(TrackType::RailGoods.is_rail());
/// assert!(!TrackType::Road.is_rail());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TrackType {
    /// Mixed passenger and freight rail.
    RailBoth,
    /// Freight-only rail.
    RailGoods,
    /// Passenger-only rail.
    RailPassenger,
    /// Road link.
    Road,
    /// Type not covered above.
    Other(String),
}

impl TrackType {
    /// Map a raw type label onto a standard variant.
    ///
    /// The passenger label appears both as `rail pass` and `rail_pass`.
    pub fn standardize(raw: &str) -> Self {
        match raw.trim() {
            "rail_both" => Self::RailBoth,
            "rail_good" => Self::RailGoods,
            "rail pass" | "rail_pass" => Self::RailPassenger,
            "road" => Self::Road,
            _ => Self::Other(raw.to_string()),
        }
    }

    /// Returns the standard label.
    pub fn name(&self) -> &str {
        match self {
            Self::RailBoth => "rail_both",
            Self::RailGoods => "rail_good",
            Self::RailPassenger => "rail_pass",
            Self::Road => "road",
            Self::Other(name) => name,
        }
    }

    /// Returns `true` for any rail link (label contains "rail").
    pub fn is_rail(&self) -> bool {
        self.name().to_lowercase().contains("rail")
    }

    /// The four standard types, in display order.
    pub fn standard() -> [TrackType; 4] {
        [
            Self::RailBoth,
            Self::RailGoods,
            Self::RailPassenger,
            Self::Road,
        ]
    }
}

impl fmt::Display for TrackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<String> for TrackType {
    fn from(raw: String) -> Self {
        Self::standardize(&raw)
    }
}

impl From<TrackType> for String {
    fn from(track_type: TrackType) -> Self {
        track_type.name().to_string()
    }
}

// ============================================================================
// Station struct
// ============================================================================

/// A station (graph node).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// Unique identifier from the station table.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Province code (English, upper-case) when known.
    #[serde(default)]
    pub province_code: Option<String>,
    /// Province display name when known.
    #[serde(default)]
    pub province_name: Option<String>,
    /// Latitude in degrees.
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Longitude in degrees.
    #[serde(default)]
    pub longitude: Option<f64>,
    /// City identifier.
    #[serde(default)]
    pub city_id: Option<String>,
    /// City name in Chinese.
    #[serde(default)]
    pub city_name_chn: Option<String>,
    /// City name in English.
    #[serde(default)]
    pub city_name_eng: Option<String>,
}

impl Station {
    /// Creates a station with only an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            province_code: None,
            province_name: None,
            latitude: None,
            longitude: None,
            city_id: None,
            city_name_chn: None,
            city_name_eng: None,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the province code.
    pub fn with_province_code(mut self, code: impl Into<String>) -> Self {
        self.province_code = Some(code.into());
        self
    }

    /// Sets the province display name.
    pub fn with_province_name(mut self, name: impl Into<String>) -> Self {
        self.province_name = Some(name.into());
        self
    }

    /// Sets latitude and longitude.
    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    /// Sets the city fields.
    pub fn with_city(
        mut self,
        city_id: Option<String>,
        name_chn: Option<String>,
        name_eng: Option<String>,
    ) -> Self {
        self.city_id = city_id;
        self.city_name_chn = name_chn;
        self.city_name_eng = name_eng;
        self
    }

    /// Position, when both components are present and finite.
    pub fn coordinates(&self) -> Option<Coordinates> {
        Coordinates::from_parts(self.latitude, self.longitude)
    }

    /// Province label for grouping: name, then code. Empty strings count as absent.
    pub fn province_label(&self) -> Option<&str> {
        non_empty(self.province_name.as_deref()).or_else(|| non_empty(self.province_code.as_deref()))
    }

    /// Name for display, falling back to the identifier.
    pub fn display_name(&self) -> &str {
        non_empty(self.name.as_deref()).unwrap_or(&self.id)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

// ============================================================================
// Track struct
// ============================================================================

/// A track segment (graph edge).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Source station reference (station id once built into a graph).
    pub from: String,
    /// Target station reference (station id once built into a graph).
    pub to: String,
    /// Length in kilometres.
    #[serde(default)]
    pub length_km: Option<f64>,
    /// Construction year exactly as recorded; never inferred.
    #[serde(default)]
    pub year: Option<i32>,
    /// The year cell as it appeared in the source table.
    #[serde(default)]
    pub year_raw: Option<String>,
    /// Kind of link.
    #[serde(default)]
    pub track_type: Option<TrackType>,
    /// Edge identifier from the source table.
    #[serde(default)]
    pub edge_id: Option<String>,
    /// Segment identifier from the source table.
    #[serde(default)]
    pub seg_id: Option<String>,
}

impl Track {
    /// Creates a track between two station references.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            length_km: None,
            year: None,
            year_raw: None,
            track_type: None,
            edge_id: None,
            seg_id: None,
        }
    }

    /// Sets the length.
    pub fn with_length(mut self, length_km: f64) -> Self {
        self.length_km = Some(length_km);
        self
    }

    /// Sets the construction year.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self.year_raw = Some(year.to_string());
        self
    }

    /// Sets the track type.
    pub fn with_type(mut self, track_type: TrackType) -> Self {
        self.track_type = Some(track_type);
        self
    }

    /// Sets the edge identifier.
    pub fn with_edge_id(mut self, edge_id: impl Into<String>) -> Self {
        self.edge_id = Some(edge_id.into());
        self
    }

    /// Returns `true` when the track is a rail link.
    pub fn is_rail(&self) -> bool {
        self.track_type.as_ref().is_some_and(TrackType::is_rail)
    }
}

// ============================================================================
// RailGraph struct
// ============================================================================

/// Serializable snapshot of a [`RailGraph`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphExport {
    /// Stations in insertion order.
    pub stations: Vec<Station>,
    /// Tracks in insertion order.
    pub tracks: Vec<Track>,
}

/// Railway network graph.
///
/// Wraps a petgraph `DiGraph` with a station-id lookup table. Parallel tracks
/// are allowed; use [`RailGraph::upsert_undirected_track`] to keep at most one
/// track per station pair.
#[derive(Clone, Debug, Default)]
pub struct RailGraph {
    /// The underlying directed graph.
    pub graph: DiGraph<Station, Track>,
    /// Lookup table: station ID → petgraph NodeIndex.
    node_indices: HashMap<String, NodeIndex>,
}

impl RailGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stations.
    pub fn station_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of tracks.
    pub fn track_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Gets a station by ID.
    pub fn station(&self, id: &str) -> Option<&Station> {
        self.get_index(id).map(|idx| &self.graph[idx])
    }

    /// Gets the petgraph NodeIndex for a station ID.
    pub fn get_index(&self, id: &str) -> Option<NodeIndex> {
        self.node_indices.get(id).copied()
    }

    /// Checks if a station exists.
    pub fn contains_station(&self, id: &str) -> bool {
        self.node_indices.contains_key(id)
    }

    /// Iterates stations in insertion order.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.graph.node_weights()
    }

    /// Iterates tracks in insertion order.
    pub fn tracks(&self) -> impl Iterator<Item = &Track> {
        self.graph.edge_weights()
    }

    /// Add or update a station.
    ///
    /// Re-adding an existing ID replaces its attributes and keeps its index.
    pub fn add_station(&mut self, station: Station) -> NodeIndex {
        if let Some(&idx) = self.node_indices.get(&station.id) {
            self.graph[idx] = station;
            return idx;
        }
        let id = station.id.clone();
        let idx = self.graph.add_node(station);
        self.node_indices.insert(id, idx);
        idx
    }

    /// Add a track between two existing stations (identified by `track.from`
    /// and `track.to`). Parallel tracks are kept.
    pub fn add_track(&mut self, track: Track) -> Result<EdgeIndex> {
        let (from_idx, to_idx) = self.endpoints(&track)?;
        Ok(self.graph.add_edge(from_idx, to_idx, track))
    }

    /// Add a track, replacing any existing track between the same unordered
    /// station pair. Returns the edge index and whether a track was replaced.
    pub fn upsert_undirected_track(&mut self, track: Track) -> Result<(EdgeIndex, bool)> {
        let (from_idx, to_idx) = self.endpoints(&track)?;
        let existing = self
            .graph
            .find_edge(from_idx, to_idx)
            .or_else(|| self.graph.find_edge(to_idx, from_idx));
        match existing {
            Some(edge_idx) => {
                self.graph[edge_idx] = track;
                Ok((edge_idx, true))
            }
            None => Ok((self.graph.add_edge(from_idx, to_idx, track), false)),
        }
    }

    fn endpoints(&self, track: &Track) -> Result<(NodeIndex, NodeIndex)> {
        let from_idx = self
            .get_index(&track.from)
            .ok_or_else(|| Error::not_found("station", &track.from))?;
        let to_idx = self
            .get_index(&track.to)
            .ok_or_else(|| Error::not_found("station", &track.to))?;
        Ok((from_idx, to_idx))
    }

    /// Snapshot the graph for serialization.
    pub fn to_export(&self) -> GraphExport {
        GraphExport {
            stations: self.stations().cloned().collect(),
            tracks: self.tracks().cloned().collect(),
        }
    }

    /// Rebuild a graph from a snapshot. Every track must reference a station
    /// in the snapshot.
    pub fn from_export(export: GraphExport) -> Result<Self> {
        let mut graph = Self::new();
        for station in export.stations {
            graph.add_station(station);
        }
        for track in export.tracks {
            graph.add_track(track)?;
        }
        Ok(graph)
    }
}

// ============================================================================
// Tests
// ============================================================================
