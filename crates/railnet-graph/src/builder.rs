//! NetworkBuilder for constructing railway graphs from station and track tables.
//!
//! The builder works in two phases:
//!
//! 1. Add every station, so that all nodes exist before any track is linked.
//! 2. Resolve each track's endpoints and add the track.
//!
//! Tracks whose endpoints cannot be resolved are skipped and their endpoint
//! references are reported in [`BuildStats::unresolved`] instead of being
//! silently dropped.

use crate::{RailGraph, Station, Track};
use railnet_core::names::normalize_name;
use std::collections::{HashMap, HashSet};

// ============================================================================
// Builder configuration types
// ============================================================================

/// How track endpoints are matched to stations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EndpointMatching {
    /// `Track::from`/`Track::to` hold station IDs.
    #[default]
    StationId,
    /// `Track::from`/`Track::to` hold station names, matched after
    /// [`normalize_name`]. A later station with the same normalized name
    /// shadows an earlier one.
    NormalizedName,
}

/// What to do with several tracks between the same stations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EdgePolicy {
    /// Keep every track (multigraph).
    #[default]
    KeepParallel,
    /// Keep one track per unordered station pair; the last one wins.
    CollapseUndirected,
}

/// Statistics from a graph build operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Number of station rows added (including upserts of repeated IDs).
    pub stations_added: usize,
    /// Number of tracks linked into the graph.
    pub tracks_added: usize,
    /// Number of tracks skipped because an endpoint did not resolve.
    pub tracks_skipped: usize,
    /// Tracks that replaced an earlier track between the same stations.
    pub collapsed_tracks: usize,
    /// Endpoint references that matched no station, unique, first-seen order.
    pub unresolved: Vec<String>,
}

// ============================================================================
// NetworkBuilder
// ============================================================================

/// Builder for railway graphs.
#[derive(Clone, Debug, Default)]
pub struct NetworkBuilder {
    matching: EndpointMatching,
    edge_policy: EdgePolicy,
}

impl NetworkBuilder {
    /// Creates a builder that matches by station ID and keeps parallel tracks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how track endpoints are matched.
    pub fn with_matching(mut self, matching: EndpointMatching) -> Self {
        self.matching = matching;
        self
    }

    /// Sets the parallel-track policy.
    pub fn with_edge_policy(mut self, edge_policy: EdgePolicy) -> Self {
        self.edge_policy = edge_policy;
        self
    }

    /// Builds the graph.
    ///
    /// Resolved tracks have `from`/`to` rewritten to station IDs.
    pub fn build(
        &self,
        stations: impl IntoIterator<Item = Station>,
        tracks: impl IntoIterator<Item = Track>,
    ) -> (RailGraph, BuildStats) {
        let mut graph = RailGraph::new();
        let mut stats = BuildStats::default();

        // ================================================================
        // Phase 1: Add all stations
        // ================================================================
        let mut name_index: HashMap<String, String> = HashMap::new();
        for station in stations {
            if self.matching == EndpointMatching::NormalizedName {
                let key = normalize_name(station.name.as_deref().unwrap_or_default());
                name_index.insert(key, station.id.clone());
            }
            graph.add_station(station);
            stats.stations_added += 1;
        }

        // ================================================================
        // Phase 2: Resolve endpoints and link tracks
        // ================================================================
        let mut seen_unresolved: HashSet<String> = HashSet::new();

        for mut track in tracks {
            let from_id = self.resolve(&graph, &name_index, &track.from);
            let to_id = self.resolve(&graph, &name_index, &track.to);

            let (from_id, to_id) = match (from_id, to_id) {
                (Some(from_id), Some(to_id)) => (from_id, to_id),
                (from_id, to_id) => {
                    for (reference, resolved) in
                        [(&track.from, from_id.is_some()), (&track.to, to_id.is_some())]
                    {
                        if !resolved && seen_unresolved.insert(reference.clone()) {
                            stats.unresolved.push(reference.clone());
                        }
                    }
                    stats.tracks_skipped += 1;
                    continue;
                }
            };

            track.from = from_id;
            track.to = to_id;

            let linked = match self.edge_policy {
                EdgePolicy::KeepParallel => graph.add_track(track).map(|_| false),
                EdgePolicy::CollapseUndirected => {
                    graph.upsert_undirected_track(track).map(|(_, replaced)| replaced)
                }
            };

            match linked {
                Ok(replaced) => {
                    stats.tracks_added += 1;
                    if replaced {
                        stats.collapsed_tracks += 1;
                    }
                }
                Err(e) => {
                    log::warn!("Skipping track: {e}");
                    stats.tracks_skipped += 1;
                }
            }
        }

        log::debug!(
            "Built graph: {} stations, {} tracks ({} skipped, {} collapsed)",
            graph.station_count(),
            graph.track_count(),
            stats.tracks_skipped,
            stats.collapsed_tracks
        );

        (graph, stats)
    }

    fn resolve(
        &self,
        graph: &RailGraph,
        name_index: &HashMap<String, String>,
        reference: &str,
    ) -> Option<String> {
        match self.matching {
            EndpointMatching::StationId => graph
                .contains_station(reference)
                .then(|| reference.to_string()),
            EndpointMatching::NormalizedName => {
                let key = normalize_name(reference);
                if key.is_empty() {
                    return None;
                }
                name_index.get(&key).cloned()
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn named(id: &str, name: &str) -> Station {
        Station::new(id).with_name(name)
    }

    #[test]
    fn test_build_by_id() {
        let stations = vec![Station::new("1"), Station::new("2"), Station::new("3")];
        let tracks = vec![Track::new("1", "2"), Track::new("2", "3")];

        let (graph, stats) = NetworkBuilder::new().build(stations, tracks);

        assert_eq!(graph.station_count(), 3);
        assert_eq!(graph.track_count(), 2);
        assert_eq!(stats.stations_added, 3);
        assert_eq!(stats.tracks_added, 2);
        assert!(stats.unresolved.is_empty());
    }

    #[test]
    fn test_build_by_id_skips_unknown_endpoint() {
        let stations = vec![Station::new("1"), Station::new("2")];
        let tracks = vec![
            Track::new("1", "9"),
            Track::new("9", "1"),
            Track::new("8", "7"),
        ];

        let (graph, stats) = NetworkBuilder::new().build(stations, tracks);

        assert_eq!(graph.track_count(), 0);
        assert_eq!(stats.tracks_skipped, 3);
        assert_eq!(stats.unresolved, ["9", "8", "7"]);
    }

    #[test]
    fn test_build_by_normalized_name() {
        let stations = vec![named("s1", "北京南"), named("s2", "Tianjin West")];
        let tracks = vec![Track::new("北京（南）", "tianjin  west")];

        let (graph, stats) = NetworkBuilder::new()
            .with_matching(EndpointMatching::NormalizedName)
            .build(stations, tracks);

        assert_eq!(stats.tracks_added, 1);
        let track = graph.tracks().next().unwrap();
        assert_eq!(track.from, "s1");
        assert_eq!(track.to, "s2");
    }

    #[test]
    fn test_later_station_shadows_same_normalized_name() {
        let stations = vec![
            named("old", "Hub Station"),
            named("new", "hub  station"),
            named("other", "Hub-Station"),
        ];
        let tracks = vec![Track::new("HUB STATION", "hubstation")];

        let (graph, _) = NetworkBuilder::new()
            .with_matching(EndpointMatching::NormalizedName)
            .build(stations, tracks);

        let track = graph.tracks().next().unwrap();
        assert_eq!(track.from, "new");
        assert_eq!(track.to, "other");
    }

    #[test]
    fn test_name_matching_reports_original_text() {
        let stations = vec![named("s1", "A")];
        let tracks = vec![Track::new("A", "Nowhere"), Track::new("Nowhere", "")];

        let (_, stats) = NetworkBuilder::new()
            .with_matching(EndpointMatching::NormalizedName)
            .build(stations, tracks);

        assert_eq!(stats.unresolved, ["Nowhere", ""]);
        assert_eq!(stats.tracks_skipped, 2);
    }

    #[test]
    fn test_keep_parallel_tracks() {
        let stations = vec![Station::new("1"), Station::new("2")];
        let tracks = vec![Track::new("1", "2"), Track::new("1", "2"), Track::new("2", "1")];

        let (graph, stats) = NetworkBuilder::new().build(stations, tracks);

        assert_eq!(graph.track_count(), 3);
        assert_eq!(stats.collapsed_tracks, 0);
    }

    #[test]
    fn test_collapse_undirected_tracks() {
        let stations = vec![Station::new("1"), Station::new("2")];
        let tracks = vec![
            Track::new("1", "2").with_edge_id("e1"),
            Track::new("2", "1").with_edge_id("e2"),
        ];

        let (graph, stats) = NetworkBuilder::new()
            .with_edge_policy(EdgePolicy::CollapseUndirected)
            .build(stations, tracks);

        assert_eq!(graph.track_count(), 1);
        assert_eq!(stats.tracks_added, 2);
        assert_eq!(stats.collapsed_tracks, 1);
        assert_eq!(graph.tracks().next().unwrap().edge_id.as_deref(), Some("e2"));
    }

    #[test]
    fn test_repeated_station_ids_upsert() {
        let stations = vec![named("1", "First"), named("1", "Second")];
        let (graph, stats) = NetworkBuilder::new().build(stations, Vec::new());

        assert_eq!(graph.station_count(), 1);
        assert_eq!(stats.stations_added, 2);
        assert_eq!(graph.station("1").unwrap().name.as_deref(), Some("Second"));
    }
}
