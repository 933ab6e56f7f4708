//! `railnet visualize`: the station/track network and its track-type map.

use crate::config::RailnetConfig;
use anyhow::{Context, Result};
use railnet_data::export::write_text;
use railnet_data::load::{load_legacy_stations, load_legacy_tracks, require_files};
use railnet_graph::algorithms::count_labels;
use railnet_graph::{EdgePolicy, EndpointMatching, NetworkBuilder, NetworkSummary};
use railnet_map::{NetworkMapStats, build_network_map, render_html};
use std::fmt;
use std::path::PathBuf;

/// Provinces listed in the analysis.
const TOP_PROVINCES: usize = 10;

/// What `visualize` produced.
#[derive(Clone, Debug)]
pub struct VisualizeOutcome {
    pub map_path: PathBuf,
    pub summary: NetworkSummary,
    pub map_stats: NetworkMapStats,
    /// Station names referenced by tracks that matched no station.
    pub unresolved: Vec<String>,
    /// Station-table province counts, most frequent first.
    pub provinces: Vec<(String, usize)>,
}

/// Build the network from the legacy tables and render its map.
pub fn run(config: &RailnetConfig) -> Result<VisualizeOutcome> {
    let stations_path = config.data_path(&config.data.stations_file);
    let tracks_path = config.data_path(&config.data.tracks_file);
    require_files(&[&stations_path, &tracks_path])?;

    let station_rows = load_legacy_stations(&stations_path)?;
    let track_rows = load_legacy_tracks(&tracks_path)?;
    tracing::info!(
        stations = station_rows.len(),
        tracks = track_rows.len(),
        "Loaded network tables"
    );

    let provinces = count_labels(
        station_rows
            .iter()
            .filter_map(|row| row.province.as_deref())
            .filter(|p| !p.trim().is_empty()),
    );

    let (graph, build) = NetworkBuilder::new()
        .with_matching(EndpointMatching::NormalizedName)
        .with_edge_policy(EdgePolicy::KeepParallel)
        .build(
            station_rows.into_iter().map(|row| row.into_station()),
            track_rows.into_iter().map(|row| row.into_track()),
        );
    tracing::info!(tracks = build.tracks_added, "Linked tracks");
    if !build.unresolved.is_empty() {
        let sample: Vec<&str> = build.unresolved.iter().take(5).map(String::as_str).collect();
        tracing::warn!(
            "{} stations not found, e.g. {}",
            build.unresolved.len(),
            sample.join(", ")
        );
    }

    let map = build_network_map(&graph, &config.map_options())?;
    let html = render_html(&map.document)?;
    let map_path = config.output_path(&config.output.map_file);
    write_text(&map_path, &html)
        .with_context(|| format!("writing map to {}", map_path.display()))?;
    tracing::info!(path = %map_path.display(), "Map saved");

    Ok(VisualizeOutcome {
        map_path,
        summary: NetworkSummary::compute(&graph),
        map_stats: map.stats,
        unresolved: build.unresolved,
        provinces,
    })
}

impl fmt::Display for VisualizeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Map saved to: {}", self.map_path.display())?;
        writeln!(f)?;
        writeln!(f, "Network Analysis Results:")?;
        writeln!(f, "- Nodes: {}", self.summary.nodes)?;
        writeln!(f, "- Edges: {}", self.summary.edges)?;
        if self.summary.edges > 0 {
            writeln!(f, "- Connected Components: {}", self.summary.components)?;
            if self.summary.is_connected() {
                writeln!(f, "Network is fully connected")?;
            } else {
                writeln!(
                    f,
                    "- Largest Connected Component: {} stations",
                    self.summary.largest_component
                )?;
            }
        }
        writeln!(f)?;
        write!(f, "Covers {} provinces:", self.provinces.len())?;
        for (province, count) in self.provinces.iter().take(TOP_PROVINCES) {
            write!(f, "\n  {province}: {count} stations")?;
        }
        Ok(())
    }
}
