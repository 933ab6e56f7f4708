//! `railnet build`: one year's graph, statistics, province map and tables.

use crate::config::RailnetConfig;
use anyhow::{Context, Result};
use railnet_data::export::{write_csv, write_graph_json, write_text};
use railnet_data::load::{
    load_edge_dataset, load_province_assignments, load_station_dataset, require_files,
};
use railnet_data::{NetworkStats, YearOutputs, merge_provinces, select_year};
use railnet_graph::{EdgePolicy, EndpointMatching, NetworkBuilder, Station, Track};
use railnet_map::{build_province_map, render_html};
use std::fmt;
use std::path::PathBuf;

/// What `build` produced.
#[derive(Clone, Debug)]
pub struct BuildOutcome {
    pub outputs: YearOutputs,
    pub stats: NetworkStats,
    /// Station rows of the selected year.
    pub stations: usize,
    /// Edge rows of the selected year.
    pub segments: usize,
    /// Province table merged in, if one was found.
    pub assignments: Option<PathBuf>,
}

/// Run the yearly pipeline for `year`, or the latest year when `None`.
pub fn run(config: &RailnetConfig, year: Option<i32>) -> Result<BuildOutcome> {
    let stations_path = config.data_path(&config.data.station_dataset);
    let edges_path = config.data_path(&config.data.edge_dataset);
    require_files(&[&stations_path, &edges_path])?;

    tracing::info!(path = %stations_path.display(), "Loading station data");
    let station_rows = load_station_dataset(&stations_path)?;
    tracing::info!(path = %edges_path.display(), "Loading edge data");
    let edge_rows = load_edge_dataset(&edges_path)?;

    let mut slice = select_year(station_rows, edge_rows, year)?;
    tracing::info!(
        year = slice.year,
        stations = slice.stations.len(),
        edges = slice.edges.len(),
        "Selected dataset year"
    );

    let assignments = config.find_assignments();
    let table = match &assignments {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading province information");
            load_province_assignments(path)?
        }
        None => {
            tracing::info!("No province information file found; building without provinces");
            Vec::new()
        }
    };
    let coverage = merge_provinces(&mut slice.stations, &table);
    if assignments.is_some() {
        tracing::info!(
            stations = coverage.stations_with_province,
            provinces = coverage.unique_provinces,
            "Merged province information"
        );
    }

    let stations: Vec<Station> = slice.stations.iter().map(|row| row.to_station()).collect();
    let tracks: Vec<Track> = slice.edges.iter().map(|row| row.to_track()).collect();

    let (graph, build) = NetworkBuilder::new()
        .with_matching(EndpointMatching::StationId)
        .with_edge_policy(EdgePolicy::CollapseUndirected)
        .build(stations.iter().cloned(), tracks.iter().cloned());
    tracing::info!(
        nodes = graph.station_count(),
        edges = graph.track_count(),
        skipped = build.tracks_skipped,
        "Built network graph"
    );

    let outputs = YearOutputs::for_year(&config.output.dir, slice.year);

    write_graph_json(&outputs.graph, &graph)
        .with_context(|| format!("saving graph to {}", outputs.graph.display()))?;

    let stats = NetworkStats::new(slice.year, &graph, coverage);
    write_text(&outputs.stats, &stats.to_string())
        .with_context(|| format!("writing {}", outputs.stats.display()))?;

    let map = build_province_map(&stations, &tracks, &config.map_options())?;
    let html = render_html(&map.document)?;
    write_text(&outputs.map, &html)
        .with_context(|| format!("writing {}", outputs.map.display()))?;

    write_csv(&outputs.stations, &slice.stations)
        .with_context(|| format!("writing {}", outputs.stations.display()))?;
    write_csv(&outputs.edges, &slice.edges)
        .with_context(|| format!("writing {}", outputs.edges.display()))?;

    Ok(BuildOutcome {
        outputs,
        stats,
        stations: slice.stations.len(),
        segments: slice.edges.len(),
        assignments,
    })
}

impl fmt::Display for BuildOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Saved network graph to: {}", self.outputs.graph.display())?;
        writeln!(f, "Network statistics saved to: {}", self.outputs.stats.display())?;
        writeln!(f, "Interactive map saved to: {}", self.outputs.map.display())?;
        writeln!(
            f,
            "Processed station data saved to: {}",
            self.outputs.stations.display()
        )?;
        writeln!(
            f,
            "Processed edge data saved to: {}",
            self.outputs.edges.display()
        )?;
        writeln!(f)?;
        writeln!(f, "Summary:")?;
        writeln!(f, "- Year: {}", self.stats.year)?;
        writeln!(f, "- Stations: {}", self.stations)?;
        writeln!(f, "- Railway segments: {}", self.segments)?;
        writeln!(
            f,
            "- Network graph: {} nodes, {} edges",
            self.stats.nodes, self.stats.edges
        )?;
        writeln!(
            f,
            "- Stations with province info: {}",
            self.stats.stations_with_province
        )?;
        write!(f, "- Unique provinces: {}", self.stats.unique_provinces)
    }
}
