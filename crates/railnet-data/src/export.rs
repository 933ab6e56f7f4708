//! Writing processed tables, reports and graph snapshots.

use railnet_core::{Error, Result};
use railnet_graph::{GraphExport, RailGraph};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
    }
    Ok(())
}

/// Write rows as a headed, comma-separated CSV file.
pub fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    ensure_parent(path)?;
    let mut writer = csv::Writer::from_path(path).map_err(|e| Error::csv_with_path(e, path))?;
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| Error::csv_with_path(e, path))?;
    }
    writer.flush().map_err(|e| Error::io_with_path(e, path))?;
    log::debug!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

/// Write a text file, creating parent directories.
pub fn write_text(path: &Path, contents: &str) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, contents).map_err(|e| Error::io_with_path(e, path))
}

/// Save a graph snapshot as pretty-printed JSON.
pub fn write_graph_json(path: &Path, graph: &RailGraph) -> Result<()> {
    let json = serde_json::to_string_pretty(&graph.to_export())?;
    write_text(path, &json)
}

/// Load a graph saved with [`write_graph_json`].
pub fn read_graph_json(path: &Path) -> Result<RailGraph> {
    if !path.is_file() {
        return Err(Error::missing_file(path));
    }
    let json = fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
    let export: GraphExport = serde_json::from_str(&json)?;
    RailGraph::from_export(export)
}

/// Output file locations of the yearly pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct YearOutputs {
    pub graph: PathBuf,
    pub stats: PathBuf,
    pub map: PathBuf,
    pub stations: PathBuf,
    pub edges: PathBuf,
}

impl YearOutputs {
    /// Standard file names for `year` under `dir`.
    pub fn for_year(dir: &Path, year: i32) -> Self {
        Self {
            graph: dir.join(format!("rail_network_{year}.json")),
            stats: dir.join(format!("network_stats_{year}.txt")),
            map: dir.join(format!("rail_network_map_{year}.html")),
            stations: dir.join(format!("stations_processed_{year}.csv")),
            edges: dir.join(format!("edges_processed_{year}.csv")),
        }
    }
}
