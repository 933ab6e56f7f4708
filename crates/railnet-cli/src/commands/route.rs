//! `railnet route`: shortest route in a saved network graph.

use anyhow::{Context, Result};
use railnet_core::Error;
use railnet_data::export::read_graph_json;
use railnet_graph::RouteResult;
use railnet_graph::algorithms::shortest_route;
use std::fmt;
use std::path::Path;

/// Find the shortest route by track length between two station IDs.
///
/// Unknown station IDs are reported as not-found errors; a route that does
/// not exist is a successful result with `found == false`.
pub fn run(graph_path: &Path, from: &str, to: &str) -> Result<RouteOutcome> {
    let graph = read_graph_json(graph_path)
        .with_context(|| format!("loading graph from {}", graph_path.display()))?;
    for id in [from, to] {
        if !graph.contains_station(id) {
            return Err(Error::not_found("station", id).into());
        }
    }
    tracing::debug!(from, to, "Searching route");
    Ok(RouteOutcome {
        from: from.to_string(),
        to: to.to_string(),
        route: shortest_route(&graph, from, to),
    })
}

/// A route query and its result.
#[derive(Clone, Debug)]
pub struct RouteOutcome {
    pub from: String,
    pub to: String,
    pub route: RouteResult,
}

impl fmt::Display for RouteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.route.found {
            return write!(f, "No route from {} to {}", self.from, self.to);
        }
        writeln!(
            f,
            "Route from {} to {}: {} stations, {:.1} km",
            self.from,
            self.to,
            self.route.stations.len(),
            self.route.total_km
        )?;
        for (i, station) in self.route.stations.iter().enumerate() {
            if i > 0 {
                let length = self
                    .route
                    .tracks
                    .get(i - 1)
                    .and_then(|t| t.length_km)
                    .map_or_else(|| "N/A".to_string(), |km| format!("{km:.1} km"));
                writeln!(f, "   | {length}")?;
            }
            write!(f, "{:>2}. {} ({})", i + 1, station.display_name(), station.id)?;
            if i + 1 < self.route.stations.len() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
