//! Plain-text reports.

use crate::provinces::Assignment;
use crate::yearly::ProvinceCoverage;
use chrono::{DateTime, Local};
use railnet_graph::{RailGraph, algorithms};
use std::fmt;

// ============================================================================
// Province assignment report
// ============================================================================

/// Summary statistics over nearest-city distances, in kilometres.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DistanceStats {
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
}

impl DistanceStats {
    /// Compute the statistics, or `None` for an empty input.
    pub fn compute(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut values: Vec<f64> = values.into_iter().filter(|v| v.is_finite()).collect();
        if values.is_empty() {
            return None;
        }
        values.sort_by(f64::total_cmp);

        let n = values.len();
        let median = if n % 2 == 1 {
            values[n / 2]
        } else {
            (values[n / 2 - 1] + values[n / 2]) / 2.0
        };

        Some(Self {
            mean: values.iter().sum::<f64>() / n as f64,
            median,
            min: values[0],
            max: values[n - 1],
        })
    }
}

/// Text report written next to `stations_with_province.csv`.
#[derive(Clone, Debug)]
pub struct AssignmentReport {
    pub generated: DateTime<Local>,
    pub total_stations: usize,
    pub assigned: usize,
    pub no_coords: usize,
    /// Stations per province name, largest first.
    pub distribution: Vec<(String, usize)>,
    pub distances: Option<DistanceStats>,
}

impl AssignmentReport {
    /// Summarize an assignment run, stamped with the current local time.
    pub fn from_assignment(assignment: &Assignment) -> Self {
        Self::with_timestamp(assignment, Local::now())
    }

    /// Summarize an assignment run with an explicit timestamp.
    pub fn with_timestamp(assignment: &Assignment, generated: DateTime<Local>) -> Self {
        let distribution = algorithms::count_labels(
            assignment
                .rows
                .iter()
                .map(|r| r.province_name.as_str())
                .filter(|name| !name.is_empty()),
        );
        let distances =
            DistanceStats::compute(assignment.rows.iter().filter_map(|r| r.distance_to_city_km));

        Self {
            generated,
            total_stations: assignment.rows.len(),
            assigned: assignment.assigned,
            no_coords: assignment.no_coords,
            distribution,
            distances,
        }
    }
}

impl fmt::Display for AssignmentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Station Province Assignment Report")?;
        writeln!(
            f,
            "Generated: {}",
            self.generated.format("%Y-%m-%d %H:%M:%S%.6f")
        )?;
        writeln!(f)?;
        writeln!(f, "Total unique stations: {}", self.total_stations)?;
        writeln!(f, "Stations with province assigned: {}", self.assigned)?;
        writeln!(f, "Stations without coordinates: {}", self.no_coords)?;
        writeln!(f)?;

        writeln!(f, "Province distribution:")?;
        for (province, count) in &self.distribution {
            writeln!(f, "  {province}: {count} stations")?;
        }
        writeln!(f)?;

        if let Some(d) = &self.distances {
            writeln!(f, "Distance to nearest city statistics:")?;
            writeln!(f, "  Mean: {:.2} km", d.mean)?;
            writeln!(f, "  Median: {:.2} km", d.median)?;
            writeln!(f, "  Min: {:.2} km", d.min)?;
            writeln!(f, "  Max: {:.2} km", d.max)?;
        }
        Ok(())
    }
}

// ============================================================================
// Network statistics
// ============================================================================

/// Statistics of a yearly network, written as `network_stats_{year}.txt`.
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkStats {
    pub year: i32,
    pub nodes: usize,
    pub edges: usize,
    pub connected_components: usize,
    pub density: f64,
    pub stations_with_province: usize,
    pub unique_provinces: usize,
}

impl NetworkStats {
    /// Collect statistics from a built graph and the station table coverage.
    pub fn new(year: i32, graph: &RailGraph, coverage: ProvinceCoverage) -> Self {
        Self {
            year,
            nodes: graph.station_count(),
            edges: graph.track_count(),
            connected_components: algorithms::component_count(graph),
            density: algorithms::density(graph),
            stations_with_province: coverage.stations_with_province,
            unique_provinces: coverage.unique_provinces,
        }
    }
}

impl fmt::Display for NetworkStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Railway Network Statistics for {}", self.year)?;
        writeln!(f, "{}", "=".repeat(40))?;
        writeln!(f, "year: {}", self.year)?;
        writeln!(f, "nodes: {}", self.nodes)?;
        writeln!(f, "edges: {}", self.edges)?;
        writeln!(f, "connected_components: {}", self.connected_components)?;
        writeln!(f, "density: {}", self.density)?;
        writeln!(f, "stations_with_province: {}", self.stations_with_province)?;
        writeln!(f, "unique_provinces: {}", self.unique_provinces)
    }
}
