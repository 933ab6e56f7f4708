//! Network algorithms for railway graph analysis.
//!
//! Provides algorithms for:
//! - Connectivity (weakly connected components, largest component)
//! - Density of the underlying simple undirected graph
//! - Province coverage (stations per province)
//! - Routing (shortest route by track length)
//!
//! All algorithms ignore track direction.

use crate::{RailGraph, Station, Track};
use petgraph::graph::{EdgeIndex, NodeIndex};
use petgraph::unionfind::UnionFind;
use petgraph::visit::EdgeRef;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

// ============================================================================
// Result types
// ============================================================================

/// Result of a shortest route query.
#[derive(Clone, Debug, Serialize)]
pub struct RouteResult {
    /// Stations along the route, in order.
    pub stations: Vec<Station>,
    /// Tracks along the route, in order.
    pub tracks: Vec<Track>,
    /// Total length in kilometres (missing lengths count as zero).
    pub total_km: f64,
    /// Whether a route was found.
    pub found: bool,
}

impl RouteResult {
    /// Creates an empty result indicating no route found.
    pub fn not_found() -> Self {
        Self {
            stations: Vec::new(),
            tracks: Vec::new(),
            total_km: 0.0,
            found: false,
        }
    }
}

/// Headline connectivity figures for a graph.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NetworkSummary {
    /// Number of stations.
    pub nodes: usize,
    /// Number of tracks.
    pub edges: usize,
    /// Number of weakly connected components.
    pub components: usize,
    /// Station count of the largest component.
    pub largest_component: usize,
    /// Simple undirected density.
    pub density: f64,
}

impl NetworkSummary {
    /// Compute the summary for a graph.
    pub fn compute(graph: &RailGraph) -> Self {
        let components = connected_components(graph);
        Self {
            nodes: graph.station_count(),
            edges: graph.track_count(),
            components: components.len(),
            largest_component: components.first().map_or(0, Vec::len),
            density: density(graph),
        }
    }

    /// Returns `true` when every station is reachable from every other.
    pub fn is_connected(&self) -> bool {
        self.components == 1
    }
}

// ============================================================================
// Connectivity
// ============================================================================

/// Weakly connected components as lists of station IDs.
///
/// Components are sorted by size (descending), ties broken by their first
/// member in insertion order. Members keep insertion order.
pub fn connected_components(graph: &RailGraph) -> Vec<Vec<String>> {
    let g = &graph.graph;
    let mut sets: UnionFind<usize> = UnionFind::new(g.node_count());
    for edge in g.edge_references() {
        sets.union(edge.source().index(), edge.target().index());
    }

    let mut by_root: HashMap<usize, usize> = HashMap::new();
    let mut components: Vec<Vec<String>> = Vec::new();
    for idx in g.node_indices() {
        let root = sets.find(idx.index());
        let slot = *by_root.entry(root).or_insert_with(|| {
            components.push(Vec::new());
            components.len() - 1
        });
        components[slot].push(g[idx].id.clone());
    }

    // Stable sort keeps first-seen order among equal sizes.
    components.sort_by(|a, b| b.len().cmp(&a.len()));
    components
}

/// Number of weakly connected components.
pub fn component_count(graph: &RailGraph) -> usize {
    petgraph::algo::connected_components(&graph.graph)
}

/// Station IDs of the largest component, or `None` for an empty graph.
pub fn largest_component(graph: &RailGraph) -> Option<Vec<String>> {
    connected_components(graph).into_iter().next()
}

/// Density of the simple undirected graph underlying `graph`.
///
/// Parallel tracks and opposite directions count once; self-loops count as
/// edges. Graphs with fewer than two stations have density 0.
pub fn density(graph: &RailGraph) -> f64 {
    let n = graph.station_count();
    if n < 2 {
        return 0.0;
    }
    let pairs: HashSet<(usize, usize)> = graph
        .graph
        .edge_references()
        .map(|e| {
            let (a, b) = (e.source().index(), e.target().index());
            (a.min(b), a.max(b))
        })
        .collect();
    let n = n as f64;
    2.0 * pairs.len() as f64 / (n * (n - 1.0))
}

// ============================================================================
// Province coverage
// ============================================================================

/// Stations per province label, largest first, ties by label.
///
/// Stations without a province are not counted.
pub fn province_counts(graph: &RailGraph) -> Vec<(String, usize)> {
    count_labels(graph.stations().filter_map(Station::province_label))
}

/// Count occurrences of labels, largest first, ties by label.
pub fn count_labels<'a>(labels: impl IntoIterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for label in labels {
        *counts.entry(label).or_insert(0) += 1;
    }
    let mut counts: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(label, count)| (label.to_string(), count))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}

// ============================================================================
// Routing
// ============================================================================

#[derive(Copy, Clone, PartialEq)]
struct QueueEntry {
    cost: f64,
    node: NodeIndex,
}

impl Eq for QueueEntry {}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for a min-heap.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find the shortest route between two stations by track length.
///
/// Tracks are traversed in both directions. Negative or missing lengths
/// count as zero. Unknown stations yield [`RouteResult::not_found`].
pub fn shortest_route(graph: &RailGraph, from_id: &str, to_id: &str) -> RouteResult {
    let (Some(start), Some(goal)) = (graph.get_index(from_id), graph.get_index(to_id)) else {
        return RouteResult::not_found();
    };
    let g = &graph.graph;

    if start == goal {
        return RouteResult {
            stations: vec![g[start].clone()],
            tracks: Vec::new(),
            total_km: 0.0,
            found: true,
        };
    }

    let mut dist: HashMap<NodeIndex, f64> = HashMap::new();
    let mut prev: HashMap<NodeIndex, (NodeIndex, EdgeIndex)> = HashMap::new();
    let mut heap = BinaryHeap::new();
    dist.insert(start, 0.0);
    heap.push(QueueEntry {
        cost: 0.0,
        node: start,
    });

    while let Some(QueueEntry { cost, node }) = heap.pop() {
        if node == goal {
            break;
        }
        if dist.get(&node).is_some_and(|&best| cost > best) {
            continue;
        }
        let outgoing = g.edges_directed(node, petgraph::Direction::Outgoing);
        let incoming = g.edges_directed(node, petgraph::Direction::Incoming);
        for edge in outgoing.chain(incoming) {
            let neighbor = if edge.source() == node {
                edge.target()
            } else {
                edge.source()
            };
            let step = edge.weight().length_km.unwrap_or(0.0).max(0.0);
            let next = cost + step;
            if dist.get(&neighbor).is_none_or(|&best| next < best) {
                dist.insert(neighbor, next);
                prev.insert(neighbor, (node, edge.id()));
                heap.push(QueueEntry {
                    cost: next,
                    node: neighbor,
                });
            }
        }
    }

    let Some(&total_km) = dist.get(&goal) else {
        return RouteResult::not_found();
    };

    let mut stations = vec![g[goal].clone()];
    let mut tracks = Vec::new();
    let mut current = goal;
    while let Some(&(before, edge_idx)) = prev.get(&current) {
        tracks.push(g[edge_idx].clone());
        stations.push(g[before].clone());
        current = before;
        if current == start {
            break;
        }
    }
    stations.reverse();
    tracks.reverse();

    RouteResult {
        stations,
        tracks,
        total_km,
        found: true,
    }
}

// ============================================================================
// Tests
// ============================================================================
