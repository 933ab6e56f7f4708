//! Railway graph infrastructure for railnet.
//!
//! This crate provides the station/track graph and the algorithms that run
//! over it:
//!
//! - [`types`]: `Station`, `Track`, `TrackType`, `RailGraph`, `GraphExport`
//! - [`builder`]: `NetworkBuilder`, two-phase construction from tables
//! - [`algorithms`]: connectivity, density, province coverage, routing
//!
//! # Example
//!
//! ```rust
//! use railnet_graph::{EdgePolicy, NetworkBuilder, Station, Track, algorithms};
//!
//! let stations = vec![Station::new("1"), Station::new("2")];
//! let tracks = vec![Track::new("1", "2").with_length(42.0)];
//!
//! let (graph, stats) = NetworkBuilder::new()
//!     .with_edge_policy(EdgePolicy::CollapseUndirected)
//!     .build(stations, tracks);
//!
//! assert_eq!(stats.tracks_added, 1);
//! assert_eq!(algorithms::component_count(&graph), 1);
//! ```

pub mod algorithms;
pub mod builder;
pub mod types;

pub use algorithms::{NetworkSummary, RouteResult};
pub use builder::{BuildStats, EdgePolicy, EndpointMatching, NetworkBuilder};
pub use types::{GraphExport, RailGraph, Station, Track, TrackType};
