//! Interactive maps of railway networks.
//!
//! Maps are assembled as a [`MapDocument`] and rendered to a single HTML
//! page that loads Leaflet from a CDN.
//!
//! - [`network_map`]: track-type layers and province station layers
//! - [`province_map`]: province layers, railway lines and a legend
//! - [`render`]: HTML output
//!
//! # Example
//!
//! ```rust
//! use railnet_graph::{RailGraph, Station};
//! use railnet_map::{MapOptions, build_network_map, render_html};
//!
//! let mut graph = RailGraph::new();
//! graph.add_station(Station::new("1").with_name("Wuhan").with_coordinates(30.6, 114.3));
//!
//! let map = build_network_map(&graph, &MapOptions::default()).unwrap();
//! let html = render_html(&map.document).unwrap();
//! assert!(html.contains("Wuhan"));
//! ```

pub mod model;
pub mod network_map;
pub mod palette;
pub mod province_map;
pub mod render;

pub use model::{Feature, Layer, MapDocument, MapOptions, TileLayer, escape_html};
pub use network_map::{NetworkMap, NetworkMapStats, build_network_map};
pub use province_map::{ProvinceMap, build_province_map};
pub use render::render_html;
