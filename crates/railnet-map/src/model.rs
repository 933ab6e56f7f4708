//! Renderer-independent description of an interactive map.
//!
//! Popup and tooltip strings are HTML fragments; builders escape any
//! dataset text they put into them. Layer names are plain text and are
//! escaped when serialized.

use serde::{Serialize, Serializer};

/// Default tile server: CartoDB Positron.
pub const POSITRON_TILES_URL: &str =
    "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png";

/// Attribution required by the Positron tiles.
pub const POSITRON_ATTRIBUTION: &str = "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors &copy; <a href=\"https://carto.com/attributions\">CARTO</a>";

/// Default initial zoom level.
pub const DEFAULT_ZOOM: u8 = 5;

/// A `[latitude, longitude]` pair as Leaflet expects it.
pub type LatLng = [f64; 2];

/// Base tile layer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TileLayer {
    /// URL template with `{z}/{x}/{y}` placeholders.
    pub url: String,
    /// Attribution HTML.
    pub attribution: String,
}

impl Default for TileLayer {
    fn default() -> Self {
        Self {
            url: POSITRON_TILES_URL.to_string(),
            attribution: POSITRON_ATTRIBUTION.to_string(),
        }
    }
}

/// Options shared by all map builders.
#[derive(Clone, Debug, PartialEq)]
pub struct MapOptions {
    pub tiles: TileLayer,
    pub zoom: u8,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            tiles: TileLayer::default(),
            zoom: DEFAULT_ZOOM,
        }
    }
}

/// A line between stations.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Polyline {
    pub points: Vec<LatLng>,
    pub color: String,
    pub weight: f64,
    pub opacity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popup: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    /// Tooltip follows the cursor.
    pub sticky: bool,
}

/// A fixed-size circle marker.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CircleMarker {
    pub center: LatLng,
    pub radius: f64,
    /// Stroke color.
    pub color: String,
    pub fill_color: String,
    pub fill_opacity: f64,
    /// Stroke width.
    pub weight: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popup: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
}

/// Anything drawn on a layer.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Feature {
    Polyline(Polyline),
    CircleMarker(CircleMarker),
}

/// A toggleable group of features.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Layer {
    /// Name shown in the layer control.
    #[serde(serialize_with = "serialize_escaped")]
    pub name: String,
    /// Visible when the map opens.
    pub show: bool,
    pub features: Vec<Feature>,
}

impl Layer {
    /// Creates an empty, visible layer.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            show: true,
            features: Vec::new(),
        }
    }

    /// Appends a feature.
    pub fn push(&mut self, feature: Feature) {
        self.features.push(feature);
    }
}

/// Fixed HTML panel placed over the map (legend, statistics).
#[derive(Clone, Debug, PartialEq)]
pub struct Overlay {
    pub html: String,
}

/// Map controls to install.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Controls {
    pub layer_control: bool,
    /// Start the layer control collapsed.
    pub collapsed: bool,
    pub fullscreen: bool,
    pub measure: bool,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            layer_control: true,
            collapsed: false,
            fullscreen: false,
            measure: false,
        }
    }
}

/// A complete map, ready to render.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MapDocument {
    /// Page title.
    #[serde(skip)]
    pub title: String,
    pub center: LatLng,
    pub zoom: u8,
    pub tiles: TileLayer,
    /// Layers in control order.
    pub layers: Vec<Layer>,
    /// Raw HTML panels; rendered outside the map data.
    #[serde(skip)]
    pub overlays: Vec<Overlay>,
    pub controls: Controls,
}

impl MapDocument {
    /// Creates an empty document.
    pub fn new(title: impl Into<String>, center: LatLng, options: &MapOptions) -> Self {
        Self {
            title: title.into(),
            center,
            zoom: options.zoom,
            tiles: options.tiles.clone(),
            layers: Vec::new(),
            overlays: Vec::new(),
            controls: Controls::default(),
        }
    }

    /// Looks up a layer by name.
    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.name == name)
    }

    /// Total number of features across layers.
    pub fn feature_count(&self) -> usize {
        self.layers.iter().map(|l| l.features.len()).sum()
    }
}

/// Mean position of a set of points, or `None` when empty.
pub fn mean_center(points: &[LatLng]) -> Option<LatLng> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let (lat, lng) = points
        .iter()
        .fold((0.0, 0.0), |(lat, lng), p| (lat + p[0], lng + p[1]));
    Some([lat / n, lng / n])
}

/// Escape text for inclusion in HTML.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

fn serialize_escaped<S: Serializer>(value: &str, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&escape_html(value))
}
