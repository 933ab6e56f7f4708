//! Configuration for the railnet CLI.
//!
//! Settings are read from a TOML file. The file is located in this order:
//! the `--config` flag, the `RAILNET_CONFIG` environment variable,
//! `./railnet.toml`, then `<config dir>/railnet/config.toml`. When none is
//! found the defaults apply. `RAILNET_DATA_DIR` and `RAILNET_OUTPUT_DIR`
//! override the directories from the file.

use railnet_core::{Error, Result};
use railnet_map::{MapOptions, TileLayer};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "RAILNET_CONFIG";

/// Environment variable overriding `data.dir`.
pub const DATA_DIR_ENV: &str = "RAILNET_DATA_DIR";

/// Environment variable overriding `output.dir`.
pub const OUTPUT_DIR_ENV: &str = "RAILNET_OUTPUT_DIR";

/// Project-local config file name.
pub const LOCAL_CONFIG_FILE: &str = "railnet.toml";

// ============================================================================
// ConfigManager
// ============================================================================

/// Loading, locating and serializing a TOML-backed configuration.
pub trait ConfigManager: Default + Serialize + DeserializeOwned {
    /// Name used for the config directory and in messages.
    fn project_name() -> &'static str;

    /// User-level config location.
    fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(Self::project_name()).join("config.toml"))
    }

    /// Locate the config file: explicit path, environment, local file, user file.
    fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return Some(local);
        }
        Self::default_config_path()
    }

    /// Apply environment overrides after loading.
    fn apply_env_overrides(&mut self) {}

    /// Load the configuration.
    ///
    /// A missing file is an error only when it was named explicitly.
    fn load(explicit: Option<&str>) -> Result<Self> {
        let named = explicit.is_some() || std::env::var_os(CONFIG_ENV).is_some();
        let mut config = match Self::resolve_config_path(explicit) {
            Some(path) if path.is_file() => Self::from_file(&path)?,
            Some(path) if named => return Err(Error::missing_file(path)),
            _ => Self::default(),
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse a config file.
    fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let config = toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Serialize to pretty TOML.
    fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }
}

// ============================================================================
// RailnetConfig
// ============================================================================

/// Input file locations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Directory the file names below are relative to.
    #[serde(default = "default_dir")]
    pub dir: PathBuf,

    /// Station table of the track-type network.
    #[serde(default = "default_stations_file")]
    pub stations_file: String,

    /// Track table of the track-type network.
    #[serde(default = "default_tracks_file")]
    pub tracks_file: String,

    /// Yearly station dataset.
    #[serde(default = "default_station_dataset")]
    pub station_dataset: String,

    /// Yearly edge dataset.
    #[serde(default = "default_edge_dataset")]
    pub edge_dataset: String,

    /// `;`-separated city table with coordinates and provinces.
    #[serde(default = "default_cities_file")]
    pub cities_file: String,
}

/// Output file locations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory all outputs are written to.
    #[serde(default = "default_dir")]
    pub dir: PathBuf,

    /// Track-type map written by `visualize`.
    #[serde(default = "default_map_file")]
    pub map_file: String,

    /// Province assignments written by `assign-provinces` and read by `build`.
    #[serde(default = "default_provinces_file")]
    pub provinces_file: String,

    /// Text report written by `assign-provinces`.
    #[serde(default = "default_assignment_report")]
    pub assignment_report: String,
}

/// Map appearance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    /// Tile URL template.
    #[serde(default = "default_tiles_url")]
    pub tiles_url: String,

    /// Tile attribution HTML.
    #[serde(default = "default_attribution")]
    pub attribution: String,

    /// Initial zoom level.
    #[serde(default = "default_zoom")]
    pub zoom: u8,
}

/// Complete CLI configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RailnetConfig {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub map: MapConfig,
}

fn default_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_stations_file() -> String {
    "stations.csv".to_string()
}

fn default_tracks_file() -> String {
    "tracks.csv".to_string()
}

fn default_station_dataset() -> String {
    "station_dataset.csv".to_string()
}

fn default_edge_dataset() -> String {
    "edge_dataset.csv".to_string()
}

fn default_cities_file() -> String {
    "ChinaCities_Swerts.csv".to_string()
}

fn default_map_file() -> String {
    "railway_network_map.html".to_string()
}

fn default_provinces_file() -> String {
    "stations_with_province.csv".to_string()
}

fn default_assignment_report() -> String {
    "assign_province_report.txt".to_string()
}

fn default_tiles_url() -> String {
    TileLayer::default().url
}

fn default_attribution() -> String {
    TileLayer::default().attribution
}

fn default_zoom() -> u8 {
    MapOptions::default().zoom
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            stations_file: default_stations_file(),
            tracks_file: default_tracks_file(),
            station_dataset: default_station_dataset(),
            edge_dataset: default_edge_dataset(),
            cities_file: default_cities_file(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            map_file: default_map_file(),
            provinces_file: default_provinces_file(),
            assignment_report: default_assignment_report(),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            tiles_url: default_tiles_url(),
            attribution: default_attribution(),
            zoom: default_zoom(),
        }
    }
}

impl ConfigManager for RailnetConfig {
    fn project_name() -> &'static str {
        "railnet"
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }
}

impl RailnetConfig {
    /// Apply directory overrides from a variable lookup. Empty values are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(dir) = lookup(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
            self.data.dir = PathBuf::from(dir);
        }
        if let Some(dir) = lookup(OUTPUT_DIR_ENV).filter(|v| !v.is_empty()) {
            self.output.dir = PathBuf::from(dir);
        }
    }

    /// Path of an input file.
    pub fn data_path(&self, file: &str) -> PathBuf {
        self.data.dir.join(file)
    }

    /// Path of an output file.
    pub fn output_path(&self, file: &str) -> PathBuf {
        self.output.dir.join(file)
    }

    /// Where an existing province assignment table is looked for: the output
    /// directory first, then the data directory.
    pub fn find_assignments(&self) -> Option<PathBuf> {
        [
            self.output_path(&self.output.provinces_file),
            self.data_path(&self.output.provinces_file),
        ]
        .into_iter()
        .find(|p| p.is_file())
    }

    /// Map options from the `[map]` section.
    pub fn map_options(&self) -> MapOptions {
        MapOptions {
            tiles: TileLayer {
                url: self.map.tiles_url.clone(),
                attribution: self.map.attribution.clone(),
            },
            zoom: self.map.zoom,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
