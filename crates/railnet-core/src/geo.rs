//! Great-circle distances and nearest-point search.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A WGS84 position in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl Coordinates {
    /// Creates a new coordinate pair.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Builds coordinates from optional parts, returning `None` unless both
    /// are present and finite.
    pub fn from_parts(latitude: Option<f64>, longitude: Option<f64>) -> Option<Self> {
        let coords = Self::new(latitude?, longitude?);
        coords.is_valid().then_some(coords)
    }

    /// Returns `true` when both components are finite numbers.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// Distance to another point in kilometres.
    pub fn distance_km(&self, other: &Coordinates) -> f64 {
        haversine_km(self.longitude, self.latitude, other.longitude, other.latitude)
    }
}

/// Haversine distance between two points, in kilometres.
///
/// Arguments are in degrees, longitude first.
///
/// # Examples
///
/// ```
/// use railnet_core::geo::haversine_km;
///
/// // One degree of latitude is ~111.19 km.
/// let d = haversine_km(116.0, 39.0, 116.0, 40.0);
/// assert!((d - 111.19).abs() < 0.01);
/// ```
pub fn haversine_km(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> f64 {
    let (lon1, lat1, lon2, lat2) = (
        lon1.to_radians(),
        lat1.to_radians(),
        lon2.to_radians(),
        lat2.to_radians(),
    );
    let dlon = lon2 - lon1;
    let dlat = lat2 - lat1;
    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * a.sqrt().min(1.0).asin() * EARTH_RADIUS_KM
}

/// Find the candidate closest to `origin`.
///
/// Returns the index and distance of the first minimum, or `None` when there
/// are no candidates.
pub fn nearest<'a, I>(origin: &Coordinates, candidates: I) -> Option<(usize, f64)>
where
    I: IntoIterator<Item = &'a Coordinates>,
{
    let mut best: Option<(usize, f64)> = None;
    for (idx, candidate) in candidates.into_iter().enumerate() {
        let d = origin.distance_km(candidate);
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((idx, d)),
        }
    }
    best
}
