//! Color palettes.

use railnet_graph::TrackType;
use std::collections::HashMap;

/// Province colors for the track-type map.
pub const NETWORK_PALETTE: [&str; 18] = [
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEAA7", "#DDA0DD", "#98D8C8", "#F7DC6F",
    "#BB8FCE", "#85C1E9", "#F8C471", "#82E0AA", "#AED6F1", "#F5B7B1", "#D2B4DE", "#A3E4D7",
    "#F9E79F", "#FADBD8",
];

/// Province colors for the yearly province map.
pub const PROVINCE_PALETTE: [&str; 20] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf", "#393b79", "#5254a3", "#6b6ecf", "#9c9ede", "#637939", "#8ca252",
    "#b5cf6b", "#cedb9c", "#8c6d31", "#bd9e39",
];

/// Color for track types without a dedicated one.
pub const FALLBACK_TRACK_COLOR: &str = "#808080";

/// Line color of a track type.
pub fn track_type_color(track_type: &TrackType) -> &'static str {
    match track_type {
        TrackType::RailBoth => "#FF0000",
        TrackType::RailGoods => "#008000",
        TrackType::RailPassenger => "#0000FF",
        TrackType::Road => "#0066CC",
        TrackType::Other(_) => FALLBACK_TRACK_COLOR,
    }
}

/// Endless iterator over a palette.
///
/// ```
/// use railnet_map::palette::ColorCycle;
///
/// let mut cycle = ColorCycle::new(&["#000", "#fff"]);
/// assert_eq!(cycle.next(), Some("#000"));
/// assert_eq!(cycle.next(), Some("#fff"));
/// assert_eq!(cycle.next(), Some("#000"));
/// ```
#[derive(Clone, Debug)]
pub struct ColorCycle<'a> {
    palette: &'a [&'a str],
    position: usize,
}

impl<'a> ColorCycle<'a> {
    pub fn new(palette: &'a [&'a str]) -> Self {
        Self {
            palette,
            position: 0,
        }
    }
}

impl<'a> Iterator for ColorCycle<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.palette.is_empty() {
            return None;
        }
        let color = self.palette[self.position % self.palette.len()];
        self.position += 1;
        Some(color)
    }
}

/// Give each label a palette color, wrapping around when labels outnumber
/// colors. Labels are colored in the order given.
pub fn assign_colors<'a, I, S>(labels: I, palette: &'a [&'a str]) -> HashMap<String, &'a str>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    labels
        .into_iter()
        .zip(ColorCycle::new(palette))
        .map(|(label, color)| (label.into(), color))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_type_colors() {
        assert_eq!(track_type_color(&TrackType::RailBoth), "#FF0000");
        assert_eq!(track_type_color(&TrackType::RailGoods), "#008000");
        assert_eq!(track_type_color(&TrackType::RailPassenger), "#0000FF");
        assert_eq!(track_type_color(&TrackType::Road), "#0066CC");
        assert_eq!(
            track_type_color(&TrackType::standardize("rail_high_speed")),
            FALLBACK_TRACK_COLOR
        );
    }

    #[test]
    fn test_cycle_wraps() {
        let colors: Vec<&str> = ColorCycle::new(&PROVINCE_PALETTE).take(21).collect();
        assert_eq!(colors[0], "#1f77b4");
        assert_eq!(colors[19], "#bd9e39");
        assert_eq!(colors[20], "#1f77b4");
    }

    #[test]
    fn test_cycle_empty_palette() {
        assert_eq!(ColorCycle::new(&[]).next(), None);
    }

    #[test]
    fn test_assign_colors_wraps() {
        let labels: Vec<String> = (0..19).map(|i| format!("p{i:02}")).collect();
        let colors = assign_colors(labels, &NETWORK_PALETTE);
        assert_eq!(colors["p00"], "#FF6B6B");
        assert_eq!(colors["p17"], "#FADBD8");
        assert_eq!(colors["p18"], "#FF6B6B");
    }
}
