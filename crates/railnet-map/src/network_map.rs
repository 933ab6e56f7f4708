//! Track-type map of a station network.
//!
//! Rail tracks are grouped into one layer per track type and stations into
//! one layer per province. A statistics panel sits at the top of the page.

use crate::model::{
    CircleMarker, Feature, LatLng, Layer, MapDocument, MapOptions, Overlay, Polyline, escape_html,
    mean_center,
};
use crate::palette::{FALLBACK_TRACK_COLOR, NETWORK_PALETTE, assign_colors, track_type_color};
use railnet_core::{Error, Result};
use railnet_graph::{RailGraph, Station, Track, TrackType};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Province label for stations without one.
pub const UNKNOWN_PROVINCE: &str = "Unknown";

/// Marker shown instead of a missing construction year.
pub const MISSING_YEAR: &str = "年份缺失";

const TRACK_WEIGHT: f64 = 2.5;
const TRACK_OPACITY: f64 = 0.8;
const STATION_RADIUS: f64 = 4.0;
const STATION_STROKE: &str = "white";
const STATION_FILL_OPACITY: f64 = 0.7;

/// Counts shown in the statistics panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NetworkMapStats {
    /// Stations drawn.
    pub stations: usize,
    /// Rail tracks drawn.
    pub connections: usize,
    /// Rail tracks in the graph, drawn or not.
    pub rail_tracks: usize,
    /// Distinct provinces among all stations.
    pub provinces: usize,
    /// Distinct types among drawn tracks.
    pub track_types: usize,
}

/// A built track-type map.
#[derive(Clone, Debug)]
pub struct NetworkMap {
    pub document: MapDocument,
    pub stats: NetworkMapStats,
}

struct DrawnTrack<'a> {
    track: &'a Track,
    start: &'a Station,
    end: &'a Station,
    points: Vec<LatLng>,
}

fn province_of(station: &Station) -> &str {
    station.province_label().unwrap_or(UNKNOWN_PROVINCE)
}

fn point(station: &Station) -> Option<LatLng> {
    station
        .coordinates()
        .map(|c| [c.latitude, c.longitude])
}

fn format_length(length_km: Option<f64>, precision: usize) -> String {
    match length_km {
        Some(km) if km.is_finite() => format!("{km:.precision$}"),
        _ => "N/A".to_string(),
    }
}

fn format_year(track: &Track) -> String {
    track
        .year
        .map_or_else(|| MISSING_YEAR.to_string(), |y| y.to_string())
}

fn type_label(track: &Track) -> &str {
    track.track_type.as_ref().map_or("", TrackType::name)
}

/// Layer order for track types: the standard types first, then the rest by name.
fn ordered_types(types: impl IntoIterator<Item = String>) -> Vec<String> {
    let present: BTreeSet<String> = types.into_iter().collect();
    let standard: Vec<String> = TrackType::standard()
        .iter()
        .map(|t| t.name().to_string())
        .collect();
    let mut ordered: Vec<String> = standard
        .iter()
        .filter(|name| present.contains(*name))
        .cloned()
        .collect();
    ordered.extend(present.into_iter().filter(|name| !standard.contains(name)));
    ordered
}

fn track_popup(drawn: &DrawnTrack<'_>) -> String {
    let edge_id = drawn
        .track
        .edge_id
        .as_deref()
        .map(|id| format!("Edge ID: {}<br>", escape_html(id)))
        .unwrap_or_default();
    format!(
        "<b>轨道连接</b><br>{edge_id}起点: {start}<br>终点: {end}<br>\
         <b>长度:</b> {length} km<br><b>建设年份:</b> {year}<br><b>轨道类型:</b> {kind}",
        start = escape_html(drawn.start.display_name()),
        end = escape_html(drawn.end.display_name()),
        length = format_length(drawn.track.length_km, 2),
        year = escape_html(&format_year(drawn.track)),
        kind = escape_html(type_label(drawn.track)),
    )
}

fn track_tooltip(drawn: &DrawnTrack<'_>) -> String {
    format!(
        "<div style='font-size: 12px; font-weight: bold;'>\
         <div>🚂 {start} ↔ {end}</div>\
         <div>📏 Length: {length}km</div>\
         <div>📅 Built: {year}</div>\
         <div>🛤️ Type: {kind}</div>\
         </div>",
        start = escape_html(drawn.start.display_name()),
        end = escape_html(drawn.end.display_name()),
        length = format_length(drawn.track.length_km, 1),
        year = escape_html(&format_year(drawn.track)),
        kind = escape_html(type_label(drawn.track)),
    )
}

fn station_popup(station: &Station, coords: LatLng, connections: usize) -> String {
    format!(
        "<b>{name}</b><br><b>Province:</b> {province}<br>\
         <b>Coordinates:</b> ({lat:.2}°N, {lng:.2}°E)<br>\
         <b>Track Connections:</b> {connections} tracks<br><b>Station ID:</b> {id}",
        name = escape_html(station.display_name()),
        province = escape_html(province_of(station)),
        lat = coords[0],
        lng = coords[1],
        id = escape_html(&station.id),
    )
}

fn stats_panel(stats: &NetworkMapStats) -> Overlay {
    Overlay {
        html: format!(
            r#"<div style="position: fixed; top: 20px; left: 50%; transform: translateX(-50%); width: 320px; height: 140px; background-color: rgba(255, 255, 255, 0.95); border: 3px solid #2c3e50; z-index: 9999; font-size: 14px; padding: 15px; border-radius: 10px; box-shadow: 0 4px 8px rgba(0,0,0,0.3); text-align: center;">
<h3 style="margin: 0 0 12px 0; color: #2c3e50; font-weight: bold;">🚄 Railway Network Statistics</h3>
<div style="display: grid; grid-template-columns: 1fr 1fr; gap: 8px; text-align: left;">
<div><strong>🚉 Total Stations:</strong> {}</div>
<div><strong>🛤️ Track Connections:</strong> {}</div>
<div><strong>🗺️ Provinces Covered:</strong> {}</div>
<div><strong>📊 Track Types:</strong> {}</div>
</div>
</div>"#,
            stats.stations, stats.connections, stats.provinces, stats.track_types
        ),
    }
}

/// Build the track-type map of a graph.
///
/// Only stations with coordinates are drawn, and only rail tracks whose two
/// endpoints have coordinates. Fails when no station has coordinates.
pub fn build_network_map(graph: &RailGraph, options: &MapOptions) -> Result<NetworkMap> {
    let located: Vec<(&Station, LatLng)> = graph
        .stations()
        .filter_map(|s| point(s).map(|p| (s, p)))
        .collect();
    let points: Vec<LatLng> = located.iter().map(|(_, p)| *p).collect();
    let center =
        mean_center(&points).ok_or_else(|| Error::data("no stations with coordinates to map"))?;

    // Province colors are assigned in name order over every station.
    let provinces: BTreeSet<&str> = graph.stations().filter_map(Station::province_label).collect();
    let color_labels: BTreeSet<&str> = graph.stations().map(province_of).collect();
    let province_colors = assign_colors(color_labels, &NETWORK_PALETTE);

    let mut rail_tracks = 0;
    let mut by_type: BTreeMap<String, Vec<DrawnTrack<'_>>> = BTreeMap::new();
    let mut connections: HashMap<&str, usize> = HashMap::new();
    for track in graph.tracks().filter(|t| t.is_rail()) {
        rail_tracks += 1;
        let (Some(start), Some(end)) = (graph.station(&track.from), graph.station(&track.to))
        else {
            continue;
        };
        let (Some(a), Some(b)) = (point(start), point(end)) else {
            continue;
        };

        *connections.entry(start.id.as_str()).or_insert(0) += 1;
        if end.id != start.id {
            *connections.entry(end.id.as_str()).or_insert(0) += 1;
        }
        by_type
            .entry(type_label(track).to_string())
            .or_default()
            .push(DrawnTrack {
                track,
                start,
                end,
                points: vec![a, b],
            });
    }

    let stats = NetworkMapStats {
        stations: located.len(),
        connections: by_type.values().map(Vec::len).sum(),
        rail_tracks,
        provinces: provinces.len(),
        track_types: by_type.len(),
    };

    let mut document = MapDocument::new("Railway Network", center, options);
    document.controls.fullscreen = true;
    document.controls.measure = true;

    for type_name in ordered_types(by_type.keys().cloned()) {
        let Some(tracks) = by_type.get(&type_name) else {
            continue;
        };
        let mut layer = Layer::new(format!("{type_name} ({} tracks)", tracks.len()));
        for drawn in tracks {
            let color = drawn
                .track
                .track_type
                .as_ref()
                .map_or(FALLBACK_TRACK_COLOR, track_type_color);
            layer.push(Feature::Polyline(Polyline {
                points: drawn.points.clone(),
                color: color.to_string(),
                weight: TRACK_WEIGHT,
                opacity: TRACK_OPACITY,
                popup: Some(track_popup(drawn)),
                tooltip: Some(track_tooltip(drawn)),
                sticky: true,
            }));
        }
        document.layers.push(layer);
    }

    let mut by_province: Vec<(&str, Vec<(&Station, LatLng)>)> = Vec::new();
    for &(station, p) in &located {
        let label = province_of(station);
        match by_province.iter_mut().find(|(l, _)| *l == label) {
            Some((_, members)) => members.push((station, p)),
            None => by_province.push((label, vec![(station, p)])),
        }
    }
    by_province.sort_by(|a, b| b.1.len().cmp(&a.1.len()).then_with(|| a.0.cmp(&b.0)));

    for (label, members) in by_province {
        let fill = province_colors
            .get(label)
            .copied()
            .unwrap_or(FALLBACK_TRACK_COLOR);
        let mut layer = Layer::new(format!("🚉 {label} ({} stations)", members.len()));
        for (station, p) in members {
            let count = connections.get(station.id.as_str()).copied().unwrap_or(0);
            layer.push(Feature::CircleMarker(CircleMarker {
                center: p,
                radius: STATION_RADIUS,
                color: STATION_STROKE.to_string(),
                fill_color: fill.to_string(),
                fill_opacity: STATION_FILL_OPACITY,
                weight: 1.0,
                popup: Some(station_popup(station, p, count)),
                tooltip: Some(escape_html(station.display_name())),
            }));
        }
        document.layers.push(layer);
    }

    document.overlays.push(stats_panel(&stats));

    log::info!(
        "Prepared {} stations and {} connections ({} rail tracks in network)",
        stats.stations,
        stats.connections,
        stats.rail_tracks
    );
    Ok(NetworkMap { document, stats })
}
