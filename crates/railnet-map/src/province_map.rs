//! Province map of a yearly network: one layer per province, a layer of
//! railway lines and a legend.

use crate::model::{
    CircleMarker, Feature, LatLng, Layer, MapDocument, MapOptions, Overlay, Polyline, escape_html,
    mean_center,
};
use crate::palette::{ColorCycle, PROVINCE_PALETTE};
use railnet_core::{Error, Result};
use railnet_graph::{Station, Track};
use std::collections::HashMap;

/// Layer collecting stations without a province.
pub const UNKNOWN_LAYER: &str = "Unknown Province";

/// Layer holding the railway lines.
pub const LINES_LAYER: &str = "Railway Lines";

const UNKNOWN_COLOR: &str = "blue";
const FALLBACK_LINE_COLOR: &str = "red";
const LEGEND_FALLBACK_COLOR: &str = "#ccc";
const STATION_RADIUS: f64 = 3.0;
const STATION_FILL_OPACITY: f64 = 0.8;
const STATION_WEIGHT: f64 = 3.0;
const LINE_WEIGHT: f64 = 1.5;
const LINE_OPACITY: f64 = 0.6;

/// A built province map.
#[derive(Clone, Debug)]
pub struct ProvinceMap {
    pub document: MapDocument,
    /// Station markers drawn.
    pub stations_drawn: usize,
    /// Railway lines drawn.
    pub edges_drawn: usize,
}

struct ProvinceGroup {
    code: String,
    name: String,
    color: String,
    layer: Layer,
}

fn province_code(station: &Station) -> Option<&str> {
    station
        .province_code
        .as_deref()
        .filter(|c| !c.trim().is_empty())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn station_popup(station: &Station) -> String {
    let mut popup = format!("Station: {}", escape_html(&station.id));
    if let Some(city) = non_empty(station.city_name_chn.as_deref()) {
        popup.push_str(&format!("<br>City: {}", escape_html(city)));
    }
    if let Some(province) = non_empty(station.province_name.as_deref()) {
        popup.push_str(&format!("<br>Province: {}", escape_html(province)));
    }
    popup
}

fn legend(groups: &[ProvinceGroup]) -> Overlay {
    let mut html = String::from(
        r#"<div style="position: fixed; bottom: 50px; left: 10px; width: 260px; height: 300px; overflow: auto; z-index:9999; background-color: white; padding: 10px; border:2px solid grey; border-radius: 5px;">
<h4 style="margin:0 0 8px 0;">Provinces</h4>
"#,
    );
    for group in groups {
        let color = if group.color.is_empty() {
            LEGEND_FALLBACK_COLOR
        } else {
            group.color.as_str()
        };
        html.push_str(&format!(
            r#"<div style="display:flex;align-items:center;margin:3px 0"><div style="width:16px;height:12px;background:{color};margin-right:8px;border:1px solid #444"></div><div style="font-size:12px;color:#222">{name}</div></div>
"#,
            name = escape_html(&group.name),
        ));
    }
    html.push_str("</div>");
    Overlay { html }
}

/// Build the province map for one year's stations and edges.
///
/// Station IDs may repeat; the last position recorded for an ID is used for
/// lines, while every row with coordinates gets a marker. Fails when no
/// station has coordinates.
pub fn build_province_map(
    stations: &[Station],
    tracks: &[Track],
    options: &MapOptions,
) -> Result<ProvinceMap> {
    let located: Vec<(&Station, LatLng)> = stations
        .iter()
        .filter_map(|s| s.coordinates().map(|c| (s, [c.latitude, c.longitude])))
        .collect();
    let points: Vec<LatLng> = located.iter().map(|(_, p)| *p).collect();
    let center =
        mean_center(&points).ok_or_else(|| Error::data("no stations with coordinates to map"))?;
    log::info!("Building map with {} stations with valid coordinates", located.len());

    let mut positions: HashMap<&str, LatLng> = HashMap::new();
    let mut first_row: HashMap<&str, &Station> = HashMap::new();
    for &(station, p) in &located {
        positions.insert(station.id.as_str(), p);
        first_row.entry(station.id.as_str()).or_insert(station);
    }

    let mut colors = ColorCycle::new(&PROVINCE_PALETTE);
    let mut groups: Vec<ProvinceGroup> = Vec::new();
    for &(station, _) in &located {
        let Some(code) = province_code(station) else {
            continue;
        };
        if groups.iter().any(|g| g.code == code) {
            continue;
        }
        let name = non_empty(station.province_name.as_deref())
            .map_or_else(|| format!("Province {code}"), str::to_string);
        groups.push(ProvinceGroup {
            code: code.to_string(),
            layer: Layer::new(name.clone()),
            name,
            color: colors.next().unwrap_or(UNKNOWN_COLOR).to_string(),
        });
    }

    let mut unknown = Layer::new(UNKNOWN_LAYER);
    for &(station, p) in &located {
        let group = province_code(station).and_then(|code| groups.iter_mut().find(|g| g.code == code));
        let (color, layer) = match group {
            Some(g) => (g.color.clone(), &mut g.layer),
            None => (UNKNOWN_COLOR.to_string(), &mut unknown),
        };
        layer.push(Feature::CircleMarker(CircleMarker {
            center: p,
            radius: STATION_RADIUS,
            color: color.clone(),
            fill_color: color,
            fill_opacity: STATION_FILL_OPACITY,
            weight: STATION_WEIGHT,
            popup: Some(station_popup(station)),
            tooltip: None,
        }));
    }

    let color_of: HashMap<&str, &str> = groups
        .iter()
        .map(|g| (g.code.as_str(), g.color.as_str()))
        .collect();
    let mut lines = Layer::new(LINES_LAYER);
    for track in tracks {
        let (Some(&a), Some(&b)) = (
            positions.get(track.from.as_str()),
            positions.get(track.to.as_str()),
        ) else {
            continue;
        };
        let color = first_row
            .get(track.from.as_str())
            .and_then(|s| province_code(s))
            .and_then(|code| color_of.get(code).copied())
            .unwrap_or(FALLBACK_LINE_COLOR);
        lines.push(Feature::Polyline(Polyline {
            points: vec![a, b],
            color: color.to_string(),
            weight: LINE_WEIGHT,
            opacity: LINE_OPACITY,
            popup: None,
            tooltip: None,
            sticky: false,
        }));
    }
    let edges_drawn = lines.features.len();
    log::info!("Added {edges_drawn} railway edges to the map");

    let mut document = MapDocument::new("Railway Network by Province", center, options);
    document.overlays.push(legend(&groups));
    document.layers = groups.into_iter().map(|g| g.layer).collect();
    document.layers.push(unknown);
    document.layers.push(lines);

    Ok(ProvinceMap {
        document,
        stations_drawn: located.len(),
        edges_drawn,
    })
}
