//! Rendering a [`MapDocument`] as a self-contained Leaflet page.

use crate::model::{MapDocument, escape_html};
use railnet_core::Result;

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const FULLSCREEN_CSS: &str =
    "https://cdn.jsdelivr.net/npm/leaflet.fullscreen@3.0.2/Control.FullScreen.css";
const FULLSCREEN_JS: &str =
    "https://cdn.jsdelivr.net/npm/leaflet.fullscreen@3.0.2/Control.FullScreen.min.js";
const MEASURE_CSS: &str = "https://cdn.jsdelivr.net/npm/leaflet-measure@3.1.0/dist/leaflet-measure.css";
const MEASURE_JS: &str = "https://cdn.jsdelivr.net/npm/leaflet-measure@3.1.0/dist/leaflet-measure.js";

/// Popup width limit in pixels.
const POPUP_MAX_WIDTH: u32 = 300;

/// Serialize the document for embedding inside a `<script>` element.
///
/// `</` is escaped so that dataset text cannot close the element.
pub fn embed_json(doc: &MapDocument) -> Result<String> {
    Ok(serde_json::to_string(doc)?.replace("</", "<\\/"))
}

fn asset_tags(doc: &MapDocument) -> String {
    let mut assets = vec![(LEAFLET_CSS, LEAFLET_JS)];
    if doc.controls.fullscreen {
        assets.push((FULLSCREEN_CSS, FULLSCREEN_JS));
    }
    if doc.controls.measure {
        assets.push((MEASURE_CSS, MEASURE_JS));
    }
    assets
        .iter()
        .map(|(css, js)| {
            format!(
                "<link rel=\"stylesheet\" href=\"{css}\">\n<script src=\"{js}\"></script>\n"
            )
        })
        .collect()
}

/// Render the document as one HTML page.
pub fn render_html(doc: &MapDocument) -> Result<String> {
    let data = embed_json(doc)?;
    let overlays: String = doc
        .overlays
        .iter()
        .map(|o| format!("{}\n", o.html))
        .collect();

    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width,initial-scale=1">
<title>{title}</title>
{assets}<style>
html, body {{ width: 100%; height: 100%; margin: 0; padding: 0; }}
#map {{ position: absolute; top: 0; bottom: 0; right: 0; left: 0; }}
</style>
</head>
<body>
<div id="map"></div>
{overlays}<script type="application/json" id="railnet-map-data">{data}</script>
<script>
(function () {{
  var doc = JSON.parse(document.getElementById("railnet-map-data").textContent);
  var map = L.map("map").setView(doc.center, doc.zoom);
  L.tileLayer(doc.tiles.url, {{ attribution: doc.tiles.attribution }}).addTo(map);

  var groups = {{}};
  doc.layers.forEach(function (layer) {{
    var group = L.featureGroup();
    layer.features.forEach(function (f) {{
      var item;
      if (f.kind === "polyline") {{
        item = L.polyline(f.points, {{ color: f.color, weight: f.weight, opacity: f.opacity }});
      }} else {{
        item = L.circleMarker(f.center, {{
          radius: f.radius,
          color: f.color,
          weight: f.weight,
          fill: true,
          fillColor: f.fill_color,
          fillOpacity: f.fill_opacity
        }});
      }}
      if (f.popup) {{ item.bindPopup(f.popup, {{ maxWidth: {max_width} }}); }}
      if (f.tooltip) {{ item.bindTooltip(f.tooltip, {{ sticky: !!f.sticky }}); }}
      item.addTo(group);
    }});
    if (layer.show) {{ group.addTo(map); }}
    groups[layer.name] = group;
  }});

  if (doc.controls.layer_control) {{
    L.control.layers(null, groups, {{ collapsed: doc.controls.collapsed }}).addTo(map);
  }}
  if (doc.controls.fullscreen) {{ L.control.fullscreen().addTo(map); }}
  if (doc.controls.measure) {{ L.control.measure().addTo(map); }}
}})();
</script>
</body>
</html>
"#,
        title = escape_html(&doc.title),
        assets = asset_tags(doc),
        overlays = overlays,
        data = data,
        max_width = POPUP_MAX_WIDTH,
    ))
}
