use crate::core::render::{
    MARKER_FILL_OPACITY, MARKER_OPACITY, MARKER_STROKE_COLOR, MARKER_STROKE_WEIGHT, PLATE_COLOR,
    PLATE_WEIGHT,
};
use crate::domain::model::{EARTHQUAKES_OVERLAY, MapSession, TECTONIC_PLATES_OVERLAY};
use crate::utils::error::Result;

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Earthquake Map</title>
  <link
    rel="stylesheet"
    href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css"
    integrity="sha256-p4NxAoJBhIIN+hmNHrzRCf9tD/miZyoHS5obTRR9BMY="
    crossorigin=""
  />
  <style>
    html, body { height: 100%; margin: 0; padding: 0; }
    #map { height: 100%; width: 100%; }
    .legend {
      background: white;
      padding: 8px 10px;
      border-radius: 4px;
      box-shadow: 0 1px 4px rgba(0,0,0,0.3);
      line-height: 18px;
    }
    .legend i {
      display: inline-block;
      width: 14px;
      height: 14px;
      margin-right: 6px;
      vertical-align: middle;
    }
  </style>
</head>
<body>
  <div id="map"></div>

  <script
    src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"
    integrity="sha256-20nQCchB9co0qIjJZRGuk2/Z9VM+kNiyxNV1lvTlZBo="
    crossorigin=""
  ></script>

  <script>
    const baseLayerDefs = __BASE_LAYERS__;
    const quakeMarkers = __QUAKE_MARKERS__;
    const plateData = __PLATE_DATA__;
    const legendEntries = __LEGEND_ENTRIES__;
    const markerStyle = __MARKER_STYLE__;

    const baseMaps = {};
    for (const def of baseLayerDefs) {
      baseMaps[def.name] = L.tileLayer(def.urlTemplate, { attribution: def.attribution });
    }

    const earthquakes = new L.LayerGroup();
    const tectonicPlates = new L.LayerGroup();

    for (const m of quakeMarkers) {
      L.circleMarker([m.lat, m.lng], {
        opacity: markerStyle.opacity,
        fillOpacity: markerStyle.fillOpacity,
        fillColor: m.fillColor,
        color: markerStyle.strokeColor,
        radius: m.radius,
        stroke: true,
        weight: markerStyle.strokeWeight
      }).bindPopup(m.popup).addTo(earthquakes);
    }

    const map = L.map("map", {
      center: __CENTER__,
      zoom: __ZOOM__,
      layers: [baseMaps[__DEFAULT_BASE__], earthquakes]
    });

    L.control.layers(baseMaps, {
      __EARTHQUAKES_OVERLAY__: earthquakes,
      __TECTONIC_PLATES_OVERLAY__: tectonicPlates
    }).addTo(map);

    if (plateData !== null) {
      L.geoJson(plateData, {
        color: __PLATE_COLOR__,
        weight: __PLATE_WEIGHT__
      }).addTo(tectonicPlates);
      tectonicPlates.addTo(map);
    }

    const legend = L.control({ position: "bottomright" });
    legend.onAdd = function () {
      const div = L.DomUtil.create("div", "legend");
      for (const entry of legendEntries) {
        div.innerHTML += "<i style='background:" + entry.color + "'></i> " + entry.label + "<br />";
      }
      return div;
    };
    legend.addTo(map);
  </script>
</body>
</html>
"#;

/// Renders the composed session into a single self-contained HTML page.
/// Marker data, base layers and the legend are embedded as JSON; the
/// page's script only wires them into Leaflet.
pub fn render_page(session: &MapSession) -> Result<String> {
    let marker_style = serde_json::json!({
        "opacity": MARKER_OPACITY,
        "fillOpacity": MARKER_FILL_OPACITY,
        "strokeColor": MARKER_STROKE_COLOR,
        "strokeWeight": MARKER_STROKE_WEIGHT,
    });

    let plate_data = match session.plate_lines() {
        Some(lines) => serde_json::to_string(lines)?,
        None => "null".to_string(),
    };

    let (lat, lng) = session.center();

    Ok(PAGE_TEMPLATE
        .replace(
            "__BASE_LAYERS__",
            &serde_json::to_string(session.base_layers())?,
        )
        .replace(
            "__QUAKE_MARKERS__",
            &serde_json::to_string(session.quake_markers())?,
        )
        .replace("__PLATE_DATA__", &plate_data)
        .replace(
            "__LEGEND_ENTRIES__",
            &serde_json::to_string(session.legend())?,
        )
        .replace("__MARKER_STYLE__", &marker_style.to_string())
        .replace(
            "__EARTHQUAKES_OVERLAY__",
            &serde_json::to_string(EARTHQUAKES_OVERLAY)?,
        )
        .replace(
            "__TECTONIC_PLATES_OVERLAY__",
            &serde_json::to_string(TECTONIC_PLATES_OVERLAY)?,
        )
        .replace("__CENTER__", &format!("[{}, {}]", lat, lng))
        .replace("__ZOOM__", &session.zoom().to_string())
        .replace(
            "__DEFAULT_BASE__",
            &serde_json::to_string(session.default_base())?,
        )
        .replace("__PLATE_COLOR__", &serde_json::to_string(PLATE_COLOR)?)
        .replace("__PLATE_WEIGHT__", &PLATE_WEIGHT.to_string()))
}
