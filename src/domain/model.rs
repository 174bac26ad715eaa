use serde::{Deserialize, Serialize};

/// One point event from the earthquake feed.
#[derive(Debug, Clone, PartialEq)]
pub struct EarthquakeFeature {
    pub magnitude: f64,
    pub depth_km: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub place: String,
}

/// Marker styling derived from one earthquake: position, size from
/// magnitude, fill from depth, plus the popup text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyledMarker {
    pub lat: f64,
    pub lng: f64,
    pub radius: f64,
    pub fill_color: String,
    pub popup: String,
}

/// One legend row: color swatch plus depth-range label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub color: &'static str,
    pub label: String,
}

/// A selectable background tile layer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileLayer {
    pub name: &'static str,
    pub url_template: &'static str,
    pub attribution: &'static str,
}

pub const EARTHQUAKES_OVERLAY: &str = "Earthquakes";
pub const TECTONIC_PLATES_OVERLAY: &str = "Tectonic Plates";

/// Fixed base-layer registry. Exactly one base layer is active at a time.
pub const BASE_LAYERS: [TileLayer; 3] = [
    TileLayer {
        name: "Satellite",
        url_template: "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}",
        attribution: "Tiles © Esri — Source: Esri, Earthstar Geographics",
    },
    TileLayer {
        name: "Street Map",
        url_template: "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png",
        attribution: "©OpenStreetMap, ©Carto",
    },
    TileLayer {
        name: "Topographic Map",
        url_template: "https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png",
        attribution: "©OpenTopoMap contributors",
    },
];

pub const DEFAULT_BASE_LAYER: &str = "Satellite";

/// Raw documents pulled from the two feeds. Either side is `None` when its
/// fetch failed or returned something unusable; the corresponding overlay
/// then stays empty.
#[derive(Debug, Clone, Default)]
pub struct FeedData {
    pub earthquakes: Option<geojson::FeatureCollection>,
    pub plates: Option<serde_json::Value>,
}

/// One map build: view state, the base-layer registry and the two named
/// overlays. Constructed once per run; overlay membership is append-only
/// while the build populates it.
#[derive(Debug, Clone)]
pub struct MapSession {
    center: (f64, f64),
    zoom: u8,
    base_layers: Vec<TileLayer>,
    default_base: &'static str,
    quake_markers: Vec<StyledMarker>,
    plate_lines: Option<serde_json::Value>,
    legend: Vec<LegendEntry>,
}

impl MapSession {
    pub fn new(center: (f64, f64), zoom: u8) -> Self {
        Self {
            center,
            zoom,
            base_layers: BASE_LAYERS.to_vec(),
            default_base: DEFAULT_BASE_LAYER,
            quake_markers: Vec::new(),
            plate_lines: None,
            legend: Vec::new(),
        }
    }

    pub fn center(&self) -> (f64, f64) {
        self.center
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn base_layers(&self) -> &[TileLayer] {
        &self.base_layers
    }

    pub fn default_base(&self) -> &str {
        self.default_base
    }

    pub fn quake_markers(&self) -> &[StyledMarker] {
        &self.quake_markers
    }

    pub fn plate_lines(&self) -> Option<&serde_json::Value> {
        self.plate_lines.as_ref()
    }

    pub fn legend(&self) -> &[LegendEntry] {
        &self.legend
    }

    pub fn add_quake_markers(&mut self, markers: Vec<StyledMarker>) {
        self.quake_markers.extend(markers);
    }

    pub fn set_plate_lines(&mut self, lines: serde_json::Value) {
        self.plate_lines = Some(lines);
    }

    pub fn set_legend(&mut self, legend: Vec<LegendEntry>) {
        self.legend = legend;
    }
}
