use crate::core::classify::{color_for_depth, radius_for_magnitude};
use crate::domain::model::{EarthquakeFeature, StyledMarker};
use geojson::{Feature, FeatureCollection, Value};

// Fixed visual parameters shared by every earthquake marker.
pub const MARKER_STROKE_COLOR: &str = "#000000";
pub const MARKER_STROKE_WEIGHT: f64 = 0.5;
pub const MARKER_OPACITY: f64 = 1.0;
pub const MARKER_FILL_OPACITY: f64 = 1.0;

// Flat styling for plate boundary lines; no per-feature classification.
pub const PLATE_COLOR: &str = "orange";
pub const PLATE_WEIGHT: f64 = 2.0;

/// Extracts earthquake events from the feed document. Field reads are
/// lenient: missing magnitude or depth default to 0, a missing place
/// becomes "Unknown". Features without point geometry cannot be placed
/// and are skipped.
pub fn features_from(collection: &FeatureCollection) -> Vec<EarthquakeFeature> {
    let quakes: Vec<EarthquakeFeature> = collection
        .features
        .iter()
        .filter_map(quake_from_feature)
        .collect();

    let skipped = collection.features.len() - quakes.len();
    if skipped > 0 {
        tracing::warn!("Skipped {} feature(s) without point geometry", skipped);
    }

    quakes
}

fn quake_from_feature(feature: &Feature) -> Option<EarthquakeFeature> {
    let coords = match &feature.geometry {
        Some(geometry) => match &geometry.value {
            Value::Point(coords) => coords,
            _ => return None,
        },
        None => return None,
    };

    let longitude = *coords.first()?;
    let latitude = *coords.get(1)?;
    let depth_km = coords.get(2).copied().unwrap_or(0.0);

    let properties = feature.properties.as_ref();
    let magnitude = properties
        .and_then(|p| p.get("mag"))
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let place = properties
        .and_then(|p| p.get("place"))
        .and_then(|v| v.as_str())
        .unwrap_or("Unknown")
        .to_string();

    Some(EarthquakeFeature {
        magnitude,
        depth_km,
        latitude,
        longitude,
        place,
    })
}

/// One styled marker per earthquake: positioned at (latitude, longitude),
/// sized by magnitude, colored by depth. The depth component of the
/// coordinates is used only for coloring, never for placement.
pub fn marker_for(quake: &EarthquakeFeature) -> StyledMarker {
    StyledMarker {
        lat: quake.latitude,
        lng: quake.longitude,
        radius: radius_for_magnitude(quake.magnitude),
        fill_color: color_for_depth(quake.depth_km).to_string(),
        popup: popup_text(quake),
    }
}

fn popup_text(quake: &EarthquakeFeature) -> String {
    format!(
        "Magnitude: {}<br />Depth: {} km<br />Location: {}",
        quake.magnitude, quake.depth_km, quake.place
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_collection() -> FeatureCollection {
        let doc = serde_json::json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": { "mag": 4.5, "place": "Test Location" },
                "geometry": {
                    "type": "Point",
                    "coordinates": [-122.4, 37.8, 12]
                }
            }]
        });
        serde_json::from_value(doc).unwrap()
    }

    #[test]
    fn test_extracts_point_features() {
        let quakes = features_from(&sample_collection());

        assert_eq!(quakes.len(), 1);
        assert_eq!(quakes[0].magnitude, 4.5);
        assert_eq!(quakes[0].depth_km, 12.0);
        assert_eq!(quakes[0].latitude, 37.8);
        assert_eq!(quakes[0].longitude, -122.4);
        assert_eq!(quakes[0].place, "Test Location");
    }

    #[test]
    fn test_marker_styling_from_sample_feature() {
        let quakes = features_from(&sample_collection());
        let marker = marker_for(&quakes[0]);

        assert_eq!(marker.lat, 37.8);
        assert_eq!(marker.lng, -122.4);
        assert_eq!(marker.radius, 27.0);
        assert_eq!(marker.fill_color, "#d4ee00");
        assert!(marker.popup.contains("Magnitude: 4.5"));
        assert!(marker.popup.contains("Depth: 12 km"));
        assert!(marker.popup.contains("Location: Test Location"));
    }

    #[test]
    fn test_missing_fields_use_lenient_defaults() {
        let doc = serde_json::json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": {},
                "geometry": {
                    "type": "Point",
                    "coordinates": [10.0, 20.0]
                }
            }]
        });
        let collection: FeatureCollection = serde_json::from_value(doc).unwrap();

        let quakes = features_from(&collection);
        assert_eq!(quakes.len(), 1);
        assert_eq!(quakes[0].magnitude, 0.0);
        assert_eq!(quakes[0].depth_km, 0.0);
        assert_eq!(quakes[0].place, "Unknown");

        // Zero magnitude still renders as a visible dot.
        assert_eq!(marker_for(&quakes[0]).radius, 1.0);
    }

    #[test]
    fn test_non_point_features_are_skipped() {
        let doc = serde_json::json!({
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": { "mag": 2.0 },
                    "geometry": {
                        "type": "LineString",
                        "coordinates": [[0.0, 0.0], [1.0, 1.0]]
                    }
                },
                {
                    "type": "Feature",
                    "properties": { "mag": 3.0, "place": "Kept" },
                    "geometry": {
                        "type": "Point",
                        "coordinates": [1.0, 2.0, 3.0]
                    }
                }
            ]
        });
        let collection: FeatureCollection = serde_json::from_value(doc).unwrap();

        let quakes = features_from(&collection);
        assert_eq!(quakes.len(), 1);
        assert_eq!(quakes[0].place, "Kept");
    }

    #[test]
    fn test_popup_renders_whole_numbers_without_trailing_zero() {
        let quake = EarthquakeFeature {
            magnitude: 5.0,
            depth_km: 12.0,
            latitude: 0.0,
            longitude: 0.0,
            place: "Somewhere".to_string(),
        };

        let marker = marker_for(&quake);
        assert!(marker.popup.contains("Magnitude: 5<br />"));
        assert!(marker.popup.contains("Depth: 12 km"));
    }
}
