//! Depth and magnitude classification for earthquake markers.

/// Depth bands in ascending order: (lower bound in km, fill color).
/// Contiguous and exhaustive; band membership is strictly-greater-than, so
/// a boundary depth belongs to the band below it. The first band is
/// unbounded below, the last unbounded above.
pub const DEPTH_BANDS: [(f64, &str); 6] = [
    (-10.0, "#98ee00"),
    (10.0, "#d4ee00"),
    (30.0, "#eecc00"),
    (50.0, "#ee9c00"),
    (70.0, "#ea822c"),
    (90.0, "#ea2c2c"),
];

/// Fill color for the unique depth band containing `depth_km`.
pub fn color_for_depth(depth_km: f64) -> &'static str {
    DEPTH_BANDS
        .iter()
        .rev()
        .find(|(lower, _)| depth_km > *lower)
        .map(|(_, color)| *color)
        .unwrap_or(DEPTH_BANDS[0].1)
}

/// Marker radius for a magnitude. Exactly-zero magnitude is floored to 1
/// so the event stays visible; anything else scales linearly. Negative
/// magnitudes pass through unguarded.
pub fn radius_for_magnitude(magnitude: f64) -> f64 {
    if magnitude == 0.0 {
        return 1.0;
    }
    magnitude * 6.0
}
