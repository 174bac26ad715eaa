use crate::core::classify::DEPTH_BANDS;
use crate::domain::model::LegendEntry;

/// Builds the fixed depth legend from the classifier's band table, in
/// ascending depth order. Computed once per map build; it reflects the
/// band table, not the fetched data, so it is complete even when a band
/// has no earthquake in the current feed.
pub fn build_legend() -> Vec<LegendEntry> {
    DEPTH_BANDS
        .iter()
        .enumerate()
        .map(|(i, &(lower, color))| {
            let label = match DEPTH_BANDS.get(i + 1) {
                Some((upper, _)) => format!("{} - {}", lower, upper),
                None => format!("{}+", lower),
            };
            LegendEntry { color, label }
        })
        .collect()
}
