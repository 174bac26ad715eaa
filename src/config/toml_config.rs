use crate::config::{
    DEFAULT_EARTHQUAKE_FEED, DEFAULT_MAP_CENTER, DEFAULT_OUTPUT_PATH, DEFAULT_PLATE_FEED,
    DEFAULT_ZOOM,
};
use crate::core::ConfigProvider;
use crate::utils::error::{MapError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File-based configuration. Every field is optional; anything omitted
/// falls back to the same defaults the CLI flags use.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub map: MapSection,
    #[serde(default)]
    pub feeds: FeedsSection,
    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MapSection {
    /// View center as [latitude, longitude].
    pub center: Option<[f64; 2]>,
    pub zoom: Option<u8>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedsSection {
    pub earthquakes: Option<String>,
    pub tectonic_plates: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSection {
    pub path: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MapError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| MapError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }
}

impl ConfigProvider for TomlConfig {
    fn earthquake_feed(&self) -> &str {
        self.feeds
            .earthquakes
            .as_deref()
            .unwrap_or(DEFAULT_EARTHQUAKE_FEED)
    }

    fn plate_feed(&self) -> &str {
        self.feeds
            .tectonic_plates
            .as_deref()
            .unwrap_or(DEFAULT_PLATE_FEED)
    }

    fn output_path(&self) -> &str {
        self.output.path.as_deref().unwrap_or(DEFAULT_OUTPUT_PATH)
    }

    fn map_center(&self) -> (f64, f64) {
        self.map
            .center
            .map(|c| (c[0], c[1]))
            .unwrap_or(DEFAULT_MAP_CENTER)
    }

    fn initial_zoom(&self) -> u8 {
        self.map.zoom.unwrap_or(DEFAULT_ZOOM)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("feeds.earthquakes", self.earthquake_feed())?;
        validation::validate_url("feeds.tectonic_plates", self.plate_feed())?;
        validation::validate_path("output.path", self.output_path())?;

        let (lat, lng) = self.map_center();
        validation::validate_range("map.center latitude", lat, -90.0, 90.0)?;
        validation::validate_range("map.center longitude", lng, -180.0, 180.0)?;
        validation::validate_range("map.zoom", self.initial_zoom(), 0, 19)?;

        Ok(())
    }
}
