pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_EARTHQUAKE_FEED: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_week.geojson";
pub const DEFAULT_PLATE_FEED: &str =
    "https://raw.githubusercontent.com/fraxen/tectonicplates/master/GeoJSON/PB2002_boundaries.json";
pub const DEFAULT_MAP_CENTER: (f64, f64) = (28.75, -20.0);
pub const DEFAULT_ZOOM: u8 = 3;
pub const DEFAULT_OUTPUT_PATH: &str = "./output";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "quakemap")]
#[command(about = "Renders USGS earthquake activity and tectonic plate boundaries to an interactive map")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_EARTHQUAKE_FEED)]
    pub earthquake_feed: String,

    #[arg(long, default_value = DEFAULT_PLATE_FEED)]
    pub plate_feed: String,

    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output_path: String,

    #[arg(long, default_value_t = DEFAULT_MAP_CENTER.0)]
    pub center_lat: f64,

    #[arg(long, default_value_t = DEFAULT_MAP_CENTER.1)]
    pub center_lng: f64,

    #[arg(long, default_value_t = DEFAULT_ZOOM)]
    pub zoom: u8,

    #[arg(long, help = "Read configuration from a TOML file instead of CLI flags")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn earthquake_feed(&self) -> &str {
        &self.earthquake_feed
    }

    fn plate_feed(&self) -> &str {
        &self.plate_feed
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn map_center(&self) -> (f64, f64) {
        (self.center_lat, self.center_lng)
    }

    fn initial_zoom(&self) -> u8 {
        self.zoom
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("earthquake_feed", &self.earthquake_feed)?;
        validation::validate_url("plate_feed", &self.plate_feed)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_range("center_lat", self.center_lat, -90.0, 90.0)?;
        validation::validate_range("center_lng", self.center_lng, -180.0, 180.0)?;
        validation::validate_range("zoom", self.zoom, 0, 19)?;
        Ok(())
    }
}
