pub mod classify;
pub mod engine;
pub mod legend;
pub mod page;
pub mod pipeline;
pub mod render;

pub use crate::domain::model::{
    EarthquakeFeature, FeedData, LegendEntry, MapSession, StyledMarker, TileLayer,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
