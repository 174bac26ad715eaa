// Domain layer: core models and ports (interfaces). No external dependencies beyond std/serde/geojson.

pub mod model;
pub mod ports;
