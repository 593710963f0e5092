// crates/leaguemap-core/src/error.rs

use thiserror::Error;

/// Errors raised while loading player data or producing the map document.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("GeoJSON error: {0}")]
    GeoJson(#[from] geojson::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    /// A feature lacks a property the marker cannot be built without.
    #[error("feature #{index} is missing required property `{key}`")]
    MissingProperty { index: usize, key: &'static str },

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, MapError>;
