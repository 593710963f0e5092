// crates/leaguemap-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (I/O, Decompression) and delegates parsing of
//! the GeoJSON payload to the `geojson` crate.

use crate::error::{MapError, Result};
use geojson::{FeatureCollection, GeoJson};
use std::io::Read;
use std::path::{Path, PathBuf};

pub mod common_io;

/// File name the CLI looks for when no `--input` is given.
pub const DEFAULT_INPUT: &str = "WinnerLeague.geojson";

/// Directory holding the sample dataset shipped with this crate.
pub fn default_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

pub fn default_dataset_filename() -> &'static str {
    DEFAULT_INPUT
}

/// Path of the bundled sample dataset.
pub fn default_dataset_path() -> PathBuf {
    default_data_dir().join(default_dataset_filename())
}

/// Reads a GeoJSON FeatureCollection from disk (single open-read-close).
///
/// Paths ending in `.gz` are decompressed when the `compact` feature is on.
pub fn load_collection(path: impl AsRef<Path>) -> Result<FeatureCollection> {
    let path = path.as_ref();
    let mut reader = common_io::open_stream(path)?;

    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let collection = parse_collection(&text)?;
    log::info!(
        "Loaded {} feature(s) from {}",
        collection.features.len(),
        path.display()
    );
    Ok(collection)
}

/// Parses a GeoJSON document that must be a FeatureCollection.
pub fn parse_collection(text: &str) -> Result<FeatureCollection> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    match GeoJson::from_json_value(value)? {
        GeoJson::FeatureCollection(collection) => Ok(collection),
        GeoJson::Feature(_) => Err(MapError::InvalidData(
            "expected a FeatureCollection, found a single Feature".into(),
        )),
        GeoJson::Geometry(_) => Err(MapError::InvalidData(
            "expected a FeatureCollection, found a bare Geometry".into(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn parses_feature_collection() {
        let fc = parse_collection(
            r#"{"type":"FeatureCollection","features":[
                {"type":"Feature","geometry":{"type":"Point","coordinates":[34.78,32.09]},
                 "properties":{"Name":"A"}}]}"#,
        )
        .unwrap();
        assert_eq!(fc.features.len(), 1);
    }

    #[test]
    fn rejects_malformed_json() {
        assert_matches!(parse_collection("{ not json"), Err(MapError::Json(_)));
    }

    #[test]
    fn rejects_non_collection() {
        let single = r#"{"type":"Feature","geometry":null,"properties":{}}"#;
        assert_matches!(parse_collection(single), Err(MapError::InvalidData(_)));
    }

    #[test]
    fn rejects_unknown_geojson_type() {
        assert_matches!(
            parse_collection(r#"{"type":"Banana"}"#),
            Err(MapError::GeoJson(_))
        );
    }

    #[test]
    fn bundled_dataset_loads() {
        let fc = load_collection(default_dataset_path()).unwrap();
        assert!(!fc.features.is_empty());
    }

    #[test]
    fn missing_input_is_not_found() {
        assert_matches!(
            load_collection("no/such/WinnerLeague.geojson"),
            Err(MapError::NotFound(_))
        );
    }
}
