// crates/leaguemap-core/src/lib.rs

//! leaguemap-core
//! ==============
//!
//! Renders geolocated player records (a GeoJSON point collection) onto an
//! interactive Leaflet map: markers clustered per city, colored by team, with
//! a hidden, searchable overlay of the whole collection.
//!
//! ```no_run
//! use leaguemap_core::{MapBuilder, Result};
//!
//! fn main() -> Result<()> {
//!     let map = MapBuilder::new().build_from_path("WinnerLeague.geojson")?;
//!     println!("{} cities", map.stats().cities);
//!     map.save("index.html")
//! }
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod builder;
pub mod common;
pub mod error;
pub mod loader;
pub mod model;
pub mod overlay;
pub mod palette;
pub mod render;
pub mod search;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::builder::{LeagueMap, MapBuilder, MapOptions, TileProvider};
pub use crate::common::MapStats;
pub use crate::error::{MapError, Result};
pub use crate::loader::{load_collection, parse_collection};
pub use crate::model::{CityLayer, Icon, LatLng, Marker, Player, UNKNOWN_CITY};
pub use crate::overlay::{FeatureStyle, GeoJsonOverlay, LayerControl, SearchControl};
pub use crate::palette::{TeamPalette, FALLBACK_COLOR};
pub use crate::search::PlayerSearch;
pub use crate::traits::NameMatch;

/// Builds the map for `input` with the default options and palette and writes
/// it to `output`.
pub fn render_file(
    input: impl AsRef<std::path::Path>,
    output: impl AsRef<std::path::Path>,
) -> Result<MapStats> {
    let map = MapBuilder::new().build_from_path(input)?;
    map.save(output)?;
    Ok(map.stats())
}
