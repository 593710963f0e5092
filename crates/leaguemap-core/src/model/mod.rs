// crates/leaguemap-core/src/model/mod.rs
pub mod marker;
pub mod player;

pub use marker::{CityLayer, Icon, LatLng, Marker};
pub use player::{keys, Player, UNKNOWN_CITY};
