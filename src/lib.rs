//! leaguemap-rs
//!
//! Umbrella crate for the workspace. Re-exports [`leaguemap_core`] so the
//! demos can use a single import path.

pub use leaguemap_core::*;

pub mod prelude {
    pub use leaguemap_core::{
        LeagueMap, MapBuilder, MapError, MapOptions, PlayerSearch, Result, TeamPalette,
    };
}
