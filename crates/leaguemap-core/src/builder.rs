// crates/leaguemap-core/src/builder.rs

//! # Map Builder
//!
//! Turns a GeoJSON FeatureCollection into a [`LeagueMap`]: one clustered,
//! toggleable layer per city, plus the styled overlay with its search and
//! layer controls.

use crate::common::MapStats;
use crate::error::{MapError, Result};
use crate::loader;
use crate::model::{CityLayer, LatLng, Marker, Player};
use crate::overlay::{GeoJsonOverlay, LayerControl, SearchControl};
use crate::palette::TeamPalette;
use geojson::{Feature, FeatureCollection, Value};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Raster tile source for the base layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileProvider {
    pub name: String,
    pub url: String,
    pub attribution: String,
    pub max_zoom: u8,
}

impl Default for TileProvider {
    fn default() -> Self {
        Self::open_street_map()
    }
}

impl TileProvider {
    pub fn open_street_map() -> Self {
        Self {
            name: "OpenStreetMap".to_string(),
            url: "https://tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution:
                "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors"
                    .to_string(),
            max_zoom: 19,
        }
    }
}

/// Everything about the generated map that is not derived from the data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapOptions {
    pub center: LatLng,
    pub zoom: u8,
    pub tiles: TileProvider,
    /// Document `<title>`.
    pub title: String,
    pub overlay_name: String,
    pub search_placeholder: String,
    /// Font Awesome glyph on every marker.
    pub icon: String,
    pub stroke_weight: u32,
    pub layer_control_collapsed: bool,
    pub search_collapsed: bool,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            // Tel Aviv
            center: LatLng::new(32.0853, 34.7818),
            zoom: 8,
            tiles: TileProvider::default(),
            title: "Winner League Players".to_string(),
            overlay_name: "Winner League Geo".to_string(),
            search_placeholder: "Search for a player".to_string(),
            icon: "basketball".to_string(),
            stroke_weight: 2,
            layer_control_collapsed: true,
            search_collapsed: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MapBuilder {
    options: MapOptions,
    palette: TeamPalette,
}

impl MapBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(mut self, options: MapOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_palette(mut self, palette: TeamPalette) -> Self {
        self.palette = palette;
        self
    }

    pub fn options(&self) -> &MapOptions {
        &self.options
    }

    pub fn palette(&self) -> &TeamPalette {
        &self.palette
    }

    /// Loads `path` and builds the map from it.
    pub fn build_from_path(&self, path: impl AsRef<Path>) -> Result<LeagueMap> {
        self.build(loader::load_collection(path)?)
    }

    /// Places every Point feature into its city layer and wraps the whole
    /// collection into the overlay.
    ///
    /// Non-point features (and features without geometry) get no marker but
    /// stay in the overlay. Fails on the first point feature without `Name`.
    pub fn build(&self, collection: FeatureCollection) -> Result<LeagueMap> {
        let mut cities: Vec<CityLayer> = Vec::new();
        let mut city_index: HashMap<String, usize> = HashMap::new();
        let mut players = Vec::new();
        let mut skipped = 0;

        for (index, feature) in collection.features.iter().enumerate() {
            let Some(position) = point_position(feature) else {
                log::debug!("Feature #{index} is not a Point, overlay only");
                skipped += 1;
                continue;
            };

            let player = Player::from_feature(index, feature)?;
            let location = LatLng::from_position(position).ok_or_else(|| {
                MapError::InvalidData(format!(
                    "feature #{index} has a point with {} coordinate(s)",
                    position.len()
                ))
            })?;
            let marker = Marker::for_player(&player, location, &self.palette, &self.options.icon);

            let slot = *city_index.entry(player.city.clone()).or_insert_with(|| {
                log::debug!("New city layer: {}", player.city);
                cities.push(CityLayer::new(player.city.clone()));
                cities.len() - 1
            });
            cities[slot].add(marker);
            players.push(player);
        }

        let stats = MapStats {
            features: collection.features.len(),
            markers: players.len(),
            cities: cities.len(),
            skipped,
        };
        log::info!(
            "Placed {} marker(s) in {} city layer(s), {} feature(s) overlay only",
            stats.markers,
            stats.cities,
            stats.skipped
        );

        let overlay = GeoJsonOverlay::new(
            self.options.overlay_name.clone(),
            collection,
            &self.palette,
            self.options.stroke_weight,
        );
        let mut search = SearchControl::by_name(self.options.search_placeholder.clone());
        search.collapsed = self.options.search_collapsed;

        Ok(LeagueMap {
            options: self.options.clone(),
            cities,
            players,
            overlay,
            search,
            layer_control: LayerControl {
                collapsed: self.options.layer_control_collapsed,
            },
            stats,
        })
    }
}

fn point_position(feature: &Feature) -> Option<&[f64]> {
    match &feature.geometry.as_ref()?.value {
        Value::Point(position) => Some(position.as_slice()),
        _ => None,
    }
}

/// The assembled map, ready to be rendered.
#[derive(Debug, Clone)]
pub struct LeagueMap {
    pub(crate) options: MapOptions,
    pub(crate) cities: Vec<CityLayer>,
    pub(crate) players: Vec<Player>,
    pub(crate) overlay: GeoJsonOverlay,
    pub(crate) search: SearchControl,
    pub(crate) layer_control: LayerControl,
    pub(crate) stats: MapStats,
}

impl LeagueMap {
    pub fn options(&self) -> &MapOptions {
        &self.options
    }

    /// City layers in first-encounter order.
    pub fn cities(&self) -> &[CityLayer] {
        &self.cities
    }

    /// The layer for exactly this city value.
    pub fn city(&self, name: &str) -> Option<&CityLayer> {
        self.cities.iter().find(|c| c.name == name)
    }

    /// Players behind the placed markers, in input order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn overlay(&self) -> &GeoJsonOverlay {
        &self.overlay
    }

    pub fn search(&self) -> &SearchControl {
        &self.search
    }

    pub fn layer_control(&self) -> LayerControl {
        self.layer_control
    }

    pub fn stats(&self) -> MapStats {
        self.stats
    }
}
