// crates/leaguemap-core/src/render/mod.rs

//! # HTML Output
//!
//! Serializes a [`LeagueMap`] into one self-contained HTML document. The map
//! state travels as a JSON payload; a small bootstrap script hands it to
//! Leaflet and its plugins. Rendering is deterministic, so identical input
//! yields identical bytes.

mod template;

use crate::builder::{LeagueMap, TileProvider};
use crate::common::MapStats;
use crate::error::{MapError, Result};
use crate::model::{CityLayer, LatLng};
use crate::overlay::{GeoJsonOverlay, LayerControl, SearchControl};
use crate::text::{escape_html, escape_script};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub use template::MAP_HTML;

/// File name written when no output path is given.
pub const DEFAULT_OUTPUT: &str = "index.html";

#[derive(Serialize)]
struct MapView {
    center: LatLng,
    zoom: u8,
    tiles: TileProvider,
}

#[derive(Serialize)]
struct Payload<'a> {
    map: MapView,
    cities: &'a [CityLayer],
    overlay: &'a GeoJsonOverlay,
    search: &'a SearchControl,
    layer_control: LayerControl,
    stats: MapStats,
}

impl LeagueMap {
    /// The embedded map state as JSON (before `<script>` escaping).
    pub fn state_json(&self) -> Result<String> {
        let options = &self.options;
        let mut tiles = options.tiles.clone();
        tiles.name = escape_html(&tiles.name);

        let payload = Payload {
            map: MapView {
                center: options.center,
                zoom: options.zoom,
                tiles,
            },
            cities: &self.cities,
            overlay: &self.overlay,
            search: &self.search,
            layer_control: self.layer_control,
            stats: self.stats,
        };
        Ok(serde_json::to_string(&payload)?)
    }

    /// Renders the complete HTML document in memory.
    ///
    /// Each slot is filled exactly once against the template, so slot markers
    /// inside the title or the data are left as plain text.
    pub fn to_html(&self) -> Result<String> {
        let state = escape_script(&self.state_json()?);
        let title = escape_html(&self.options.title);

        let (head, rest) = split_slot(MAP_HTML, template::TITLE_SLOT)?;
        let (middle, tail) = split_slot(rest, template::STATE_SLOT)?;

        let mut html = String::with_capacity(MAP_HTML.len() + title.len() + state.len());
        html.push_str(head);
        html.push_str(&title);
        html.push_str(middle);
        html.push_str(&state);
        html.push_str(tail);
        Ok(html)
    }

    /// Writes the document to `path`, replacing any existing file.
    ///
    /// The document is rendered first and written to a sibling temporary
    /// file that is then renamed over `path`; on failure nothing is left at
    /// `path` that was not there before.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let html = self.to_html()?;

        let tmp = temp_path(path)?;
        if let Err(e) = write_file(&tmp, html.as_bytes()).and_then(|()| {
            fs::rename(&tmp, path).map_err(MapError::Io)
        }) {
            fs::remove_file(&tmp).ok();
            return Err(e);
        }

        log::info!("Wrote {} ({} bytes)", path.display(), html.len());
        Ok(())
    }
}

fn split_slot<'t>(template: &'t str, slot: &str) -> Result<(&'t str, &'t str)> {
    template
        .split_once(slot)
        .ok_or_else(|| MapError::InvalidData(format!("template has no {slot} slot")))
}

fn temp_path(path: &Path) -> Result<PathBuf> {
    let name = path
        .file_name()
        .ok_or_else(|| MapError::InvalidData(format!("{} is not a file path", path.display())))?;
    Ok(path.with_file_name(format!(".{}.tmp", name.to_string_lossy())))
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    let file = File::create(path).map_err(MapError::Io)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(bytes).map_err(MapError::Io)?;
    writer.flush().map_err(MapError::Io)?;
    Ok(())
}
