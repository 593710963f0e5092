// crates/leaguemap-core/src/palette.rs

//! # Team Palette
//!
//! Maps team names to the marker colors understood by Leaflet.awesome-markers.
//! The same identifier is used as the stroke color of the overlay layer, so a
//! player's marker and overlay shape always agree.

use crate::error::{MapError, Result};
use crate::loader::common_io;
use once_cell::sync::Lazy;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// Color applied to any team not present in the table (including no team).
pub const FALLBACK_COLOR: &str = "gray";

const BUILTIN_TEAMS: &[(&str, &str)] = &[
    ("hapoel jerusalem", "darkred"),
    ("bnei herzliya", "blue"),
    ("hapoel tel aviv", "red"),
    ("maccabi tel aviv", "blue"),
    ("hapoel holon", "purple"),
    ("hapoel galil elion", "red"),
    ("ironi ness ziona", "orange"),
    ("hapoel afula", "gray"),
    ("maccabi ramat gan", "cadetblue"),
    ("ironi kiryat ata", "darkblue"),
    ("hapoel gilboa galil", "lightred"),
    ("elizur netanya", "black"),
    ("hapoel be'er sheva dimona", "lightred"),
    ("hapoel haifa", "red"),
];

static DEFAULT_TABLE: Lazy<HashMap<String, String>> = Lazy::new(|| {
    BUILTIN_TEAMS
        .iter()
        .map(|(team, color)| ((*team).to_string(), (*color).to_string()))
        .collect()
});

/// Lowercased team name → color identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamPalette {
    colors: HashMap<String, String>,
}

impl Default for TeamPalette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_TABLE.clone(),
        }
    }
}

impl TeamPalette {
    /// A palette with no entries; every lookup yields [`FALLBACK_COLOR`].
    pub fn empty() -> Self {
        Self {
            colors: HashMap::new(),
        }
    }

    fn key(team: &str) -> String {
        team.trim().to_lowercase()
    }

    /// Case-insensitive lookup. Never fails.
    pub fn color_for(&self, team: &str) -> &str {
        self.colors
            .get(&Self::key(team))
            .map(String::as_str)
            .unwrap_or(FALLBACK_COLOR)
    }

    /// Whether the team has an explicit entry.
    pub fn contains(&self, team: &str) -> bool {
        self.colors.contains_key(&Self::key(team))
    }

    pub fn with_override(mut self, team: &str, color: &str) -> Self {
        self.insert(team, color);
        self
    }

    pub fn insert(&mut self, team: &str, color: &str) {
        self.colors.insert(Self::key(team), color.trim().to_string());
    }

    /// Merges overrides from a JSON object file: `{ "team name": "color", ... }`.
    pub fn extend_from_path(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let reader = common_io::open_stream(path)?;
        let overrides: HashMap<String, String> = serde_json::from_reader(reader)?;

        if overrides.values().any(|c| c.trim().is_empty()) {
            return Err(MapError::InvalidData(format!(
                "palette file {} contains an empty color",
                path.display()
            )));
        }

        for (team, color) in &overrides {
            self.insert(team, color);
        }
        log::info!(
            "Applied {} palette override(s) from {}",
            overrides.len(),
            path.display()
        );
        Ok(overrides.len())
    }

    /// Entries sorted by team name.
    pub fn entries(&self) -> BTreeMap<&str, &str> {
        self.colors
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
