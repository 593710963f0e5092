// crates/leaguemap-core/src/overlay.rs

//! # Overlay Layer
//!
//! A second rendering of the whole feature collection, independent of the
//! per-city clusters: team-colored shapes, a hover tooltip, and the layer the
//! name-search control is bound to. Hidden until toggled on.

use crate::model::keys;
use crate::model::player::display_value;
use crate::palette::TeamPalette;
use geojson::{Feature, FeatureCollection, JsonObject, JsonValue};
use serde::{Deserialize, Serialize};

/// Foreign member carrying the precomputed style on each overlay feature.
pub const STYLE_MEMBER: &str = "style";

/// Per-feature path style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureStyle {
    pub color: String,
    pub weight: u32,
}

impl FeatureStyle {
    /// Stroke colored by the feature's `Team`, fixed weight.
    pub fn for_feature(feature: &Feature, palette: &TeamPalette, weight: u32) -> Self {
        let team = feature
            .property(keys::TEAM)
            .and_then(display_value)
            .unwrap_or_default();
        Self {
            color: palette.color_for(&team).to_string(),
            weight,
        }
    }
}

/// Hover tooltip: which properties to show and how to label them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverlayTooltip {
    pub fields: Vec<String>,
    pub aliases: Vec<String>,
    /// Format numeric values with the viewer's locale.
    pub localize: bool,
}

impl Default for OverlayTooltip {
    fn default() -> Self {
        let pairs = [
            (keys::NAME, "Player"),
            (keys::CITY, "City"),
            (keys::AGE, "Age"),
            (keys::POSITION, "Position"),
            (keys::TEAM, "Team"),
        ];
        Self {
            fields: pairs.iter().map(|(f, _)| f.to_string()).collect(),
            aliases: pairs.iter().map(|(_, a)| a.to_string()).collect(),
            localize: true,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GeoJsonOverlay {
    #[serde(serialize_with = "crate::model::marker::serialize_escaped")]
    pub name: String,
    /// Initially visible?
    pub show: bool,
    pub data: FeatureCollection,
    pub tooltip: OverlayTooltip,
}

impl GeoJsonOverlay {
    /// Styles every feature of `collection`, whatever its geometry type.
    pub fn new(
        name: impl Into<String>,
        mut collection: FeatureCollection,
        palette: &TeamPalette,
        weight: u32,
    ) -> Self {
        for feature in &mut collection.features {
            let style = FeatureStyle::for_feature(feature, palette, weight);
            let members = feature.foreign_members.get_or_insert_with(JsonObject::new);
            members.insert(STYLE_MEMBER.to_string(), style_value(&style));
        }

        Self {
            name: name.into(),
            show: false,
            data: collection,
            tooltip: OverlayTooltip::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.features.is_empty()
    }

    /// Style attached to the `index`-th feature.
    pub fn style_of(&self, index: usize) -> Option<FeatureStyle> {
        let value = self
            .data
            .features
            .get(index)?
            .foreign_members
            .as_ref()?
            .get(STYLE_MEMBER)?;
        serde_json::from_value(value.clone()).ok()
    }
}

fn style_value(style: &FeatureStyle) -> JsonValue {
    serde_json::json!({ "color": style.color, "weight": style.weight })
}

/// Text search bound to the overlay layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchControl {
    pub property_name: String,
    pub placeholder: String,
    pub collapsed: bool,
}

impl SearchControl {
    pub fn by_name(placeholder: impl Into<String>) -> Self {
        Self {
            property_name: keys::NAME.to_string(),
            placeholder: placeholder.into(),
            collapsed: false,
        }
    }
}

/// Base/overlay visibility toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayerControl {
    pub collapsed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::parse_collection;

    const MIXED: &str = r#"{"type":"FeatureCollection","features":[
        {"type":"Feature","geometry":{"type":"Point","coordinates":[35.21,31.77]},
         "properties":{"Name":"A","Team":"HAPOEL JERUSALEM"}},
        {"type":"Feature","geometry":{"type":"LineString","coordinates":[[34.7,32.0],[34.8,32.1]]},
         "properties":{"Name":"Route","Team":"Hapoel Holon"}},
        {"type":"Feature","geometry":{"type":"Point","coordinates":[34.78,32.09]},
         "properties":{"Name":"B"}}
    ]}"#;

    #[test]
    fn every_feature_gets_a_team_style() {
        let overlay = GeoJsonOverlay::new(
            "Winner League Geo",
            parse_collection(MIXED).unwrap(),
            &TeamPalette::default(),
            2,
        );
        assert_eq!(overlay.len(), 3);
        assert!(!overlay.show);
        assert_eq!(overlay.style_of(0).unwrap().color, "darkred");
        assert_eq!(overlay.style_of(1).unwrap().color, "purple");
        assert_eq!(
            overlay.style_of(2).unwrap(),
            FeatureStyle {
                color: "gray".into(),
                weight: 2
            }
        );
        assert!(overlay.style_of(3).is_none());
    }

    #[test]
    fn style_is_serialized_on_the_feature() {
        let overlay = GeoJsonOverlay::new(
            "Geo",
            parse_collection(MIXED).unwrap(),
            &TeamPalette::default(),
            2,
        );
        let json = serde_json::to_value(&overlay).unwrap();
        assert_eq!(json["data"]["features"][0]["style"]["color"], "darkred");
        assert_eq!(json["data"]["features"][0]["style"]["weight"], 2);
        assert_eq!(json["show"], false);
    }

    #[test]
    fn tooltip_lists_five_fields() {
        let tooltip = OverlayTooltip::default();
        assert_eq!(tooltip.fields, ["Name", "City", "Age", "Position", "Team"]);
        assert_eq!(tooltip.aliases[0], "Player");
        assert!(tooltip.localize);
    }

    #[test]
    fn search_is_bound_to_name() {
        let search = SearchControl::by_name("Search for a player");
        assert_eq!(search.property_name, "Name");
        assert!(!search.collapsed);
    }
}
