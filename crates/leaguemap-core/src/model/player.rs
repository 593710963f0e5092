// crates/leaguemap-core/src/model/player.rs
use crate::error::{MapError, Result};
use crate::traits::NameMatch;
use geojson::{Feature, JsonObject, JsonValue};
use serde::Serialize;

/// Bucket used for features that carry no `City` property.
pub const UNKNOWN_CITY: &str = "Unknown City";

/// Property keys read from each feature.
pub mod keys {
    pub const NAME: &str = "Name";
    pub const CITY: &str = "City";
    pub const AGE: &str = "Age";
    pub const POSITION: &str = "Position";
    pub const TEAM: &str = "Team";
}

/// Typed view of one feature's properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    pub name: String,
    pub city: String,
    pub age: String,
    pub position: String,
    pub team: String,
}

impl Player {
    /// Reads the player properties of the `index`-th feature.
    ///
    /// `Name` is required. `City` falls back to [`UNKNOWN_CITY`], the other
    /// fields to an empty string.
    pub fn from_feature(index: usize, feature: &Feature) -> Result<Self> {
        Self::from_properties(index, feature.properties.as_ref())
    }

    pub fn from_properties(index: usize, props: Option<&JsonObject>) -> Result<Self> {
        let get = |key: &str| props.and_then(|p| p.get(key)).and_then(display_value);

        let name = get(keys::NAME).ok_or(MapError::MissingProperty {
            index,
            key: keys::NAME,
        })?;

        Ok(Self {
            name,
            city: get(keys::CITY).unwrap_or_else(|| UNKNOWN_CITY.to_string()),
            age: get(keys::AGE).unwrap_or_default(),
            position: get(keys::POSITION).unwrap_or_default(),
            team: get(keys::TEAM).unwrap_or_default(),
        })
    }

    /// Popup line: `Name, City, Age, Position - Team`.
    pub fn popup(&self) -> String {
        format!(
            "{}, {}, {}, {} - {}",
            self.name, self.city, self.age, self.position, self.team
        )
    }
}

impl NameMatch for Player {
    fn name_str(&self) -> &str {
        &self.name
    }
}

/// Textual form of a property value. `null` counts as absent.
pub(crate) fn display_value(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::Null => None,
        JsonValue::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn props(value: JsonValue) -> JsonObject {
        match value {
            JsonValue::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn reads_all_fields() {
        let p = props(json!({
            "Name": "Avi Cohen", "City": "Tel Aviv", "Age": 26,
            "Position": "Forward", "Team": "Maccabi Tel Aviv"
        }));
        let player = Player::from_properties(0, Some(&p)).unwrap();
        assert_eq!(player.age, "26");
        assert_eq!(
            player.popup(),
            "Avi Cohen, Tel Aviv, 26, Forward - Maccabi Tel Aviv"
        );
    }

    #[test]
    fn missing_optional_fields_use_defaults() {
        let p = props(json!({ "Name": "Solo", "City": null }));
        let player = Player::from_properties(3, Some(&p)).unwrap();
        assert_eq!(player.city, UNKNOWN_CITY);
        assert_eq!(player.team, "");
        assert_eq!(player.popup(), "Solo, Unknown City, ,  - ");
    }

    #[test]
    fn missing_name_is_an_error() {
        let p = props(json!({ "City": "Holon" }));
        assert_matches!(
            Player::from_properties(7, Some(&p)),
            Err(MapError::MissingProperty { index: 7, key: "Name" })
        );
        assert_matches!(
            Player::from_properties(0, None),
            Err(MapError::MissingProperty { .. })
        );
    }

    #[test]
    fn name_match_is_folded() {
        let p = props(json!({ "Name": "Noam Peretz" }));
        let player = Player::from_properties(0, Some(&p)).unwrap();
        assert!(player.name_contains("PERETZ"));
        assert!(!player.name_contains("  "));
    }
}
