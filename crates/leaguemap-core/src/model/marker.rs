// crates/leaguemap-core/src/model/marker.rs
use super::player::Player;
use crate::palette::TeamPalette;
use crate::text::escape_html;
use crate::traits::NameMatch;
use serde::{Deserialize, Serialize, Serializer};

/// A position in Leaflet's `(lat, lng)` order.
///
/// Serializes as `[lat, lng]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "[f64; 2]", from = "[f64; 2]")]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Builds from a GeoJSON position `[lon, lat, (alt)]`, swapping the axes.
    pub fn from_position(position: &[f64]) -> Option<Self> {
        match position {
            [lng, lat, ..] => Some(Self::new(*lat, *lng)),
            _ => None,
        }
    }
}

impl From<[f64; 2]> for LatLng {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self::new(lat, lng)
    }
}

impl From<LatLng> for [f64; 2] {
    fn from(p: LatLng) -> Self {
        [p.lat, p.lng]
    }
}

/// Leaflet.awesome-markers icon description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Icon {
    pub icon: String,
    pub prefix: String,
    #[serde(rename = "markerColor")]
    pub color: String,
}

impl Icon {
    /// A Font Awesome glyph (`fa-<name>`) on a pin of the given color.
    pub fn font_awesome(name: &str, color: &str) -> Self {
        Self {
            icon: name.to_string(),
            prefix: "fa".to_string(),
            color: color.to_string(),
        }
    }
}

/// One player pin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub location: LatLng,
    #[serde(serialize_with = "serialize_escaped")]
    pub tooltip: String,
    #[serde(serialize_with = "serialize_escaped")]
    pub popup: String,
    pub icon: Icon,
}

impl Marker {
    pub fn for_player(
        player: &Player,
        location: LatLng,
        palette: &TeamPalette,
        icon_name: &str,
    ) -> Self {
        Self {
            location,
            tooltip: player.name.clone(),
            popup: player.popup(),
            icon: Icon::font_awesome(icon_name, palette.color_for(&player.team)),
        }
    }

    pub fn color(&self) -> &str {
        &self.icon.color
    }
}

pub(crate) fn serialize_escaped<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: AsRef<str>,
    S: Serializer,
{
    serializer.serialize_str(&escape_html(value.as_ref()))
}

/// A named, toggleable display group wrapping one marker cluster.
///
/// There is exactly one per distinct city.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityLayer {
    #[serde(serialize_with = "serialize_escaped")]
    pub name: String,
    pub markers: Vec<Marker>,
}

impl CityLayer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            markers: Vec::new(),
        }
    }

    pub fn add(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

impl NameMatch for CityLayer {
    fn name_str(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn position_axes_are_swapped() {
        let p = LatLng::from_position(&[34.78, 32.09]).unwrap();
        assert_relative_eq!(p.lat, 32.09);
        assert_relative_eq!(p.lng, 34.78);

        let with_alt = LatLng::from_position(&[35.21, 31.77, 754.0]).unwrap();
        assert_relative_eq!(with_alt.lat, 31.77);
    }

    #[test]
    fn short_position_is_rejected() {
        assert!(LatLng::from_position(&[34.78]).is_none());
        assert!(LatLng::from_position(&[]).is_none());
    }

    #[test]
    fn latlng_serializes_as_pair() {
        let json = serde_json::to_value(LatLng::new(32.09, 34.78)).unwrap();
        assert_eq!(json, serde_json::json!([32.09, 34.78]));
    }

    #[test]
    fn marker_text_is_escaped_on_serialization() {
        let player = Player {
            name: "<i>Ido</i>".into(),
            city: "Holon".into(),
            age: "22".into(),
            position: "Guard".into(),
            team: "Hapoel Holon".into(),
        };
        let marker = Marker::for_player(
            &player,
            LatLng::new(32.01, 34.77),
            &TeamPalette::default(),
            "basketball",
        );
        assert_eq!(marker.tooltip, "<i>Ido</i>");
        assert_eq!(marker.color(), "purple");

        let json = serde_json::to_value(&marker).unwrap();
        assert_eq!(json["tooltip"], "&lt;i&gt;Ido&lt;/i&gt;");
        assert_eq!(json["icon"]["markerColor"], "purple");
        assert_eq!(json["icon"]["prefix"], "fa");
    }
}
