//! Custom palette and map options
//!
//! Overrides a couple of team colors, recenters the map on Haifa and renders
//! an in-memory collection that mixes points with a non-point feature.

use leaguemap_rs::{parse_collection, LatLng, MapBuilder, MapOptions, Result, TeamPalette};

const PLAYERS: &str = r#"{"type":"FeatureCollection","features":[
  {"type":"Feature","geometry":{"type":"Point","coordinates":[34.9896,32.7940]},
   "properties":{"Name":"Yuval Tal","City":"Haifa","Age":32,"Position":"Forward","Team":"Hapoel Haifa"}},
  {"type":"Feature","geometry":{"type":"Point","coordinates":[35.1060,32.8110]},
   "properties":{"Name":"Nadav Ezra","City":"Kiryat Ata","Age":30,"Position":"Guard","Team":"Ironi Kiryat Ata"}},
  {"type":"Feature","geometry":{"type":"Point","coordinates":[35.0000,32.8000]},
   "properties":{"Name":"Walk-on","Position":"Guard"}},
  {"type":"Feature","geometry":{"type":"LineString","coordinates":[[34.99,32.79],[35.10,32.81]]},
   "properties":{"Name":"Derby route","Team":"Hapoel Haifa"}}
]}"#;

fn main() -> Result<()> {
    env_logger::init();

    let palette = TeamPalette::default()
        .with_override("Hapoel Haifa", "green")
        .with_override("Maccabi Haifa", "darkgreen");

    let options = MapOptions {
        center: LatLng::new(32.794, 34.9896),
        zoom: 11,
        title: "Haifa Bay".to_string(),
        ..MapOptions::default()
    };

    let map = MapBuilder::new()
        .with_options(options)
        .with_palette(palette)
        .build(parse_collection(PLAYERS)?)?;

    for layer in map.cities() {
        for marker in &layer.markers {
            println!("{:<12} {:<12} {}", layer.name, marker.tooltip, marker.color());
        }
    }
    println!("overlay features: {}", map.overlay().len());
    println!("skipped for markers: {}", map.stats().skipped);

    let out = std::env::temp_dir().join("leaguemap-haifa.html");
    map.save(&out)?;
    println!("Map written to {}", out.display());
    Ok(())
}
