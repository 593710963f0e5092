//! Basic usage example for leaguemap-rs
//!
//! This example demonstrates how to:
//! - Load the bundled player dataset
//! - Inspect the per-city layers and team colors
//! - Search players by name
//! - Write the interactive map to disk

use leaguemap_rs::loader::default_dataset_path;
use leaguemap_rs::prelude::*;

fn main() -> Result<()> {
    env_logger::init();
    println!("=== leaguemap-rs Basic Usage Example ===\n");

    let map = MapBuilder::new().build_from_path(default_dataset_path())?;
    let stats = map.stats();
    println!(
        "✓ {} features, {} markers, {} city layers\n",
        stats.features, stats.markers, stats.cities
    );

    println!("--- City layers ---");
    for layer in map.cities() {
        let colors: Vec<_> = layer.markers.iter().map(|m| m.color()).collect();
        println!("{} ({}): {}", layer.name, layer.len(), colors.join(", "));
    }
    println!();

    println!("--- Search: \"sha\" ---");
    for player in map.find_players("sha") {
        println!("- {}", player.popup());
    }
    println!();

    let out = std::env::temp_dir().join("leaguemap-basic-usage.html");
    map.save(&out)?;
    println!("Map written to {}", out.display());
    Ok(())
}
