//! leaguemap: command-line interface for leaguemap-core
//!
//! This binary turns a GeoJSON collection of league players into a
//! self-contained HTML map, and offers a few commands to inspect the data
//! from your terminal.
//!
//! Usage examples
//! --------------
//!
//! - Render `WinnerLeague.geojson` into `index.html`
//!   $ leaguemap render
//!
//! - Render another file, centered on Haifa
//!   $ leaguemap -i players.geojson.gz render -o haifa.html --lat 32.79 --lng 34.99 --zoom 11
//!
//! - Show counts / list city layers
//!   $ leaguemap stats
//!   $ leaguemap cities
//!   $ leaguemap cities tel
//!
//! - Search players by name
//!   $ leaguemap search cohen
//!
//! - List one team's players
//!   $ leaguemap roster "hapoel holon"
//!
//! - Print (possibly overridden) team colors
//!   $ leaguemap --palette colors.json teams
//!
//! Set `RUST_LOG=debug` to see skipped features and layer creation.
mod args;

use crate::args::{CliArgs, Commands};
use clap::Parser;
use leaguemap_core::{LatLng, LeagueMap, MapBuilder, MapOptions, PlayerSearch, TeamPalette};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = CliArgs::parse();
    log::debug!("{args:?}");

    let mut palette = TeamPalette::default();
    if let Some(path) = &args.palette {
        palette.extend_from_path(path)?;
    }

    match args.command {
        Commands::Render {
            output,
            lat,
            lng,
            zoom,
            title,
        } => {
            let mut options = MapOptions::default();
            if let (Some(lat), Some(lng)) = (lat, lng) {
                options.center = LatLng::new(lat, lng);
            }
            if let Some(zoom) = zoom {
                options.zoom = zoom;
            }
            if let Some(title) = title {
                options.title = title;
            }

            let map = MapBuilder::new()
                .with_options(options)
                .with_palette(palette)
                .build_from_path(&args.input)?;
            map.save(&output)?;

            let stats = map.stats();
            println!(
                "Wrote {output}: {} marker(s) in {} city layer(s)",
                stats.markers, stats.cities
            );
        }

        Commands::Stats => {
            let stats = load(&args.input, palette)?.stats();
            println!("Map statistics:");
            println!("  Features: {}", stats.features);
            println!("  Markers: {}", stats.markers);
            println!("  City layers: {}", stats.cities);
            println!("  Overlay only: {}", stats.skipped);
        }

        Commands::Cities { filter } => {
            let map = load(&args.input, palette)?;
            let layers = match &filter {
                Some(query) => map.find_cities(query),
                None => map.cities().iter().collect(),
            };
            for layer in layers {
                println!("{} ({})", layer.name, layer.len());
            }
        }

        Commands::Search { query } => {
            let map = load(&args.input, palette)?;
            let matches = map.find_players(&query);
            if matches.is_empty() {
                println!("No players found matching: {query}");
            } else {
                for p in matches {
                    println!("{} ({}, {})", p.name, p.team, p.city);
                }
            }
        }

        Commands::Roster { team } => {
            let map = load(&args.input, palette)?;
            let players = map.players_of_team(&team);
            if players.is_empty() {
                println!("No players found for team: {team}");
            } else {
                for p in players {
                    println!("{} ({}, {})", p.name, p.position, p.city);
                }
            }
        }

        Commands::Teams => {
            for (team, color) in palette.entries() {
                println!("{team}: {color}");
            }
        }
    }

    Ok(())
}

fn load(input: &str, palette: TeamPalette) -> anyhow::Result<LeagueMap> {
    Ok(MapBuilder::new().with_palette(palette).build_from_path(input)?)
}
