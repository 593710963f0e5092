use clap::{Parser, Subcommand};

/// CLI arguments for leaguemap
#[derive(Debug, Parser)]
#[command(
    name = "leaguemap",
    version,
    about = "Render league player GeoJSON into an interactive, clustered HTML map"
)]
pub struct CliArgs {
    /// Path to the input GeoJSON FeatureCollection (.geojson or .geojson.gz)
    #[arg(short = 'i', long = "input", global = true, default_value = "WinnerLeague.geojson")]
    pub input: String,

    /// Optional JSON object of team → color overrides (e.g. {"hapoel holon": "pink"})
    #[arg(short = 'p', long = "palette", global = true)]
    pub palette: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build the map and write the HTML document
    Render {
        /// Output HTML file (overwritten if present)
        #[arg(short = 'o', long = "output", default_value = "index.html")]
        output: String,

        /// Map center latitude
        #[arg(long, requires = "lng", allow_negative_numbers = true)]
        lat: Option<f64>,

        /// Map center longitude
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lng: Option<f64>,

        /// Initial zoom level
        #[arg(long)]
        zoom: Option<u8>,

        /// Document title
        #[arg(long)]
        title: Option<String>,
    },

    /// Show a summary of the input and the layers it produces
    Stats,

    /// List the city layers with their marker counts
    Cities {
        /// Only list cities whose name contains this text
        filter: Option<String>,
    },

    /// Search players by name substring (case-insensitive)
    Search {
        /// Substring to search
        query: String,
    },

    /// List the players of one team (case-insensitive)
    Roster {
        /// Team name, e.g. "Hapoel Holon"
        team: String,
    },

    /// Print the team color table
    Teams,
}
