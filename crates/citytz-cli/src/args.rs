use clap::{Parser, Subcommand};

/// CLI arguments for citytz
#[derive(Debug, Parser)]
#[command(
    name = "citytz",
    version,
    about = "Query and inspect the citytz-core world-city table"
)]
pub struct CliArgs {
    /// Path to an uncompressed cityMap.json to load instead of the bundled dataset
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the loaded table
    Stats,

    /// Look up cities by exact name (case-insensitive)
    City {
        /// City name, e.g. "Chicago"
        name: String,
    },

    /// Partial search across city, state code, province and country
    Search {
        /// Whitespace-separated terms, e.g. "springfield mo"
        query: String,
    },

    /// List cities in a country by ISO2 or ISO3 code
    Iso {
        /// ISO2 or ISO3 code (e.g. DE, USA)
        code: String,
    },

    /// List cities within a radius of a coordinate, closest first
    Near {
        /// Latitude in degrees
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        /// Longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lng: f64,
        /// Radius in kilometers
        #[arg(short = 'r', long = "radius", default_value_t = 50.0)]
        radius_km: f64,
    },

    /// Cities near a "lat,lng" coordinate string (fixed 50 km radius)
    Coords {
        /// Coordinate text, e.g. "41.8299,-87.7500"
        text: String,
    },

    /// Cities near the center of a full plus code (fixed 50 km radius)
    Pluscode {
        /// Full Open Location Code, e.g. 86HJP27M+XF
        code: String,
    },

    /// Fetch the upstream dataset and refresh the local JSON + gzip bundle
    #[cfg(feature = "builder")]
    Sync {
        /// Directory holding cityMap.json and cityMap.json.gz
        #[arg(short = 'd', long = "dir", default_value = "data")]
        dir: String,
    },
}
