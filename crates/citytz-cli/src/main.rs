//! citytz — Command-line interface for citytz-core
//!
//! This binary provides a simple way to inspect the bundled world-city
//! table from your terminal. It supports printing basic statistics, exact
//! city lookup, partial search, ISO-code lookup, proximity search around a
//! coordinate, coordinate-string and plus-code searches, and (with the
//! `builder` feature) syncing the dataset from upstream.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ citytz stats
//!
//! - Look up a city by exact name (case-insensitive)
//!   $ citytz city chicago
//!
//! - Partial search across city/state/province/country
//!   $ citytz search "springfield mo"
//!
//! - Cities of a country by ISO2 or ISO3 code
//!   $ citytz iso DE
//!
//! - Proximity searches
//!   $ citytz near 41.8299 -87.75 --radius 25
//!   $ citytz coords "41.8299,-87.7500"
//!   $ citytz pluscode 86HJP27M+XF
//!
//! Data source
//! -----------
//!
//! By default the CLI loads the gzipped dataset bundled with the
//! `citytz-core` crate. Use `--input <path>` to point at a custom
//! uncompressed `cityMap.json` instead.
mod args;

use crate::args::{CliArgs, Commands};
use citytz_core::{CityDb, CityRecord};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let db = match args.input.as_deref() {
        Some(path) => CityDb::from_json_path(path)?,
        None => CityDb::load()?,
    };

    match args.command {
        Commands::Stats => {
            let stats = db.stats();
            println!("Table statistics:");
            println!("  Cities: {}", stats.cities);
            println!("  Countries: {}", stats.countries);
            println!("  Timezones: {}", stats.timezones);
        }

        Commands::City { name } => {
            print_records(&db.lookup_by_city(&name), &name);
        }

        Commands::Search { query } => {
            print_records(&db.find_by_city_state_province(&query), &query);
        }

        Commands::Iso { code } => {
            print_records(&db.find_by_iso_code(&code), &code);
        }

        Commands::Near {
            lat,
            lng,
            radius_km,
        } => {
            let hits = db.find_nearest_with_distance(lat, lng, radius_km);
            if hits.is_empty() {
                println!("No cities within {radius_km} km of {lat},{lng}");
            } else {
                for hit in hits {
                    println!("{:8.2} km  {}", hit.distance_km, describe(hit.record));
                }
            }
        }

        Commands::Coords { text } => {
            print_records(&db.find_by_coordinates(text.as_str()), &text);
        }

        Commands::Pluscode { code } => {
            print_records(&db.find_by_plus_code(&code), &code);
        }

        #[cfg(feature = "builder")]
        Commands::Sync { dir } => {
            let outcome = citytz_core::sync_dataset(&dir)?;
            if outcome.updated {
                println!(
                    "Updated {dir}/cityMap.json ({} cities, {} bytes); rebuild to refresh the embedded data",
                    outcome.city_count, outcome.bytes
                );
            } else {
                println!("No changes detected in upstream data");
            }
        }
    }

    Ok(())
}

fn print_records(records: &[&CityRecord], query: &str) {
    if records.is_empty() {
        println!("No cities found matching: {query}");
        return;
    }
    for record in records {
        println!("{}", describe(record));
    }
}

fn describe(c: &CityRecord) -> String {
    let region = match c.state_ansi.as_str() {
        Some(state) if !state.is_empty() => format!("{}, {}", state, c.country),
        _ => c.country.clone(),
    };
    format!(
        "{} — {} ({:.5}, {:.5}) [{}]",
        c.city, region, c.lat, c.lng, c.timezone
    )
}
