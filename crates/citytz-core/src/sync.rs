// crates/citytz-core/src/sync.rs
#![cfg(feature = "builder")]

//! # Dataset refresh tooling
//!
//! Build-time collaborator, not part of the query core: fetches the upstream
//! city table, validates it, and regenerates the local JSON file plus the
//! gzip bundle that gets embedded on the next build.

use crate::error::{CityTzError, Result};
use crate::model::CityRecord;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Canonical upstream source of `cityMap.json`.
pub const UPSTREAM_URL: &str =
    "https://raw.githubusercontent.com/kevinroberts/city-timezones/master/data/cityMap.json";

/// Result of a [`sync_dataset`] run.
#[derive(Debug, Clone, Copy)]
pub struct SyncOutcome {
    /// False when the upstream bytes matched the local copy and nothing was
    /// written.
    pub updated: bool,
    /// Rows in the fetched table.
    pub city_count: usize,
    /// Size of the fetched JSON in bytes.
    pub bytes: usize,
}

/// Fetch the upstream table and refresh `cityMap.json` / `cityMap.json.gz`
/// under `data_dir`.
///
/// The download must parse as a city array before anything is written; when
/// it is byte-identical to the local JSON the files are left untouched.
/// A rebuild is required afterwards for the embedded blob to pick up the
/// change.
pub fn sync_dataset(data_dir: impl AsRef<Path>) -> Result<SyncOutcome> {
    let data_dir = data_dir.as_ref();
    fs::create_dir_all(data_dir)?;

    let response = reqwest::blocking::get(UPSTREAM_URL)?.error_for_status()?;
    let new_data = response.bytes()?.to_vec();

    // Validate before touching anything on disk.
    let records: Vec<CityRecord> = serde_json::from_slice(&new_data).map_err(|e| {
        CityTzError::DatasetUnavailable(format!("upstream data is not a valid city table: {e}"))
    })?;

    let json_path = data_dir.join("cityMap.json");
    let gz_path = data_dir.join("cityMap.json.gz");

    if let Ok(existing) = fs::read(&json_path) {
        if existing == new_data {
            return Ok(SyncOutcome {
                updated: false,
                city_count: records.len(),
                bytes: new_data.len(),
            });
        }
    }

    fs::write(&json_path, &new_data)?;
    write_gzip(&gz_path, &new_data)?;

    Ok(SyncOutcome {
        updated: true,
        city_count: records.len(),
        bytes: new_data.len(),
    })
}

fn write_gzip(path: &Path, data: &[u8]) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let mut encoder = GzEncoder::new(writer, Compression::best());
    encoder.write_all(data)?;
    encoder.finish()?.flush()?;
    Ok(())
}
