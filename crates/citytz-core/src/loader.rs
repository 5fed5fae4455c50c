// crates/citytz-core/src/loader.rs

//! # Dataset Loader
//!
//! Produces the in-memory [`CityDb`] exactly once per process:
//!
//! 1. Decompress and parse the gzipped JSON blob embedded at build time
//!    (`embedded` feature, on by default).
//! 2. Fallback: read `data/cityMap.json` from the working directory.
//!
//! Failure of both sources is fatal; the process cannot serve queries
//! without the table.

use crate::error::{CityTzError, Result};
use crate::model::{CityDb, CityRecord};
use once_cell::sync::OnceCell;
use std::path::Path;

// Single in-process cache so we only decompress and parse once per process.
static CITY_DB_CACHE: OnceCell<CityDb> = OnceCell::new();

/// Relative disk fallback, matching the upstream repository layout.
pub const FALLBACK_JSON_PATH: &str = "data/cityMap.json";

#[cfg(feature = "embedded")]
static EMBEDDED_CITY_DATA: &[u8] =
    include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/cityMap.json.gz"));

impl CityDb {
    /// Load the city table: embedded blob first, disk fallback second.
    ///
    /// Returns an owned table; use [`CityDb::shared`] for the process-wide
    /// load-once instance.
    pub fn load() -> Result<Self> {
        #[cfg(feature = "embedded")]
        {
            match load_embedded() {
                Ok(db) => Ok(db),
                Err(embedded_err) => {
                    Self::from_json_path(FALLBACK_JSON_PATH).map_err(|disk_err| {
                        CityTzError::DatasetUnavailable(format!(
                            "embedded data failed ({embedded_err}); disk fallback failed ({disk_err})"
                        ))
                    })
                }
            }
        }

        #[cfg(not(feature = "embedded"))]
        {
            Self::from_json_path(FALLBACK_JSON_PATH).map_err(|disk_err| {
                CityTzError::DatasetUnavailable(format!(
                    "no embedded data compiled in; disk fallback failed ({disk_err})"
                ))
            })
        }
    }

    /// Process-wide table, initialized on first use and never reloaded.
    ///
    /// Safe for unsynchronized concurrent reads from any number of callers.
    pub fn shared() -> Result<&'static CityDb> {
        CITY_DB_CACHE.get_or_try_init(Self::load)
    }

    /// Parse an uncompressed JSON city array from a file on disk.
    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = std::fs::read(path.as_ref())?;
        Self::from_json_slice(&bytes)
    }

    /// Parse an uncompressed JSON city array from memory.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        let records: Vec<CityRecord> = serde_json::from_slice(bytes)?;
        Ok(CityDb::from_records(records))
    }
}

/// Decompress and parse the blob baked in at build time.
#[cfg(feature = "embedded")]
fn load_embedded() -> Result<CityDb> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let mut decoder = GzDecoder::new(EMBEDDED_CITY_DATA);
    let mut decompressed = Vec::new();
    decoder.read_to_end(&mut decompressed)?;

    CityDb::from_json_slice(&decompressed)
}
