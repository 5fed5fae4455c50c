// crates/citytz-core/src/error.rs

use thiserror::Error;

/// Errors produced by the loader, the coordinate parsers and the sync tool.
///
/// Query functions never return these: malformed query input degrades to an
/// empty result instead. A loader failure is fatal — without the table the
/// process cannot serve queries, so callers should abort initialization.
#[derive(Debug, Error)]
pub enum CityTzError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Neither the embedded blob nor the disk fallback yielded a table.
    #[error("dataset unavailable: {0}")]
    DatasetUnavailable(String),

    #[error("invalid coordinate input: {0}")]
    InvalidCoordinates(String),

    #[error("invalid plus code: {0}")]
    InvalidPlusCode(String),

    #[cfg(feature = "builder")]
    #[error("upstream fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, CityTzError>;
