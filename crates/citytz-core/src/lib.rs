// crates/citytz-core/src/lib.rs

//! # citytz-core
//!
//! A static-dataset lookup library: a bundled table of world cities (name,
//! coordinates, country, timezone) queried by exact name, partial text match,
//! ISO country code, geographic proximity, coordinate strings and plus codes.
//!
//! The table is loaded once ([`CityDb::load`] or the process-wide
//! [`CityDb::shared`]) and is immutable afterwards; every query is a
//! read-only linear scan and returns a (possibly empty) vector, never an
//! error. Malformed query input degrades to an empty result by design.
//!
//! ```no_run
//! use citytz_core::CityDb;
//!
//! fn main() -> citytz_core::Result<()> {
//!     let db = CityDb::load()?;
//!     for city in db.lookup_by_city("Chicago") {
//!         println!("{} — {}", city.city, city.timezone);
//!     }
//!     Ok(())
//! }
//! ```

pub mod coords;
pub mod error;
pub mod geo;
pub mod loader;
pub mod model;
pub mod pluscode;
pub mod search;

#[cfg(feature = "builder")]
pub mod sync;

// Re-exports
pub use crate::coords::{parse_coord_pair, CoordInput};
pub use crate::error::{CityTzError, Result};
pub use crate::geo::haversine_distance_km;
pub use crate::model::{CityDb, CityRecord, DbStats, DistanceHit, FlexField};
pub use crate::pluscode::CodeArea;
pub use crate::search::DEFAULT_COORD_RADIUS_KM;

#[cfg(feature = "builder")]
pub use crate::sync::{sync_dataset, SyncOutcome, UPSTREAM_URL};
