// crates/citytz-core/src/model.rs

use serde::{Deserialize, Serialize};

/// An optional dataset field with an unreliable JSON type.
///
/// The upstream table stores `pop`, `iso2`, `iso3`, `state_ansi`, `exactCity`
/// and `exactProvince` inconsistently: string, number, `null` or missing
/// entirely. The loader preserves the shape without coercion; the query
/// engine treats anything that is not a string as "does not match".
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlexField {
    Str(String),
    Num(f64),
    /// JSON `null` or a missing key.
    #[default]
    Absent,
}

impl FlexField {
    /// The string value, if this field arrived as a JSON string.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FlexField::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// The numeric value, if this field arrived as a JSON number.
    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FlexField::Num(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, FlexField::Absent)
    }
}

/// One row of the city table.
///
/// Field values are stored exactly as parsed; coordinates are contractually
/// within [-90, 90] / [-180, 180] but not validated at load time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CityRecord {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub city_ascii: String,
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub lng: f64,
    #[serde(default, skip_serializing_if = "FlexField::is_absent")]
    pub pop: FlexField,
    #[serde(default)]
    pub country: String,
    #[serde(default, skip_serializing_if = "FlexField::is_absent")]
    pub iso2: FlexField,
    #[serde(default, skip_serializing_if = "FlexField::is_absent")]
    pub iso3: FlexField,
    #[serde(default)]
    pub province: String,
    /// IANA timezone name, e.g. "America/Chicago".
    #[serde(default)]
    pub timezone: String,
    #[serde(default, skip_serializing_if = "FlexField::is_absent")]
    pub state_ansi: FlexField,
    #[serde(rename = "exactCity", default, skip_serializing_if = "FlexField::is_absent")]
    pub exact_city: FlexField,
    #[serde(rename = "exactProvince", default, skip_serializing_if = "FlexField::is_absent")]
    pub exact_province: FlexField,
}

/// A city paired with its computed distance from a query point.
///
/// Ephemeral: produced by [`CityDb::find_nearest_with_distance`] within a
/// single proximity query, never part of the stored table.
#[derive(Clone, Copy, Debug)]
pub struct DistanceHit<'a> {
    pub record: &'a CityRecord,
    pub distance_km: f64,
}

/// Aggregate statistics for the loaded table.
///
/// Returned by [`CityDb::stats`]; country and timezone counts are distinct
/// values, cities is the number of table rows.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DbStats {
    pub cities: usize,
    pub countries: usize,
    pub timezones: usize,
}

/// The in-memory city table.
///
/// Load-once, read-many: constructed by the loader (or explicitly via
/// [`CityDb::from_records`]), immutable afterwards. All queries take `&self`,
/// so a single instance is safe for unsynchronized concurrent reads.
#[derive(Clone, Debug)]
pub struct CityDb {
    pub(crate) records: Vec<CityRecord>,
}

impl CityDb {
    /// Build a table from already-parsed records, preserving their order.
    ///
    /// This is the dependency-injection entry point: tests and embedders can
    /// construct a table without touching the bundled dataset.
    pub fn from_records(records: Vec<CityRecord>) -> Self {
        CityDb { records }
    }

    /// The full table, in load order.
    pub fn all(&self) -> &[CityRecord] {
        &self.records
    }

    /// Number of rows in the table.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Aggregate statistics for the table.
    pub fn stats(&self) -> DbStats {
        let mut countries: Vec<&str> = self.records.iter().map(|c| c.country.as_str()).collect();
        countries.sort_unstable();
        countries.dedup();

        let mut timezones: Vec<&str> = self.records.iter().map(|c| c.timezone.as_str()).collect();
        timezones.sort_unstable();
        timezones.dedup();

        DbStats {
            cities: self.records.len(),
            countries: countries.len(),
            timezones: timezones.len(),
        }
    }
}
