// crates/citytz-core/src/search.rs

//! # Query Engine
//!
//! Read-only queries over the loaded table. Every method is a single linear
//! scan (the proximity search additionally sorts its hits), returns a
//! concrete vector — empty on no match *or* malformed input — and never
//! mutates shared state, so `&CityDb` can be queried concurrently without
//! locks.

use crate::coords::CoordInput;
use crate::geo::haversine_distance_km;
use crate::model::{CityDb, CityRecord, DistanceHit};
use crate::pluscode;

/// Radius applied by [`CityDb::find_by_coordinates`] and
/// [`CityDb::find_by_plus_code`], in kilometers.
pub const DEFAULT_COORD_RADIUS_KM: f64 = 50.0;

impl CityDb {
    /// Cities whose display name equals `name`, case-insensitively.
    ///
    /// Matches the `city` field only (not `city_ascii`); table order is
    /// preserved among matches. A blank `name` yields an empty result.
    pub fn lookup_by_city(&self, name: &str) -> Vec<&CityRecord> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }
        let needle = trimmed.to_lowercase();

        self.records
            .iter()
            .filter(|c| c.city.to_lowercase() == needle)
            .collect()
    }

    /// Partial match across city, state code, province and country.
    ///
    /// The query is split into whitespace-separated terms; a record matches
    /// only when *every* term occurs as a substring of the lowercased
    /// concatenation of its `city`, `state_ansi` (when present as a
    /// non-empty string), `province` and `country` fields. Terms are
    /// unanchored — a one-letter term matches anywhere in those fields.
    pub fn find_by_city_state_province(&self, query: &str) -> Vec<&CityRecord> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }
        let terms: Vec<String> = trimmed
            .split_whitespace()
            .map(|t| t.to_lowercase())
            .collect();

        self.records
            .iter()
            .filter(|c| {
                let haystack = search_haystack(c);
                terms.iter().all(|t| haystack.contains(t.as_str()))
            })
            .collect()
    }

    /// Cities in the country identified by an ISO2 or ISO3 code.
    ///
    /// Case-insensitive equality; `iso2`/`iso3` values that are absent or
    /// not strings never match.
    pub fn find_by_iso_code(&self, code: &str) -> Vec<&CityRecord> {
        let trimmed = code.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }

        self.records
            .iter()
            .filter(|c| {
                let iso2_match = c
                    .iso2
                    .as_str()
                    .is_some_and(|s| s.eq_ignore_ascii_case(trimmed));
                let iso3_match = c
                    .iso3
                    .as_str()
                    .is_some_and(|s| s.eq_ignore_ascii_case(trimmed));
                iso2_match || iso3_match
            })
            .collect()
    }

    /// All cities within `radius_km` of `(lat, lng)`, closest first.
    ///
    /// Ties in distance keep table order (stable sort). Out-of-range inputs
    /// are not rejected; the haversine formula is evaluated as given.
    pub fn find_nearest_cities(&self, lat: f64, lng: f64, radius_km: f64) -> Vec<&CityRecord> {
        self.find_nearest_with_distance(lat, lng, radius_km)
            .into_iter()
            .map(|hit| hit.record)
            .collect()
    }

    /// Same as [`CityDb::find_nearest_cities`], keeping the computed
    /// distance alongside each hit.
    pub fn find_nearest_with_distance(
        &self,
        lat: f64,
        lng: f64,
        radius_km: f64,
    ) -> Vec<DistanceHit<'_>> {
        let mut hits: Vec<DistanceHit<'_>> = self
            .records
            .iter()
            .filter_map(|c| {
                let distance_km = haversine_distance_km(lat, lng, c.lat, c.lng);
                (distance_km <= radius_km).then_some(DistanceHit {
                    record: c,
                    distance_km,
                })
            })
            .collect();

        // Stable sort keeps table order for equal distances.
        hits.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
        hits
    }

    /// Cities near a coordinate given as text or a numeric pair, within the
    /// fixed [`DEFAULT_COORD_RADIUS_KM`].
    ///
    /// Accepts anything convertible to [`CoordInput`]: `"lat,lng"` strings,
    /// `(f64, f64)` tuples or `[f64; 2]` arrays. Unparseable input yields an
    /// empty result rather than an error.
    pub fn find_by_coordinates(&self, input: impl Into<CoordInput>) -> Vec<&CityRecord> {
        match input.into().resolve() {
            Ok((lat, lng)) => self.find_nearest_cities(lat, lng, DEFAULT_COORD_RADIUS_KM),
            Err(_) => Vec::new(),
        }
    }

    /// Cities near the center of a full plus code's area, within the fixed
    /// [`DEFAULT_COORD_RADIUS_KM`].
    ///
    /// Blank or undecodable codes yield an empty result.
    pub fn find_by_plus_code(&self, code: &str) -> Vec<&CityRecord> {
        let trimmed = code.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }

        match pluscode::decode(trimmed) {
            Ok(area) => {
                let (lat, lng) = area.center();
                self.find_nearest_cities(lat, lng, DEFAULT_COORD_RADIUS_KM)
            }
            Err(_) => Vec::new(),
        }
    }
}

/// Lowercased concatenation of the fields the partial search scans.
fn search_haystack(c: &CityRecord) -> String {
    let mut fields: Vec<&str> = Vec::with_capacity(4);
    fields.push(c.city.as_str());
    if let Some(state) = c.state_ansi.as_str() {
        if !state.is_empty() {
            fields.push(state);
        }
    }
    fields.push(c.province.as_str());
    fields.push(c.country.as_str());
    fields.join(" ").to_lowercase()
}
