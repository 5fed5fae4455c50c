// crates/citytz-core/src/coords.rs

//! Free-form coordinate input.
//!
//! The original API accepted coordinates either as a `"lat,lng"` string or
//! as a pair of floats; [`CoordInput`] models that flexibility as an enum
//! with `From` conversions, so [`crate::CityDb::find_by_coordinates`] can
//! take `impl Into<CoordInput>`.

use crate::error::{CityTzError, Result};

/// A coordinate query before parsing: raw text or an already-numeric pair.
#[derive(Clone, Debug, PartialEq)]
pub enum CoordInput {
    /// A `"lat,lng"` formatted string, parsed lazily.
    Text(String),
    /// `(lat, lng)` in degrees.
    Pair(f64, f64),
}

impl CoordInput {
    /// Resolve to `(lat, lng)`; text input goes through
    /// [`parse_coord_pair`].
    pub fn resolve(&self) -> Result<(f64, f64)> {
        match self {
            CoordInput::Text(s) => parse_coord_pair(s),
            CoordInput::Pair(lat, lng) => Ok((*lat, *lng)),
        }
    }
}

impl From<&str> for CoordInput {
    fn from(s: &str) -> Self {
        CoordInput::Text(s.to_owned())
    }
}

impl From<String> for CoordInput {
    fn from(s: String) -> Self {
        CoordInput::Text(s)
    }
}

impl From<(f64, f64)> for CoordInput {
    fn from((lat, lng): (f64, f64)) -> Self {
        CoordInput::Pair(lat, lng)
    }
}

impl From<[f64; 2]> for CoordInput {
    fn from(p: [f64; 2]) -> Self {
        CoordInput::Pair(p[0], p[1])
    }
}

/// Parse a `"lat,lng"` string into a coordinate pair.
///
/// Exactly two comma-separated components, each a floating-point number
/// after trimming. Anything else is [`CityTzError::InvalidCoordinates`].
///
/// # Examples
///
/// ```
/// use citytz_core::parse_coord_pair;
///
/// assert_eq!(parse_coord_pair(" 41.8299 , -87.75 ").unwrap(), (41.8299, -87.75));
/// assert!(parse_coord_pair("123.45").is_err());
/// assert!(parse_coord_pair("a,b").is_err());
/// ```
pub fn parse_coord_pair(s: &str) -> Result<(f64, f64)> {
    let mut parts = s.split(',');
    let (lat_part, lng_part) = match (parts.next(), parts.next(), parts.next()) {
        (Some(a), Some(b), None) => (a, b),
        _ => {
            return Err(CityTzError::InvalidCoordinates(format!(
                "expected 'lat,lng', got {s:?}"
            )))
        }
    };

    let lat: f64 = lat_part.trim().parse().map_err(|_| {
        CityTzError::InvalidCoordinates(format!("invalid latitude {:?}", lat_part.trim()))
    })?;
    let lng: f64 = lng_part.trim().parse().map_err(|_| {
        CityTzError::InvalidCoordinates(format!("invalid longitude {:?}", lng_part.trim()))
    })?;

    Ok((lat, lng))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_pair() {
        assert_eq!(parse_coord_pair("41.8299,-87.7500").unwrap(), (41.8299, -87.75));
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        assert_eq!(parse_coord_pair("  41.83 ,\t-87.75 ").unwrap(), (41.83, -87.75));
    }

    #[test]
    fn rejects_malformed_input() {
        for bad in [
            "invalid",
            "123.45",
            "123.45,",
            ",67.89",
            "abc,def",
            "123.45,67.89,extra",
            "123.45;67.89",
            "(123.45,67.89)",
            "",
            "   ,   ",
        ] {
            assert!(parse_coord_pair(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn coord_input_conversions() {
        assert_eq!(CoordInput::from((1.0, 2.0)).resolve().unwrap(), (1.0, 2.0));
        assert_eq!(CoordInput::from([1.0, 2.0]).resolve().unwrap(), (1.0, 2.0));
        assert_eq!(CoordInput::from("1.5, 2.5").resolve().unwrap(), (1.5, 2.5));
        assert!(CoordInput::from("nope").resolve().is_err());
    }
}
