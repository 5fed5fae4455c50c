// crates/citytz-core/src/pluscode.rs

//! Plus-code (Open Location Code) decoding.
//!
//! Only full codes are accepted: decoding yields the rectangular area the
//! code designates, and proximity search uses its center. Encoding and
//! short-code recovery are not needed by the query engine.

use crate::error::{CityTzError, Result};

/// Base-20 digit set of the Open Location Code format.
const ALPHABET: &[u8; 20] = b"23456789CFGHJMPQRVWX";
const SEPARATOR: char = '+';
const SEPARATOR_POSITION: usize = 8;
const PADDING: char = '0';
/// Digits beyond this are encoded with the 4x5 refinement grid.
const PAIR_CODE_LENGTH: usize = 10;
/// Precision cap; extra digits carry no information.
const MAX_DIGIT_COUNT: usize = 15;
const GRID_COLUMNS: f64 = 4.0;
const GRID_ROWS: f64 = 5.0;

/// The rectangular area designated by a plus code.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CodeArea {
    pub lat_lo: f64,
    pub lat_hi: f64,
    pub lng_lo: f64,
    pub lng_hi: f64,
}

impl CodeArea {
    /// Center point of the area as `(lat, lng)`.
    pub fn center(&self) -> (f64, f64) {
        (
            self.lat_lo + (self.lat_hi - self.lat_lo) / 2.0,
            self.lng_lo + (self.lng_hi - self.lng_lo) / 2.0,
        )
    }
}

fn digit_value(c: char) -> Option<usize> {
    let upper = c.to_ascii_uppercase();
    ALPHABET.iter().position(|&a| a as char == upper)
}

/// Structural validity per the OLC spec: one separator at an even position
/// no later than 8, padding only as one even-length group ending at the
/// separator, no lone digit after the separator, all digits in the alphabet.
pub fn is_valid(code: &str) -> bool {
    if !code.is_ascii() {
        return false;
    }
    let sep_count = code.matches(SEPARATOR).count();
    if sep_count != 1 {
        return false;
    }
    let sep = code.find(SEPARATOR).unwrap_or(0);
    if code.len() == 1 || sep > SEPARATOR_POSITION || sep % 2 == 1 {
        return false;
    }

    // Padding: one contiguous, even-length group of '0's that runs up to the
    // separator, which must then terminate the code.
    if let Some(pad_start) = code.find(PADDING) {
        if sep < SEPARATOR_POSITION || pad_start > sep {
            return false;
        }
        if pad_start == 0 {
            return false;
        }
        if !code[pad_start..sep].chars().all(|c| c == PADDING) {
            return false;
        }
        if (sep - pad_start) % 2 != 0 {
            return false;
        }
        if sep != code.len() - 1 {
            return false;
        }
    }

    // A single digit after the separator is not decodable.
    if code.len() - sep - 1 == 1 {
        return false;
    }

    code.chars()
        .all(|c| c == SEPARATOR || c == PADDING || digit_value(c).is_some())
}

/// A full (non-shortened) code: separator at position 8 and first digits
/// within the latitude/longitude ranges.
pub fn is_full(code: &str) -> bool {
    if !is_valid(code) {
        return false;
    }
    if code.find(SEPARATOR) != Some(SEPARATOR_POSITION) {
        return false;
    }

    let mut chars = code.chars();
    // First digit encodes latitude in 20-degree bands over [0, 180).
    if let Some(v) = chars.next().and_then(digit_value) {
        if v as f64 * 20.0 >= 180.0 {
            return false;
        }
    }
    // Second digit encodes longitude over [0, 360).
    if let Some(v) = chars.next().and_then(digit_value) {
        if v as f64 * 20.0 >= 360.0 {
            return false;
        }
    }
    true
}

/// Decode a full plus code into its bounding rectangle.
///
/// # Examples
///
/// ```
/// use citytz_core::pluscode;
///
/// let area = pluscode::decode("8FVC0000+").unwrap();
/// assert_eq!(area.center(), (47.5, 8.5)); // Zurich area
///
/// assert!(pluscode::decode("invalid").is_err());
/// ```
pub fn decode(code: &str) -> Result<CodeArea> {
    if !is_full(code) {
        return Err(CityTzError::InvalidPlusCode(format!(
            "{code:?} is not a full plus code"
        )));
    }

    let digits: Vec<usize> = code
        .chars()
        .filter(|&c| c != SEPARATOR && c != PADDING)
        .take(MAX_DIGIT_COUNT)
        .filter_map(digit_value)
        .collect();

    let mut lat = -90.0_f64;
    let mut lng = -180.0_f64;
    let mut lat_res = 400.0_f64;
    let mut lng_res = 400.0_f64;

    // Pairs: each digit pair refines both axes by a factor of 20.
    let pair_digits = &digits[..digits.len().min(PAIR_CODE_LENGTH)];
    for (i, pair) in pair_digits.chunks(2).enumerate() {
        lat_res = 20.0 / 20.0_f64.powi(i as i32);
        lng_res = lat_res;
        lat += pair[0] as f64 * lat_res;
        lng += pair[1] as f64 * lng_res;
    }

    // Grid refinement: single digits subdividing the cell into 4x5.
    for &d in digits.iter().skip(PAIR_CODE_LENGTH) {
        lat_res /= GRID_ROWS;
        lng_res /= GRID_COLUMNS;
        lat += (d / GRID_COLUMNS as usize) as f64 * lat_res;
        lng += (d % GRID_COLUMNS as usize) as f64 * lng_res;
    }

    Ok(CodeArea {
        lat_lo: lat,
        lat_hi: lat + lat_res,
        lng_lo: lng,
        lng_hi: lng + lng_res,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_padded_code() {
        let area = decode("8FVC0000+").unwrap();
        assert_eq!(area.lat_lo, 47.0);
        assert_eq!(area.lat_hi, 48.0);
        assert_eq!(area.lng_lo, 8.0);
        assert_eq!(area.lng_hi, 9.0);
    }

    #[test]
    fn decodes_standard_ten_digit_code() {
        // Chicago-area code used by the upstream test-suite.
        let area = decode("86HJP27M+XF").unwrap();
        let (lat, lng) = area.center();
        assert!((lat - 41.714_937_5).abs() < 1e-9, "lat {lat}");
        assert!((lng + 87.966_312_5).abs() < 1e-9, "lng {lng}");
        assert!((area.lat_hi - area.lat_lo - 0.000125).abs() < 1e-12);
    }

    #[test]
    fn decodes_smallest_digits() {
        let area = decode("22222222+22").unwrap();
        assert_eq!(area.lat_lo, -90.0);
        assert_eq!(area.lng_lo, -180.0);
        assert!((area.lat_hi - -89.999_875).abs() < 1e-12);
    }

    #[test]
    fn is_case_insensitive() {
        let upper = decode("86HJP27M+XF").unwrap();
        let lower = decode("86hjp27m+xf").unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn grid_refinement_narrows_the_cell() {
        let ten = decode("86HJP27M+XF").unwrap();
        let eleven = decode("86HJP27M+XF2").unwrap();
        assert!(eleven.lat_hi - eleven.lat_lo < ten.lat_hi - ten.lat_lo);
        assert!(eleven.lat_lo >= ten.lat_lo && eleven.lat_hi <= ten.lat_hi);
    }

    #[test]
    fn rejects_invalid_codes() {
        for bad in [
            "",
            "invalid",
            "86HJP27M",      // no separator
            "86HJP27M+X",    // lone digit after separator
            "8FVC9G+",       // separator before position 8 without being short-form decodable
            "86HJ00QM+XF",   // padding in the middle
            "X6HJP27M+XF",   // latitude band out of range
            "86HJP27M+XF+",  // two separators
        ] {
            assert!(decode(bad).is_err(), "accepted {bad:?}");
        }
    }
}
