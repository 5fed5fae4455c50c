// crates/citytz-core/src/geo.rs

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points, in kilometers.
///
/// Standard haversine formula over a spherical Earth of radius
/// [`EARTH_RADIUS_KM`]. Inputs are degrees; out-of-range coordinates are not
/// rejected — the formula is evaluated as-is.
///
/// # Examples
///
/// ```
/// use citytz_core::haversine_distance_km;
///
/// // A point is at distance zero from itself.
/// assert_eq!(haversine_distance_km(41.83, -87.68, 41.83, -87.68), 0.0);
///
/// // London → Paris is roughly 344 km.
/// let d = haversine_distance_km(51.5074, -0.1278, 48.8566, 2.3522);
/// assert!((d - 343.5).abs() < 2.0);
/// ```
pub fn haversine_distance_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_distance_for_identical_points() {
        for &(lat, lng) in &[(0.0, 0.0), (90.0, 0.0), (-90.0, 0.0), (41.83, -87.68)] {
            assert_eq!(haversine_distance_km(lat, lng, lat, lng), 0.0);
        }
    }

    #[test]
    fn is_symmetric() {
        let d1 = haversine_distance_km(51.5074, -0.1278, 48.8566, 2.3522);
        let d2 = haversine_distance_km(48.8566, 2.3522, 51.5074, -0.1278);
        assert!((d1 - d2).abs() < 1e-9);
    }

    #[test]
    fn antipodal_points_are_half_circumference() {
        let d = haversine_distance_km(0.0, 0.0, 0.0, 180.0);
        let half = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert!((d - half).abs() < 1e-6);
    }

    #[test]
    fn known_city_pair() {
        // Chicago → New York, great-circle ≈ 1,145 km.
        let d = haversine_distance_km(41.83, -87.68, 40.7128, -74.006);
        assert!((d - 1145.0).abs() < 15.0, "got {d}");
    }
}
