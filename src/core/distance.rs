use crate::models::Coordinates;

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the great-circle (haversine) distance between two points
///
/// # Arguments
/// * `from` - First point in degrees
/// * `to` - Second point in degrees
///
/// # Returns
/// Distance in kilometers, always non-negative
#[inline]
pub fn haversine_distance(from: Coordinates, to: Coordinates) -> f64 {
    let lat1_rad = from.latitude.to_radians();
    let lat2_rad = to.latitude.to_radians();
    let delta_lat = (to.latitude - from.latitude).to_radians();
    let delta_lon = (to.longitude - from.longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
