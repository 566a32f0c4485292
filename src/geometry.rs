//! Great-circle geometry on a spherical Earth.

use crate::track_point::TrackPoint;

/// Earth's mean radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in km between two positions given in degrees.
///
/// Spherical law of cosines. The cosine argument is clamped to [-1, 1]:
/// for identical or near-identical points rounding can push it just past 1,
/// which would take `acos` out of its domain.
pub fn great_circle_distance_km(lat_a: f64, lon_a: f64, lat_b: f64, lon_b: f64) -> f64 {
    let lat_a = lat_a.to_radians();
    let lat_b = lat_b.to_radians();
    let delta_lon = (lon_b - lon_a).to_radians();

    let central = lat_a.sin() * lat_b.sin() + lat_a.cos() * lat_b.cos() * delta_lon.cos();
    central.clamp(-1.0, 1.0).acos() * EARTH_RADIUS_KM
}

/// Total distance in km along a time-sorted sequence of track points.
pub fn total_distance_km(points: &[TrackPoint]) -> f64 {
    points
        .windows(2)
        .map(|pair| {
            great_circle_distance_km(
                pair[0].latitude,
                pair[0].longitude,
                pair[1].latitude,
                pair[1].longitude,
            )
        })
        .sum()
}
