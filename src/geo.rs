use crate::dataset::Coordinates;

const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Great-circle distance between two coordinates, in meters.
///
/// Symmetric, and exactly zero for identical inputs.
pub fn haversine_distance(a: &Coordinates, b: &Coordinates) -> f64 {
    let lat1 = a.latitude.clamp(-90.0, 90.0).to_radians();
    let lat2 = b.latitude.clamp(-90.0, 90.0).to_radians();
    let dlat = lat2 - lat1;
    let dlon = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // h can land a rounding error above 1.0 for antipodal pairs, where asin
    // would return NaN.
    let c = 2.0 * h.sqrt().clamp(0.0, 1.0).asin();
    EARTH_RADIUS_METERS * c
}
