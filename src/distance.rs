use crate::dataset::Route;
use crate::geo::haversine_distance;
use crate::validate::TimeWindow;

/// Path length of a single route in meters, summed over consecutive
/// location pairs. Routes with fewer than two locations measure zero.
pub fn route_length(route: &Route) -> f64 {
    route
        .locations
        .windows(2)
        .map(|pair| haversine_distance(&pair[0].coordinates, &pair[1].coordinates))
        .sum()
}

/// Total meters travelled across every route whose timestamp falls inside
/// the window. Zero when no route qualifies.
pub fn total_distance(routes: &[Route], window: &TimeWindow) -> f64 {
    routes
        .iter()
        .filter(|route| window.contains(route.timestamp))
        .map(route_length)
        .sum()
}
