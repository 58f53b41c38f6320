//! Straight-line distance helpers.
//!
//! The planner works on planar coordinates and never consults a road
//! network, so every distance here is Euclidean.

use geo::{Coord, Distance, Euclidean, Point};

/// Euclidean distance between two coordinates.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use binroute_core::distance;
///
/// let d = distance(Coord { x: 0.0, y: 0.0 }, Coord { x: 3.0, y: 4.0 });
/// assert!((d - 5.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn distance(from: Coord<f64>, to: Coord<f64>) -> f64 {
    Euclidean.distance(Point::from(from), Point::from(to))
}

/// Length of the polyline starting at `start` and visiting `waypoints` in
/// order.
///
/// Returns `0.0` when there are no waypoints.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "path length sums leg distances"
)]
pub fn path_length<I>(start: Coord<f64>, waypoints: I) -> f64
where
    I: IntoIterator<Item = Coord<f64>>,
{
    waypoints
        .into_iter()
        .fold((start, 0.0), |(previous, total), next| {
            (next, total + distance(previous, next))
        })
        .1
}
