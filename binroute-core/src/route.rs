//! Ordered collection routes.
//!
//! A [`CollectionRoute`] is a disposable, derived value: it records which
//! containers a truck empties, in which order, and why each was chosen.

use geo::Coord;

use crate::{Container, TrashType, distance, path_length};

/// A single container visit within a route.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteStop {
    /// Snapshot of the container at the moment it was selected.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub container: Container,
    /// Priority score that won the selection round.
    pub score: f64,
    /// Truck position the container was scored from.
    pub selected_from: Coord<f64>,
    /// Load added to the truck by emptying the container.
    pub load: f64,
    /// Truck load on the current trip after this stop.
    pub cumulative_load: f64,
    /// Zero-based trip index; increments each time the truck returns to the
    /// depot to unload.
    pub trip: u32,
}

impl RouteStop {
    /// Straight-line length of the leg that reaches this stop.
    #[must_use]
    pub fn leg_distance(&self) -> f64 {
        distance(self.selected_from, self.container.location)
    }
}

/// The ordered result of one planning run.
///
/// # Examples
/// ```
/// use binroute_core::CollectionRoute;
///
/// let route = CollectionRoute::empty();
/// assert!(route.is_empty());
/// assert_eq!(route.total_load, 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollectionRoute {
    /// Truck the route was planned for; `None` when no truck was resolved.
    pub truck_id: Option<u64>,
    /// Trash type the route collects; `None` when no truck was resolved.
    pub trash_type: Option<TrashType>,
    /// Stops in visiting order.
    pub stops: Vec<RouteStop>,
    /// Sum of the load collected across all trips.
    pub total_load: f64,
    /// Straight-line distance travelled, including returns to the depot.
    pub total_distance: f64,
}

impl CollectionRoute {
    /// Route with no truck and no stops.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a route for a resolved truck, deriving totals from `stops`.
    ///
    /// The distance includes any detour between one stop and the position
    /// the next stop was selected from, which is how depot returns show up.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "total load sums per-stop loads"
    )]
    pub fn new(truck_id: u64, trash_type: TrashType, stops: Vec<RouteStop>) -> Self {
        let total_load = stops.iter().map(|stop| stop.load).sum();
        let total_distance = stops.first().map_or(0.0, |first| {
            path_length(
                first.selected_from,
                stops
                    .iter()
                    .flat_map(|stop| [stop.selected_from, stop.container.location]),
            )
        });
        Self {
            truck_id: Some(truck_id),
            trash_type: Some(trash_type),
            stops,
            total_load,
            total_distance,
        }
    }

    /// Whether the route visits no containers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Number of stops.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Container identifiers in visiting order.
    pub fn container_ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.stops.iter().map(|stop| stop.container.id)
    }

    /// Number of depot-to-depot trips the route contains.
    #[must_use]
    pub fn trip_count(&self) -> u32 {
        self.stops
            .last()
            .map_or(0, |stop| stop.trip.saturating_add(1))
    }
}
