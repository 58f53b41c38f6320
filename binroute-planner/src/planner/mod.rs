//! `GreedyPlanner`: resolves a truck, filters candidates and builds a route.
//!
//! Store reads happen before the greedy loop starts; the loop itself works on
//! a private copy of the candidates, so one planner can serve concurrent
//! requests.

use binroute_core::{
    CollectionRoute, Container, ContainerScorer, ContainerStore, PlanError, Planner, RouteQuery,
    TrashType, Truck, TruckStore, ZoneId,
};
use log::{debug, info, warn};

use crate::builder::{OverflowPolicy, RouteBuilder};
use crate::filter::CandidateFilter;

/// Configuration for [`GreedyPlanner`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GreedyPlannerConfig {
    /// Eligibility rules applied before scoring.
    pub filter: CandidateFilter,
    /// Behaviour when the best remaining container does not fit.
    pub overflow: OverflowPolicy,
}

/// Greedy nearest-and-fullest-first planner.
///
/// Generic over the fleet stores and the scoring strategy so that each can be
/// swapped without touching the selection loop.
pub struct GreedyPlanner<T, C, S>
where
    T: TruckStore,
    C: ContainerStore,
    S: ContainerScorer,
{
    trucks: T,
    containers: C,
    scorer: S,
    config: GreedyPlannerConfig,
}

impl<T, C, S> GreedyPlanner<T, C, S>
where
    T: TruckStore,
    C: ContainerStore,
    S: ContainerScorer,
{
    /// Construct a planner using default configuration.
    #[must_use]
    pub fn new(trucks: T, containers: C, scorer: S) -> Self {
        Self::with_config(trucks, containers, scorer, GreedyPlannerConfig::default())
    }

    /// Construct a planner with explicit configuration.
    #[must_use]
    pub const fn with_config(
        trucks: T,
        containers: C,
        scorer: S,
        config: GreedyPlannerConfig,
    ) -> Self {
        Self {
            trucks,
            containers,
            scorer,
            config,
        }
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &GreedyPlannerConfig {
        &self.config
    }

    /// Plan a route for the truck with identifier `truck_id`.
    ///
    /// The route collects `trash_type` when given, otherwise the truck's own
    /// type. An unknown truck yields an empty route.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::Store`] when either store cannot be read.
    pub fn generate_route(
        &self,
        truck_id: u64,
        trash_type: Option<TrashType>,
    ) -> Result<CollectionRoute, PlanError> {
        let Some(truck) = self.trucks.truck(truck_id)? else {
            warn!("truck {truck_id} not found; returning an empty route");
            return Ok(CollectionRoute::empty());
        };
        let effective = trash_type.unwrap_or(truck.trash_type);
        self.plan_for(&truck, effective)
    }

    /// Plan a route for the truck serving `zone` and collecting `trash_type`.
    ///
    /// A truck whose zone and trash type both match is preferred. Failing
    /// that, the first truck in the zone is sent with `trash_type` as an
    /// override. A zone without trucks yields an empty route.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::Store`] when either store cannot be read.
    pub fn generate_route_for_zone(
        &self,
        zone: &ZoneId,
        trash_type: TrashType,
    ) -> Result<CollectionRoute, PlanError> {
        let Some(truck) = resolve_zone_truck(self.trucks.trucks()?, zone, trash_type) else {
            warn!("no truck serves zone {zone}; returning an empty route");
            return Ok(CollectionRoute::empty());
        };
        self.plan_for(&truck, trash_type)
    }

    fn plan_for(&self, truck: &Truck, trash_type: TrashType) -> Result<CollectionRoute, PlanError> {
        let containers = self.containers.containers()?;
        Ok(plan_route(
            truck,
            trash_type,
            containers,
            &self.scorer,
            &self.config,
        ))
    }
}

impl<T, C, S> Planner for GreedyPlanner<T, C, S>
where
    T: TruckStore + Send + Sync,
    C: ContainerStore + Send + Sync,
    S: ContainerScorer,
{
    fn plan(&self, query: &RouteQuery) -> Result<CollectionRoute, PlanError> {
        match query {
            RouteQuery::Truck {
                truck_id,
                trash_type,
            } => self.generate_route(*truck_id, *trash_type),
            RouteQuery::Zone { zone, trash_type } => {
                self.generate_route_for_zone(zone, *trash_type)
            }
        }
    }
}

/// Pick the truck for a zone query.
fn resolve_zone_truck(trucks: Vec<Truck>, zone: &ZoneId, trash_type: TrashType) -> Option<Truck> {
    let mut in_zone = trucks.into_iter().filter(|truck| truck.zone == *zone);
    let first = in_zone.next()?;
    if first.trash_type == trash_type {
        return Some(first);
    }
    Some(
        in_zone
            .find(|truck| truck.trash_type == trash_type)
            .unwrap_or(first),
    )
}

/// Plan a route for `truck` over an already-loaded set of containers.
///
/// This is the store-free core of [`GreedyPlanner`]: filter by zone, trash
/// type, status and fill, then run the greedy builder from the truck's
/// location.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use binroute_core::{Container, TrashType, Truck, ZoneId};
/// use binroute_planner::{GreedyPlannerConfig, WeightedScorer, plan_route};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let zone = ZoneId::from("centre");
/// let truck = Truck::new(1, zone.clone(), TrashType::Paper, 1000.0, Coord { x: 0.0, y: 0.0 })?;
/// let containers = vec![
///     Container::new(10, zone.clone(), TrashType::Paper, 1000.0, 30.0, Coord { x: 1.0, y: 0.0 })?,
///     Container::new(11, zone, TrashType::Paper, 1000.0, 40.0, Coord { x: 2.0, y: 0.0 })?,
/// ];
/// let config = GreedyPlannerConfig::default();
/// let route = plan_route(&truck, TrashType::Paper, containers, &WeightedScorer::default(), &config);
/// // container 10 is below the default fill threshold
/// assert_eq!(route.container_ids().collect::<Vec<_>>(), vec![11]);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn plan_route<S>(
    truck: &Truck,
    trash_type: TrashType,
    containers: Vec<Container>,
    scorer: &S,
    config: &GreedyPlannerConfig,
) -> CollectionRoute
where
    S: ContainerScorer + ?Sized,
{
    let total = containers.len();
    let candidates = config.filter.select(containers, &truck.zone, trash_type);
    debug!(
        "truck {}: {} of {total} containers eligible for {trash_type} in zone {}",
        truck.id,
        candidates.len(),
        truck.zone
    );

    let stops = RouteBuilder::new(scorer, truck.capacity, truck.location)
        .with_policy(config.overflow)
        .build(candidates);
    let route = CollectionRoute::new(truck.id, trash_type, stops);
    info!(
        "truck {} route: {} stops, {} trips, load {:.1} of {:.1}, distance {:.3}",
        truck.id,
        route.len(),
        route.trip_count(),
        route.total_load,
        truck.capacity,
        route.total_distance
    );
    route
}
