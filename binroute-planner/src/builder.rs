//! Greedy route construction.
//!
//! [`RouteBuilder`] walks a filtered candidate set, repeatedly scoring every
//! unvisited container from the truck's current position and collecting the
//! best one while it still fits.

use std::fmt;
use std::str::FromStr;

use binroute_core::{Container, ContainerScorer, RouteStop, sanitise_score};
use geo::Coord;
use log::debug;
use thiserror::Error;

/// What the builder does when the best remaining container does not fit.
///
/// The production behaviour is [`OverflowPolicy::Stop`]: a full truck ends
/// its route, and smaller containers further down the ranking are not tried.
/// [`OverflowPolicy::ReturnToDepot`] instead models unloading at the depot
/// (the truck's start location) and carrying on with a fresh trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// End the route at the first container that would overflow the truck.
    #[default]
    Stop,
    /// Unload at the depot, start a new trip and keep selecting.
    ReturnToDepot,
}

impl OverflowPolicy {
    /// Canonical name used by configuration and the CLI.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stop => "stop",
            Self::ReturnToDepot => "return-to-depot",
        }
    }
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognised overflow policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown overflow policy `{value}` (expected `stop` or `return-to-depot`)")]
pub struct UnknownOverflowPolicy {
    /// Text that failed to parse.
    pub value: String,
}

impl FromStr for OverflowPolicy {
    type Err = UnknownOverflowPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stop" => Ok(Self::Stop),
            "return-to-depot" | "return_to_depot" | "depot" => Ok(Self::ReturnToDepot),
            _ => Err(UnknownOverflowPolicy {
                value: s.to_owned(),
            }),
        }
    }
}

/// Builds an ordered list of stops for one truck.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use binroute_core::{Container, TrashType, ZoneId};
/// use binroute_planner::{RouteBuilder, WeightedScorer};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let zone = ZoneId::from("centre");
/// let near = Container::new(1, zone.clone(), TrashType::Glass, 1000.0, 30.0, Coord { x: 0.0, y: 1.0 })?;
/// let far = Container::new(2, zone, TrashType::Glass, 1000.0, 30.0, Coord { x: 0.0, y: 10.0 })?;
///
/// let scorer = WeightedScorer::default();
/// let stops = RouteBuilder::new(&scorer, 1000.0, Coord { x: 0.0, y: 0.0 }).build(vec![far, near]);
/// let order: Vec<u64> = stops.iter().map(|stop| stop.container.id).collect();
/// assert_eq!(order, vec![1, 2]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct RouteBuilder<'a, S>
where
    S: ContainerScorer + ?Sized,
{
    scorer: &'a S,
    capacity: f64,
    depot: Coord<f64>,
    policy: OverflowPolicy,
}

impl<'a, S> RouteBuilder<'a, S>
where
    S: ContainerScorer + ?Sized,
{
    /// Builder for a truck of `capacity` starting at `depot`, using the
    /// default [`OverflowPolicy`].
    #[must_use]
    pub fn new(scorer: &'a S, capacity: f64, depot: Coord<f64>) -> Self {
        Self {
            scorer,
            capacity,
            depot,
            policy: OverflowPolicy::default(),
        }
    }

    /// Replace the overflow policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: OverflowPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Run the greedy loop over `candidates`.
    ///
    /// `candidates` must already be filtered. Each container is visited at
    /// most once; equal scores resolve to the earliest candidate.
    #[must_use]
    pub fn build(&self, candidates: Vec<Container>) -> Vec<RouteStop> {
        let mut remaining = CandidateSet::new(candidates);
        let mut trip = Trip::start(self.depot, 0);
        let mut stops = Vec::new();

        while let Some((index, score)) = remaining.best(self.scorer, trip.position) {
            let Some(load) = remaining.get(index).map(Container::load) else {
                break;
            };
            if trip.fits(load, self.capacity) {
                let Some(container) = remaining.select(index) else {
                    break;
                };
                debug!(
                    "trip {} collects container {} (score {score:.3}, load {load:.1})",
                    trip.index, container.id
                );
                stops.push(trip.visit(container, score, load));
                continue;
            }

            match self.policy {
                OverflowPolicy::Stop => {
                    debug!("truck full at load {:.1}; route complete", trip.load);
                    break;
                }
                OverflowPolicy::ReturnToDepot => {
                    if trip.visits == 0 || load > self.capacity {
                        debug!("candidate load {load:.1} exceeds an empty truck; route complete");
                        break;
                    }
                    debug!("trip {} full at load {:.1}; returning to depot", trip.index, trip.load);
                    trip = Trip::start(self.depot, trip.index.saturating_add(1));
                }
            }
        }

        stops
    }
}

/// Fixed array of candidates with a selected mask.
struct CandidateSet {
    containers: Vec<Container>,
    selected: Vec<bool>,
}

impl CandidateSet {
    fn new(containers: Vec<Container>) -> Self {
        let selected = vec![false; containers.len()];
        Self {
            containers,
            selected,
        }
    }

    fn get(&self, index: usize) -> Option<&Container> {
        self.containers.get(index)
    }

    /// Highest-scoring unselected candidate, earliest on ties.
    fn best<S>(&self, scorer: &S, from: Coord<f64>) -> Option<(usize, f64)>
    where
        S: ContainerScorer + ?Sized,
    {
        let mut best: Option<(usize, f64)> = None;
        for (index, (container, selected)) in
            self.containers.iter().zip(&self.selected).enumerate()
        {
            if *selected {
                continue;
            }
            let score = sanitise_score(scorer.score(container, from));
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((index, score));
            }
        }
        best
    }

    fn select(&mut self, index: usize) -> Option<Container> {
        let flag = self.selected.get_mut(index)?;
        if *flag {
            return None;
        }
        *flag = true;
        self.containers.get(index).cloned()
    }
}

/// Position and load bookkeeping for one depot-to-depot trip.
struct Trip {
    index: u32,
    position: Coord<f64>,
    load: f64,
    visits: usize,
}

impl Trip {
    const fn start(depot: Coord<f64>, index: u32) -> Self {
        Self {
            index,
            position: depot,
            load: 0.0,
            visits: 0,
        }
    }

    #[expect(clippy::float_arithmetic, reason = "capacity check sums loads")]
    const fn fits(&self, load: f64, capacity: f64) -> bool {
        self.load + load <= capacity
    }

    #[expect(clippy::float_arithmetic, reason = "running load accumulates")]
    fn visit(&mut self, container: Container, score: f64, load: f64) -> RouteStop {
        let selected_from = self.position;
        self.load += load;
        self.position = container.location;
        self.visits = self.visits.saturating_add(1);
        RouteStop {
            container,
            score,
            selected_from,
            load,
            cumulative_load: self.load,
            trip: self.index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use binroute_core::TrashType;
    use binroute_core::test_support::container;
    use rstest::{fixture, rstest};

    use crate::{ProximityScorer, ScoreWeights, WeightedScorer};

    const DEPOT: Coord<f64> = Coord { x: 0.0, y: 0.0 };

    #[fixture]
    fn scorer() -> WeightedScorer {
        WeightedScorer::default()
    }

    fn ids(stops: &[RouteStop]) -> Vec<u64> {
        stops.iter().map(|stop| stop.container.id).collect()
    }

    #[rstest]
    #[case("stop", OverflowPolicy::Stop)]
    #[case(" Return-To-Depot ", OverflowPolicy::ReturnToDepot)]
    #[case("depot", OverflowPolicy::ReturnToDepot)]
    fn parses_overflow_policy(#[case] text: &str, #[case] expected: OverflowPolicy) {
        assert_eq!(text.parse::<OverflowPolicy>(), Ok(expected));
    }

    #[rstest]
    fn rejects_unknown_overflow_policy() {
        let err = "spill".parse::<OverflowPolicy>().expect_err("unknown policy");
        assert_eq!(err.value, "spill");
    }

    #[rstest]
    fn only_one_of_two_overflowing_containers_is_collected(scorer: WeightedScorer) {
        // loads 400 and 700 against a capacity of 1000
        let candidates = vec![
            container(1, "z", TrashType::Mixed, 1000.0, 40.0, 0.0, 2.0),
            container(2, "z", TrashType::Mixed, 1000.0, 70.0, 0.0, 2.0),
        ];
        let stops = RouteBuilder::new(&scorer, 1000.0, DEPOT).build(candidates);
        assert_eq!(ids(&stops), vec![2]);
        assert!((stops.iter().map(|stop| stop.load).sum::<f64>() - 700.0).abs() < 1e-9);
    }

    #[rstest]
    fn both_containers_collected_in_descending_score_order(scorer: WeightedScorer) {
        // loads 300 and 400
        let candidates = vec![
            container(1, "z", TrashType::Mixed, 1000.0, 30.0, 0.0, 2.0),
            container(2, "z", TrashType::Mixed, 1000.0, 40.0, 0.0, 2.0),
        ];
        let stops = RouteBuilder::new(&scorer, 1000.0, DEPOT).build(candidates);
        assert_eq!(ids(&stops), vec![2, 1]);
        let last = stops.last().expect("two stops");
        assert!((last.cumulative_load - 700.0).abs() < 1e-9);
        assert!(stops.windows(2).all(|pair| match pair {
            [first, second] => first.score >= second.score,
            _ => true,
        }));
    }

    #[rstest]
    #[case::weighted(Box::new(WeightedScorer::default()))]
    #[case::proximity(Box::new(ProximityScorer))]
    fn nearer_container_is_selected_first(#[case] scorer: Box<dyn ContainerScorer>) {
        let candidates = vec![
            container(1, "z", TrashType::Mixed, 100.0, 50.0, 0.0, 10.0),
            container(2, "z", TrashType::Mixed, 100.0, 50.0, 0.0, 1.0),
        ];
        let stops = RouteBuilder::new(&*scorer, 1000.0, DEPOT).build(candidates);
        assert_eq!(ids(&stops), vec![2, 1]);
        let first = stops.first().expect("stops");
        assert_eq!(first.selected_from, DEPOT);
    }

    #[rstest]
    fn equal_scores_prefer_earliest_candidate(scorer: WeightedScorer) {
        let candidates = vec![
            container(7, "z", TrashType::Mixed, 100.0, 50.0, 1.0, 0.0),
            container(3, "z", TrashType::Mixed, 100.0, 50.0, -1.0, 0.0),
        ];
        let stops = RouteBuilder::new(&scorer, 1000.0, DEPOT).build(candidates);
        assert_eq!(ids(&stops).first(), Some(&7));
    }

    #[rstest]
    #[case(OverflowPolicy::Stop)]
    #[case(OverflowPolicy::ReturnToDepot)]
    fn oversized_first_candidate_yields_empty_route(
        scorer: WeightedScorer,
        #[case] policy: OverflowPolicy,
    ) {
        let candidates = vec![
            container(1, "z", TrashType::Mixed, 5000.0, 90.0, 0.0, 1.0),
            container(2, "z", TrashType::Mixed, 100.0, 10.0, 0.0, 50.0),
        ];
        let stops = RouteBuilder::new(&scorer, 1000.0, DEPOT)
            .with_policy(policy)
            .build(candidates);
        assert!(stops.is_empty());
    }

    #[rstest]
    fn empty_candidates_yield_empty_route(scorer: WeightedScorer) {
        assert!(RouteBuilder::new(&scorer, 1000.0, DEPOT).build(Vec::new()).is_empty());
    }

    #[rstest]
    fn stop_policy_does_not_try_smaller_candidates(scorer: WeightedScorer) {
        let candidates = vec![
            container(1, "z", TrashType::Mixed, 1000.0, 60.0, 0.0, 1.0),
            container(2, "z", TrashType::Mixed, 1000.0, 50.0, 0.0, 2.0),
            container(3, "z", TrashType::Mixed, 100.0, 40.0, 0.0, 30.0),
        ];
        let stops = RouteBuilder::new(&scorer, 1000.0, DEPOT).build(candidates);
        assert_eq!(ids(&stops), vec![1]);
    }

    #[rstest]
    fn depot_policy_starts_new_trip_from_depot(scorer: WeightedScorer) {
        let candidates = vec![
            container(1, "z", TrashType::Mixed, 1000.0, 60.0, 0.0, 1.0),
            container(2, "z", TrashType::Mixed, 1000.0, 50.0, 0.0, 2.0),
            container(3, "z", TrashType::Mixed, 100.0, 40.0, 0.0, 30.0),
        ];
        let stops = RouteBuilder::new(&scorer, 1000.0, DEPOT)
            .with_policy(OverflowPolicy::ReturnToDepot)
            .build(candidates);
        assert_eq!(stops.len(), 3);
        let second = stops.get(1).expect("second stop");
        assert_eq!(second.trip, 1);
        assert_eq!(second.selected_from, DEPOT);
        assert!(stops.iter().all(|stop| stop.cumulative_load <= 1000.0));
    }

    #[rstest]
    fn non_finite_scores_rank_last() {
        struct Erratic;
        impl ContainerScorer for Erratic {
            fn score(&self, container: &Container, _from: Coord<f64>) -> f64 {
                if container.id == 1 { f64::NAN } else { 0.5 }
            }
        }
        let candidates = vec![
            container(1, "z", TrashType::Mixed, 100.0, 50.0, 0.0, 1.0),
            container(2, "z", TrashType::Mixed, 100.0, 50.0, 0.0, 2.0),
        ];
        let stops = RouteBuilder::new(&Erratic, 1000.0, DEPOT).build(candidates);
        assert_eq!(ids(&stops), vec![2, 1]);
        assert_eq!(stops.get(1).map(|stop| stop.score), Some(0.0));
    }

    #[rstest]
    fn fill_weight_alone_orders_by_fill() {
        let scorer = WeightedScorer::new(ScoreWeights::new(1.0, 0.0, 0.0).expect("weights"));
        let candidates = vec![
            container(1, "z", TrashType::Mixed, 100.0, 45.0, 0.0, 1.0),
            container(2, "z", TrashType::Mixed, 100.0, 95.0, 0.0, 100.0),
        ];
        let stops = RouteBuilder::new(&scorer, 1000.0, DEPOT).build(candidates);
        assert_eq!(ids(&stops), vec![2, 1]);
    }
}
