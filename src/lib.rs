//! Facade crate for the binroute collection planning engine.
//!
//! This crate re-exports the core domain types and exposes the greedy
//! planner behind the `planner-greedy` feature.

#![forbid(unsafe_code)]

pub use binroute_core::{
    CollectionRoute, Container, ContainerScorer, ContainerStatus, ContainerStore, PlanError,
    Planner, RouteQuery, RouteStop, StoreError, TrashType, Truck, TruckStore, ZoneId, distance,
};

#[cfg(feature = "planner-greedy")]
pub use binroute_planner::{
    CandidateFilter, GreedyPlanner, GreedyPlannerConfig, OverflowPolicy, ProximityScorer,
    ScoreWeights, WeightedScorer, plan_route,
};
