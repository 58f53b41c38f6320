//! Greedy capacitated collection planner for binroute.
//!
//! This crate provides [`GreedyPlanner`], the default implementation of the
//! [`Planner`](binroute_core::Planner) trait. It narrows the fleet's
//! containers to those a truck may service ([`CandidateFilter`]), then
//! repeatedly picks the best-scoring remaining container from the truck's
//! current position until capacity or candidates run out
//! ([`RouteBuilder`]).
//!
//! The heuristic is deliberately local: it never revisits a choice and makes
//! no claim of global optimality. Distances are straight-line.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod filter;
mod planner;
mod scoring;

pub use builder::{OverflowPolicy, RouteBuilder, UnknownOverflowPolicy};
pub use filter::{CandidateFilter, DEFAULT_MIN_FILL, InvalidMinFill};
pub use planner::{GreedyPlanner, GreedyPlannerConfig, plan_route};
pub use scoring::{
    ProximityScorer, ScoreWeights, ScoreWeightsError, WeightedScorer, distance_factor,
    status_bonus,
};
