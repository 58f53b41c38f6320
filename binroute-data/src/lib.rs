//! File-backed fleet data for the binroute engine.
//!
//! Responsibilities:
//! - Load fleet snapshots (trucks and containers) from JSON files.
//! - Validate records before they reach the planner.
//! - Serve snapshots through the `TruckStore` and `ContainerStore` traits.
//!
//! Boundaries:
//! - Do not encode routing rules (those live in `binroute-planner`).
//! - File access goes through `cap-std` with UTF-8 paths.
//!
//! Invariants:
//! - A loaded store is immutable and safe to share between threads.
//! - Truck and container identifiers are unique within a snapshot.

#![forbid(unsafe_code)]

pub mod fs;
mod snapshot;

pub use snapshot::{FleetSnapshot, SnapshotError, SnapshotStore};
