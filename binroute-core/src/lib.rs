//! Core domain types for the binroute collection planner.
//!
//! The crate models trucks, waste containers and the routes built through
//! them, plus the read-only store, scorer and planner boundaries that
//! concrete implementations plug into. Constructors validate their input and
//! return `Result` so that malformed fleet data is rejected before planning.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod container;
pub mod geometry;
pub mod planner;
pub mod route;
pub mod scorer;
pub mod store;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;
pub mod trash_type;
pub mod truck;
pub mod zone;

pub use container::{Container, ContainerError, ContainerStatus, UnknownContainerStatus};
pub use geometry::{distance, path_length};
pub use planner::{PlanError, Planner, RouteQuery};
pub use route::{CollectionRoute, RouteStop};
pub use scorer::{ContainerScorer, sanitise_score};
pub use store::{ContainerStore, StoreError, TruckStore};
pub use trash_type::{TrashType, UnknownTrashType};
pub use truck::{Truck, TruckError};
pub use zone::ZoneId;
