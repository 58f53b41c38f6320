//! JSON fleet snapshots.

use std::collections::HashSet;
use std::io::{self, BufReader};

use binroute_core::{
    Container, ContainerError, ContainerStore, StoreError, Truck, TruckError, TruckStore,
};
use camino::{Utf8Path, Utf8PathBuf};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::fs::open_utf8_file;

/// Trucks and containers captured at one point in time.
///
/// Snapshots deserialise from JSON of the form
/// `{ "trucks": [...], "containers": [...] }`; both lists default to empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FleetSnapshot {
    /// Trucks available for routing.
    #[serde(default)]
    pub trucks: Vec<Truck>,
    /// Containers reporting fill levels.
    #[serde(default)]
    pub containers: Vec<Container>,
}

impl FleetSnapshot {
    /// Check every record and identifier uniqueness.
    ///
    /// # Errors
    ///
    /// Returns the first invalid or duplicated record found.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        let mut truck_ids = HashSet::with_capacity(self.trucks.len());
        for truck in &self.trucks {
            truck
                .validate()
                .map_err(|source| SnapshotError::InvalidTruck {
                    id: truck.id,
                    source,
                })?;
            if !truck_ids.insert(truck.id) {
                return Err(SnapshotError::DuplicateTruck { id: truck.id });
            }
        }

        let mut container_ids = HashSet::with_capacity(self.containers.len());
        for container in &self.containers {
            container
                .validate()
                .map_err(|source| SnapshotError::InvalidContainer {
                    id: container.id,
                    source,
                })?;
            if !container_ids.insert(container.id) {
                return Err(SnapshotError::DuplicateContainer { id: container.id });
            }
        }
        Ok(())
    }
}

/// Errors raised while loading a fleet snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The snapshot file could not be opened.
    #[error("failed to open fleet snapshot at {path}")]
    Open {
        /// Path that failed to open.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The snapshot was not valid JSON or did not match the schema.
    #[error("failed to parse fleet snapshot at {path}")]
    Parse {
        /// Path of the malformed snapshot.
        path: Utf8PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// A truck record failed validation.
    #[error("truck {id} is invalid")]
    InvalidTruck {
        /// Identifier of the offending truck.
        id: u64,
        /// Validation failure.
        #[source]
        source: TruckError,
    },
    /// A container record failed validation.
    #[error("container {id} is invalid")]
    InvalidContainer {
        /// Identifier of the offending container.
        id: u64,
        /// Validation failure.
        #[source]
        source: ContainerError,
    },
    /// Two trucks share an identifier.
    #[error("truck id {id} appears more than once")]
    DuplicateTruck {
        /// Repeated identifier.
        id: u64,
    },
    /// Two containers share an identifier.
    #[error("container id {id} appears more than once")]
    DuplicateContainer {
        /// Repeated identifier.
        id: u64,
    },
}

/// Read-only store over a validated [`FleetSnapshot`].
///
/// # Examples
/// ```no_run
/// use camino::Utf8Path;
/// use binroute_core::TruckStore;
/// use binroute_data::SnapshotStore;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let store = SnapshotStore::open(Utf8Path::new("fleet.json"))?;
/// println!("{} trucks", store.trucks()?.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct SnapshotStore {
    snapshot: FleetSnapshot,
}

impl SnapshotStore {
    /// Load and validate a snapshot from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Open`] or [`SnapshotError::Parse`] when the
    /// file cannot be read, or a validation error for bad records.
    pub fn open(path: &Utf8Path) -> Result<Self, SnapshotError> {
        let file = open_utf8_file(path).map_err(|source| SnapshotError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let snapshot: FleetSnapshot =
            serde_json::from_reader(BufReader::new(file)).map_err(|source| {
                SnapshotError::Parse {
                    path: path.to_path_buf(),
                    source,
                }
            })?;
        let store = Self::from_snapshot(snapshot)?;
        info!(
            "loaded fleet snapshot from {path}: {} trucks, {} containers",
            store.snapshot.trucks.len(),
            store.snapshot.containers.len()
        );
        Ok(store)
    }

    /// Wrap an in-memory snapshot after validating it.
    ///
    /// # Errors
    ///
    /// Returns the first invalid or duplicated record.
    pub fn from_snapshot(snapshot: FleetSnapshot) -> Result<Self, SnapshotError> {
        snapshot.validate()?;
        Ok(Self { snapshot })
    }

    /// The underlying snapshot.
    #[must_use]
    pub const fn snapshot(&self) -> &FleetSnapshot {
        &self.snapshot
    }
}

impl TruckStore for SnapshotStore {
    fn trucks(&self) -> Result<Vec<Truck>, StoreError> {
        Ok(self.snapshot.trucks.clone())
    }

    fn truck(&self, id: u64) -> Result<Option<Truck>, StoreError> {
        let found = self.snapshot.trucks.iter().find(|truck| truck.id == id);
        debug!("truck lookup {id}: {}", if found.is_some() { "hit" } else { "miss" });
        Ok(found.cloned())
    }
}

impl ContainerStore for SnapshotStore {
    fn containers(&self) -> Result<Vec<Container>, StoreError> {
        Ok(self.snapshot.containers.clone())
    }
}
