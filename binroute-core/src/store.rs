//! Read-only access to the fleet.
//!
//! Planners never persist or mutate trucks and containers; they read one
//! consistent snapshot per invocation through these traits. Blanket
//! implementations for references and [`Arc`] let a single backing store
//! serve as both truck and container source.

use std::sync::Arc;

use thiserror::Error;

use crate::{Container, Truck};

/// Error raised by a store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend could not be read.
    #[error("{store} store is unavailable: {source}")]
    Unavailable {
        /// Which store failed, e.g. `"truck"`.
        store: &'static str,
        /// Backend failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// The backend returned a record that failed validation.
    #[error("{store} store returned an invalid record: {message}")]
    InvalidRecord {
        /// Which store failed, e.g. `"container"`.
        store: &'static str,
        /// Validation failure description.
        message: String,
    },
}

/// Read access to trucks.
pub trait TruckStore {
    /// Return every truck in store order.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the backend cannot be read.
    fn trucks(&self) -> Result<Vec<Truck>, StoreError>;

    /// Look up a truck by identifier.
    ///
    /// The default implementation scans [`TruckStore::trucks`].
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the backend cannot be read.
    fn truck(&self, id: u64) -> Result<Option<Truck>, StoreError> {
        Ok(self.trucks()?.into_iter().find(|truck| truck.id == id))
    }
}

/// Read access to containers.
pub trait ContainerStore {
    /// Return every container in store order.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the backend cannot be read.
    fn containers(&self) -> Result<Vec<Container>, StoreError>;
}

impl<T: TruckStore + ?Sized> TruckStore for &T {
    fn trucks(&self) -> Result<Vec<Truck>, StoreError> {
        (**self).trucks()
    }

    fn truck(&self, id: u64) -> Result<Option<Truck>, StoreError> {
        (**self).truck(id)
    }
}

impl<T: TruckStore + ?Sized> TruckStore for Arc<T> {
    fn trucks(&self) -> Result<Vec<Truck>, StoreError> {
        (**self).trucks()
    }

    fn truck(&self, id: u64) -> Result<Option<Truck>, StoreError> {
        (**self).truck(id)
    }
}

impl<C: ContainerStore + ?Sized> ContainerStore for &C {
    fn containers(&self) -> Result<Vec<Container>, StoreError> {
        (**self).containers()
    }
}

impl<C: ContainerStore + ?Sized> ContainerStore for Arc<C> {
    fn containers(&self) -> Result<Vec<Container>, StoreError> {
        (**self).containers()
    }
}
