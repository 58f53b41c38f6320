//! Test-only, in-memory fleet store and fixtures used by unit, property and
//! behaviour tests.

use geo::Coord;

use crate::{
    Container, ContainerStatus, ContainerStore, StoreError, TrashType, Truck, TruckStore, ZoneId,
};

/// In-memory `TruckStore` and `ContainerStore` implementation used in tests.
///
/// Records are returned in insertion order.
#[derive(Default, Debug, Clone)]
pub struct MemoryFleetStore {
    trucks: Vec<Truck>,
    containers: Vec<Container>,
}

impl MemoryFleetStore {
    /// Append trucks to the store.
    #[must_use]
    pub fn with_trucks<I>(mut self, trucks: I) -> Self
    where
        I: IntoIterator<Item = Truck>,
    {
        self.trucks.extend(trucks);
        self
    }

    /// Append containers to the store.
    #[must_use]
    pub fn with_containers<I>(mut self, containers: I) -> Self
    where
        I: IntoIterator<Item = Container>,
    {
        self.containers.extend(containers);
        self
    }
}

impl TruckStore for MemoryFleetStore {
    fn trucks(&self) -> Result<Vec<Truck>, StoreError> {
        Ok(self.trucks.clone())
    }
}

impl ContainerStore for MemoryFleetStore {
    fn containers(&self) -> Result<Vec<Container>, StoreError> {
        Ok(self.containers.clone())
    }
}

/// Store whose every read fails.
#[derive(Default, Debug, Copy, Clone)]
pub struct UnavailableStore;

impl UnavailableStore {
    fn failure(store: &'static str) -> StoreError {
        StoreError::Unavailable {
            store,
            source: "backend offline".into(),
        }
    }
}

impl TruckStore for UnavailableStore {
    fn trucks(&self) -> Result<Vec<Truck>, StoreError> {
        Err(Self::failure("truck"))
    }
}

impl ContainerStore for UnavailableStore {
    fn containers(&self) -> Result<Vec<Container>, StoreError> {
        Err(Self::failure("container"))
    }
}

/// Build a truck without validation.
#[must_use]
pub fn truck(id: u64, zone: &str, trash_type: TrashType, capacity: f64, x: f64, y: f64) -> Truck {
    Truck {
        id,
        zone: ZoneId::from(zone),
        trash_type,
        capacity,
        location: Coord { x, y },
    }
}

/// Build an active, sensorless container without validation.
#[must_use]
pub fn container(
    id: u64,
    zone: &str,
    trash_type: TrashType,
    capacity: f64,
    fill_percentage: f64,
    x: f64,
    y: f64,
) -> Container {
    Container {
        id,
        zone: ZoneId::from(zone),
        trash_type,
        capacity,
        fill_percentage,
        has_sensor: false,
        temperature: None,
        battery_percentage: None,
        status: ContainerStatus::Active,
        location: Coord { x, y },
    }
}
