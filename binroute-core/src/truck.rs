//! Collection vehicles.

use geo::Coord;
use thiserror::Error;

use crate::{TrashType, ZoneId};

/// A truck assigned to one zone and one trash type.
///
/// The location is the start of the run and doubles as the depot when a
/// planner sends the truck back to unload.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use binroute_core::{TrashType, Truck, ZoneId};
///
/// # fn main() -> Result<(), binroute_core::TruckError> {
/// let truck = Truck::new(1, ZoneId::from("centre"), TrashType::Mixed, 12_000.0, Coord { x: 0.0, y: 0.0 })?;
/// assert_eq!(truck.capacity, 12_000.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Truck {
    /// Unique identifier.
    pub id: u64,
    /// Zone the truck operates in.
    pub zone: ZoneId,
    /// Waste category the truck collects.
    pub trash_type: TrashType,
    /// Maximum load per trip, in the same unit as container capacity.
    pub capacity: f64,
    /// Current (starting) position.
    pub location: Coord<f64>,
}

/// Errors returned by [`Truck::new`] and [`Truck::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TruckError {
    /// Capacity was negative or not finite.
    #[error("truck {id} capacity {capacity} must be finite and non-negative")]
    InvalidCapacity {
        /// Identifier of the offending truck.
        id: u64,
        /// Rejected capacity.
        capacity: f64,
    },
    /// A coordinate was NaN or infinite.
    #[error("truck {id} location must have finite coordinates")]
    NonFiniteLocation {
        /// Identifier of the offending truck.
        id: u64,
    },
}

impl Truck {
    /// Validate and construct a [`Truck`].
    ///
    /// # Errors
    ///
    /// Returns a [`TruckError`] for a negative or non-finite capacity or a
    /// non-finite location.
    pub fn new(
        id: u64,
        zone: ZoneId,
        trash_type: TrashType,
        capacity: f64,
        location: Coord<f64>,
    ) -> Result<Self, TruckError> {
        let truck = Self {
            id,
            zone,
            trash_type,
            capacity,
            location,
        };
        truck.validate()?;
        Ok(truck)
    }

    /// Check the invariants enforced by [`Truck::new`].
    ///
    /// # Errors
    ///
    /// Returns the first [`TruckError`] found.
    pub fn validate(&self) -> Result<(), TruckError> {
        if !self.capacity.is_finite() || self.capacity < 0.0 {
            return Err(TruckError::InvalidCapacity {
                id: self.id,
                capacity: self.capacity,
            });
        }
        if !self.location.x.is_finite() || !self.location.y.is_finite() {
            return Err(TruckError::NonFiniteLocation { id: self.id });
        }
        Ok(())
    }
}
