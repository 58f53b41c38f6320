//! Waste containers and their reported condition.
//!
//! Containers are read-only planner input. Fill level and capacity together
//! determine the load a truck takes on when it empties the container.

use std::fmt;
use std::str::FromStr;

use geo::Coord;
use thiserror::Error;

use crate::{TrashType, ZoneId};

/// Operational state reported for a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ContainerStatus {
    /// Operating normally.
    #[default]
    Active,
    /// A fire was reported at the container.
    Fire,
    /// Physically damaged.
    Damaged,
    /// The sensor stopped reporting.
    Offline,
}

impl ContainerStatus {
    /// Every known status in declaration order.
    pub const ALL: [Self; 4] = [Self::Active, Self::Fire, Self::Damaged, Self::Offline];

    /// Return the status as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Fire => "fire",
            Self::Damaged => "damaged",
            Self::Offline => "offline",
        }
    }
}

impl fmt::Display for ContainerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when text does not name a known [`ContainerStatus`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown container status '{value}' (expected one of: active, fire, damaged, offline)")]
pub struct UnknownContainerStatus {
    /// Rejected input.
    pub value: String,
}

impl FromStr for ContainerStatus {
    type Err = UnknownContainerStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == normalised)
            .ok_or_else(|| UnknownContainerStatus {
                value: s.to_owned(),
            })
    }
}

/// A waste container placed in a zone.
///
/// Coordinates are planar; the planner measures straight-line distance
/// between them.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use binroute_core::{Container, ContainerStatus, TrashType, ZoneId};
///
/// # fn main() -> Result<(), binroute_core::ContainerError> {
/// let container = Container::new(
///     7,
///     ZoneId::from("zone-1"),
///     TrashType::Paper,
///     1100.0,
///     50.0,
///     Coord { x: 1.0, y: 2.0 },
/// )?;
/// assert_eq!(container.status, ContainerStatus::Active);
/// assert_eq!(container.load(), 550.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Container {
    /// Unique identifier.
    pub id: u64,
    /// Zone the container belongs to.
    pub zone: ZoneId,
    /// Category of waste it holds.
    pub trash_type: TrashType,
    /// Volume when full.
    pub capacity: f64,
    /// Reported fullness in the inclusive range `0.0..=100.0`.
    pub fill_percentage: f64,
    /// Whether a fill sensor is fitted.
    #[cfg_attr(feature = "serde", serde(default))]
    pub has_sensor: bool,
    /// Last sensed temperature in degrees Celsius.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub temperature: Option<f64>,
    /// Remaining sensor battery in the inclusive range `0.0..=100.0`.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub battery_percentage: Option<f64>,
    /// Operational status.
    #[cfg_attr(feature = "serde", serde(default))]
    pub status: ContainerStatus,
    /// Planar position.
    pub location: Coord<f64>,
}

/// Errors returned by [`Container::new`] and [`Container::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContainerError {
    /// Capacity was negative or not finite.
    #[error("container {id} capacity {capacity} must be finite and non-negative")]
    InvalidCapacity {
        /// Identifier of the offending container.
        id: u64,
        /// Rejected capacity.
        capacity: f64,
    },
    /// Fill percentage fell outside `0.0..=100.0`.
    #[error("container {id} fill percentage {fill} must be between 0 and 100")]
    FillOutOfRange {
        /// Identifier of the offending container.
        id: u64,
        /// Rejected fill percentage.
        fill: f64,
    },
    /// Battery percentage fell outside `0.0..=100.0`.
    #[error("container {id} battery percentage {battery} must be between 0 and 100")]
    BatteryOutOfRange {
        /// Identifier of the offending container.
        id: u64,
        /// Rejected battery percentage.
        battery: f64,
    },
    /// A coordinate was NaN or infinite.
    #[error("container {id} location must have finite coordinates")]
    NonFiniteLocation {
        /// Identifier of the offending container.
        id: u64,
    },
}

impl Container {
    /// Validate and construct an active container without a sensor.
    ///
    /// # Errors
    ///
    /// Returns a [`ContainerError`] when capacity, fill or location are
    /// out of range.
    pub fn new(
        id: u64,
        zone: ZoneId,
        trash_type: TrashType,
        capacity: f64,
        fill_percentage: f64,
        location: Coord<f64>,
    ) -> Result<Self, ContainerError> {
        let container = Self {
            id,
            zone,
            trash_type,
            capacity,
            fill_percentage,
            has_sensor: false,
            temperature: None,
            battery_percentage: None,
            status: ContainerStatus::Active,
            location,
        };
        container.validate()?;
        Ok(container)
    }

    /// Replace the container status.
    #[must_use]
    pub fn with_status(mut self, status: ContainerStatus) -> Self {
        self.status = status;
        self
    }

    /// Mark the container as sensor-equipped and attach its last reading.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::BatteryOutOfRange`] for a battery reading
    /// outside `0.0..=100.0`.
    pub fn with_sensor(
        mut self,
        temperature: Option<f64>,
        battery_percentage: Option<f64>,
    ) -> Result<Self, ContainerError> {
        self.has_sensor = true;
        self.temperature = temperature;
        self.battery_percentage = battery_percentage;
        self.validate()?;
        Ok(self)
    }

    /// Check the invariants enforced by [`Container::new`].
    ///
    /// Deserialised containers bypass the constructor; stores call this
    /// before handing them to a planner.
    ///
    /// # Errors
    ///
    /// Returns the first [`ContainerError`] found.
    pub fn validate(&self) -> Result<(), ContainerError> {
        let id = self.id;
        if !self.capacity.is_finite() || self.capacity < 0.0 {
            return Err(ContainerError::InvalidCapacity {
                id,
                capacity: self.capacity,
            });
        }
        if !(0.0..=100.0).contains(&self.fill_percentage) {
            return Err(ContainerError::FillOutOfRange {
                id,
                fill: self.fill_percentage,
            });
        }
        if let Some(battery) = self.battery_percentage
            && !(0.0..=100.0).contains(&battery)
        {
            return Err(ContainerError::BatteryOutOfRange { id, battery });
        }
        if !self.location.x.is_finite() || !self.location.y.is_finite() {
            return Err(ContainerError::NonFiniteLocation { id });
        }
        Ok(())
    }

    /// Load a truck takes on when emptying this container.
    ///
    /// Computed as `fill_percentage / 100 * capacity`.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "load is a fractional share of the container capacity"
    )]
    pub fn load(&self) -> f64 {
        self.fill_percentage / 100.0 * self.capacity
    }
}
