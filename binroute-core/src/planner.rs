//! Planner boundary: route queries, errors and the `Planner` trait.

use thiserror::Error;

use crate::{CollectionRoute, StoreError, TrashType, UnknownTrashType, ZoneId};

/// Which truck to plan for.
///
/// # Examples
/// ```rust
/// use binroute_core::{RouteQuery, TrashType};
///
/// # fn main() -> Result<(), binroute_core::PlanError> {
/// let query = RouteQuery::for_truck_named(4, Some("paper"))?;
/// assert_eq!(query, RouteQuery::Truck { truck_id: 4, trash_type: Some(TrashType::Paper) });
/// assert!(RouteQuery::for_truck_named(4, Some("metal")).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "by", rename_all = "snake_case")
)]
pub enum RouteQuery {
    /// Resolve the truck by identifier, optionally overriding its trash type.
    Truck {
        /// Identifier of the truck.
        truck_id: u64,
        /// Trash type to collect instead of the truck's own.
        #[cfg_attr(feature = "serde", serde(default))]
        trash_type: Option<TrashType>,
    },
    /// Resolve the truck serving `zone` for `trash_type`.
    Zone {
        /// Zone to plan in.
        zone: ZoneId,
        /// Trash type to collect.
        trash_type: TrashType,
    },
}

impl RouteQuery {
    /// Build a truck query from an unparsed trash type override.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::InvalidTrashType`] when `trash_type` does not
    /// name a known type.
    pub fn for_truck_named(truck_id: u64, trash_type: Option<&str>) -> Result<Self, PlanError> {
        let trash_type = trash_type.map(str::parse::<TrashType>).transpose()?;
        Ok(Self::Truck {
            truck_id,
            trash_type,
        })
    }

    /// Build a zone query from an unparsed trash type.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::InvalidTrashType`] when `trash_type` does not
    /// name a known type.
    pub fn for_zone_named(zone: impl Into<ZoneId>, trash_type: &str) -> Result<Self, PlanError> {
        Ok(Self::Zone {
            zone: zone.into(),
            trash_type: trash_type.parse()?,
        })
    }
}

/// Errors returned by [`Planner::plan`].
///
/// A missing truck or an empty candidate set are not errors; they produce an
/// empty [`CollectionRoute`].
#[derive(Debug, Error)]
pub enum PlanError {
    /// The requested trash type is not part of the known enumeration.
    #[error(transparent)]
    InvalidTrashType(#[from] UnknownTrashType),
    /// Reading trucks or containers failed.
    #[error("failed to read fleet data: {0}")]
    Store(#[from] StoreError),
}

/// Plan a collection route for one truck.
///
/// Planners must be `Send + Sync` and keep no mutable state between calls so
/// concurrent requests cannot interfere with one another.
pub trait Planner: Send + Sync {
    /// Plan a route for the truck selected by `query`.
    ///
    /// # Errors
    ///
    /// Returns a [`PlanError`] when the fleet data cannot be read.
    fn plan(&self, query: &RouteQuery) -> Result<CollectionRoute, PlanError>;
}
