//! Candidate eligibility rules.

use binroute_core::{Container, ContainerStatus, TrashType, ZoneId};
use thiserror::Error;

/// Fill percentage below which containers are not worth a visit by default.
pub const DEFAULT_MIN_FILL: f64 = 40.0;

/// Error returned when a minimum fill is not a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("minimum fill {value} must be a finite percentage between 0 and 100")]
pub struct InvalidMinFill {
    /// Rejected threshold.
    pub value: f64,
}

/// Decides which containers a truck may service.
///
/// A container is a candidate when it is in the truck's zone, holds the
/// effective trash type, has a status outside the exclusion set and, if a
/// threshold is configured, is at least that full.
///
/// The default excludes [`ContainerStatus::Fire`] and requires a fill of
/// [`DEFAULT_MIN_FILL`]: low-fill containers are dropped upfront rather than
/// merely scored low. Use [`CandidateFilter::without_min_fill`] to collect
/// opportunistically regardless of fill.
///
/// # Examples
/// ```
/// use binroute_core::ContainerStatus;
/// use binroute_planner::CandidateFilter;
///
/// # fn main() -> Result<(), binroute_planner::InvalidMinFill> {
/// let filter = CandidateFilter::default()
///     .excluding([ContainerStatus::Fire, ContainerStatus::Offline])
///     .with_min_fill(25.0)?;
/// assert_eq!(filter.min_fill(), Some(25.0));
/// assert!(filter.excludes(ContainerStatus::Offline));
/// assert!(CandidateFilter::default().with_min_fill(f64::NAN).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateFilter {
    excluded_statuses: Vec<ContainerStatus>,
    min_fill: Option<f64>,
}

impl Default for CandidateFilter {
    fn default() -> Self {
        Self {
            excluded_statuses: vec![ContainerStatus::Fire],
            min_fill: Some(DEFAULT_MIN_FILL),
        }
    }
}

impl CandidateFilter {
    /// Filter that only matches zone and trash type.
    #[must_use]
    pub const fn permissive() -> Self {
        Self {
            excluded_statuses: Vec::new(),
            min_fill: None,
        }
    }

    /// Replace the set of excluded statuses.
    #[must_use]
    pub fn excluding<I>(mut self, statuses: I) -> Self
    where
        I: IntoIterator<Item = ContainerStatus>,
    {
        self.excluded_statuses.clear();
        for status in statuses {
            if !self.excluded_statuses.contains(&status) {
                self.excluded_statuses.push(status);
            }
        }
        self
    }

    /// Require containers to be at least `min_fill` percent full.
    ///
    /// # Errors
    /// Returns [`InvalidMinFill`] when the threshold is NaN, infinite or
    /// outside `0..=100`.
    pub fn with_min_fill(mut self, min_fill: f64) -> Result<Self, InvalidMinFill> {
        if !(0.0..=100.0).contains(&min_fill) {
            return Err(InvalidMinFill { value: min_fill });
        }
        self.min_fill = Some(min_fill);
        Ok(self)
    }

    /// Drop the fill threshold so that any fill level is a candidate.
    #[must_use]
    pub const fn without_min_fill(mut self) -> Self {
        self.min_fill = None;
        self
    }

    /// Statuses that disqualify a container.
    #[must_use]
    pub fn excluded_statuses(&self) -> &[ContainerStatus] {
        &self.excluded_statuses
    }

    /// Whether `status` disqualifies a container.
    #[must_use]
    pub fn excludes(&self, status: ContainerStatus) -> bool {
        self.excluded_statuses.contains(&status)
    }

    /// Minimum fill percentage, if any.
    #[must_use]
    pub const fn min_fill(&self) -> Option<f64> {
        self.min_fill
    }

    /// Whether `container` is eligible for a truck in `zone` collecting
    /// `trash_type`.
    #[must_use]
    pub fn admits(&self, container: &Container, zone: &ZoneId, trash_type: TrashType) -> bool {
        container.zone == *zone
            && container.trash_type == trash_type
            && !self.excludes(container.status)
            && self
                .min_fill
                .is_none_or(|threshold| container.fill_percentage >= threshold)
    }

    /// Keep the eligible containers, preserving input order.
    #[must_use]
    pub fn select<I>(&self, containers: I, zone: &ZoneId, trash_type: TrashType) -> Vec<Container>
    where
        I: IntoIterator<Item = Container>,
    {
        containers
            .into_iter()
            .filter(|container| self.admits(container, zone, trash_type))
            .collect()
    }
}
