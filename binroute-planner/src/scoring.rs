//! Container scoring strategies.
//!
//! Two interchangeable [`ContainerScorer`] implementations are provided:
//! [`WeightedScorer`] blends fill level, proximity and an emergency bonus for
//! hazardous statuses; [`ProximityScorer`] is the simpler fallback for fleets
//! without sensor data, leaning mostly on distance.

use binroute_core::{Container, ContainerScorer, ContainerStatus, distance};
use geo::Coord;
use thiserror::Error;

/// Tolerance used when checking that weights sum to one.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Proximity share used by [`ProximityScorer`].
const PROXIMITY_DISTANCE_WEIGHT: f64 = 0.7;

/// Fill share used by [`ProximityScorer`].
const PROXIMITY_FILL_WEIGHT: f64 = 0.3;

/// Errors returned by [`ScoreWeights::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreWeightsError {
    /// A weight was negative, NaN or infinite.
    #[error("{name} weight {value} must be finite and non-negative")]
    InvalidWeight {
        /// Which weight was rejected.
        name: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// The weights did not add up to one.
    #[error("weights must sum to 1.0, found {sum}")]
    NotNormalised {
        /// Actual sum of the weights.
        sum: f64,
    },
}

/// Relative importance of fill, proximity and status in [`WeightedScorer`].
///
/// # Examples
/// ```
/// use binroute_planner::ScoreWeights;
///
/// # fn main() -> Result<(), binroute_planner::ScoreWeightsError> {
/// let weights = ScoreWeights::new(0.5, 0.5, 0.0)?;
/// assert_eq!(weights.distance(), 0.5);
/// assert!(ScoreWeights::new(0.5, 0.6, 0.0).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    fill: f64,
    distance: f64,
    status: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            fill: 0.6,
            distance: 0.3,
            status: 0.1,
        }
    }
}

impl ScoreWeights {
    /// Validate and construct a weight set.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreWeightsError::InvalidWeight`] for a negative or
    /// non-finite weight and [`ScoreWeightsError::NotNormalised`] when the
    /// weights do not sum to `1.0`.
    #[expect(
        clippy::float_arithmetic,
        reason = "normalisation check sums the weights"
    )]
    pub fn new(fill: f64, distance: f64, status: f64) -> Result<Self, ScoreWeightsError> {
        for (name, value) in [("fill", fill), ("distance", distance), ("status", status)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ScoreWeightsError::InvalidWeight { name, value });
            }
        }
        let sum = fill + distance + status;
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ScoreWeightsError::NotNormalised { sum });
        }
        Ok(Self {
            fill,
            distance,
            status,
        })
    }

    /// Weight applied to the fill percentage.
    #[must_use]
    pub const fn fill(&self) -> f64 {
        self.fill
    }

    /// Weight applied to the distance factor.
    #[must_use]
    pub const fn distance(&self) -> f64 {
        self.distance
    }

    /// Weight applied to the status bonus.
    #[must_use]
    pub const fn status(&self) -> f64 {
        self.status
    }
}

/// Emergency bonus for a container status.
///
/// Fire outranks everything so that, when burning containers are not
/// filtered out upstream, they are emptied first.
#[must_use]
pub const fn status_bonus(status: ContainerStatus) -> f64 {
    match status {
        ContainerStatus::Fire => 100.0,
        ContainerStatus::Active => 50.0,
        ContainerStatus::Damaged | ContainerStatus::Offline => 0.0,
    }
}

/// Proximity term `1 / (1 + distance)`, in `(0, 1]`.
///
/// Decreases monotonically with distance and never divides by zero.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "proximity is a reciprocal of distance"
)]
pub fn distance_factor(from: Coord<f64>, to: Coord<f64>) -> f64 {
    1.0 / (1.0 + distance(from, to))
}

/// Scores by `wFill * fill + wDistance * proximity + wStatus * bonus`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use binroute_core::{Container, ContainerScorer, TrashType, ZoneId};
/// use binroute_planner::{ScoreWeights, WeightedScorer};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let scorer = WeightedScorer::new(ScoreWeights::new(1.0, 0.0, 0.0)?);
/// let container = Container::new(
///     1,
///     ZoneId::from("north"),
///     TrashType::Mixed,
///     100.0,
///     75.0,
///     Coord { x: 3.0, y: 4.0 },
/// )?;
/// assert_eq!(scorer.score(&container, Coord { x: 0.0, y: 0.0 }), 75.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WeightedScorer {
    weights: ScoreWeights,
}

impl WeightedScorer {
    /// Construct a scorer with explicit weights.
    #[must_use]
    pub const fn new(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    /// Weights in use.
    #[must_use]
    pub const fn weights(&self) -> ScoreWeights {
        self.weights
    }
}

impl ContainerScorer for WeightedScorer {
    #[expect(
        clippy::float_arithmetic,
        reason = "score is a weighted sum of floating-point factors"
    )]
    fn score(&self, container: &Container, from: Coord<f64>) -> f64 {
        let weights = &self.weights;
        weights.fill * container.fill_percentage
            + weights.distance * distance_factor(from, container.location)
            + weights.status * status_bonus(container.status)
    }
}

/// Scores by `0.7 * proximity + 0.3 * fill / 100`.
///
/// Intended for fleets without fill sensors, where proximity is the more
/// trustworthy signal. Scores stay within `(0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProximityScorer;

impl ContainerScorer for ProximityScorer {
    #[expect(
        clippy::float_arithmetic,
        reason = "score is a weighted sum of floating-point factors"
    )]
    fn score(&self, container: &Container, from: Coord<f64>) -> f64 {
        PROXIMITY_DISTANCE_WEIGHT * distance_factor(from, container.location)
            + PROXIMITY_FILL_WEIGHT * (container.fill_percentage / 100.0)
    }
}
