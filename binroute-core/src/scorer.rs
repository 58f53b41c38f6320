//! Score containers for collection priority.
//!
//! The `ContainerScorer` trait assigns a priority to a
//! [`Container`](crate::Container) as seen from the truck's current
//! position. Route builders call it once per remaining candidate on every
//! selection round, so implementations should be cheap and pure.

use geo::Coord;

use crate::Container;

/// Calculate a collection priority for a container.
///
/// Higher scores are selected first. Implementations must be thread-safe
/// (`Send` + `Sync`) so one scorer can serve concurrent planning runs, and
/// should satisfy three monotonicity rules:
/// - moving the truck closer never lowers the score;
/// - a fuller container never scores lower than an otherwise identical,
///   emptier one;
/// - the same inputs always produce the same score.
///
/// Scores are unbounded; use [`sanitise_score`] to discard non-finite values.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use binroute_core::{Container, ContainerScorer, TrashType, ZoneId};
///
/// struct FillOnly;
///
/// impl ContainerScorer for FillOnly {
///     fn score(&self, container: &Container, _from: Coord<f64>) -> f64 {
///         container.fill_percentage
///     }
/// }
///
/// # fn main() -> Result<(), binroute_core::ContainerError> {
/// let container = Container::new(
///     1,
///     ZoneId::from("north"),
///     TrashType::Mixed,
///     100.0,
///     80.0,
///     Coord { x: 0.0, y: 0.0 },
/// )?;
/// assert_eq!(FillOnly.score(&container, Coord { x: 5.0, y: 5.0 }), 80.0);
/// # Ok(())
/// # }
/// ```
pub trait ContainerScorer: Send + Sync {
    /// Return the priority of `container` for a truck standing at `from`.
    fn score(&self, container: &Container, from: Coord<f64>) -> f64;
}

impl<S: ContainerScorer + ?Sized> ContainerScorer for &S {
    fn score(&self, container: &Container, from: Coord<f64>) -> f64 {
        (**self).score(container, from)
    }
}

impl<S: ContainerScorer + ?Sized> ContainerScorer for Box<S> {
    fn score(&self, container: &Container, from: Coord<f64>) -> f64 {
        (**self).score(container, from)
    }
}

/// Replace NaN and infinite scores with `0.0`.
///
/// # Examples
/// ```
/// use binroute_core::sanitise_score;
///
/// assert_eq!(sanitise_score(f64::NAN), 0.0);
/// assert_eq!(sanitise_score(42.5), 42.5);
/// ```
#[must_use]
pub const fn sanitise_score(score: f64) -> f64 {
    if score.is_finite() { score } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(f64::NAN, 0.0)]
    #[case(f64::INFINITY, 0.0)]
    #[case(f64::NEG_INFINITY, 0.0)]
    #[case(-3.5, -3.5)]
    #[case(57.0, 57.0)]
    fn sanitise_discards_non_finite(#[case] raw: f64, #[case] expected: f64) {
        assert_eq!(sanitise_score(raw), expected);
    }
}
