//! Waste categories serviced by trucks and held by containers.
//!
//! A truck only collects containers of the category it is configured for, so
//! the enum is the primary matching key alongside the zone.
//!
//! # Examples
//! ```
//! use binroute_core::TrashType;
//!
//! assert_eq!(TrashType::Plastic.as_str(), "plastic");
//! assert_eq!("Glass".parse::<TrashType>(), Ok(TrashType::Glass));
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Category of waste a container holds or a truck collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum TrashType {
    /// Unsorted household waste.
    #[default]
    Mixed,
    /// Plastic packaging.
    Plastic,
    /// Paper and cardboard.
    Paper,
    /// Glass bottles and jars.
    Glass,
}

impl TrashType {
    /// Every known trash type in declaration order.
    pub const ALL: [Self; 4] = [Self::Mixed, Self::Plastic, Self::Paper, Self::Glass];

    /// Return the trash type as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mixed => "mixed",
            Self::Plastic => "plastic",
            Self::Paper => "paper",
            Self::Glass => "glass",
        }
    }
}

impl fmt::Display for TrashType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when text does not name a known [`TrashType`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown trash type '{value}' (expected one of: mixed, plastic, paper, glass)")]
pub struct UnknownTrashType {
    /// Rejected input.
    pub value: String,
}

impl FromStr for TrashType {
    type Err = UnknownTrashType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalised)
            .ok_or_else(|| UnknownTrashType {
                value: s.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("mixed", TrashType::Mixed)]
    #[case("PLASTIC", TrashType::Plastic)]
    #[case(" paper ", TrashType::Paper)]
    #[case("Glass", TrashType::Glass)]
    fn parses_case_insensitively(#[case] raw: &str, #[case] expected: TrashType) {
        assert_eq!(raw.parse::<TrashType>(), Ok(expected));
    }

    #[rstest]
    fn rejects_unknown_values() {
        let err = "metal".parse::<TrashType>().unwrap_err();
        assert_eq!(err.value, "metal");
        assert!(err.to_string().contains("unknown trash type"));
    }

    #[rstest]
    fn display_matches_as_str() {
        for kind in TrashType::ALL {
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }
}
