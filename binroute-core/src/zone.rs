//! Identifiers for geographic service areas.

use std::fmt;

/// Named service area shared by trucks and containers.
///
/// Zones are compared by exact string equality; no normalisation is applied.
///
/// # Examples
/// ```
/// use binroute_core::ZoneId;
///
/// let zone = ZoneId::from("zone-2");
/// assert_eq!(zone.as_str(), "zone-2");
/// assert_eq!(zone.to_string(), "zone-2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ZoneId(String);

impl ZoneId {
    /// Wrap a zone name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Borrow the zone name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ZoneId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ZoneId {
    fn from(name: String) -> Self {
        Self(name)
    }
}
