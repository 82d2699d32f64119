//! Stop identifier type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid stop identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stop id: {reason}")]
pub struct InvalidStopId {
    reason: &'static str,
}

/// Identifier of a stop in the network (for example `bus_otogar`).
///
/// Identifiers are non-empty and contain no whitespace. The sentinels used
/// for itinerary endpoints are never stop identifiers, so `StopId` cannot
/// collide with them.
///
/// # Examples
///
/// ```
/// use transit_planner::domain::StopId;
///
/// let id = StopId::parse("tram_sekapark").unwrap();
/// assert_eq!(id.as_str(), "tram_sekapark");
///
/// assert!(StopId::parse("").is_err());
/// assert!(StopId::parse("two words").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StopId(String);

impl StopId {
    /// Parse a stop identifier.
    pub fn parse(s: &str) -> Result<Self, InvalidStopId> {
        if s.is_empty() {
            return Err(InvalidStopId {
                reason: "must not be empty",
            });
        }
        if s.chars().any(char::is_whitespace) {
            return Err(InvalidStopId {
                reason: "must not contain whitespace",
            });
        }
        Ok(StopId(s.to_string()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for StopId {
    type Error = InvalidStopId;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<StopId> for String {
    fn from(id: StopId) -> Self {
        id.0
    }
}

impl fmt::Debug for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopId({})", self.0)
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any non-empty identifier without whitespace parses back unchanged
        #[test]
        fn roundtrip(s in "[a-z_0-9-]{1,20}") {
            let id = StopId::parse(&s).unwrap();
            prop_assert_eq!(id.as_str(), s.as_str());
        }

        /// Embedded whitespace is always rejected
        #[test]
        fn whitespace_rejected(a in "[a-z]{1,5}", b in "[a-z]{1,5}") {
            let joined = format!("{a} {b}");
            prop_assert!(StopId::parse(&joined).is_err());
        }
    }
}
