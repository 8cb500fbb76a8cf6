//! Station identifiers and records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A fare zone number. Zones are totally ordered; gaps are allowed.
pub type Zone = i32;

/// Error returned when parsing an invalid station identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// A station identifier, such as `WFR` or `CMB`.
///
/// Identifiers are non-empty and contain no whitespace. Comparison is exact;
/// use [`StationId::parse_normalized`] for user input that may be lowercase.
///
/// # Examples
///
/// ```
/// use transit_planner::domain::StationId;
///
/// let wfr = StationId::parse("WFR").unwrap();
/// assert_eq!(wfr.as_str(), "WFR");
///
/// assert_eq!(StationId::parse_normalized(" wfr ").unwrap(), wfr);
///
/// assert!(StationId::parse("").is_err());
/// assert!(StationId::parse("W FR").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StationId(String);

impl StationId {
    /// Parse an identifier exactly as given.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        if s.is_empty() {
            return Err(InvalidStationId {
                reason: "must not be empty",
            });
        }

        if s.chars().any(char::is_whitespace) {
            return Err(InvalidStationId {
                reason: "must not contain whitespace",
            });
        }

        Ok(Self(s.to_string()))
    }

    /// Parse user input: surrounding whitespace is trimmed and letters are
    /// upper-cased before validation.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidStationId> {
        Self::parse(&s.trim().to_uppercase())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for StationId {
    type Error = InvalidStationId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<StationId> for String {
    fn from(id: StationId) -> Self {
        id.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A station in the network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    /// Unique identifier
    pub id: StationId,
    /// Display name
    pub name: String,
    /// Fare zone
    pub zone: Zone,
}

impl Station {
    /// Creates a new station record.
    pub fn new(id: StationId, name: impl Into<String>, zone: Zone) -> Self {
        Self {
            id,
            name: name.into(),
            zone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_ids() {
        assert!(StationId::parse("WFR").is_ok());
        assert!(StationId::parse("cmb").is_ok());
        assert!(StationId::parse("LHG-2").is_ok());
    }

    #[test]
    fn parse_is_case_sensitive() {
        let upper = StationId::parse("WFR").unwrap();
        let lower = StationId::parse("wfr").unwrap();
        assert_ne!(upper, lower);
    }

    #[test]
    fn reject_empty_and_whitespace() {
        assert!(StationId::parse("").is_err());
        assert!(StationId::parse(" ").is_err());
        assert!(StationId::parse("W FR").is_err());
        assert!(StationId::parse("WFR\n").is_err());
    }

    #[test]
    fn normalized_trims_and_uppercases() {
        let id = StationId::parse_normalized("  lhg\n").unwrap();
        assert_eq!(id.as_str(), "LHG");
        assert!(StationId::parse_normalized("   ").is_err());
    }

    #[test]
    fn error_display() {
        let err = StationId::parse("").unwrap_err();
        assert_eq!(err.to_string(), "invalid station id: must not be empty");
    }

    #[test]
    fn display_and_debug() {
        let id = StationId::parse("CMB").unwrap();
        assert_eq!(format!("{}", id), "CMB");
        assert_eq!(format!("{:?}", id), "StationId(CMB)");
    }

    #[test]
    fn serde_roundtrip_rejects_invalid() {
        let id: StationId = serde_json::from_str("\"WFR\"").unwrap();
        assert_eq!(id.as_str(), "WFR");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"WFR\"");

        assert!(serde_json::from_str::<StationId>("\"\"").is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any non-whitespace token parses and round-trips through as_str
        #[test]
        fn roundtrip(s in "[A-Za-z0-9_-]{1,12}") {
            let id = StationId::parse(&s).unwrap();
            prop_assert_eq!(id.as_str(), s.as_str());
        }

        /// Normalization is idempotent
        #[test]
        fn normalized_idempotent(s in "[a-zA-Z]{1,8}") {
            let once = StationId::parse_normalized(&s).unwrap();
            let twice = StationId::parse_normalized(once.as_str()).unwrap();
            prop_assert_eq!(once, twice);
        }
    }
}
