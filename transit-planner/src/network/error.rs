//! Network error types.
//!
//! Construction errors are configuration problems caught at load time.
//! `NotAdjacent` is an inconsistency: a path was analysed against a network
//! that did not produce it.

use crate::domain::StationId;

/// Errors raised while building or querying a [`Network`](super::Network).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// A connection or path references a station that does not exist
    #[error("unknown station {0}")]
    UnknownStation(StationId),

    /// The same station id was supplied twice
    #[error("duplicate station {0}")]
    DuplicateStation(StationId),

    /// A connection has a travel time of zero minutes
    #[error("connection {from} -> {to} must take at least one minute")]
    ZeroMinutes { from: StationId, to: StationId },

    /// Two consecutive path stations have no direct connection
    #[error("no connection from {from} to {to} (path is inconsistent with network)")]
    NotAdjacent { from: StationId, to: StationId },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> StationId {
        StationId::parse(s).unwrap()
    }

    #[test]
    fn error_display() {
        let err = NetworkError::UnknownStation(id("XYZ"));
        assert_eq!(err.to_string(), "unknown station XYZ");

        let err = NetworkError::DuplicateStation(id("WFR"));
        assert_eq!(err.to_string(), "duplicate station WFR");

        let err = NetworkError::ZeroMinutes {
            from: id("WFR"),
            to: id("BRD"),
        };
        assert_eq!(
            err.to_string(),
            "connection WFR -> BRD must take at least one minute"
        );

        let err = NetworkError::NotAdjacent {
            from: id("WFR"),
            to: id("LHG"),
        };
        assert_eq!(
            err.to_string(),
            "no connection from WFR to LHG (path is inconsistent with network)"
        );
    }
}
