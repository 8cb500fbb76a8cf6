//! Travel mode classification.

use std::fmt;

use serde::Serialize;

/// How a trip (or a single connection) is priced.
///
/// Connection mode labels are free-form strings from the data files. A label
/// is train-like when it equals `train` ignoring ASCII case; every other label
/// (`bus`, `SeaBus`, ...) is bus-like and priced at the flat fare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TravelMode {
    /// Zone-priced travel
    Train,
    /// Flat-fare travel
    Bus,
}

impl TravelMode {
    /// Classify a connection's mode label.
    pub fn classify(label: &str) -> Self {
        if label.trim().eq_ignore_ascii_case("train") {
            TravelMode::Train
        } else {
            TravelMode::Bus
        }
    }

    /// Returns true for zone-priced travel.
    pub fn is_train(&self) -> bool {
        matches!(self, TravelMode::Train)
    }

    /// Returns the display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelMode::Train => "TRAIN",
            TravelMode::Bus => "BUS",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_is_case_insensitive() {
        assert_eq!(TravelMode::classify("train"), TravelMode::Train);
        assert_eq!(TravelMode::classify("TRAIN"), TravelMode::Train);
        assert_eq!(TravelMode::classify("Train"), TravelMode::Train);
        assert_eq!(TravelMode::classify(" train "), TravelMode::Train);
    }

    #[test]
    fn everything_else_is_bus() {
        assert_eq!(TravelMode::classify("bus"), TravelMode::Bus);
        assert_eq!(TravelMode::classify("SeaBus"), TravelMode::Bus);
        assert_eq!(TravelMode::classify(""), TravelMode::Bus);
        assert_eq!(TravelMode::classify("trains"), TravelMode::Bus);
    }

    #[test]
    fn display() {
        assert_eq!(TravelMode::Train.to_string(), "TRAIN");
        assert_eq!(TravelMode::Bus.to_string(), "BUS");
        assert_eq!(serde_json::to_string(&TravelMode::Bus).unwrap(), "\"BUS\"");
    }
}
