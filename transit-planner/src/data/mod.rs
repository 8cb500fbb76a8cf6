//! Loading network and fare data from JSON files.
//!
//! A data directory holds three files:
//!
//! - `stations.json`: `[{"id": "WFR", "name": "Waterfront", "zone": 1}, ...]`
//! - `edges.json`: `[{"from": "WFR", "to": "BRD", "minutes": 2, "line": "Expo", "mode": "train"}, ...]`
//! - `fares.json`: `{"zone_fares": {"1": 2.5}, "bus_flat_fare": 2.0, "transfer_window_minutes": 60}`
//!
//! Every edge is validated against the stations before the network is
//! built, and fare keys and amounts are validated before the rules are.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::info;

use crate::domain::{InvalidAmount, Money, Station};
use crate::fare::{DEFAULT_WINDOW_MINUTES, FareRules, FareTableError, ZoneFareTable};
use crate::network::{Link, Network, NetworkError};

/// Station file name inside a data directory.
pub const STATIONS_FILE: &str = "stations.json";
/// Edge file name inside a data directory.
pub const EDGES_FILE: &str = "edges.json";
/// Fare file name inside a data directory.
pub const FARES_FILE: &str = "fares.json";

/// Errors that can occur while loading data.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// A file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file is not valid JSON for its record type
    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Stations and edges do not form a valid network
    #[error("invalid network: {0}")]
    Network(#[from] NetworkError),

    /// Fare configuration is malformed
    #[error("invalid fares: {0}")]
    InvalidFares(String),
}

impl From<FareTableError> for LoadError {
    fn from(e: FareTableError) -> Self {
        LoadError::InvalidFares(e.to_string())
    }
}

impl From<InvalidAmount> for LoadError {
    fn from(e: InvalidAmount) -> Self {
        LoadError::InvalidFares(e.to_string())
    }
}

/// On-disk fare configuration.
#[derive(Debug, Deserialize)]
struct FareFile {
    zone_fares: HashMap<String, f64>,
    bus_flat_fare: f64,
    #[serde(default)]
    transfer_window_minutes: Option<u32>,
}

/// A loaded network with its fare rules.
#[derive(Debug, Clone)]
pub struct TransitData {
    pub network: Network,
    pub rules: FareRules,
}

/// Load `stations.json`, `edges.json` and `fares.json` from a directory.
pub fn load_data_dir(dir: impl AsRef<Path>) -> Result<TransitData, LoadError> {
    let dir = dir.as_ref();

    let stations: Vec<Station> = read_json(&dir.join(STATIONS_FILE))?;
    let links: Vec<Link> = read_json(&dir.join(EDGES_FILE))?;
    let fares: FareFile = read_json(&dir.join(FARES_FILE))?;

    let station_count = stations.len();
    let link_count = links.len();

    let network = Network::new(stations, links)?;
    let rules = fare_rules(fares)?;

    info!(
        dir = %dir.display(),
        stations = station_count,
        links = link_count,
        window_minutes = rules.window_minutes,
        "Loaded transit data"
    );

    Ok(TransitData { network, rules })
}

/// Parse fare configuration from a JSON string.
pub fn parse_fare_rules(json: &str) -> Result<FareRules, LoadError> {
    let fares: FareFile = serde_json::from_str(json).map_err(|source| LoadError::Json {
        path: PathBuf::from(FARES_FILE),
        source,
    })?;
    fare_rules(fares)
}

fn fare_rules(fares: FareFile) -> Result<FareRules, LoadError> {
    let entries = fares
        .zone_fares
        .iter()
        .map(|(key, value)| {
            let zones: u32 = key
                .trim()
                .parse()
                .map_err(|_| LoadError::InvalidFares(format!("zone key {key:?} is not an integer")))?;
            Ok((zones, Money::from_decimal(*value)?))
        })
        .collect::<Result<Vec<_>, LoadError>>()?;

    let table = ZoneFareTable::new(entries)?;
    let bus_flat_fare = Money::from_decimal(fares.bus_flat_fare)?;
    let window = fares
        .transfer_window_minutes
        .unwrap_or(DEFAULT_WINDOW_MINUTES);

    Ok(FareRules::new(table, bus_flat_fare).with_window_minutes(window))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationId;
    use tempfile::tempdir;

    const STATIONS: &str = r#"[
        {"id": "WFR", "name": "Waterfront", "zone": 1},
        {"id": "CMB", "name": "Commercial-Broadway", "zone": 2}
    ]"#;

    const EDGES: &str = r#"[
        {"from": "WFR", "to": "CMB", "minutes": 12, "line": "Expo", "mode": "train"}
    ]"#;

    const FARES: &str = r#"{
        "zone_fares": {"1": 2.50, "2": 3.75, "3": 4.90},
        "bus_flat_fare": 2.00,
        "transfer_window_minutes": 90
    }"#;

    fn write_dir(stations: &str, edges: &str, fares: &str) -> tempfile::TempDir {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(STATIONS_FILE), stations).unwrap();
        std::fs::write(dir.path().join(EDGES_FILE), edges).unwrap();
        std::fs::write(dir.path().join(FARES_FILE), fares).unwrap();
        dir
    }

    #[test]
    fn load_valid_dir() {
        let dir = write_dir(STATIONS, EDGES, FARES);
        let data = load_data_dir(dir.path()).unwrap();

        assert_eq!(data.network.len(), 2);
        assert_eq!(data.network.connection_count(), 2);
        let wfr = StationId::parse("WFR").unwrap();
        assert_eq!(data.network.station(&wfr).unwrap().name, "Waterfront");

        assert_eq!(data.rules.window_minutes, 90);
        assert_eq!(data.rules.bus_flat_fare, Money::from_cents(200));
        assert_eq!(data.rules.zone_fares.fare_for(2), Money::from_cents(375));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let err = load_data_dir(dir.path()).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains(STATIONS_FILE));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let dir = write_dir("[{\"id\": ", EDGES, FARES);
        let err = load_data_dir(dir.path()).unwrap_err();
        assert!(matches!(err, LoadError::Json { .. }));
    }

    #[test]
    fn edge_to_unknown_station_rejected() {
        let edges = r#"[
            {"from": "WFR", "to": "XYZ", "minutes": 5, "line": "Expo", "mode": "train"}
        ]"#;
        let dir = write_dir(STATIONS, edges, FARES);
        let err = load_data_dir(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Network(NetworkError::UnknownStation(_))
        ));
        assert_eq!(err.to_string(), "invalid network: unknown station XYZ");
    }

    #[test]
    fn window_defaults_to_sixty() {
        let rules = parse_fare_rules(r#"{"zone_fares": {"1": 2.5}, "bus_flat_fare": 2.0}"#).unwrap();
        assert_eq!(rules.window_minutes, 60);
    }

    #[test]
    fn non_integer_zone_key_rejected() {
        let err = parse_fare_rules(r#"{"zone_fares": {"one": 2.5}, "bus_flat_fare": 2.0}"#)
            .unwrap_err();
        assert!(matches!(err, LoadError::InvalidFares(_)));
    }

    #[test]
    fn negative_fare_rejected() {
        let err = parse_fare_rules(r#"{"zone_fares": {"1": -2.5}, "bus_flat_fare": 2.0}"#)
            .unwrap_err();
        assert!(matches!(err, LoadError::InvalidFares(_)));

        let err = parse_fare_rules(r#"{"zone_fares": {"1": 2.5}, "bus_flat_fare": -1}"#)
            .unwrap_err();
        assert!(matches!(err, LoadError::InvalidFares(_)));
    }

    #[test]
    fn empty_fare_table_rejected() {
        let err = parse_fare_rules(r#"{"zone_fares": {}, "bus_flat_fare": 2.0}"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid fares: zone fare table must not be empty"
        );
    }

    #[test]
    fn bundled_sample_data_loads() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
        let data = load_data_dir(dir).unwrap();
        assert!(!data.network.is_empty());
        assert_eq!(data.rules.window_minutes, 60);
    }
}
