//! The transit network graph.
//!
//! Stations are joined by connections that are always stored in both
//! directions with identical travel time, line and mode. The network is
//! immutable once built and is shared read-only between route computations.

mod error;

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::Deserialize;
use tracing::debug;

use crate::domain::{Station, StationId, TravelMode};

pub use error::NetworkError;

/// A directed arc from one station to a neighbour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    /// Destination station
    pub to: StationId,
    /// Travel time in minutes (always positive)
    pub minutes: u32,
    /// Line label, e.g. "Expo"
    pub line: String,
    /// Mode label as given in the data, e.g. "train" or "bus"
    pub mode: String,
}

impl Connection {
    /// Returns the pricing classification of this connection's mode label.
    pub fn travel_mode(&self) -> TravelMode {
        TravelMode::classify(&self.mode)
    }
}

/// An undirected link between two stations, as supplied by the data loader.
///
/// Each link becomes two [`Connection`]s, one in each direction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Link {
    pub from: StationId,
    pub to: StationId,
    pub minutes: u32,
    pub line: String,
    pub mode: String,
}

impl Link {
    /// Creates a new link.
    pub fn new(
        from: StationId,
        to: StationId,
        minutes: u32,
        line: impl Into<String>,
        mode: impl Into<String>,
    ) -> Self {
        Self {
            from,
            to,
            minutes,
            line: line.into(),
            mode: mode.into(),
        }
    }
}

/// Stations and their outgoing connections.
#[derive(Debug, Clone, Default)]
pub struct Network {
    stations: BTreeMap<StationId, Station>,
    adjacency: HashMap<StationId, Vec<Connection>>,
}

impl Network {
    /// Build a network, validating every link.
    ///
    /// Fails if a station id appears twice, if a link references an unknown
    /// station, or if a link takes zero minutes. Nothing is silently dropped.
    pub fn new(
        stations: impl IntoIterator<Item = Station>,
        links: impl IntoIterator<Item = Link>,
    ) -> Result<Self, NetworkError> {
        let mut network = Network::default();

        for station in stations {
            if network.stations.contains_key(&station.id) {
                return Err(NetworkError::DuplicateStation(station.id));
            }
            network.adjacency.insert(station.id.clone(), Vec::new());
            network.stations.insert(station.id.clone(), station);
        }

        for link in links {
            network.add_link(link)?;
        }

        debug!(
            stations = network.stations.len(),
            connections = network.connection_count(),
            "Network built"
        );

        Ok(network)
    }

    fn add_link(&mut self, link: Link) -> Result<(), NetworkError> {
        for endpoint in [&link.from, &link.to] {
            if !self.stations.contains_key(endpoint) {
                return Err(NetworkError::UnknownStation(endpoint.clone()));
            }
        }
        if link.minutes == 0 {
            return Err(NetworkError::ZeroMinutes {
                from: link.from,
                to: link.to,
            });
        }

        let forward = Connection {
            to: link.to.clone(),
            minutes: link.minutes,
            line: link.line.clone(),
            mode: link.mode.clone(),
        };
        let backward = Connection {
            to: link.from.clone(),
            minutes: link.minutes,
            line: link.line,
            mode: link.mode,
        };

        self.adjacency.entry(link.from).or_default().push(forward);
        self.adjacency.entry(link.to).or_default().push(backward);
        Ok(())
    }

    /// Look up a station by id.
    pub fn station(&self, id: &StationId) -> Option<&Station> {
        self.stations.get(id)
    }

    /// Returns true if the station exists.
    pub fn contains(&self, id: &StationId) -> bool {
        self.stations.contains_key(id)
    }

    /// All stations, ordered by id.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.values()
    }

    /// Outgoing connections from a station. Empty for unknown ids.
    pub fn connections_from(&self, id: &StationId) -> &[Connection] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The connection directly joining two adjacent stations.
    ///
    /// If several connections join the pair, the fastest one is returned
    /// (first added on a tie), matching the one the path finder relaxed.
    /// Fails with [`NetworkError::NotAdjacent`] when there is none, which
    /// only happens for a path that this network did not produce.
    pub fn direct_connection(
        &self,
        from: &StationId,
        to: &StationId,
    ) -> Result<&Connection, NetworkError> {
        self.connections_from(from)
            .iter()
            .filter(|c| &c.to == to)
            .min_by_key(|c| c.minutes)
            .ok_or_else(|| NetworkError::NotAdjacent {
                from: from.clone(),
                to: to.clone(),
            })
    }

    /// Sorted, de-duplicated line labels serving a station.
    pub fn lines_at(&self, id: &StationId) -> Vec<String> {
        self.connections_from(id)
            .iter()
            .map(|c| c.line.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Number of stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if there are no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Number of directed connections (twice the number of links).
    pub fn connection_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}
