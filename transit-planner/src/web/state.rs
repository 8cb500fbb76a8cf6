//! Application state for the web layer.

use std::sync::Arc;

use crate::data::TransitData;
use crate::fare::FareRules;
use crate::network::Network;
use crate::sessions::{RiderSessions, SessionStoreConfig};

/// Shared application state.
///
/// The network and fare rules are read-only once loaded; only the rider
/// sessions change between requests.
#[derive(Clone)]
pub struct AppState {
    /// Station graph
    pub network: Arc<Network>,

    /// Fare table, bus fare and transfer window
    pub rules: Arc<FareRules>,

    /// Fare sessions keyed by rider
    pub sessions: Arc<RiderSessions>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: Network, rules: FareRules, sessions: &SessionStoreConfig) -> Self {
        Self {
            network: Arc::new(network),
            rules: Arc::new(rules),
            sessions: Arc::new(RiderSessions::new(sessions)),
        }
    }

    /// Create app state from loaded data.
    pub fn from_data(data: TransitData, sessions: &SessionStoreConfig) -> Self {
        Self::new(data.network, data.rules, sessions)
    }
}
