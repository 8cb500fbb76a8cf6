//! Fare configuration and mode-aware pricing.

use crate::domain::{Money, TravelMode};

use super::session::{DEFAULT_WINDOW_MINUTES, FareOutcome, FareSession, FareTransition, apply_fare};
use super::table::ZoneFareTable;

/// Everything needed to price a trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FareRules {
    /// Zone-priced fares.
    pub zone_fares: ZoneFareTable,

    /// Fare for opening a session with an all-bus trip.
    pub bus_flat_fare: Money,

    /// Transfer window length (minutes).
    pub window_minutes: u32,
}

impl FareRules {
    /// Create rules with the default 60-minute transfer window.
    pub fn new(zone_fares: ZoneFareTable, bus_flat_fare: Money) -> Self {
        Self {
            zone_fares,
            bus_flat_fare,
            window_minutes: DEFAULT_WINDOW_MINUTES,
        }
    }

    /// Override the transfer window.
    pub fn with_window_minutes(mut self, window_minutes: u32) -> Self {
        self.window_minutes = window_minutes;
        self
    }

    /// Price a trip.
    ///
    /// Follows [`apply_fare`], except that a bus-like trip opening a new
    /// session pays the flat bus fare rather than the one-zone table fare.
    /// Upgrades within the window are always priced from the zone table.
    pub fn charge(
        &self,
        session: FareSession,
        trip_time_minute: u32,
        mode: TravelMode,
        required_zones: u32,
    ) -> FareOutcome {
        let mut outcome = apply_fare(
            session,
            trip_time_minute,
            required_zones,
            &self.zone_fares,
            self.window_minutes,
        );

        if outcome.transition == FareTransition::Started && mode == TravelMode::Bus {
            outcome.charge = self.bus_flat_fare;
        }

        outcome
    }

    /// Minute at which a session's window closes.
    pub fn window_expiry(&self, session: &FareSession) -> Option<u32> {
        session.expires_at(self.window_minutes)
    }
}
