//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{MinuteOfDay, Money, Station, StationId, TravelMode, Zone, format_clock};
use crate::fare::{FareRules, FareSession, FareTransition};
use crate::network::Network;
use crate::planner::{PathSegment, TripOutcome, TripPlan};

/// Request to plan and price a trip.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanTripRequest {
    /// Rider whose fare session the trip is charged against
    pub rider: String,

    /// Departure station id (case-insensitive)
    pub from: String,

    /// Destination station id (case-insensitive)
    pub to: String,

    /// Start time in HH:MM format (defaults to now)
    pub time: Option<String>,
}

/// A station in the station list.
#[derive(Debug, Serialize)]
pub struct StationResult {
    pub id: StationId,
    pub name: String,
    pub zone: Zone,

    /// Lines serving the station, sorted
    pub lines: Vec<String>,
}

impl StationResult {
    pub fn from_station(network: &Network, station: &Station) -> Self {
        Self {
            id: station.id.clone(),
            name: station.name.clone(),
            zone: station.zone,
            lines: network.lines_at(&station.id),
        }
    }
}

/// Response listing every station.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    pub stations: Vec<StationResult>,
}

/// A rider's fare session as seen by clients.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct SessionResult {
    #[serde(flatten)]
    pub state: FareSession,

    /// Wall-clock time the transfer window closes, if one is open
    pub window_expires_at: Option<String>,
}

impl SessionResult {
    pub fn new(rules: &FareRules, session: FareSession) -> Self {
        Self {
            state: session,
            window_expires_at: rules.window_expiry(&session).map(format_clock),
        }
    }
}

/// Response for a rider's session lookup.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub rider: String,
    pub session: SessionResult,
}

/// How a trip request was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TripStatus {
    Routed,
    SameStation,
    NoRoute,
}

/// The route and pricing details of a routed trip.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    /// Stations visited, origin first
    pub path: Vec<StationId>,

    /// One entry per hop
    pub segments: Vec<PathSegment>,

    pub zones_crossed: u32,
    pub mode: TravelMode,
    pub required_zones: u32,

    /// Lines ridden, consecutive repeats collapsed
    pub lines: Vec<String>,

    /// Stations where the rider changes line
    pub transfers: Vec<StationId>,

    /// Which fare rule priced the trip
    pub fare_rule: FareTransition,
}

/// Response for a trip request.
#[derive(Debug, Serialize)]
pub struct TripResponse {
    pub rider: String,
    pub from: StationId,
    pub to: StationId,
    pub depart_at: MinuteOfDay,
    pub status: TripStatus,

    /// Travel time in minutes; absent when there is no route
    pub total_minutes: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<RouteResult>,

    /// Amount charged for this trip
    pub charge: Money,

    /// Rider's session after this trip
    pub session: SessionResult,
}

impl TripResponse {
    pub fn from_plan(rider: String, rules: &FareRules, plan: TripPlan) -> Self {
        let status = match &plan.outcome {
            TripOutcome::Routed(_) => TripStatus::Routed,
            TripOutcome::SameStation => TripStatus::SameStation,
            TripOutcome::NoRoute => TripStatus::NoRoute,
        };
        let total_minutes = plan.total_minutes();
        let charge = plan.charge();
        let session = SessionResult::new(rules, plan.session);

        let route = match plan.outcome {
            TripOutcome::Routed(trip) => {
                let trip = *trip;
                let analysis = trip.analysis;
                Some(RouteResult {
                    path: trip.route.path,
                    segments: analysis.segments().to_vec(),
                    zones_crossed: analysis.zones_crossed,
                    mode: analysis.mode,
                    required_zones: analysis.required_zones,
                    lines: analysis.compressed_lines,
                    transfers: analysis.transfer_stations,
                    fare_rule: trip.fare.transition,
                })
            }
            TripOutcome::SameStation | TripOutcome::NoRoute => None,
        };

        Self {
            rider,
            from: plan.query.from,
            to: plan.query.to,
            depart_at: plan.query.depart_at,
            status,
            total_minutes,
            route,
            charge,
            session,
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
