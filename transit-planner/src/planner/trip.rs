//! One trip request, end to end.
//!
//! Routes the trip, analyses the path and prices it against the rider's
//! session. The session is taken by value and the next one is returned in
//! the plan; nothing here holds state between calls.

use tracing::info;

use crate::domain::{MinuteOfDay, Money, StationId};
use crate::fare::{FareOutcome, FareRules, FareSession};
use crate::network::{Network, NetworkError};

use super::analyze::{PathAnalysis, analyze_path};
use super::search::{Route, RouteOutcome, find_fastest_path};

/// A rider's trip request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripQuery {
    pub from: StationId,
    pub to: StationId,
    pub depart_at: MinuteOfDay,
}

impl TripQuery {
    /// Create a new trip query.
    pub fn new(from: StationId, to: StationId, depart_at: MinuteOfDay) -> Self {
        Self {
            from,
            to,
            depart_at,
        }
    }
}

/// A routed and priced trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutedTrip {
    pub route: Route,
    pub analysis: PathAnalysis,
    pub fare: FareOutcome,
}

/// What happened to a trip request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TripOutcome {
    /// Origin and destination are the same station: nothing to ride or pay.
    SameStation,
    /// The stations are not connected.
    NoRoute,
    /// A route was found and priced.
    Routed(Box<RoutedTrip>),
}

/// The answer to a trip request, with the session to use next time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripPlan {
    pub query: TripQuery,
    pub outcome: TripOutcome,
    /// Session after this trip. Unchanged unless the trip was priced.
    pub session: FareSession,
}

impl TripPlan {
    /// Amount charged for this trip.
    pub fn charge(&self) -> Money {
        match &self.outcome {
            TripOutcome::Routed(trip) => trip.fare.charge,
            TripOutcome::SameStation | TripOutcome::NoRoute => Money::ZERO,
        }
    }

    /// Travel time in minutes, if the trip was routed.
    pub fn total_minutes(&self) -> Option<u32> {
        match &self.outcome {
            TripOutcome::Routed(trip) => Some(trip.route.total_minutes),
            TripOutcome::SameStation => Some(0),
            TripOutcome::NoRoute => None,
        }
    }

    /// Zones priced for this trip (zero when nothing was ridden).
    pub fn required_zones(&self) -> u32 {
        match &self.outcome {
            TripOutcome::Routed(trip) => trip.analysis.required_zones,
            TripOutcome::SameStation | TripOutcome::NoRoute => 0,
        }
    }

    /// The routed trip, if any.
    pub fn routed(&self) -> Option<&RoutedTrip> {
        match &self.outcome {
            TripOutcome::Routed(trip) => Some(trip),
            _ => None,
        }
    }
}

/// Plan and price one trip.
///
/// `start == goal` is answered without routing and leaves the session
/// untouched, as does an unreachable destination. Errors only arise when the
/// network is internally inconsistent.
pub fn plan_trip(
    network: &Network,
    rules: &FareRules,
    query: TripQuery,
    session: FareSession,
) -> Result<TripPlan, NetworkError> {
    if query.from == query.to {
        info!(station = %query.from, "Same origin and destination, no travel");
        return Ok(TripPlan {
            query,
            outcome: TripOutcome::SameStation,
            session,
        });
    }

    let route = match find_fastest_path(network, &query.from, &query.to) {
        RouteOutcome::Found(route) => route,
        RouteOutcome::NoRoute => {
            info!(from = %query.from, to = %query.to, "No route found");
            return Ok(TripPlan {
                query,
                outcome: TripOutcome::NoRoute,
                session,
            });
        }
    };

    let analysis = analyze_path(network, &route.path)?;
    let fare = rules.charge(
        session,
        query.depart_at.minutes(),
        analysis.mode,
        analysis.required_zones,
    );

    info!(
        from = %query.from,
        to = %query.to,
        minutes = route.total_minutes,
        zones = analysis.required_zones,
        mode = %analysis.mode,
        charge = %fare.charge,
        "Trip planned"
    );

    Ok(TripPlan {
        session: fare.session,
        query,
        outcome: TripOutcome::Routed(Box::new(RoutedTrip {
            route,
            analysis,
            fare,
        })),
    })
}
