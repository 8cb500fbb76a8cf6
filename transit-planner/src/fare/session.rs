//! Transfer-window fare sessions.
//!
//! A rider pays once and may keep travelling for `window_minutes` after the
//! first paid trip. Within the window a trip needing no more zones than
//! already paid for is free, and a trip needing more zones costs only the
//! difference. The window is anchored at the trip that started the session;
//! upgrades do not move it.

use serde::Serialize;
use tracing::debug;

use crate::domain::Money;

use super::table::ZoneFareTable;

/// Default transfer window length.
pub const DEFAULT_WINDOW_MINUTES: u32 = 60;

/// What a rider has already paid for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FareSession {
    /// No paid window is open.
    #[default]
    Inactive,

    /// A paid window opened at `start_minute` covering `paid_zones` zones.
    Active { start_minute: u32, paid_zones: u32 },
}

impl FareSession {
    /// Returns `(start_minute, paid_zones)` for an active session.
    pub fn active(&self) -> Option<(u32, u32)> {
        match *self {
            FareSession::Active {
                start_minute,
                paid_zones,
            } => Some((start_minute, paid_zones)),
            FareSession::Inactive => None,
        }
    }

    /// Minute at which the window closes (inclusive), if a session is open.
    pub fn expires_at(&self, window_minutes: u32) -> Option<u32> {
        self.active()
            .map(|(start, _)| start.saturating_add(window_minutes))
    }

    /// True if a trip at `trip_minute` falls inside this session's window.
    ///
    /// Times before the session start count as inside: the engine does not
    /// validate that trips arrive in clock order.
    pub fn covers_time(&self, trip_minute: u32, window_minutes: u32) -> bool {
        match self.active() {
            Some((start, _)) => {
                i64::from(trip_minute) - i64::from(start) <= i64::from(window_minutes)
            }
            None => false,
        }
    }
}

/// Which rule priced a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FareTransition {
    /// No open window (or it had expired): full fare, new session.
    Started,
    /// Within the window and already paid for: free.
    Covered,
    /// Within the window but needs more zones: pay the difference.
    Upgraded,
}

/// Result of pricing one trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FareOutcome {
    /// Amount owed for this trip.
    pub charge: Money,
    /// Session to carry into the next trip.
    pub session: FareSession,
    /// Rule that applied.
    pub transition: FareTransition,
}

/// Price a trip against the rider's current session.
///
/// Total: never fails, because the fare table caps lookups at its largest
/// zone count.
///
/// # Examples
///
/// ```
/// use transit_planner::domain::Money;
/// use transit_planner::fare::{apply_fare, FareSession, FareTransition, ZoneFareTable};
///
/// let table = ZoneFareTable::new([(1, Money::from_cents(250)), (2, Money::from_cents(375))])
///     .unwrap();
///
/// let first = apply_fare(FareSession::Inactive, 540, 1, &table, 60);
/// assert_eq!(first.charge, Money::from_cents(250));
///
/// let second = apply_fare(first.session, 560, 2, &table, 60);
/// assert_eq!(second.charge, Money::from_cents(125));
/// assert_eq!(second.transition, FareTransition::Upgraded);
/// ```
pub fn apply_fare(
    session: FareSession,
    trip_time_minute: u32,
    required_zones: u32,
    table: &ZoneFareTable,
    window_minutes: u32,
) -> FareOutcome {
    let trip_cost = table.fare_for(required_zones);

    let outcome = match session.active() {
        Some((start_minute, paid_zones)) if session.covers_time(trip_time_minute, window_minutes) => {
            if required_zones <= paid_zones {
                FareOutcome {
                    charge: Money::ZERO,
                    session,
                    transition: FareTransition::Covered,
                }
            } else {
                let already_paid = table.fare_for(paid_zones);
                FareOutcome {
                    charge: trip_cost.saturating_sub(already_paid),
                    session: FareSession::Active {
                        start_minute,
                        paid_zones: required_zones,
                    },
                    transition: FareTransition::Upgraded,
                }
            }
        }
        _ => FareOutcome {
            charge: trip_cost,
            session: FareSession::Active {
                start_minute: trip_time_minute,
                paid_zones: required_zones,
            },
            transition: FareTransition::Started,
        },
    };

    debug!(
        trip_minute = trip_time_minute,
        required_zones,
        charge = %outcome.charge,
        transition = ?outcome.transition,
        "Fare applied"
    );

    outcome
}
