//! Fastest-path search.
//!
//! Dijkstra over cumulative travel minutes. All weights are positive, so a
//! station popped from the frontier is settled and never revisited.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use tracing::{debug, trace};

use crate::domain::StationId;
use crate::network::Network;

/// A found route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Stations from start to goal, inclusive.
    pub path: Vec<StationId>,

    /// Total travel time in minutes.
    pub total_minutes: u32,
}

impl Route {
    /// First station on the route.
    pub fn origin(&self) -> Option<&StationId> {
        self.path.first()
    }

    /// Last station on the route.
    pub fn destination(&self) -> Option<&StationId> {
        self.path.last()
    }

    /// Number of segments (one fewer than the number of stations).
    pub fn segment_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Result of a fastest-path search.
///
/// `NoRoute` is an expected outcome, not an error: the stations may simply
/// be in disconnected parts of the network, or not exist at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    Found(Route),
    NoRoute,
}

impl RouteOutcome {
    /// Returns the route, if one was found.
    pub fn into_route(self) -> Option<Route> {
        match self {
            RouteOutcome::Found(route) => Some(route),
            RouteOutcome::NoRoute => None,
        }
    }

    /// Returns true if a route was found.
    pub fn is_found(&self) -> bool {
        matches!(self, RouteOutcome::Found(_))
    }
}

/// Find the minimum-time path from `start` to `goal`.
///
/// Unknown stations yield [`RouteOutcome::NoRoute`]. Distance ties are broken
/// by station id through the heap ordering, so results are deterministic.
/// The search stops as soon as `goal` is settled.
///
/// Callers are expected to handle `start == goal` themselves; if they don't,
/// the result is the single-station path with zero minutes.
pub fn find_fastest_path(network: &Network, start: &StationId, goal: &StationId) -> RouteOutcome {
    if !network.contains(start) || !network.contains(goal) {
        debug!(start = %start, goal = %goal, "Unknown station, no route");
        return RouteOutcome::NoRoute;
    }

    let mut dist: HashMap<StationId, u32> = HashMap::from([(start.clone(), 0)]);
    let mut prev: HashMap<StationId, StationId> = HashMap::new();
    let mut settled: HashSet<StationId> = HashSet::new();
    let mut frontier: BinaryHeap<Reverse<(u32, StationId)>> = BinaryHeap::new();

    frontier.push(Reverse((0, start.clone())));

    while let Some(Reverse((cur_dist, station))) = frontier.pop() {
        if !settled.insert(station.clone()) {
            continue;
        }

        trace!(station = %station, minutes = cur_dist, "Settled station");

        if &station == goal {
            let path = reconstruct_path(&prev, goal);
            debug!(
                start = %start,
                goal = %goal,
                minutes = cur_dist,
                settled = settled.len(),
                "Route found"
            );
            return RouteOutcome::Found(Route {
                path,
                total_minutes: cur_dist,
            });
        }

        for conn in network.connections_from(&station) {
            if settled.contains(&conn.to) {
                continue;
            }

            let candidate = cur_dist.saturating_add(conn.minutes);
            let improves = dist
                .get(&conn.to)
                .is_none_or(|&known| candidate < known);

            if improves {
                dist.insert(conn.to.clone(), candidate);
                prev.insert(conn.to.clone(), station.clone());
                frontier.push(Reverse((candidate, conn.to.clone())));
            }
        }
    }

    debug!(
        start = %start,
        goal = %goal,
        settled = settled.len(),
        "Goal unreachable"
    );
    RouteOutcome::NoRoute
}

/// Walk predecessor links back from the goal.
fn reconstruct_path(prev: &HashMap<StationId, StationId>, goal: &StationId) -> Vec<StationId> {
    let mut path = vec![goal.clone()];
    let mut cur = goal;

    while let Some(p) = prev.get(cur) {
        path.push(p.clone());
        cur = p;
    }

    path.reverse();
    path
}
