//! Trip planning.
//!
//! Finds the fastest path through the network, derives zones, mode and line
//! changes from it, and prices the trip with the fare engine.

mod analyze;
mod search;
mod trip;

pub use analyze::{
    PathAnalysis, PathSegment, analyze_path, compress_lines, required_zones, transfer_stations,
};
pub use search::{Route, RouteOutcome, find_fastest_path};
pub use trip::{RoutedTrip, TripOutcome, TripPlan, TripQuery, plan_trip};
