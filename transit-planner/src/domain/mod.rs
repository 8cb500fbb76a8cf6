//! Domain types for the transit planner.
//!
//! This module contains the small value types shared by the network, the
//! planner and the fare engine. All types enforce their invariants at
//! construction time, so code that receives them can trust their validity.

mod mode;
mod money;
mod station;
mod time;

pub use mode::TravelMode;
pub use money::{InvalidAmount, Money};
pub use station::{InvalidStationId, Station, StationId, Zone};
pub use time::{MINUTES_PER_DAY, MinuteOfDay, TimeError, format_clock};
