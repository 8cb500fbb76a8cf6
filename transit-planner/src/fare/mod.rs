//! Fare engine.
//!
//! Zone-based fares with a rolling transfer window. The rider's session is a
//! plain value passed into and returned from every pricing call, so one
//! session per rider can be kept wherever the caller likes.

mod rules;
mod session;
mod table;

pub use rules::FareRules;
pub use session::{
    DEFAULT_WINDOW_MINUTES, FareOutcome, FareSession, FareTransition, apply_fare,
};
pub use table::{FareTableError, ZoneFareTable};
