//! Web layer for the transit planner.
//!
//! Provides HTTP endpoints for listing stations, planning trips and
//! inspecting a rider's fare session.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
