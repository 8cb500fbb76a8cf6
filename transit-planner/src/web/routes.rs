//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Local;
use tracing::{error, info, warn};

use crate::domain::{MinuteOfDay, StationId};
use crate::network::NetworkError;
use crate::planner::{self, TripQuery};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", get(list_stations))
        .route("/trip/plan", post(plan_trip))
        .route(
            "/riders/:rider/session",
            get(rider_session).delete(clear_rider_session),
        )
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List every station with its zone and the lines serving it.
async fn list_stations(State(state): State<AppState>) -> Json<StationsResponse> {
    let stations = state
        .network
        .stations()
        .map(|station| StationResult::from_station(&state.network, station))
        .collect();

    Json(StationsResponse { stations })
}

/// Plan a trip and charge it to the rider's fare session.
async fn plan_trip(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TripResponse>, AppError> {
    let req: PlanTripRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(&body), "Rejected trip request body");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let rider = parse_rider(&req.rider)?;
    let from = known_station(&state, &req.from, "departure")?;
    let to = known_station(&state, &req.to, "destination")?;

    let depart_at = match req.time.as_deref() {
        Some(time) => MinuteOfDay::parse_hhmm(time).map_err(|e| AppError::BadRequest {
            message: format!("Invalid start time {time:?}: {e}"),
        })?,
        None => MinuteOfDay::from(Local::now().time()),
    };

    let query = TripQuery::new(from, to, depart_at);
    let network = &state.network;
    let rules = &state.rules;

    let plan = state
        .sessions
        .update(&rider, |session| {
            planner::plan_trip(network, rules, query, session).map(|plan| {
                let next = plan.session;
                (plan, next)
            })
        })
        .await?;

    info!(rider = %rider, charge = %plan.charge(), "Trip charged");

    Ok(Json(TripResponse::from_plan(rider, &state.rules, plan)))
}

/// Current fare session for a rider.
async fn rider_session(
    State(state): State<AppState>,
    Path(rider): Path<String>,
) -> Result<Json<SessionResponse>, AppError> {
    let rider = parse_rider(&rider)?;
    let session = state.sessions.current(&rider).await;

    Ok(Json(SessionResponse {
        session: SessionResult::new(&state.rules, session),
        rider,
    }))
}

/// Close a rider's fare session.
async fn clear_rider_session(
    State(state): State<AppState>,
    Path(rider): Path<String>,
) -> Result<StatusCode, AppError> {
    let rider = parse_rider(&rider)?;
    state.sessions.clear(&rider).await;
    info!(rider = %rider, "Rider session cleared");
    Ok(StatusCode::NO_CONTENT)
}

fn parse_rider(raw: &str) -> Result<String, AppError> {
    let rider = raw.trim();
    if rider.is_empty() {
        return Err(AppError::BadRequest {
            message: "Rider id must not be empty".to_string(),
        });
    }
    Ok(rider.to_string())
}

/// Parse a station id from a request and check it exists.
fn known_station(state: &AppState, raw: &str, role: &str) -> Result<StationId, AppError> {
    let id = StationId::parse_normalized(raw).map_err(|e| AppError::BadRequest {
        message: format!("Invalid {role} station {raw:?}: {e}"),
    })?;

    if !state.network.contains(&id) {
        return Err(AppError::NotFound {
            message: format!("Unknown {role} station: {id}"),
        });
    }

    Ok(id)
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<NetworkError> for AppError {
    fn from(e: NetworkError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "Request failed");
        } else {
            warn!(%status, %message, "Request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
