//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};

use crate::domain::{Coord, DomainError, Query, StopId};
use crate::network::NetworkModel;
use crate::planner::{PlanResult, Planner};

use super::dto::*;
use super::state::AppState;
use super::wallet::Wallet;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stops", get(list_stops))
        .route("/stops/:id", get(stop_detail))
        .route("/plan", post(plan_trip))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List every stop in the network.
async fn list_stops(State(state): State<AppState>) -> Json<StopsResponse> {
    Json(StopsResponse {
        city: state.network.city().map(str::to_string),
        stops: state.network.stops().map(StopResult::from_stop).collect(),
    })
}

/// A single stop and its outgoing connections.
async fn stop_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StopDetailResponse>, AppError> {
    let stop_id = StopId::parse(&id).map_err(|_| AppError::BadRequest {
        message: format!("invalid stop id: {id:?}"),
    })?;
    let stop = state
        .network
        .stop(&stop_id)
        .ok_or_else(|| AppError::NotFound {
            message: format!("unknown stop: {stop_id}"),
        })?;
    Ok(Json(StopDetailResponse::from_stop(stop, &state.network)))
}

/// Plan a trip and simulate paying for each route.
async fn plan_trip(
    State(state): State<AppState>,
    payload: Result<Json<PlanRequest>, JsonRejection>,
) -> Result<Json<PlanResponse>, AppError> {
    let Json(req) = payload.map_err(|e| AppError::BadRequest {
        message: format!("invalid request: {}", e.body_text()),
    })?;

    let query = query_from_request(&req)?;
    let result = Planner::new(&state.network, &state.config).plan(&query);

    info!(
        passenger = %req.passenger.label(),
        payment = %req.payment.label(),
        found = result.found_count(),
        recommended = result.recommended.map(|s| s.name()).unwrap_or("none"),
        "planned trip"
    );

    Ok(Json(build_response(&result, &req, &state.network)))
}

/// Validate a request and turn it into a planner query.
fn query_from_request(req: &PlanRequest) -> Result<Query, AppError> {
    let mut query = Query::new(
        Coord::new(req.start_lat, req.start_lon),
        Coord::new(req.dest_lat, req.dest_lon),
    )
    .with_passenger(req.passenger)
    .with_payment(req.payment)
    .on_special_day(req.special_day);
    query.validate()?;

    if let Some(text) = req.departure.as_deref().filter(|s| !s.trim().is_empty()) {
        let departure = parse_departure(text).map_err(|e| AppError::BadRequest {
            message: format!("invalid departure {text:?} (expected YYYY-MM-DDTHH:MM): {e}"),
        })?;
        query = query.departing_at(departure);
    }

    if let Some(balance) = req.balance {
        if !balance.is_finite() || balance < 0.0 {
            return Err(AppError::BadRequest {
                message: format!("balance must be a non-negative number, got {balance}"),
            });
        }
    }

    Ok(query)
}

/// Lay out the plan for the client, charging one wallet for the recommended
/// route and then for each alternative in order.
fn build_response(
    result: &PlanResult,
    req: &PlanRequest,
    network: &NetworkModel,
) -> PlanResponse {
    let mut wallet = req.balance.map(|b| Wallet::new(req.payment, b));

    let (recommended, recommended_payment) = match result.recommended() {
        Some((strategy, itinerary)) => (
            Some(RouteResult::from_itinerary(strategy, itinerary, network)),
            wallet.as_mut().map(|w| w.charge(itinerary.amount_due())),
        ),
        None => (None, None),
    };

    let alternatives = result
        .outcomes
        .iter()
        .map(|(strategy, outcome)| {
            let mut alt =
                AlternativeResult::from_outcome(*strategy, outcome, req.payment, network);
            if let (Some(itinerary), Some(w)) = (outcome.itinerary(), wallet.as_mut()) {
                alt.payment = Some(w.charge(itinerary.amount_due()));
            }
            alt
        })
        .collect();

    PlanResponse {
        recommended,
        recommended_payment,
        alternatives,
    }
}

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    BadRequest { message: String },

    #[error("{message}")]
    NotFound { message: String },
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        };
        let message = self.to_string();

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
