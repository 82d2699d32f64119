//! Data transfer objects for web requests and responses.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::{
    CoordSegment, Endpoint, Itinerary, PassengerCategory, PaymentMethod, RouteSegment,
};
use crate::network::{NetworkModel, Stop};
use crate::planner::{Strategy, StrategyOutcome};

use super::wallet::PaymentReceipt;

/// Input format for departure times.
pub const DEPARTURE_INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Display format for departure and arrival times.
pub const DISPLAY_FORMAT: &str = "%d.%m.%Y %H:%M";

/// Request to plan a trip.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanRequest {
    pub start_lat: f64,
    pub start_lon: f64,
    pub dest_lat: f64,
    pub dest_lon: f64,

    /// Passenger category (defaults to general)
    #[serde(default, alias = "passenger_type")]
    pub passenger: PassengerCategory,

    /// Payment method (defaults to cash)
    #[serde(default, alias = "payment_type")]
    pub payment: PaymentMethod,

    /// Departure time in `YYYY-MM-DDTHH:MM` format
    #[serde(default, alias = "start_time")]
    pub departure: Option<String>,

    /// All transit is free on special days
    #[serde(default)]
    pub special_day: bool,

    /// Balance to simulate payment against
    #[serde(default, alias = "payment_amount")]
    pub balance: Option<f64>,
}

/// Response for trip planning.
#[derive(Debug, Serialize)]
pub struct PlanResponse {
    /// The cheapest route, if any strategy found one
    pub recommended: Option<RouteResult>,

    /// Payment result for the recommended route
    pub recommended_payment: Option<PaymentReceipt>,

    /// One entry per strategy, in evaluation order
    pub alternatives: Vec<AlternativeResult>,
}

/// One strategy's result.
#[derive(Debug, Serialize)]
pub struct AlternativeResult {
    pub strategy: &'static str,

    /// `found`, `not_applicable` or `infeasible`
    pub status: &'static str,

    /// Why no route is shown
    pub reason: Option<String>,

    pub route: Option<RouteResult>,

    pub payment: Option<PaymentReceipt>,
}

/// A complete route.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    pub strategy: &'static str,
    pub segments: Vec<SegmentResult>,
    pub polyline: Vec<PolylineResult>,

    /// Minutes
    pub total_time: f64,

    /// Kilometres
    pub total_distance: f64,

    pub total_cost: f64,
    pub departure_time: Option<String>,
    pub arrival_time: Option<String>,
}

/// One segment of a route.
#[derive(Debug, Serialize)]
pub struct SegmentResult {
    pub from: PlaceInfo,
    pub to: PlaceInfo,
    pub mode: &'static str,
    pub color: &'static str,
    pub time: f64,
    pub distance: f64,
    pub base_cost: f64,
    pub final_cost: f64,
    pub explanation: String,
}

/// A segment endpoint for display.
#[derive(Debug, Serialize)]
pub struct PlaceInfo {
    /// Stop id, or `origin` / `destination`
    pub id: String,
    pub name: String,
}

/// A drawable line.
#[derive(Debug, Serialize)]
pub struct PolylineResult {
    pub mode: &'static str,
    pub color: &'static str,
    /// `[lat, lon]`
    pub from: [f64; 2],
    /// `[lat, lon]`
    pub to: [f64; 2],
}

/// A stop in the stop listing.
#[derive(Debug, Serialize)]
pub struct StopResult {
    pub id: String,
    pub name: String,
    pub kind: &'static str,
    pub lat: f64,
    pub lon: f64,
    pub terminal: bool,
}

/// Response for the stop listing.
#[derive(Debug, Serialize)]
pub struct StopsResponse {
    pub city: Option<String>,
    pub stops: Vec<StopResult>,
}

/// A single stop with its outgoing connections.
#[derive(Debug, Serialize)]
pub struct StopDetailResponse {
    #[serde(flatten)]
    pub stop: StopResult,
    pub connections: Vec<ConnectionResult>,
}

/// An outgoing edge of a stop.
#[derive(Debug, Serialize)]
pub struct ConnectionResult {
    pub to: String,
    pub mode: &'static str,
    pub time: f64,
    pub distance: f64,
    pub fare: f64,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl RouteResult {
    /// Create from a domain Itinerary.
    pub fn from_itinerary(
        strategy: Strategy,
        itinerary: &Itinerary,
        network: &NetworkModel,
    ) -> Self {
        Self {
            strategy: strategy.name(),
            segments: itinerary
                .segments()
                .iter()
                .map(|s| SegmentResult::from_segment(s, network))
                .collect(),
            polyline: itinerary
                .polyline()
                .iter()
                .map(PolylineResult::from_coord_segment)
                .collect(),
            total_time: itinerary.total_time(),
            total_distance: itinerary.total_distance(),
            total_cost: itinerary.total_cost(),
            departure_time: itinerary.departure_time().map(format_time),
            arrival_time: itinerary.arrival_time().map(format_time),
        }
    }
}

impl SegmentResult {
    /// Create from a domain RouteSegment.
    pub fn from_segment(segment: &RouteSegment, network: &NetworkModel) -> Self {
        Self {
            from: PlaceInfo::from_endpoint(&segment.from, network),
            to: PlaceInfo::from_endpoint(&segment.to, network),
            mode: segment.mode.as_str(),
            color: segment.color(),
            time: segment.time,
            distance: segment.distance,
            base_cost: segment.base_cost,
            final_cost: segment.final_cost,
            explanation: segment.explanation.clone(),
        }
    }
}

impl PlaceInfo {
    fn from_endpoint(endpoint: &Endpoint, network: &NetworkModel) -> Self {
        let name = match endpoint {
            Endpoint::Origin => "Start".to_string(),
            Endpoint::Destination => "Destination".to_string(),
            Endpoint::Stop(id) => network
                .stop(id)
                .map(|s| s.name.clone())
                .unwrap_or_else(|| id.to_string()),
        };
        Self {
            id: endpoint.to_string(),
            name,
        }
    }
}

impl PolylineResult {
    fn from_coord_segment(segment: &CoordSegment) -> Self {
        Self {
            mode: segment.mode.as_str(),
            color: segment.color(),
            from: [segment.from.lat, segment.from.lon],
            to: [segment.to.lat, segment.to.lon],
        }
    }
}

impl StopResult {
    /// Create from a network Stop.
    pub fn from_stop(stop: &Stop) -> Self {
        Self {
            id: stop.id.to_string(),
            name: stop.name.clone(),
            kind: stop.kind.mode().as_str(),
            lat: stop.coord.lat,
            lon: stop.coord.lon,
            terminal: stop.terminal,
        }
    }
}

impl StopDetailResponse {
    /// Create from a network Stop and its outgoing edges.
    pub fn from_stop(stop: &Stop, network: &NetworkModel) -> Self {
        let connections = network
            .edges_from(&stop.id)
            .iter()
            .map(|e| ConnectionResult {
                to: e.to.to_string(),
                mode: e.mode.as_str(),
                time: e.time,
                distance: e.distance,
                fare: e.fare,
            })
            .collect();
        Self {
            stop: StopResult::from_stop(stop),
            connections,
        }
    }
}

impl AlternativeResult {
    /// Create from a strategy outcome. The payment receipt is attached by the
    /// caller.
    pub fn from_outcome(
        strategy: Strategy,
        outcome: &StrategyOutcome,
        payment: PaymentMethod,
        network: &NetworkModel,
    ) -> Self {
        let reason = match outcome {
            StrategyOutcome::Found(_) => None,
            StrategyOutcome::NotApplicable => {
                Some(format!("not available when paying by {}", payment.label()))
            }
            StrategyOutcome::Infeasible => Some("no route found".to_string()),
        };
        Self {
            strategy: strategy.name(),
            status: outcome.status(),
            reason,
            route: outcome
                .itinerary()
                .map(|i| RouteResult::from_itinerary(strategy, i, network)),
            payment: None,
        }
    }
}

/// Parse a departure time in `YYYY-MM-DDTHH:MM` format.
pub fn parse_departure(s: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(s.trim(), DEPARTURE_INPUT_FORMAT)
}

/// Format a timestamp for display.
fn format_time(time: NaiveDateTime) -> String {
    time.format(DISPLAY_FORMAT).to_string()
}
