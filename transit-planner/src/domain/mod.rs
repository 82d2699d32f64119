//! Domain types for the transit planner.
//!
//! This module contains the core value types shared by the network model,
//! the fare policy and the planner. Types that carry invariants enforce them
//! at construction time.

mod error;
mod geo;
mod itinerary;
mod mode;
mod query;
mod rounding;
mod segment;
mod stop_id;

pub use error::DomainError;
pub use geo::{Coord, EARTH_RADIUS_KM, haversine};
pub use itinerary::{CoordSegment, Itinerary, arrival_after};
pub use mode::{PassengerCategory, PaymentMethod, StopKind, TravelMode};
pub use query::Query;
pub use rounding::round_to;
pub use segment::{Endpoint, RouteSegment};
pub use stop_id::{InvalidStopId, StopId};
