//! Transit network model.
//!
//! Stops served by bus or tram, the directed edges between them, the
//! optional transfer at each stop, and the city's taxi tariff. The model is
//! loaded once at startup and never mutated.

mod dataset;
mod error;
mod model;

pub use error::NetworkError;
pub use model::{GraphEdge, ModeEdge, NetworkModel, Stop, TaxiPricing, TransferEdge};
