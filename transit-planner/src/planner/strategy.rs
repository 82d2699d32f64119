//! Route strategies and their outcomes.

use std::fmt;

use crate::domain::{Itinerary, PaymentMethod, StopId};
use crate::network::GraphEdge;

/// One of the five ways of building a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Taxi from origin to destination
    DirectTaxi,
    /// Walk, bus network only, walk
    BusOnly,
    /// Walk, tram network only, walk
    TramOnly,
    /// Walk, bus and tram (both used) with transfers, walk
    BusAndTram,
    /// Taxi, bus and/or tram with transfers, taxi
    TaxiAndTransit,
}

impl Strategy {
    /// All strategies, in evaluation order.
    pub const ALL: [Strategy; 5] = [
        Strategy::DirectTaxi,
        Strategy::BusOnly,
        Strategy::TramOnly,
        Strategy::BusAndTram,
        Strategy::TaxiAndTransit,
    ];

    /// Stable snake_case name.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::DirectTaxi => "direct_taxi",
            Strategy::BusOnly => "bus_only",
            Strategy::TramOnly => "tram_only",
            Strategy::BusAndTram => "bus_and_tram",
            Strategy::TaxiAndTransit => "taxi_and_transit",
        }
    }

    /// Whether this strategy may be offered to a passenger paying with `payment`.
    ///
    /// Taxis don't take transit cards; transit doesn't take cash; the
    /// taxi-connected transit route is credit card only.
    pub fn accepts(&self, payment: PaymentMethod) -> bool {
        match self {
            Strategy::DirectTaxi => payment != PaymentMethod::TransitCard,
            Strategy::BusOnly | Strategy::TramOnly | Strategy::BusAndTram => {
                payment != PaymentMethod::Cash
            }
            Strategy::TaxiAndTransit => payment == PaymentMethod::Credit,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a strategy produced for a query.
#[derive(Debug, Clone)]
pub enum StrategyOutcome {
    /// A complete itinerary
    Found(Itinerary),
    /// The payment method rules this strategy out
    NotApplicable,
    /// No stop or no path satisfies the strategy
    Infeasible,
}

impl StrategyOutcome {
    /// Returns the itinerary, if one was found.
    pub fn itinerary(&self) -> Option<&Itinerary> {
        match self {
            StrategyOutcome::Found(itinerary) => Some(itinerary),
            StrategyOutcome::NotApplicable | StrategyOutcome::Infeasible => None,
        }
    }

    /// Short status name.
    pub fn status(&self) -> &'static str {
        match self {
            StrategyOutcome::Found(_) => "found",
            StrategyOutcome::NotApplicable => "not_applicable",
            StrategyOutcome::Infeasible => "infeasible",
        }
    }
}

/// One traversed edge of a stop-to-stop path.
#[derive(Debug, Clone, Copy)]
pub struct Hop<'a> {
    pub from: &'a StopId,
    pub edge: &'a GraphEdge,
    /// This hop is the first boarding after a transfer.
    pub transfer_pending: bool,
}
