//! Route segment types.
//!
//! A `RouteSegment` is one priced, timed hop of an itinerary: a walk or taxi
//! ride to or from a stop, a single bus or tram edge, or a transfer.

use std::fmt;

use super::{DomainError, StopId, TravelMode};

/// One end of a route segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// The query's starting point
    Origin,
    /// The query's destination point
    Destination,
    /// A stop in the network
    Stop(StopId),
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Origin => f.write_str("origin"),
            Endpoint::Destination => f.write_str("destination"),
            Endpoint::Stop(id) => f.write_str(id.as_str()),
        }
    }
}

/// A single segment of an itinerary.
///
/// Times are in minutes, distances in kilometres, costs in the dataset's
/// currency.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSegment {
    pub from: Endpoint,
    pub to: Endpoint,
    pub mode: TravelMode,
    pub time: f64,
    pub distance: f64,
    /// Fare before any discount
    pub base_cost: f64,
    /// Fare actually charged
    pub final_cost: f64,
    /// Why `final_cost` differs (or not) from `base_cost`
    pub explanation: String,
}

impl RouteSegment {
    /// Colour tag used when drawing this segment.
    pub fn color(&self) -> &'static str {
        self.mode.color()
    }

    /// Returns true if `next` can be folded into this segment.
    pub fn can_merge(&self, next: &RouteSegment) -> bool {
        self.mode == next.mode && self.mode.is_mergeable() && self.to == next.from
    }

    /// Merge with the following segment, producing a new segment that spans both.
    ///
    /// Only adjacent walk/walk or taxi/taxi segments merge; bus, tram and
    /// transfer hops stay distinct. Explanations are joined in order with
    /// `; `, repeats included.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the modes differ, the mode is not mergeable, or the
    /// segments don't connect.
    pub fn merge(&self, next: &RouteSegment) -> Result<RouteSegment, DomainError> {
        if self.mode != next.mode {
            return Err(DomainError::CannotMerge("modes differ"));
        }
        if !self.mode.is_mergeable() {
            return Err(DomainError::CannotMerge("only walk and taxi segments merge"));
        }
        if self.to != next.from {
            return Err(DomainError::Discontinuous(self.to.clone(), next.from.clone()));
        }

        let explanation = format!("{}; {}", self.explanation, next.explanation);

        Ok(RouteSegment {
            from: self.from.clone(),
            to: next.to.clone(),
            mode: self.mode,
            time: self.time + next.time,
            distance: self.distance + next.distance,
            base_cost: self.base_cost + next.base_cost,
            final_cost: self.final_cost + next.final_cost,
            explanation,
        })
    }
}
