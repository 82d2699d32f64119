//! Itinerary types.
//!
//! An `Itinerary` is a complete, priced, timed trip from the query origin to
//! the query destination, together with the coordinate pairs needed to draw it.

use chrono::{Duration, NaiveDateTime};

use super::{Coord, DomainError, RouteSegment, TravelMode, round_to};

/// A straight line between two coordinates, drawn in the colour of its mode.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordSegment {
    pub mode: TravelMode,
    pub from: Coord,
    pub to: Coord,
}

impl CoordSegment {
    /// Colour tag for drawing.
    pub fn color(&self) -> &'static str {
        self.mode.color()
    }
}

/// A complete itinerary.
///
/// # Invariants
///
/// - At least one segment
/// - Consecutive segments connect (destination of one = origin of next)
/// - `total_cost` is the rounded sum of the segments' final costs
#[derive(Debug, Clone)]
pub struct Itinerary {
    segments: Vec<RouteSegment>,
    polyline: Vec<CoordSegment>,
    total_time: f64,
    total_distance: f64,
    total_cost: f64,
    departure: Option<NaiveDateTime>,
    arrival: Option<NaiveDateTime>,
}

impl Itinerary {
    /// Constructs an itinerary from connected segments and their drawing.
    ///
    /// Totals are summed from the segments; time and distance are rounded to
    /// one decimal place and cost to two.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the segment list is empty or two consecutive segments
    /// don't share an endpoint.
    ///
    /// # Examples
    ///
    /// ```
    /// use transit_planner::domain::{Endpoint, Itinerary, RouteSegment, TravelMode};
    ///
    /// let ride = RouteSegment {
    ///     from: Endpoint::Origin,
    ///     to: Endpoint::Destination,
    ///     mode: TravelMode::Taxi,
    ///     time: 12.34,
    ///     distance: 8.26,
    ///     base_cost: 43.04,
    ///     final_cost: 43.04,
    ///     explanation: "taxi: full fare".into(),
    /// };
    /// let itinerary = Itinerary::new(vec![ride], vec![]).unwrap();
    ///
    /// assert_eq!(itinerary.total_time(), 12.3);
    /// assert_eq!(itinerary.total_distance(), 8.3);
    /// assert_eq!(itinerary.amount_due(), 43.04);
    /// ```
    pub fn new(
        segments: Vec<RouteSegment>,
        polyline: Vec<CoordSegment>,
    ) -> Result<Self, DomainError> {
        if segments.is_empty() {
            return Err(DomainError::EmptyItinerary);
        }

        for window in segments.windows(2) {
            if window[0].to != window[1].from {
                return Err(DomainError::Discontinuous(
                    window[0].to.clone(),
                    window[1].from.clone(),
                ));
            }
        }

        let total_time = round_to(segments.iter().map(|s| s.time).sum(), 1);
        let total_distance = round_to(segments.iter().map(|s| s.distance).sum(), 1);
        let total_cost = round_to(segments.iter().map(|s| s.final_cost).sum(), 2);

        Ok(Itinerary {
            segments,
            polyline,
            total_time,
            total_distance,
            total_cost,
            departure: None,
            arrival: None,
        })
    }

    /// Attach a departure timestamp, deriving the arrival from the total time.
    ///
    /// The arrival is left unset when it falls outside the representable
    /// date range.
    pub fn depart_at(mut self, departure: NaiveDateTime) -> Self {
        self.departure = Some(departure);
        self.arrival = arrival_after(departure, self.total_time);
        self
    }

    /// Returns the segments in travel order.
    pub fn segments(&self) -> &[RouteSegment] {
        &self.segments
    }

    /// Returns the coordinate pairs for drawing, one per drawable segment.
    pub fn polyline(&self) -> &[CoordSegment] {
        &self.polyline
    }

    /// Total travel time in minutes.
    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    /// Total distance in kilometres.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Total fare after discounts.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// The amount a payment collaborator should charge for this itinerary.
    pub fn amount_due(&self) -> f64 {
        self.total_cost
    }

    /// Departure timestamp, if one was supplied.
    pub fn departure_time(&self) -> Option<NaiveDateTime> {
        self.departure
    }

    /// Arrival timestamp, if a departure was supplied.
    pub fn arrival_time(&self) -> Option<NaiveDateTime> {
        self.arrival
    }

    /// Returns true if any segment uses `mode`.
    pub fn uses_mode(&self, mode: TravelMode) -> bool {
        self.segments.iter().any(|s| s.mode == mode)
    }

    /// Number of segments.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }
}

/// Departure plus a travel time in (possibly fractional) minutes.
///
/// Returns `None` if the travel time or the resulting timestamp is out of
/// range.
pub fn arrival_after(departure: NaiveDateTime, minutes: f64) -> Option<NaiveDateTime> {
    let seconds = (minutes * 60.0).round() as i64;
    departure.checked_add_signed(Duration::try_seconds(seconds)?)
}
