//! Planning query.

use chrono::NaiveDateTime;

use super::{Coord, DomainError, PassengerCategory, PaymentMethod};

/// A single planning request: where from, where to, who is travelling and
/// how they pay.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub origin: Coord,
    pub destination: Coord,
    pub passenger: PassengerCategory,
    pub payment: PaymentMethod,
    /// When set, itineraries carry an arrival timestamp.
    pub departure: Option<NaiveDateTime>,
    /// Transit is free on special days.
    pub special_day: bool,
}

impl Query {
    /// Create a query for a general passenger paying cash, with no departure
    /// time, on an ordinary day.
    pub fn new(origin: Coord, destination: Coord) -> Self {
        Self {
            origin,
            destination,
            passenger: PassengerCategory::default(),
            payment: PaymentMethod::default(),
            departure: None,
            special_day: false,
        }
    }

    pub fn with_passenger(mut self, passenger: PassengerCategory) -> Self {
        self.passenger = passenger;
        self
    }

    pub fn with_payment(mut self, payment: PaymentMethod) -> Self {
        self.payment = payment;
        self
    }

    pub fn departing_at(mut self, departure: NaiveDateTime) -> Self {
        self.departure = Some(departure);
        self
    }

    pub fn on_special_day(mut self, special_day: bool) -> Self {
        self.special_day = special_day;
        self
    }

    /// Validate the query coordinates.
    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.origin.is_valid() {
            return Err(DomainError::InvalidCoordinate("origin"));
        }
        if !self.destination.is_valid() {
            return Err(DomainError::InvalidCoordinate("destination"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let q = Query::new(Coord::new(40.76, 29.94), Coord::new(40.77, 29.96));
        assert_eq!(q.passenger, PassengerCategory::General);
        assert_eq!(q.payment, PaymentMethod::Cash);
        assert!(q.departure.is_none());
        assert!(!q.special_day);
        assert!(q.validate().is_ok());
    }

    #[test]
    fn builder_methods() {
        let q = Query::new(Coord::new(40.76, 29.94), Coord::new(40.77, 29.96))
            .with_passenger(PassengerCategory::Student)
            .with_payment(PaymentMethod::TransitCard)
            .on_special_day(true);
        assert_eq!(q.passenger, PassengerCategory::Student);
        assert_eq!(q.payment, PaymentMethod::TransitCard);
        assert!(q.special_day);
    }

    #[test]
    fn invalid_coordinates_rejected() {
        let q = Query::new(Coord::new(100.0, 29.94), Coord::new(40.77, 29.96));
        assert_eq!(q.validate(), Err(DomainError::InvalidCoordinate("origin")));

        let q = Query::new(Coord::new(40.76, 29.94), Coord::new(40.77, f64::NAN));
        assert_eq!(
            q.validate(),
            Err(DomainError::InvalidCoordinate("destination"))
        );
    }
}
