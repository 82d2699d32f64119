//! Domain error types.
//!
//! These errors represent validation failures and data inconsistencies
//! in the domain layer. They are distinct from dataset loading errors.

use super::Endpoint;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Itinerary has no segments
    #[error("itinerary must have at least one segment")]
    EmptyItinerary,

    /// Consecutive segments don't share an endpoint
    #[error("segments do not connect: {0} is followed by {1}")]
    Discontinuous(Endpoint, Endpoint),

    /// Two segments cannot be merged into one
    #[error("cannot merge segments: {0}")]
    CannotMerge(&'static str),

    /// Query coordinate out of range or not finite
    #[error("invalid {0} coordinate")]
    InvalidCoordinate(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StopId;

    #[test]
    fn error_display() {
        let err = DomainError::EmptyItinerary;
        assert_eq!(err.to_string(), "itinerary must have at least one segment");

        let stop = StopId::parse("bus_otogar").unwrap();
        let err = DomainError::Discontinuous(Endpoint::Stop(stop), Endpoint::Destination);
        assert_eq!(
            err.to_string(),
            "segments do not connect: bus_otogar is followed by destination"
        );

        let err = DomainError::CannotMerge("modes differ");
        assert_eq!(err.to_string(), "cannot merge segments: modes differ");

        let err = DomainError::InvalidCoordinate("origin");
        assert_eq!(err.to_string(), "invalid origin coordinate");
    }
}
