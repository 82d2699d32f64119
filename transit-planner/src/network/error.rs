//! Network loading error types.

use crate::domain::StopId;

/// Errors that can occur when loading or validating a network dataset.
///
/// All of these are fatal at startup: a network that fails validation is
/// never handed to the planner.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// Dataset file could not be read
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset is not valid JSON or is missing required fields
    #[error("failed to parse dataset: {0}")]
    Json(#[from] serde_json::Error),

    /// Two stops share an identifier
    #[error("duplicate stop id: {0}")]
    DuplicateStop(StopId),

    /// An edge points at a stop that doesn't exist
    #[error("stop {from} has an edge to unknown stop {to}")]
    UnknownStop { from: StopId, to: StopId },

    /// A time, distance, fare or coordinate is out of range
    #[error("invalid value for {field} at stop {stop}: {value}")]
    InvalidValue {
        stop: StopId,
        field: &'static str,
        value: f64,
    },

    /// Taxi pricing is negative or not finite
    #[error("invalid taxi pricing: {0}")]
    InvalidTaxiPricing(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let a = StopId::parse("bus_a").unwrap();
        let b = StopId::parse("bus_zz").unwrap();

        let err = NetworkError::UnknownStop {
            from: a.clone(),
            to: b,
        };
        assert_eq!(err.to_string(), "stop bus_a has an edge to unknown stop bus_zz");

        let err = NetworkError::DuplicateStop(a.clone());
        assert_eq!(err.to_string(), "duplicate stop id: bus_a");

        let err = NetworkError::InvalidValue {
            stop: a,
            field: "fare",
            value: -1.0,
        };
        assert_eq!(err.to_string(), "invalid value for fare at stop bus_a: -1");

        let err = NetworkError::InvalidTaxiPricing("opening fee must be non-negative");
        assert_eq!(
            err.to_string(),
            "invalid taxi pricing: opening fee must be non-negative"
        );
    }
}
