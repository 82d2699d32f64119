//! Travel modes, passenger categories and payment methods.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a segment of an itinerary is travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    Walk,
    Taxi,
    Bus,
    Tram,
    Transfer,
}

impl TravelMode {
    /// Returns the lowercase name of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelMode::Walk => "walk",
            TravelMode::Taxi => "taxi",
            TravelMode::Bus => "bus",
            TravelMode::Tram => "tram",
            TravelMode::Transfer => "transfer",
        }
    }

    /// Colour tag used when drawing segments of this mode.
    pub fn color(&self) -> &'static str {
        match self {
            TravelMode::Walk => "gray",
            TravelMode::Taxi => "red",
            TravelMode::Bus => "blue",
            TravelMode::Tram => "orange",
            TravelMode::Transfer => "purple",
        }
    }

    /// Bus, tram and transfer segments are fared by the transit operator.
    pub fn is_transit(&self) -> bool {
        matches!(
            self,
            TravelMode::Bus | TravelMode::Tram | TravelMode::Transfer
        )
    }

    /// Walk and taxi segments can be merged with an adjacent segment of the
    /// same mode.
    pub fn is_mergeable(&self) -> bool {
        !self.is_transit()
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The vehicle type serving a stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopKind {
    Bus,
    Tram,
}

impl StopKind {
    /// The travel mode of edges leaving a stop of this kind.
    pub fn mode(&self) -> TravelMode {
        match self {
            StopKind::Bus => TravelMode::Bus,
            StopKind::Tram => TravelMode::Tram,
        }
    }
}

impl fmt::Display for StopKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.mode().fmt(f)
    }
}

/// Passenger category, which decides the transit discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PassengerCategory {
    #[default]
    #[serde(alias = "genel")]
    General,
    #[serde(alias = "ogrenci")]
    Student,
    #[serde(alias = "65+")]
    Senior,
}

impl PassengerCategory {
    /// Fraction of the base fare waived for this category.
    pub fn discount_rate(&self) -> f64 {
        match self {
            PassengerCategory::General => 0.0,
            PassengerCategory::Student => 0.5,
            PassengerCategory::Senior => 0.3,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            PassengerCategory::General => "general passenger",
            PassengerCategory::Student => "student",
            PassengerCategory::Senior => "senior",
        }
    }
}

/// How the passenger pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    #[default]
    #[serde(alias = "nakit")]
    Cash,
    #[serde(alias = "kredi")]
    Credit,
    #[serde(alias = "kentkart")]
    TransitCard,
}

impl PaymentMethod {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Credit => "credit card",
            PaymentMethod::TransitCard => "transit card",
        }
    }
}
