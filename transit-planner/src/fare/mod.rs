//! Fare policy.
//!
//! Turns a segment's base price into the amount actually charged, given the
//! travel mode, the passenger category, the payment method, the special-day
//! flag and whether the segment is the first boarding after a transfer.
//!
//! Rules, in order of precedence:
//!
//! 1. Taxi is always charged in full.
//! 2. Walking is free.
//! 3. On a special day all transit (bus, tram, transfer) is free.
//! 4. Credit card payment gets no transit discount.
//! 5. Transfers are charged at the raw transfer fee.
//! 6. Bus and tram paid by cash or transit card get the category discount,
//!    except that a transit-card boarding immediately after a transfer gets
//!    no discount.

use crate::domain::{PassengerCategory, PaymentMethod, Query, TravelMode, round_to};

/// The charge for one segment and the reason for it.
#[derive(Debug, Clone, PartialEq)]
pub struct FareQuote {
    pub final_cost: f64,
    pub explanation: String,
}

impl FareQuote {
    fn new(cost: f64, explanation: impl Into<String>) -> Self {
        Self {
            final_cost: round_to(cost.max(0.0), 2),
            explanation: explanation.into(),
        }
    }
}

/// The fare-relevant parts of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FarePolicy {
    pub passenger: PassengerCategory,
    pub payment: PaymentMethod,
    pub special_day: bool,
}

impl FarePolicy {
    pub fn new(passenger: PassengerCategory, payment: PaymentMethod, special_day: bool) -> Self {
        Self {
            passenger,
            payment,
            special_day,
        }
    }

    /// Price a segment with base fare `base_cost`.
    ///
    /// `transfer_pending` is true when this segment is the first bus or tram
    /// boarding after a transfer.
    pub fn quote(&self, base_cost: f64, mode: TravelMode, transfer_pending: bool) -> FareQuote {
        match mode {
            TravelMode::Taxi => return FareQuote::new(base_cost, "taxi: full fare"),
            TravelMode::Walk => return FareQuote::new(0.0, "walking: free"),
            TravelMode::Bus | TravelMode::Tram | TravelMode::Transfer => {}
        }

        if self.special_day {
            return FareQuote::new(0.0, "special day: free");
        }

        if self.payment == PaymentMethod::Credit {
            return FareQuote::new(base_cost, "credit card: no discount");
        }

        if mode == TravelMode::Transfer {
            return FareQuote::new(base_cost, "transfer fee: no discount");
        }

        if transfer_pending && self.payment == PaymentMethod::TransitCard {
            return FareQuote::new(
                base_cost,
                "transit card: no discount on the boarding after a transfer",
            );
        }

        let rate = self.passenger.discount_rate();
        let explanation = if rate > 0.0 {
            format!(
                "{} discount ({}%, {})",
                self.passenger.label(),
                (rate * 100.0).round(),
                self.payment.label()
            )
        } else {
            format!("{} ({}): no discount", self.passenger.label(), self.payment.label())
        };

        FareQuote::new(base_cost * (1.0 - rate), explanation)
    }
}

impl From<&Query> for FarePolicy {
    fn from(query: &Query) -> Self {
        FarePolicy::new(query.passenger, query.payment, query.special_day)
    }
}

/// Price a single segment.
///
/// # Examples
///
/// ```
/// use transit_planner::domain::{PassengerCategory, PaymentMethod, TravelMode};
/// use transit_planner::fare::price;
///
/// let quote = price(
///     100.0,
///     TravelMode::Bus,
///     PassengerCategory::Student,
///     PaymentMethod::Cash,
///     false,
///     false,
/// );
/// assert_eq!(quote.final_cost, 50.0);
/// ```
pub fn price(
    base_cost: f64,
    mode: TravelMode,
    passenger: PassengerCategory,
    payment: PaymentMethod,
    special_day: bool,
    transfer_pending: bool,
) -> FareQuote {
    FarePolicy::new(passenger, payment, special_day).quote(base_cost, mode, transfer_pending)
}
