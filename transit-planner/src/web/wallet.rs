//! Payment simulation.
//!
//! A wallet holds the passenger's balance for one payment method. Charges
//! succeed only when the balance covers the whole amount.

use serde::Serialize;

use crate::domain::{PaymentMethod, round_to};

/// Outcome of a single charge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentReceipt {
    pub success: bool,
    pub message: String,
    /// Balance left after the charge (unchanged on failure)
    pub remaining: f64,
}

/// A balance held in one payment method: cash in hand, remaining credit
/// limit, or transit card credit.
#[derive(Debug, Clone, PartialEq)]
pub struct Wallet {
    method: PaymentMethod,
    balance: f64,
}

impl Wallet {
    pub fn new(method: PaymentMethod, balance: f64) -> Self {
        Self {
            method,
            balance: round_to(balance, 2),
        }
    }

    pub fn method(&self) -> PaymentMethod {
        self.method
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Deduct `amount` if the balance covers it.
    pub fn charge(&mut self, amount: f64) -> PaymentReceipt {
        let label = self.method.label();
        if self.balance + 1e-9 < amount {
            return PaymentReceipt {
                success: false,
                message: format!("{label}: {}", self.shortfall_message()),
                remaining: self.balance,
            };
        }

        self.balance = round_to((self.balance - amount).max(0.0), 2);
        let remaining_name = self.remaining_name();
        PaymentReceipt {
            success: true,
            message: format!(
                "{label}: paid {amount:.2}, {remaining_name} {:.2}",
                self.balance
            ),
            remaining: self.balance,
        }
    }

    fn shortfall_message(&self) -> &'static str {
        match self.method {
            PaymentMethod::Cash => "not enough cash",
            PaymentMethod::Credit => "credit limit exceeded",
            PaymentMethod::TransitCard => "not enough card balance",
        }
    }

    fn remaining_name(&self) -> &'static str {
        match self.method {
            PaymentMethod::Credit => "remaining limit",
            PaymentMethod::Cash | PaymentMethod::TransitCard => "remaining balance",
        }
    }
}
