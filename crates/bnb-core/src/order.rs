//! # Order Types
//!
//! The normalized booking order returned on success, and its nested
//! address. These exist only for the duration of one request — nothing in
//! this crate persists them.

use serde::{Deserialize, Serialize};

use crate::currency::{Currency, USD_TO_TWD_RATE};

/// Postal address of the booked property. All parts are required,
/// non-empty strings; no further format constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub city: String,
    pub district: String,
    pub street: String,
}

/// A validated booking order.
///
/// `id`, `name`, and `address` pass through from the request unchanged;
/// `price` and `currency` may have been normalized by [`Order::into_twd`].
/// A value produced by the validation pipeline always carries
/// [`Currency::Twd`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub name: String,
    pub address: Address,
    pub price: i64,
    pub currency: Currency,
}

impl Order {
    /// Normalize the order to TWD.
    ///
    /// USD amounts are converted at the fixed [`USD_TO_TWD_RATE`]; TWD
    /// orders pass through unchanged. The price ceiling is checked on the
    /// submitted amount before this conversion runs, never on the
    /// converted amount.
    pub fn into_twd(self) -> Order {
        match self.currency {
            Currency::Twd => self,
            // Prices from the validation pipeline are within
            // [PRICE_FLOOR, PRICE_CEILING], so the multiplication never
            // saturates there; saturating keeps the arithmetic total for
            // out-of-band callers.
            Currency::Usd => Order {
                price: self.price.saturating_mul(USD_TO_TWD_RATE),
                currency: Currency::Twd,
                ..self
            },
        }
    }
}
