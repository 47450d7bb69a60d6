//! # Currency — Accepted Tender Codes
//!
//! Defines the `Currency` enum with the two codes the order endpoint
//! accepts. Every `match` on `Currency` must be exhaustive — adding a new
//! code forces every consumer (validation, conversion, serialization) to
//! handle it at compile time.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::FieldError;

/// Fixed USD→TWD exchange rate applied during order normalization.
///
/// A hardcoded constant by contract — there is no external rate lookup.
pub const USD_TO_TWD_RATE: i64 = 31;

/// A currency code accepted at the order endpoint.
///
/// Input orders may carry either code; after validation the order is
/// normalized so that the response currency is always [`Currency::Twd`].
/// Codes are case-sensitive on the wire (`"TWD"`, `"USD"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// New Taiwan Dollar.
    Twd,
    /// United States Dollar.
    Usd,
}

impl Currency {
    /// Returns the wire-format code for this currency.
    ///
    /// This must match the serde serialization format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Twd => "TWD",
            Self::Usd => "USD",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Currency {
    type Err = FieldError;

    /// Parse a currency from its wire-format code, case-sensitively.
    ///
    /// Any code outside the allow-list (`EUR`, `JPY`, `twd`, ...) is a
    /// client validation error, not a server fault.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TWD" => Ok(Self::Twd),
            "USD" => Ok(Self::Usd),
            _ => Err(FieldError::InvalidCurrency),
        }
    }
}
