//! # bnb-core — Booking Order Domain
//!
//! Domain types and the validation pipeline for hotel-booking orders.
//! The API layer hands this crate a raw JSON payload; it hands back either
//! a normalized [`Order`] or a [`FieldErrorMap`] ready for serialization
//! into an HTTP 400 body.
//!
//! ## Pipeline
//!
//! 1. Field-level checks — every field is validated independently and all
//!    errors are accumulated per field (no fail-fast).
//! 2. Cross-field normalization — USD amounts are converted to TWD at the
//!    fixed rate; a validated order always carries TWD.
//!
//! ## Crate Policy
//!
//! - Pure functions of input to output. No I/O, no async, no shared state.
//! - Error messages in this crate are client-facing contract strings — do
//!   not reword them without versioning the API.

pub mod currency;
pub mod error;
pub mod order;
pub mod validate;

pub use currency::{Currency, USD_TO_TWD_RATE};
pub use error::{FieldError, FieldErrorMap};
pub use order::{Address, Order};
pub use validate::{validate_order, PRICE_CEILING, PRICE_FLOOR};
