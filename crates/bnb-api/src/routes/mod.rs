//! # API Route Modules
//!
//! - `orders` — Booking order validation and normalization endpoint.

pub mod orders;
