//! # Order Routes
//!
//! Routes:
//! - POST /orders — Validate and normalize a booking order
//!
//! The handler is a thin shell over [`bnb_core::validate_order`]: extract
//! the raw JSON body, run the pipeline, map the result. A valid order comes
//! back normalized to TWD with 201; any violation comes back as the
//! field→messages map with 400. The raw body is extracted as
//! `serde_json::Value` so that missing or mistyped fields reach the
//! validator and are reported per field instead of dying in deserialization.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;

use bnb_core::{validate_order, Order};

use crate::error::ApiError;

/// Build the orders router.
pub fn router() -> Router {
    Router::new().route("/orders", post(create_order))
}

/// POST /orders — Validate and normalize a booking order.
///
/// Responses:
/// - 201 with the normalized order (currency always TWD)
/// - 400 with the field→messages error map
async fn create_order(
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    let Json(raw) = body.map_err(|rejection| ApiError::MalformedJson(rejection.body_text()))?;
    let order = validate_order(&raw).map_err(ApiError::Validation)?;
    Ok((StatusCode::CREATED, Json(order)))
}
