//! # bnb-api — Axum HTTP Surface for the BnB Stack
//!
//! Thin HTTP layer over the `bnb-core` validation pipeline. Route handlers
//! contain no business logic — they parse, delegate, and map results to
//! status codes and JSON bodies.
//!
//! ## API Surface
//!
//! | Route                   | Module             | Behavior                      |
//! |-------------------------|--------------------|-------------------------------|
//! | `POST /orders`          | [`routes::orders`] | Validate + normalize an order |
//! | `GET /health/liveness`  | crate root         | Process liveness probe        |
//! | `GET /health/readiness` | crate root         | Readiness probe               |
//!
//! ## Middleware Stack
//!
//! ```text
//! TraceLayer → DefaultBodyLimit → Handler
//! ```
//!
//! No authentication and no shared state: validation is a pure function per
//! request, so concurrent requests need no coordination.

pub mod error;
pub mod routes;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Assemble the application router with all routes and middleware.
///
/// Health probes are mounted alongside the order route; nothing here
/// requires credentials.
pub fn app() -> Router {
    // Body size limit: 1 MiB. An order payload is a few hundred bytes;
    // the limit prevents OOM from oversized request bodies.
    Router::new()
        .merge(routes::orders::router())
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness))
        .layer(DefaultBodyLimit::max(1024 * 1024))
        .layer(TraceLayer::new_for_http())
}

/// Liveness probe — always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe.
///
/// The service holds no state between calls — no database, no upstream
/// clients — so readiness reduces to liveness.
async fn readiness() -> &'static str {
    "ready"
}
