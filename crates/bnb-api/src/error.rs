//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Every error at this surface is a client input error and maps to
//! HTTP 400 with a JSON body — validation failures carry the field→messages
//! map, body-parse failures carry a single detail string.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use bnb_core::FieldErrorMap;

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Order validation failed (400). Body is the field→messages map.
    #[error("order validation failed on {} field(s)", .0.len())]
    Validation(FieldErrorMap),

    /// The request body could not be parsed as JSON at all — malformed
    /// syntax, wrong content type, or an over-limit body (400). No field
    /// can be attributed, so the body carries a single detail string.
    #[error("malformed request body: {0}")]
    MalformedJson(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(errors)).into_response()
            }
            Self::MalformedJson(detail) => {
                let body = serde_json::json!({ "detail": detail });
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bnb_core::FieldError;
    use http_body_util::BodyExt;

    /// Helper to extract status and JSON body from a Response.
    async fn response_parts(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        (status, body)
    }

    #[tokio::test]
    async fn validation_maps_to_400_with_error_map_body() {
        let mut errors = FieldErrorMap::new();
        errors.push("currency", FieldError::InvalidCurrency);
        let (status, body) = response_parts(ApiError::Validation(errors)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["currency"][0], "Currency format is wrong");
    }

    #[tokio::test]
    async fn malformed_json_maps_to_400_with_detail() {
        let (status, body) =
            response_parts(ApiError::MalformedJson("EOF while parsing".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["detail"].as_str().unwrap().contains("EOF"));
    }

    #[test]
    fn error_display_names_the_failing_field_count() {
        let mut errors = FieldErrorMap::new();
        errors.push("id", FieldError::Required);
        errors.push("price", FieldError::Required);
        let err = ApiError::Validation(errors);
        assert!(err.to_string().contains("2 field(s)"));
    }
}
