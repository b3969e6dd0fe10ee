use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use serde_json::json;
use thiserror::Error;

use pricechecker_pricing::{PriceStoreError, PricingError};

use crate::app::dto::FieldErrors;

pub const NOT_FOUND_MESSAGE: &str = "Prioritized price not found for the given parameters";

/// Every failure the HTTP boundary can report.
#[derive(Debug, Error)]
pub enum ApiError {
    /// One or more request fields failed validation.
    #[error("invalid request parameters")]
    Validation(FieldErrors),

    /// The body could not be read as a price request at all.
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("prioritized price not found")]
    NotFound,

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<PricingError> for ApiError {
    fn from(err: PricingError) -> Self {
        match err {
            PricingError::NotFound { .. } => Self::NotFound,
            PricingError::Store(PriceStoreError::Unavailable(msg)) => {
                Self::Internal(format!("price store unavailable: {msg}"))
            }
            PricingError::Store(PriceStoreError::Corrupt(msg)) => {
                Self::Internal(format!("corrupt price data: {msg}"))
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(fields) => {
                tracing::warn!(?fields, "rejected price request");
                let status = StatusCode::BAD_REQUEST;
                (
                    status,
                    axum::Json(json!({
                        "timestamp": Utc::now().to_rfc3339(),
                        "status": status.as_u16(),
                        "error": "Bad Request",
                        "errors": fields,
                    })),
                )
                    .into_response()
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!(reason = %msg, "unreadable price request");
                json_error(StatusCode::BAD_REQUEST, "Bad Request", msg)
            }
            ApiError::NotFound => json_error(StatusCode::NOT_FOUND, "Not Found", NOT_FOUND_MESSAGE),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "price lookup failed");
                json_error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error",
                    msg,
                )
            }
        }
    }
}

pub fn json_error(status: StatusCode, error: &'static str, message: impl Into<String>) -> Response {
    (
        status,
        axum::Json(json!({
            "timestamp": Utc::now().to_rfc3339(),
            "status": status.as_u16(),
            "error": error,
            "message": message.into(),
        })),
    )
        .into_response()
}
