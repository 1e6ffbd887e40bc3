//! API error taxonomy

use alice_tenant::SubscriptionRequired;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Errors surfaced to API callers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Caller-fixable input problem, field-specific message
    #[error("{0}")]
    Validation(String),
    /// Bad or missing session token / operator key
    #[error("{0}")]
    Unauthorized(String),
    /// Unknown resource or approval token
    #[error("{0}")]
    NotFound(String),
    /// Gate denial: not a failure, a structured upsell
    #[error("subscription required")]
    SubscriptionRequired(SubscriptionRequired),
    /// Infrastructure failure the caller cannot fix
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Shorthand for validation failures.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

impl From<SubscriptionRequired> for ApiError {
    fn from(denial: SubscriptionRequired) -> Self {
        Self::SubscriptionRequired(denial)
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorBody { error: msg })).into_response()
            }
            ApiError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, Json(ErrorBody { error: msg })).into_response()
            }
            ApiError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorBody { error: msg })).into_response()
            }
            // 402: the paywall payload shape is a caller contract.
            ApiError::SubscriptionRequired(denial) => {
                (StatusCode::PAYMENT_REQUIRED, Json(denial)).into_response()
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: "internal error".into(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
