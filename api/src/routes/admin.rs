//! Operator approval endpoints
//!
//! The entire operator UI is two links in an email, so these respond with
//! small HTML fragments rather than JSON.

use crate::models::{ApproveQuery, DenyQuery};
use crate::AppState;
use alice_tenant::ApprovalError;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

/// Approve a staged EFT claim and activate the subscription.
pub async fn approve(State(state): State<AppState>, Query(q): Query<ApproveQuery>) -> Response {
    let token = q.token.unwrap_or_default();
    let days = q.days.unwrap_or(30);
    let key = q.key.unwrap_or_default();

    match state.approvals.approve(&token, days, &key) {
        Ok(outcome) => Html(outcome.summary_html).into_response(),
        Err(ApprovalError::Unauthorized) => {
            (StatusCode::UNAUTHORIZED, "Unauthorized").into_response()
        }
        Err(ApprovalError::UnknownToken) => {
            (StatusCode::BAD_REQUEST, "Invalid token").into_response()
        }
    }
}

/// Deny a staged EFT claim. Unknown tokens succeed quietly so a double
/// click never shows the operator an error.
pub async fn deny(State(state): State<AppState>, Query(q): Query<DenyQuery>) -> Response {
    let token = q.token.unwrap_or_default();
    let key = q.key.unwrap_or_default();

    match state.approvals.deny(&token, &key) {
        Ok(()) => Html("<h3>Denied</h3>").into_response(),
        Err(_) => (StatusCode::UNAUTHORIZED, "Unauthorized").into_response(),
    }
}
