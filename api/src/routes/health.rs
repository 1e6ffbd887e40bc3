//! Health check endpoints

use axum::{response::IntoResponse, Json};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<&'static str>,
    pub time: String,
}

fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Service banner
pub async fn root() -> impl IntoResponse {
    Json(HealthResponse {
        ok: true,
        service: Some("Alice API"),
        time: now_iso(),
    })
}

/// Liveness check
pub async fn healthz() -> impl IntoResponse {
    Json(HealthResponse {
        ok: true,
        service: None,
        time: now_iso(),
    })
}
