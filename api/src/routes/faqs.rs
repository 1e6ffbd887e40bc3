//! FAQ endpoints

use crate::error::ApiError;
use crate::models::{FaqList, FaqReplaceRequest};
use crate::AppState;
use alice_tenant::{IdentityHint, TenantId};
use axum::extract::{Query, State};
use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqReplaced {
    pub business_id: TenantId,
    pub ok: bool,
}

/// A business's FAQ set (seeded with defaults at creation).
pub async fn list(
    State(state): State<AppState>,
    Query(hint): Query<IdentityHint>,
) -> Json<FaqList> {
    let business_id = state.directory.resolve(&hint);
    Json(FaqList {
        business_id,
        items: state.directory.faqs(&business_id),
    })
}

/// Replace the FAQ set wholesale.
pub async fn replace(
    State(state): State<AppState>,
    Json(req): Json<FaqReplaceRequest>,
) -> Result<Json<FaqReplaced>, ApiError> {
    let items = req
        .items
        .ok_or_else(|| ApiError::validation("items array required"))?;
    let business_id = state.directory.resolve(&req.identity);
    state.directory.set_faqs(&business_id, items);
    Ok(Json(FaqReplaced {
        business_id,
        ok: true,
    }))
}
