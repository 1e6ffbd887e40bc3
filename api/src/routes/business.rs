//! Onboarding and business identity endpoints

use crate::error::ApiError;
use crate::models::{BusinessCreateRequest, BusinessView, WelcomeRequest, WelcomeResponse};
use crate::AppState;
use alice_tenant::{IdentityHint, TenantId};
use axum::extract::State;
use axum::Json;

fn lookup(state: &AppState, id: TenantId) -> Result<BusinessView, ApiError> {
    let business = state
        .directory
        .get(&id)
        .ok_or_else(|| ApiError::NotFound("business not found".into()))?;
    Ok(BusinessView {
        business_id: id,
        business,
    })
}

/// Collect details and create/match a business immediately.
pub async fn welcome(
    State(state): State<AppState>,
    Json(req): Json<WelcomeRequest>,
) -> Result<Json<WelcomeResponse>, ApiError> {
    let name = req
        .identity
        .business_name
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| ApiError::validation("businessName and industry required"))?
        .to_string();
    let industry = req
        .identity
        .industry
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| ApiError::validation("businessName and industry required"))?
        .to_string();

    let id = state.directory.resolve(&req.identity);
    let view = lookup(&state, id)?;

    let contact_part = req
        .identity
        .contact_or_none()
        .map(|c| format!(" with contact {c}"))
        .unwrap_or_default();
    let message = format!(
        "Welcome to Alice ✨ — I’ve registered **{name}** ({industry}){contact_part}. We’re ready to proceed."
    );

    Ok(Json(WelcomeResponse {
        ok: true,
        business_id: view.business_id,
        business: view.business,
        message,
    }))
}

/// Resolve or create a business and return its id.
pub async fn resolve(
    State(state): State<AppState>,
    Json(hint): Json<IdentityHint>,
) -> Result<Json<BusinessView>, ApiError> {
    let id = state.directory.resolve(&hint);
    Ok(Json(lookup(&state, id)?))
}

/// Explicit create with an optional timezone override.
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<BusinessCreateRequest>,
) -> Result<Json<BusinessView>, ApiError> {
    let name = req
        .name
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| ApiError::validation("name and industry required"))?;
    let industry = req
        .industry
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| ApiError::validation("name and industry required"))?;

    let id = state.directory.resolve(&IdentityHint::new(name, industry, ""));
    if let Some(tz) = req.timezone.as_deref().filter(|s| !s.trim().is_empty()) {
        state.directory.set_timezone(&id, tz);
    }
    Ok(Json(lookup(&state, id)?))
}
