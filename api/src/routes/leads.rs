//! Lead capture

use crate::error::ApiError;
use crate::models::{Lead, LeadCreateRequest, LeadCreated};
use crate::AppState;
use alice_tenant::IdentityHint;
use axum::extract::State;
use axum::Json;
use uuid::Uuid;

/// Record a sales lead.
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<LeadCreateRequest>,
) -> Result<Json<LeadCreated>, ApiError> {
    let contact = req
        .client_contact
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .or_else(|| req.identity.contact_or_none())
        .map(str::to_string);

    let (name, contact, service) = match (
        req.name.as_deref().filter(|s| !s.trim().is_empty()),
        contact,
        req.service.as_deref().filter(|s| !s.trim().is_empty()),
    ) {
        (Some(n), Some(c), Some(s)) => (n.to_string(), c, s.to_string()),
        _ => return Err(ApiError::validation("name, contact, service required")),
    };

    let business_id = state.directory.resolve(&IdentityHint {
        business_name: req.identity.business_name.clone(),
        industry: req.identity.industry.clone(),
        contact: Some(contact.clone()),
    });

    let lead = Lead {
        id: Uuid::new_v4(),
        business_id,
        name,
        contact,
        service,
        budget: req.budget.unwrap_or_default(),
        source: req.source.unwrap_or_default(),
        notes: req.notes.unwrap_or_default(),
    };
    state.records.leads.write().push(lead.clone());

    Ok(Json(LeadCreated { business_id, lead }))
}
