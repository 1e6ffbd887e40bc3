//! Booking endpoints

use crate::error::ApiError;
use crate::models::{Booking, BookingCreateRequest, BookingCreated, BookingList};
use crate::AppState;
use alice_tenant::IdentityHint;
use axum::extract::{Query, State};
use axum::Json;
use uuid::Uuid;

/// Bookings for the resolved business.
pub async fn list(
    State(state): State<AppState>,
    Query(hint): Query<IdentityHint>,
) -> Json<BookingList> {
    let business_id = state.directory.resolve(&hint);
    Json(BookingList {
        business_id,
        bookings: state.records.bookings_for(&business_id),
    })
}

/// Record a confirmed booking.
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<BookingCreateRequest>,
) -> Result<Json<BookingCreated>, ApiError> {
    // The business contact doubles as the booking contact when no separate
    // client contact is given.
    let contact = req
        .identity
        .contact_or_none()
        .map(str::to_string)
        .or_else(|| {
            req.client_contact
                .as_deref()
                .filter(|s| !s.trim().is_empty())
                .map(str::to_string)
        });

    let (client_name, contact, service, when) = match (
        req.client_name.as_deref().filter(|s| !s.trim().is_empty()),
        contact,
        req.service.as_deref().filter(|s| !s.trim().is_empty()),
        req.when.as_deref().filter(|s| !s.trim().is_empty()),
    ) {
        (Some(n), Some(c), Some(s), Some(w)) => (n.to_string(), c, s.to_string(), w.to_string()),
        _ => {
            return Err(ApiError::validation(
                "clientName, contact/clientContact, service, when required",
            ))
        }
    };

    let business_id = state.directory.resolve(&IdentityHint {
        business_name: req.identity.business_name.clone(),
        industry: req.identity.industry.clone(),
        contact: Some(contact.clone()),
    });

    let booking = Booking {
        id: Uuid::new_v4(),
        business_id,
        client_name,
        contact,
        service,
        when,
        staff_id: req.staff_id,
        notes: req.notes.unwrap_or_default(),
        status: "confirmed".into(),
    };
    state.records.bookings.write().push(booking.clone());

    Ok(Json(BookingCreated {
        business_id,
        booking,
    }))
}
