//! Staff endpoints: accounts, login, agenda, attendance, overtime

use crate::auth;
use crate::error::ApiError;
use crate::models::{
    AttendanceEvent, Booking, ClockDirection, OvertimeEntry, OvertimeRequest, StaffCreateRequest,
    StaffCreated, StaffLoginRequest, StaffLoginResponse, StaffMember, StaffView,
};
use crate::AppState;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Serialize)]
pub struct AgendaResponse {
    pub bookings: Vec<Booking>,
}

#[derive(Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

/// Register a staff member under the resolved business.
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<StaffCreateRequest>,
) -> Result<Json<StaffCreated>, ApiError> {
    let name = non_blank(&req.name).ok_or_else(missing_staff_fields)?;
    let national_id = non_blank(&req.national_id).ok_or_else(missing_staff_fields)?;
    let pin = non_blank(&req.pin).ok_or_else(missing_staff_fields)?;

    let business_id = state.directory.resolve(&req.identity);
    let member = StaffMember {
        id: Uuid::new_v4(),
        business_id,
        name,
        national_id,
        pin,
        role: req.role.unwrap_or_else(|| "staff".into()),
    };
    let id = member.id;
    state.records.staff.write().push(member);

    Ok(Json(StaffCreated { id, business_id }))
}

/// Credential login issuing an 8-hour session token.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<StaffLoginRequest>,
) -> Result<Json<StaffLoginResponse>, ApiError> {
    let business_id = state.directory.resolve(&req.identity);
    let member = state
        .records
        .find_staff(
            &business_id,
            req.name.as_deref().unwrap_or(""),
            req.national_id.as_deref().unwrap_or(""),
            req.pin.as_deref().unwrap_or(""),
        )
        .ok_or_else(|| ApiError::Unauthorized("Invalid credentials".into()))?;

    let token = auth::create_token(&state.config.jwt_secret, member.id, business_id, &member.role)
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(Json(StaffLoginResponse {
        token,
        staff: StaffView {
            id: member.id,
            name: member.name,
            role: member.role,
        },
        business_id,
    }))
}

/// The logged-in staff member's non-cancelled bookings.
pub async fn agenda(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<AgendaResponse>, ApiError> {
    let claims = auth::require_staff(&headers, &state.config.jwt_secret)?;
    let bookings = state
        .records
        .agenda_for(&claims.business_id, &claims.staff_id);
    Ok(Json(AgendaResponse { bookings }))
}

/// Clock in.
pub async fn clock_in(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<OkResponse>, ApiError> {
    record_attendance(&state, &headers, ClockDirection::In)
}

/// Clock out.
pub async fn clock_out(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<OkResponse>, ApiError> {
    record_attendance(&state, &headers, ClockDirection::Out)
}

/// File an overtime request; stays pending until reviewed.
pub async fn overtime(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<OvertimeRequest>,
) -> Result<Json<OvertimeEntry>, ApiError> {
    let claims = auth::require_staff(&headers, &state.config.jwt_secret)?;
    let hours = match req.hours {
        Some(h) if h > 0.0 => h,
        _ => return Err(ApiError::validation("hours must be positive")),
    };

    let entry = OvertimeEntry {
        id: Uuid::new_v4(),
        business_id: claims.business_id,
        staff_id: claims.staff_id,
        hours,
        reason: req.reason.unwrap_or_default(),
        status: "pending".into(),
    };
    state.records.overtime.write().push(entry.clone());
    Ok(Json(entry))
}

fn record_attendance(
    state: &AppState,
    headers: &HeaderMap,
    direction: ClockDirection,
) -> Result<Json<OkResponse>, ApiError> {
    let claims = auth::require_staff(headers, &state.config.jwt_secret)?;
    state.records.attendance.write().push(AttendanceEvent {
        id: Uuid::new_v4(),
        business_id: claims.business_id,
        staff_id: claims.staff_id,
        direction,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    });
    Ok(Json(OkResponse { ok: true }))
}

fn non_blank(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

fn missing_staff_fields() -> ApiError {
    ApiError::validation("name, nationalId, pin required")
}
