//! Staff JWT sessions
//!
//! Staff log in with business identity plus name/nationalId/pin and get an
//! 8-hour HS256 token carrying `{ staffId, businessId, role }`.

use crate::error::ApiError;
use alice_tenant::TenantId;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims carried in a staff session token.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffClaims {
    /// Staff member id
    pub staff_id: Uuid,
    /// Tenant the staff member belongs to
    pub business_id: TenantId,
    /// Role string, `"staff"` unless set otherwise
    pub role: String,
    /// Expiry, epoch seconds
    pub exp: usize,
}

/// Issue a staff session token valid for 8 hours.
pub fn create_token(
    secret: &str,
    staff_id: Uuid,
    business_id: TenantId,
    role: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let exp = chrono::Utc::now()
        .checked_add_signed(chrono::Duration::hours(8))
        .map(|t| t.timestamp() as usize)
        .unwrap_or(usize::MAX);

    let claims = StaffClaims {
        staff_id,
        business_id,
        role: role.to_string(),
        exp,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Verify a staff session token.
pub fn verify_token(secret: &str, token: &str) -> Result<StaffClaims, jsonwebtoken::errors::Error> {
    let data = decode::<StaffClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(data.claims)
}

/// Extract and verify the bearer token from request headers.
pub fn require_staff(headers: &HeaderMap, secret: &str) -> Result<StaffClaims, ApiError> {
    let auth = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ApiError::Unauthorized("Missing Authorization header".into()))?;
    let token = auth.strip_prefix("Bearer ").unwrap_or(auth).trim();
    verify_token(secret, token)
        .map_err(|_| ApiError::Unauthorized("Invalid or expired token".into()))
}
