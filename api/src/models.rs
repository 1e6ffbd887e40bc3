//! API Models
//!
//! Wire JSON is camelCase throughout; that is the contract the chat agent
//! integrations were built against.

use alice_tenant::{FaqEntry, IdentityHint, Tenant, TenantId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============ Business identity ============

/// Resolve/welcome response
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessView {
    pub business_id: TenantId,
    pub business: Tenant,
}

#[derive(Debug, Deserialize)]
pub struct WelcomeRequest {
    #[serde(flatten)]
    pub identity: IdentityHint,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WelcomeResponse {
    pub ok: bool,
    pub business_id: TenantId,
    pub business: Tenant,
    pub message: String,
}

/// Explicit-create request (the only path that sets a timezone)
#[derive(Debug, Deserialize)]
pub struct BusinessCreateRequest {
    pub name: Option<String>,
    pub industry: Option<String>,
    pub timezone: Option<String>,
}

// ============ Staff ============

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffCreateRequest {
    #[serde(flatten)]
    pub identity: IdentityHint,
    pub name: Option<String>,
    pub national_id: Option<String>,
    pub pin: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffCreated {
    pub id: Uuid,
    pub business_id: TenantId,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffLoginRequest {
    #[serde(flatten)]
    pub identity: IdentityHint,
    pub name: Option<String>,
    pub national_id: Option<String>,
    pub pin: Option<String>,
}

/// Staff member as exposed to callers — never includes the pin.
#[derive(Debug, Clone, Serialize)]
pub struct StaffView {
    pub id: Uuid,
    pub name: String,
    pub role: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffLoginResponse {
    pub token: String,
    pub staff: StaffView,
    pub business_id: TenantId,
}

/// Staff record. Kept internal; credentials never serialize out.
#[derive(Debug, Clone)]
pub struct StaffMember {
    pub id: Uuid,
    pub business_id: TenantId,
    pub name: String,
    pub national_id: String,
    pub pin: String,
    pub role: String,
}

#[derive(Debug, Deserialize)]
pub struct OvertimeRequest {
    pub hours: Option<f64>,
    pub reason: Option<String>,
}

/// Clock-in/out direction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ClockDirection {
    In,
    Out,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceEvent {
    pub id: Uuid,
    pub business_id: TenantId,
    pub staff_id: Uuid,
    #[serde(rename = "type")]
    pub direction: ClockDirection,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OvertimeEntry {
    pub id: Uuid,
    pub business_id: TenantId,
    pub staff_id: Uuid,
    pub hours: f64,
    pub reason: String,
    pub status: String,
}

// ============ Bookings ============

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    pub business_id: TenantId,
    pub client_name: String,
    pub contact: String,
    pub service: String,
    pub when: String,
    pub staff_id: Option<Uuid>,
    pub notes: String,
    pub status: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingCreateRequest {
    #[serde(flatten)]
    pub identity: IdentityHint,
    pub client_name: Option<String>,
    pub client_contact: Option<String>,
    pub service: Option<String>,
    pub when: Option<String>,
    pub staff_id: Option<Uuid>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingCreated {
    pub business_id: TenantId,
    pub booking: Booking,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingList {
    pub business_id: TenantId,
    pub bookings: Vec<Booking>,
}

// ============ Leads ============

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: Uuid,
    pub business_id: TenantId,
    pub name: String,
    pub contact: String,
    pub service: String,
    pub budget: String,
    pub source: String,
    pub notes: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadCreateRequest {
    #[serde(flatten)]
    pub identity: IdentityHint,
    pub name: Option<String>,
    pub client_contact: Option<String>,
    pub service: Option<String>,
    pub budget: Option<String>,
    pub source: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadCreated {
    pub business_id: TenantId,
    pub lead: Lead,
}

// ============ FAQs ============

#[derive(Debug, Deserialize)]
pub struct FaqReplaceRequest {
    #[serde(flatten)]
    pub identity: IdentityHint,
    pub items: Option<Vec<FaqEntry>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqList {
    pub business_id: TenantId,
    pub items: Vec<FaqEntry>,
}

// ============ Insights ============

#[derive(Debug, Serialize)]
pub struct SuggestedPost {
    pub platform: &'static str,
    pub day: &'static str,
    pub time: &'static str,
    pub caption: String,
}

#[derive(Debug, Serialize)]
pub struct BestTimes {
    #[serde(rename = "Instagram")]
    pub instagram: Vec<&'static str>,
    #[serde(rename = "TikTok")]
    pub tiktok: Vec<&'static str>,
    #[serde(rename = "Facebook")]
    pub facebook: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyInsights {
    pub business_id: TenantId,
    pub week_of: String,
    pub industry: String,
    pub trends: Vec<&'static str>,
    pub suggested_posts: Vec<SuggestedPost>,
    pub best_times: BestTimes,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastRequest {
    #[serde(flatten)]
    pub identity: IdentityHint,
    pub baseline_weekly_revenue: Option<f64>,
    pub marketing_spend: Option<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssumedLifts {
    pub payday_boost: f64,
    pub trend_boost: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResponse {
    pub business_id: TenantId,
    pub baseline_weekly_revenue: f64,
    pub projected_weekly_revenue: f64,
    pub assumed_lifts: AssumedLifts,
    pub marketing_spend: f64,
    pub estimated_roi: f64,
}

// ============ Billing ============

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EftStartRequest {
    #[serde(flatten)]
    pub identity: IdentityHint,
    pub package_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EftStartResponse {
    pub ok: bool,
    pub business_id: TenantId,
    pub package_id: String,
    pub amount: u64,
    pub message: String,
    pub provisional_ref: String,
    pub business_name: String,
    pub industry: String,
    pub contact: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EftDoneRequest {
    #[serde(flatten)]
    pub identity: IdentityHint,
    pub package_id: Option<String>,
    pub provisional_ref: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EftDoneResponse {
    pub ok: bool,
    pub message: String,
    pub token: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionStatus {
    pub business_id: TenantId,
    pub active: bool,
    pub package_id: Option<String>,
    pub current_period_end: Option<u64>,
}

// ============ Admin ============

#[derive(Debug, Deserialize)]
pub struct ApproveQuery {
    pub token: Option<String>,
    pub days: Option<u64>,
    pub key: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DenyQuery {
    pub token: Option<String>,
    pub key: Option<String>,
}
