//! Tenant Data Model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tenant ID
pub type TenantId = Uuid;

/// Default timezone for newly created tenants.
pub const DEFAULT_TIMEZONE: &str = "Africa/Johannesburg";

/// A business account, created on first sight of a new identity key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tenant {
    /// Unique tenant ID, immutable for the tenant's lifetime
    pub id: TenantId,
    /// Display name as supplied at creation
    pub name: String,
    /// Industry as supplied at creation
    pub industry: String,
    /// Contact handle (email or phone), if one was given
    pub contact: Option<String>,
    /// IANA timezone
    pub timezone: String,
}

/// Loosely-identifying contact tuple accepted on every request.
///
/// Missing or blank fields fall back to placeholder defaults; the caller is
/// responsible for sending consistent fields across a conversation to stay
/// mapped to the same tenant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityHint {
    /// Business display name
    pub business_name: Option<String>,
    /// Industry / vertical
    pub industry: Option<String>,
    /// Email or phone contact handle
    pub contact: Option<String>,
}

impl IdentityHint {
    /// Hint from explicit parts, mostly for tests.
    pub fn new(
        business_name: impl Into<String>,
        industry: impl Into<String>,
        contact: impl Into<String>,
    ) -> Self {
        let none_if_blank = |s: String| if s.trim().is_empty() { None } else { Some(s) };
        Self {
            business_name: none_if_blank(business_name.into()),
            industry: none_if_blank(industry.into()),
            contact: none_if_blank(contact.into()),
        }
    }

    /// Display name after defaulting.
    pub fn name_or_default(&self) -> &str {
        match self.business_name.as_deref() {
            Some(s) if !s.trim().is_empty() => s,
            _ => "Auto Business",
        }
    }

    /// Industry after defaulting.
    pub fn industry_or_default(&self) -> &str {
        match self.industry.as_deref() {
            Some(s) if !s.trim().is_empty() => s,
            _ => "general",
        }
    }

    /// Contact handle, `None` when blank.
    pub fn contact_or_none(&self) -> Option<&str> {
        match self.contact.as_deref() {
            Some(s) if !s.trim().is_empty() => Some(s),
            _ => None,
        }
    }
}

/// Entitlement status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntitlementStatus {
    /// The subscription is live
    Active,
}

/// A tenant's live subscription. At most one per tenant; a later activation
/// overwrites it, no history is kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entitlement {
    /// Package this entitlement is for
    pub package_id: String,
    /// Subscription status
    pub status: EntitlementStatus,
    /// Period end as epoch seconds; `None` means unbounded
    pub current_period_end: Option<u64>,
}

/// One FAQ entry in a tenant's knowledge base.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqEntry {
    /// Question
    pub q: String,
    /// Answer
    pub a: String,
}

/// FAQ set every new tenant starts with.
pub fn default_faqs() -> Vec<FaqEntry> {
    vec![
        FaqEntry {
            q: "What are your hours?".into(),
            a: "Mon–Sat 09:00–18:00".into(),
        },
        FaqEntry {
            q: "Do you accept walk-ins?".into(),
            a: "Yes, subject to availability.".into(),
        },
    ]
}
