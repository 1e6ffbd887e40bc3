//! EFT Approval Workflow
//!
//! Manual payments: a caller claims to have paid by EFT, an operator gets an
//! email with approve/deny links, and on approval the subscription goes
//! live. Claims are PENDING until an operator resolves them and are erased
//! on either outcome.

use crate::catalog::PackageCatalog;
use crate::entitlements::{now_secs, EntitlementStore};
use crate::identity::TenantDirectory;
use crate::model::{Entitlement, IdentityHint, TenantId};
use crate::notify::{Notice, Notifier};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// Operator-facing configuration for the approval flow.
#[derive(Debug, Clone)]
pub struct ApprovalConfig {
    /// Shared secret carried on approve/deny links
    pub operator_key: String,
    /// Where claim notices go
    pub operator_email: String,
    /// Public base URL used to build the action links
    pub base_url: String,
}

/// A staged payment claim awaiting operator action.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentClaim {
    /// Resolved lazily at approval time; a claim may be staged before the
    /// tenant exists.
    pub tenant_id: Option<TenantId>,
    /// Package being purchased
    pub package_id: String,
    /// Price in rand at staging time
    pub amount: u64,
    /// Epoch millis when the claim was staged
    pub requested_at: u64,
    /// Human-typable payment reference
    pub provisional_ref: String,
    /// Raw identity fields, replayed through the resolver on approval
    pub business_name: String,
    /// Industry as supplied
    pub industry: String,
    /// Contact handle as supplied
    pub contact: String,
}

/// Input to [`ApprovalWorkflow::stage`].
#[derive(Debug, Clone, Default)]
pub struct StageRequest {
    /// Package being claimed; unknown ids fall back to the free tier
    pub package_id: String,
    /// Caller-supplied payment reference; generated when empty
    pub provisional_ref: Option<String>,
    /// Identity fields to bind the claim to
    pub identity: IdentityHint,
}

/// Result of staging a claim.
#[derive(Debug, Clone)]
pub struct StagedClaim {
    /// Token the operator action links carry
    pub token: String,
    /// Payment reference on the claim
    pub provisional_ref: String,
}

/// Result of a successful approval.
#[derive(Debug, Clone)]
pub struct ApprovalOutcome {
    /// The tenant the subscription was activated for
    pub tenant_id: TenantId,
    /// The live entitlement
    pub entitlement: Entitlement,
    /// Operator-facing HTML summary
    pub summary_html: String,
}

/// Approval workflow errors.
#[derive(Debug, thiserror::Error)]
pub enum ApprovalError {
    /// Operator key mismatch
    #[error("unauthorized")]
    Unauthorized,
    /// Token absent: never issued, or already resolved. The two are
    /// indistinguishable on purpose so double-clicked links fail quietly.
    #[error("unknown approval token")]
    UnknownToken,
}

/// The approval workflow state machine.
pub struct ApprovalWorkflow {
    claims: RwLock<HashMap<String, PaymentClaim>>,
    directory: Arc<TenantDirectory>,
    entitlements: Arc<EntitlementStore>,
    catalog: Arc<PackageCatalog>,
    notifier: Arc<dyn Notifier>,
    config: ApprovalConfig,
}

impl ApprovalWorkflow {
    /// Workflow over shared stores.
    pub fn new(
        directory: Arc<TenantDirectory>,
        entitlements: Arc<EntitlementStore>,
        catalog: Arc<PackageCatalog>,
        notifier: Arc<dyn Notifier>,
        config: ApprovalConfig,
    ) -> Self {
        Self {
            claims: RwLock::new(HashMap::new()),
            directory,
            entitlements,
            catalog,
            notifier,
            config,
        }
    }

    /// Stage a PENDING claim and notify the operator.
    ///
    /// The notice carries approve/deny links parameterized by token, the
    /// package's validity window in days, and the operator key. Notification
    /// is fire-and-forget: a delivery failure does not roll the claim back.
    pub fn stage(&self, request: StageRequest) -> StagedClaim {
        let pack = self.catalog.get_or_basic(&request.package_id).clone();
        let token = short_token();
        let provisional_ref = match request.provisional_ref {
            Some(r) if !r.trim().is_empty() => r,
            _ => provisional_ref(),
        };

        let claim = PaymentClaim {
            tenant_id: None,
            package_id: pack.id.clone(),
            amount: pack.price,
            requested_at: now_millis(),
            provisional_ref: provisional_ref.clone(),
            business_name: request.identity.name_or_default().to_string(),
            industry: request.identity.industry_or_default().to_string(),
            contact: request.identity.contact_or_none().unwrap_or("").to_string(),
        };
        self.claims.write().insert(token.clone(), claim.clone());
        tracing::info!(%token, package = %pack.id, ref_ = %provisional_ref, "EFT claim staged");

        let days = self.catalog.validity_days(&pack.id);
        let approve_link = format!(
            "{}/admin/approve?token={}&days={}&key={}",
            self.config.base_url, token, days, self.config.operator_key
        );
        let deny_link = format!(
            "{}/admin/deny?token={}&key={}",
            self.config.base_url, token, self.config.operator_key
        );
        let html = format!(
            "<h3>EFT Claim</h3>\
             <p><b>Ref:</b> {}</p>\
             <p><b>Package:</b> {} (R{})</p>\
             <p><b>Business Name:</b> {}</p>\
             <p><b>Industry:</b> {}</p>\
             <p><b>Contact:</b> {}</p>\
             <p><a href=\"{}\">✅ Approve</a> | <a href=\"{}\">❌ Deny</a></p>",
            claim.provisional_ref,
            pack.name,
            pack.price,
            claim.business_name,
            claim.industry,
            claim.contact,
            approve_link,
            deny_link,
        );
        self.notifier.deliver(Notice {
            to: self.config.operator_email.clone(),
            subject: format!("[Alice EFT] {} — Ref {}", pack.name, claim.provisional_ref),
            html,
        });

        StagedClaim {
            token,
            provisional_ref,
        }
    }

    /// Approve a claim: activate the subscription for `days` and erase the
    /// claim. A second approve of the same token is an [`ApprovalError::UnknownToken`].
    pub fn approve(
        &self,
        token: &str,
        days: u64,
        operator_key: &str,
    ) -> Result<ApprovalOutcome, ApprovalError> {
        if operator_key != self.config.operator_key {
            return Err(ApprovalError::Unauthorized);
        }
        // Consume the claim under the lock so only one approval can win.
        let claim = self
            .claims
            .write()
            .remove(token)
            .ok_or(ApprovalError::UnknownToken)?;

        let tenant_id = self.directory.resolve(&IdentityHint::new(
            claim.business_name.clone(),
            claim.industry.clone(),
            claim.contact.clone(),
        ));
        let expires_at = now_secs() + days * 86_400;
        let entitlement = self
            .entitlements
            .activate(tenant_id, &claim.package_id, Some(expires_at));

        let expires_iso = chrono::DateTime::from_timestamp(expires_at as i64, 0)
            .map(|d| d.to_rfc3339())
            .unwrap_or_default();
        let summary_html = format!(
            "<h3>Approved</h3>\
             <p><b>BusinessId:</b> {}</p>\
             <p><b>Package:</b> {}</p>\
             <p><b>Expires:</b> {}</p>\
             <p><b>Ref:</b> {}</p>\
             <p><b>Name/Industry:</b> {} / {}</p>",
            tenant_id,
            claim.package_id,
            expires_iso,
            claim.provisional_ref,
            claim.business_name,
            claim.industry,
        );
        self.notifier.deliver(Notice {
            to: self.config.operator_email.clone(),
            subject: format!("Approved: {} ({})", claim.business_name, claim.package_id),
            html: summary_html.clone(),
        });

        if looks_like_email(&claim.contact) {
            let package_name = self
                .catalog
                .get(&claim.package_id)
                .map(|p| p.name.clone())
                .unwrap_or_else(|| claim.package_id.clone());
            let welcome_html = format!(
                "<h3>Your Alice EntrepreBot subscription is active ✅</h3>\
                 <p><b>Business:</b> {} ({})</p>\
                 <p><b>Business ID:</b> {}</p>\
                 <p><b>Package:</b> {}</p>\
                 <p><b>Active until:</b> {}</p>\
                 <p>You can now ask Alice for insights, bookings, and more using your business details.</p>",
                claim.business_name, claim.industry, tenant_id, package_name, expires_iso,
            );
            self.notifier.deliver(Notice {
                to: claim.contact.clone(),
                subject: "Welcome to Alice EntrepreBot — Access Activated".into(),
                html: welcome_html,
            });
        }

        Ok(ApprovalOutcome {
            tenant_id,
            entitlement,
            summary_html,
        })
    }

    /// Deny a claim, erasing it if present. Denying an absent token is a
    /// no-op success so repeated clicks stay quiet.
    pub fn deny(&self, token: &str, operator_key: &str) -> Result<(), ApprovalError> {
        if operator_key != self.config.operator_key {
            return Err(ApprovalError::Unauthorized);
        }
        if self.claims.write().remove(token).is_some() {
            tracing::info!(%token, "EFT claim denied");
        }
        Ok(())
    }

    /// Number of claims still PENDING.
    pub fn pending(&self) -> usize {
        self.claims.read().len()
    }
}

/// Short, human-typable opaque token. Collisions inside the live claim set
/// are accepted as negligible for this token space.
fn short_token() -> String {
    Uuid::new_v4().simple().to_string()[..6].to_uppercase()
}

/// Generated payment reference, `P-XXXXXX`.
pub fn provisional_ref() -> String {
    format!("P-{}", short_token())
}

/// Structural check only; enough to know a welcome mail has somewhere to go.
fn looks_like_email(contact: &str) -> bool {
    contact.contains('@')
}

fn now_millis() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
