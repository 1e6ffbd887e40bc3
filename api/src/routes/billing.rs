//! Billing: packages, manual EFT flow, subscription status

use crate::models::{
    EftDoneRequest, EftDoneResponse, EftStartRequest, EftStartResponse, SubscriptionStatus,
};
use crate::AppState;
use alice_tenant::approvals::provisional_ref;
use alice_tenant::{IdentityHint, Package, StageRequest};
use axum::extract::State;
use axum::Json;

/// The purchasable catalog.
pub async fn packages(State(state): State<AppState>) -> Json<Vec<Package>> {
    Json(state.catalog.list())
}

/// EFT identity fields carry their own defaults so the business created by
/// the payment flow has a recognizable placeholder name.
fn eft_identity(hint: &IdentityHint) -> IdentityHint {
    IdentityHint::new(
        hint.business_name.clone().unwrap_or_else(|| "New Business".into()),
        hint.industry.clone().unwrap_or_else(|| "general".into()),
        hint.contact.clone().unwrap_or_default(),
    )
}

/// Start an EFT payment: pin the business identity and hand out bank
/// instructions with a provisional reference.
pub async fn eft_start(
    State(state): State<AppState>,
    Json(req): Json<EftStartRequest>,
) -> Json<EftStartResponse> {
    let pack = state
        .catalog
        .get_or_basic(req.package_id.as_deref().unwrap_or("basic"))
        .clone();
    let identity = eft_identity(&req.identity);
    let business_id = state.directory.resolve(&identity);

    let reference = provisional_ref();
    let message = format!(
        "💳 EFT Payment Instructions\n\
         Service: {}\n\
         Total: R{}\n\
         \n\
         Bank: FNB\n\
         Account Name: Alice N\n\
         Account Type: Cheque\n\
         Account Number: 63092455097\n\
         Reference: {}\n\
         \n\
         After payment, reply: DONE",
        pack.name, pack.price, reference
    );

    Json(EftStartResponse {
        ok: true,
        business_id,
        package_id: pack.id,
        amount: pack.price,
        message,
        provisional_ref: reference,
        business_name: identity.name_or_default().to_string(),
        industry: identity.industry_or_default().to_string(),
        contact: identity.contact_or_none().unwrap_or("").to_string(),
    })
}

/// Caller claims the EFT is done: stage the claim and notify the operator.
/// Access unlocks only after the operator approves.
pub async fn eft_done(
    State(state): State<AppState>,
    Json(req): Json<EftDoneRequest>,
) -> Json<EftDoneResponse> {
    let staged = state.approvals.stage(StageRequest {
        package_id: req.package_id.unwrap_or_else(|| "basic".into()),
        provisional_ref: req.provisional_ref,
        identity: eft_identity(&req.identity),
    });

    Json(EftDoneResponse {
        ok: true,
        message: "Claim sent to admin. You’ll be unlocked after verification.".into(),
        token: staged.token,
    })
}

/// Current subscription state for the resolved business.
pub async fn status(
    State(state): State<AppState>,
    Json(hint): Json<IdentityHint>,
) -> Json<SubscriptionStatus> {
    let business_id = state.directory.resolve(&hint);
    let sub = state.entitlements.get(&business_id);
    let now = chrono::Utc::now().timestamp() as u64;
    let active = sub
        .as_ref()
        .map(|s| s.current_period_end.map_or(true, |end| end > now))
        .unwrap_or(false);

    Json(SubscriptionStatus {
        business_id,
        active,
        package_id: sub.as_ref().map(|s| s.package_id.clone()),
        current_period_end: sub.and_then(|s| s.current_period_end),
    })
}
