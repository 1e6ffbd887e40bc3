//! Entitlement Store and Feature Gate
//!
//! Per-tenant subscription state plus free-tier usage counters, and the
//! request-time admit/deny decision composed with identity resolution.

use crate::catalog::{Package, PackageCatalog, FREE_PACKAGE};
use crate::identity::TenantDirectory;
use crate::model::{Entitlement, EntitlementStatus, IdentityHint, TenantId};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Free calls a tenant gets on the free tier before being gated.
pub const FREE_CALL_LIMIT: u64 = 40;

const UPSELL_MESSAGE: &str =
    "Choose a package to continue: R150 / R250 / R500 / R1000 / R4000 / R7000";

/// Subscription state and usage counters, keyed by tenant.
pub struct EntitlementStore {
    subscriptions: RwLock<HashMap<TenantId, Entitlement>>,
    /// Monotonic free-tier call counters; never reset within the process.
    usage: RwLock<HashMap<TenantId, u64>>,
}

impl EntitlementStore {
    /// Empty store.
    pub fn new() -> Self {
        Self {
            subscriptions: RwLock::new(HashMap::new()),
            usage: RwLock::new(HashMap::new()),
        }
    }

    /// Activate a subscription, overwriting any previous entitlement.
    pub fn activate(&self, tenant: TenantId, package_id: &str, period_end: Option<u64>) -> Entitlement {
        let entitlement = Entitlement {
            package_id: package_id.to_string(),
            status: EntitlementStatus::Active,
            current_period_end: period_end,
        };
        self.subscriptions.write().insert(tenant, entitlement.clone());
        tracing::info!(%tenant, package = package_id, ?period_end, "subscription activated");
        entitlement
    }

    /// The tenant's current entitlement, if any.
    pub fn get(&self, tenant: &TenantId) -> Option<Entitlement> {
        self.subscriptions.read().get(tenant).cloned()
    }

    /// True iff the tenant holds an active entitlement for exactly this
    /// package. No tier hierarchy: a higher package never satisfies a lower
    /// gate. An unset period end means the subscription is unbounded.
    pub fn is_entitled(&self, tenant: &TenantId, package_id: &str, now: u64) -> bool {
        self.subscriptions.read().get(tenant).is_some_and(|e| {
            e.status == EntitlementStatus::Active
                && e.package_id == package_id
                && e.current_period_end.map_or(true, |end| end > now)
        })
    }

    /// The tenant's free-tier usage count.
    pub fn usage(&self, tenant: &TenantId) -> u64 {
        self.usage.read().get(tenant).copied().unwrap_or(0)
    }

    /// Request-time admit decision for one feature call.
    ///
    /// Free tier: the counter is incremented unconditionally, even on the
    /// call that will be denied, so it records demand past the ceiling
    /// rather than stopping at it. Paid packages get no free allowance.
    pub fn admit(&self, tenant: &TenantId, package_id: &str, now: u64) -> Admission {
        if self.is_entitled(tenant, package_id, now) {
            return Admission::Granted;
        }
        if package_id == FREE_PACKAGE {
            let count = {
                let mut usage = self.usage.write();
                let count = usage.entry(*tenant).or_insert(0);
                *count += 1;
                *count
            };
            if count <= FREE_CALL_LIMIT {
                return Admission::Granted;
            }
            tracing::debug!(%tenant, count, "free-tier ceiling exceeded");
        }
        Admission::Denied
    }
}

impl Default for EntitlementStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of an admit check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// The call may proceed
    Granted,
    /// Subscription required
    Denied,
}

/// The structured paywall response. Shape is a contract for callers deciding
/// what to upsell; do not change field names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionRequired {
    /// Always `"Subscription required"`
    pub error: String,
    /// Human-readable upsell line
    pub message: String,
    /// The full purchasable catalog
    pub packages: Vec<Package>,
}

/// Request gate: resolves identity, then admits or denies against the
/// entitlement store.
pub struct Gate {
    directory: Arc<TenantDirectory>,
    entitlements: Arc<EntitlementStore>,
    catalog: Arc<PackageCatalog>,
}

impl Gate {
    /// Gate over shared stores.
    pub fn new(
        directory: Arc<TenantDirectory>,
        entitlements: Arc<EntitlementStore>,
        catalog: Arc<PackageCatalog>,
    ) -> Self {
        Self {
            directory,
            entitlements,
            catalog,
        }
    }

    /// Resolve the caller's identity and decide whether this feature call
    /// runs. Denials enumerate the purchasable packages.
    pub fn pass(
        &self,
        hint: &IdentityHint,
        package_id: &str,
    ) -> Result<TenantId, SubscriptionRequired> {
        let tenant = self.directory.resolve(hint);
        match self.entitlements.admit(&tenant, package_id, now_secs()) {
            Admission::Granted => Ok(tenant),
            Admission::Denied => Err(SubscriptionRequired {
                error: "Subscription required".into(),
                message: UPSELL_MESSAGE.into(),
                packages: self.catalog.list(),
            }),
        }
    }
}

pub(crate) fn now_secs() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
