//! Business Identity Resolution
//!
//! Maps loosely-identifying contact tuples to a stable tenant id, creating
//! the tenant on first sight. No business id is ever required from callers:
//! every request carries name/industry/contact and re-resolves.

use crate::model::{default_faqs, FaqEntry, IdentityHint, Tenant, TenantId, DEFAULT_TIMEZONE};
use parking_lot::RwLock;
use std::collections::HashMap;
use uuid::Uuid;

fn norm(s: &str) -> String {
    s.trim().to_lowercase()
}

struct Inner {
    tenants: HashMap<TenantId, Tenant>,
    /// Identity index: "name|industry" and "c:<contact>" keys
    index: HashMap<String, TenantId>,
    faqs: HashMap<TenantId, Vec<FaqEntry>>,
}

/// Tenant directory: the resolve-or-create identity store.
pub struct TenantDirectory {
    inner: RwLock<Inner>,
}

impl TenantDirectory {
    /// Empty directory.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                tenants: HashMap::new(),
                index: HashMap::new(),
                faqs: HashMap::new(),
            }),
        }
    }

    /// Resolve a hint to a tenant id, creating the tenant on a double miss.
    ///
    /// Candidate keys are `norm(name)|norm(industry)` and, when a contact is
    /// given, `c:norm(contact)`. Lookup checks the name key first, then the
    /// contact key; the first hit wins. A freshly created tenant registers
    /// both keys, so either identity form converges on the same id later.
    /// Infallible: a call always matches or creates.
    pub fn resolve(&self, hint: &IdentityHint) -> TenantId {
        let name = hint.name_or_default().to_string();
        let industry = hint.industry_or_default().to_string();
        let contact = hint.contact_or_none().map(str::to_string);

        let key1 = format!("{}|{}", norm(&name), norm(&industry));
        let key2 = contact.as_deref().map(|c| format!("c:{}", norm(c)));

        // Whole sequence under one write lock so a racing duplicate hint
        // cannot create two tenants.
        let mut inner = self.inner.write();

        let hit = inner
            .index
            .get(&key1)
            .or_else(|| key2.as_ref().and_then(|k| inner.index.get(k)))
            .copied();
        if let Some(id) = hit {
            return id;
        }

        let id = Uuid::new_v4();
        tracing::info!(tenant = %id, %name, %industry, "registered new business");
        inner.tenants.insert(
            id,
            Tenant {
                id,
                name,
                industry,
                contact,
                timezone: DEFAULT_TIMEZONE.into(),
            },
        );
        inner.faqs.insert(id, default_faqs());
        inner.index.insert(key1, id);
        if let Some(k) = key2 {
            inner.index.insert(k, id);
        }
        id
    }

    /// Get a tenant record.
    pub fn get(&self, id: &TenantId) -> Option<Tenant> {
        self.inner.read().tenants.get(id).cloned()
    }

    /// Tenant count.
    pub fn count(&self) -> usize {
        self.inner.read().tenants.len()
    }

    /// Override a tenant's timezone (explicit-create path).
    pub fn set_timezone(&self, id: &TenantId, timezone: &str) {
        if let Some(t) = self.inner.write().tenants.get_mut(id) {
            t.timezone = timezone.to_string();
        }
    }

    /// A tenant's FAQ set.
    pub fn faqs(&self, id: &TenantId) -> Vec<FaqEntry> {
        self.inner.read().faqs.get(id).cloned().unwrap_or_default()
    }

    /// Replace a tenant's FAQ set wholesale.
    pub fn set_faqs(&self, id: &TenantId, items: Vec<FaqEntry>) {
        self.inner.write().faqs.insert(*id, items);
    }
}

impl Default for TenantDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_is_idempotent() {
        let dir = TenantDirectory::new();
        let hint = IdentityHint::new("Acme", "salon", "a@x.com");

        let first = dir.resolve(&hint);
        let second = dir.resolve(&hint);

        assert_eq!(first, second);
        assert_eq!(dir.count(), 1);
    }

    #[test]
    fn adding_contact_later_does_not_fork_the_tenant() {
        let dir = TenantDirectory::new();

        let bare = dir.resolve(&IdentityHint::new("Acme", "salon", ""));
        let with_contact = dir.resolve(&IdentityHint::new("Acme", "salon", "a@x.com"));

        assert_eq!(bare, with_contact);
        assert_eq!(dir.count(), 1);
    }

    #[test]
    fn contact_key_converges_on_the_same_tenant() {
        let dir = TenantDirectory::new();

        let by_name = dir.resolve(&IdentityHint::new("Acme", "salon", "a@x.com"));
        let by_contact_only = dir.resolve(&IdentityHint::new("", "", "a@x.com"));

        assert_eq!(by_name, by_contact_only);
    }

    #[test]
    fn normalization_folds_case_and_whitespace() {
        let dir = TenantDirectory::new();

        let a = dir.resolve(&IdentityHint::new("  ACME ", "Salon", ""));
        let b = dir.resolve(&IdentityHint::new("acme", "salon  ", ""));

        assert_eq!(a, b);
    }

    #[test]
    fn new_tenant_gets_defaults() {
        let dir = TenantDirectory::new();
        let id = dir.resolve(&IdentityHint::default());

        let tenant = dir.get(&id).unwrap();
        assert_eq!(tenant.name, "Auto Business");
        assert_eq!(tenant.industry, "general");
        assert_eq!(tenant.timezone, DEFAULT_TIMEZONE);
        assert_eq!(dir.faqs(&id).len(), 2);
    }

    #[test]
    fn distinct_identities_get_distinct_tenants() {
        let dir = TenantDirectory::new();

        let a = dir.resolve(&IdentityHint::new("Acme", "salon", ""));
        let b = dir.resolve(&IdentityHint::new("Acme", "barber", ""));

        assert_ne!(a, b);
        assert_eq!(dir.count(), 2);
    }
}
