//! Package Catalog
//!
//! Static subscription offerings, loaded once at startup and never mutated.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Package id of the free tier.
pub const FREE_PACKAGE: &str = "basic";

/// A purchasable subscription package.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Package {
    /// Stable id used for gating and EFT claims
    pub id: String,
    /// Display name including the rand price point
    pub name: String,
    /// Price in rand
    pub price: u64,
    /// What the package unlocks
    pub benefits: Vec<String>,
}

/// The static package catalog.
pub struct PackageCatalog {
    packages: HashMap<String, Package>,
    order: Vec<String>,
}

impl PackageCatalog {
    /// Build the standard Alice catalog.
    pub fn new() -> Self {
        let mut packages = HashMap::new();
        let order = vec![
            "basic".to_string(),
            "pro".to_string(),
            "elite".to_string(),
            "elite_plus".to_string(),
            "elite_6mo".to_string(),
            "elite_12mo".to_string(),
        ];

        packages.insert("basic".into(), Package {
            id: "basic".into(),
            name: "R150 – Basic (Self-Service Alice EntrepreBot Assistant)".into(),
            price: 150,
            benefits: vec![
                "Weekly industry insights & trending hooks".into(),
                "What to post, when to post, which platform".into(),
                "Payday awareness (15th, 25th–30th)".into(),
                "Simple revenue forecasts".into(),
                "Core ops: Bookings, Leads, FAQs, Staff login, Agenda, Clock-in/out".into(),
            ],
        });

        packages.insert("pro".into(), Package {
            id: "pro".into(),
            name: "R250 – Pro (Alice Assistant + Virtual Consultations)".into(),
            price: 250,
            benefits: vec![
                "Everything in Basic".into(),
                "2× Virtual Consultations per month".into(),
                "Automatic reminders to staff/clients".into(),
                "Priority CEO/staff scheduling".into(),
            ],
        });

        packages.insert("elite".into(), Package {
            id: "elite".into(),
            name: "R500 – Elite (Exclusive consulting access, 30-day window)".into(),
            price: 500,
            benefits: vec![
                "Everything in Pro".into(),
                "Elite concierge access".into(),
                "30–31 day strategy window per cycle".into(),
                "Creation cap: up to 6 assets (images/mockups/PDF/docs) per 30 days".into(),
                "Tailored insights, competitor checks, ROI planning".into(),
            ],
        });

        packages.insert("elite_plus".into(), Package {
            id: "elite_plus".into(),
            name: "R1000 – Elite+ Monthly (expanded creation cap)".into(),
            price: 1000,
            benefits: vec![
                "Everything in Elite".into(),
                "30–31 day strategy & campaign planning per cycle".into(),
                "Creation cap: up to 15 assets per 30 days".into(),
                "Priority turnarounds & extended reviews".into(),
            ],
        });

        packages.insert("elite_6mo".into(), Package {
            id: "elite_6mo".into(),
            name: "R4000 – Elite (6 Months, upfront)".into(),
            price: 4000,
            benefits: vec![
                "6-month engagement, upfront payment".into(),
                "Half-year roadmaps & projects (plan for the year, deliver 6 months)".into(),
                "All creation needs unlocked (fair-use), priority support".into(),
                "Mid-cycle reviews & adjustments".into(),
            ],
        });

        packages.insert("elite_12mo".into(), Package {
            id: "elite_12mo".into(),
            name: "R7000 – Elite (12 Months, upfront)".into(),
            price: 7000,
            benefits: vec![
                "12-month engagement, upfront payment".into(),
                "Annual plan, quarterly reviews, all creation unlocked (fair-use)".into(),
                "Full campaign orchestration & premium analytics".into(),
                "Highest priority, annual retrospective & replan".into(),
            ],
        });

        Self { packages, order }
    }

    /// Look up a package by id.
    pub fn get(&self, id: &str) -> Option<&Package> {
        self.packages.get(id)
    }

    /// Look up a package, falling back to the free tier for unknown ids.
    pub fn get_or_basic(&self, id: &str) -> &Package {
        self.packages
            .get(id)
            .unwrap_or_else(|| &self.packages[FREE_PACKAGE])
    }

    /// All packages in display order.
    pub fn list(&self) -> Vec<Package> {
        self.order
            .iter()
            .filter_map(|id| self.packages.get(id).cloned())
            .collect()
    }

    /// Subscription validity in days for a package. The upfront engagements
    /// map to their full term, everything else to a 30-day cycle.
    pub fn validity_days(&self, package_id: &str) -> u64 {
        match package_id {
            "elite_6mo" => 180,
            "elite_12mo" => 365,
            _ => 30,
        }
    }
}

impl Default for PackageCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_all_six_packages() {
        let catalog = PackageCatalog::new();
        for id in ["basic", "pro", "elite", "elite_plus", "elite_6mo", "elite_12mo"] {
            assert!(catalog.get(id).is_some(), "missing {id}");
        }
        assert_eq!(catalog.list().len(), 6);
    }

    #[test]
    fn unknown_package_falls_back_to_basic() {
        let catalog = PackageCatalog::new();
        assert_eq!(catalog.get_or_basic("platinum").id, "basic");
    }

    #[test]
    fn validity_days_mapping() {
        let catalog = PackageCatalog::new();
        assert_eq!(catalog.validity_days("elite_6mo"), 180);
        assert_eq!(catalog.validity_days("elite_12mo"), 365);
        assert_eq!(catalog.validity_days("basic"), 30);
        assert_eq!(catalog.validity_days("elite_plus"), 30);
    }

    #[test]
    fn list_keeps_display_order() {
        let catalog = PackageCatalog::new();
        let ids: Vec<_> = catalog.list().into_iter().map(|p| p.id).collect();
        assert_eq!(ids[0], "basic");
        assert_eq!(ids[5], "elite_12mo");
    }
}
