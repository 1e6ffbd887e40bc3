//! Alice EntrepreBot API
//!
//! REST backend for SME businesses: bookings, leads, FAQs, staff attendance,
//! weekly insights, and EFT-gated premium packages. No business id is ever
//! required from callers — every request carries loose identity fields
//! (businessName / industry / contact) and is resolved to a tenant on entry.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────────┐
//! │                         ALICE REST API                             │
//! │                                                                    │
//! │  onboard │ business │ staff │ bookings │ leads │ faqs │ insights   │
//! │  billing (packages, EFT start/done, status) │ admin approve/deny   │
//! │                                                                    │
//! │  ┌──────────────────────────────────────────────────────────────┐  │
//! │  │  alice-tenant core: TenantDirectory · EntitlementStore ·     │  │
//! │  │  Gate · ApprovalWorkflow · Notifier                          │  │
//! │  └──────────────────────────────────────────────────────────────┘  │
//! └────────────────────────────────────────────────────────────────────┘
//! ```

#![allow(dead_code)]

pub mod auth;
pub mod config;
pub mod error;
pub mod mailer;
pub mod models;
pub mod routes;
pub mod store;

use alice_tenant::{
    ApprovalConfig, ApprovalWorkflow, EntitlementStore, Gate, Notifier, NullNotifier,
    PackageCatalog, TenantDirectory,
};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use config::Config;
use mailer::RelayMailer;
use store::Records;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Identity resolve-or-create store
    pub directory: Arc<TenantDirectory>,
    /// Subscriptions and free-tier counters
    pub entitlements: Arc<EntitlementStore>,
    /// Static package catalog
    pub catalog: Arc<PackageCatalog>,
    /// Pending EFT claims
    pub approvals: Arc<ApprovalWorkflow>,
    /// Identity + entitlement admit decision
    pub gate: Arc<Gate>,
    /// Bookings/leads/staff/attendance/overtime
    pub records: Arc<Records>,
    /// Runtime configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// State with the notifier implied by the config: an HTTP mail relay
    /// when one is configured, otherwise notices are dropped.
    pub fn new(config: Config) -> Self {
        let notifier: Arc<dyn Notifier> = match &config.mail_relay_url {
            Some(url) => Arc::new(RelayMailer::new(url.clone())),
            None => Arc::new(NullNotifier),
        };
        Self::with_notifier(config, notifier)
    }

    /// State with an explicit notifier (tests inject a recorder here).
    pub fn with_notifier(config: Config, notifier: Arc<dyn Notifier>) -> Self {
        let directory = Arc::new(TenantDirectory::new());
        let entitlements = Arc::new(EntitlementStore::new());
        let catalog = Arc::new(PackageCatalog::new());
        let gate = Arc::new(Gate::new(
            directory.clone(),
            entitlements.clone(),
            catalog.clone(),
        ));
        let approvals = Arc::new(ApprovalWorkflow::new(
            directory.clone(),
            entitlements.clone(),
            catalog.clone(),
            notifier,
            ApprovalConfig {
                operator_key: config.admin_key.clone(),
                operator_email: config.admin_email.clone(),
                base_url: config.base_url.clone(),
            },
        ));
        Self {
            directory,
            entitlements,
            catalog,
            approvals,
            gate,
            records: Arc::new(Records::new()),
            config: Arc::new(config),
        }
    }
}

/// Build the API router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/", get(routes::health::root))
        .route("/healthz", get(routes::health::healthz))
        // Onboarding & business identity
        .route("/onboard/welcome", post(routes::business::welcome))
        .route("/business/resolve", post(routes::business::resolve))
        .route("/business/create", post(routes::business::create))
        // Staff (JWT-backed features)
        .route("/staff/create", post(routes::staff::create))
        .route("/staff/login", post(routes::staff::login))
        .route("/staff/agenda", get(routes::staff::agenda))
        .route("/staff/clock-in", post(routes::staff::clock_in))
        .route("/staff/clock-out", post(routes::staff::clock_out))
        .route("/staff/overtime", post(routes::staff::overtime))
        // Business records
        .route(
            "/bookings",
            get(routes::bookings::list).post(routes::bookings::create),
        )
        .route("/leads", post(routes::leads::create))
        .route(
            "/faqs",
            get(routes::faqs::list).post(routes::faqs::replace),
        )
        // Insights (gated on the free tier)
        .route("/insights/weekly", post(routes::insights::weekly))
        .route("/insights/forecast", post(routes::insights::forecast))
        // Billing & EFT approval
        .route("/billing/packages", get(routes::billing::packages))
        .route("/billing/eft/start", post(routes::billing::eft_start))
        .route("/billing/eft/done", post(routes::billing::eft_done))
        .route("/billing/status", post(routes::billing::status))
        .route("/admin/approve", get(routes::admin::approve))
        .route("/admin/deny", get(routes::admin::deny))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
