//! Alice EntrepreBot Tenant Core
//!
//! Business identity resolution and subscription gating for the Alice
//! SME backend.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        TENANT CORE                                  │
//! │                                                                     │
//! │  ┌──────────────┐   ┌──────────────┐   ┌─────────────────────────┐  │
//! │  │   Tenant     │   │ Entitlement  │   │   Approval Workflow     │  │
//! │  │  Directory   │──▶│ Store + Gate │◀──│  (manual EFT, operator  │  │
//! │  │ (name|ind +  │   │ (free-tier   │   │   approve/deny links)   │  │
//! │  │  c:contact)  │   │  counters)   │   └───────────┬─────────────┘  │
//! │  └──────────────┘   └──────────────┘               │                │
//! │                                                    ▼                │
//! │                                         ┌─────────────────────────┐ │
//! │                                         │  Notifier (fire-and-    │ │
//! │                                         │  forget HTML notices)   │ │
//! │                                         └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![allow(dead_code)]

pub mod approvals;
pub mod catalog;
pub mod entitlements;
pub mod identity;
pub mod model;
pub mod notify;

pub use approvals::{ApprovalConfig, ApprovalError, ApprovalWorkflow, StageRequest, StagedClaim};
pub use catalog::{Package, PackageCatalog, FREE_PACKAGE};
pub use entitlements::{Admission, EntitlementStore, Gate, SubscriptionRequired, FREE_CALL_LIMIT};
pub use identity::TenantDirectory;
pub use model::{Entitlement, FaqEntry, IdentityHint, Tenant, TenantId};
pub use notify::{MemoryNotifier, Notice, Notifier, NullNotifier};
