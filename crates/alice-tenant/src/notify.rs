//! Notification Seam
//!
//! The approval workflow produces HTML notices; delivering them is an
//! external capability behind [`Notifier`]. Delivery is fire-and-forget:
//! a Notifier must not block and its failures never affect the caller.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// One outbound notice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notice {
    /// Recipient address
    pub to: String,
    /// Subject line
    pub subject: String,
    /// HTML body
    pub html: String,
}

/// Outbound notice delivery capability.
pub trait Notifier: Send + Sync {
    /// Hand off a notice for delivery. Must return promptly; implementations
    /// queue or spawn and log their own failures.
    fn deliver(&self, notice: Notice);
}

/// Drops every notice. Useful when no delivery channel is configured.
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn deliver(&self, notice: Notice) {
        tracing::debug!(to = %notice.to, subject = %notice.subject, "notice dropped (no notifier configured)");
    }
}

/// Records notices in memory. Test double.
#[derive(Default)]
pub struct MemoryNotifier {
    sent: RwLock<Vec<Notice>>,
}

impl MemoryNotifier {
    /// Empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything delivered so far.
    pub fn sent(&self) -> Vec<Notice> {
        self.sent.read().clone()
    }
}

impl Notifier for MemoryNotifier {
    fn deliver(&self, notice: Notice) {
        self.sent.write().push(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_notifier_records_in_order() {
        let notifier = MemoryNotifier::new();
        notifier.deliver(Notice {
            to: "ops@example.com".into(),
            subject: "first".into(),
            html: "<p>1</p>".into(),
        });
        notifier.deliver(Notice {
            to: "ops@example.com".into(),
            subject: "second".into(),
            html: "<p>2</p>".into(),
        });

        let sent = notifier.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].subject, "first");
        assert_eq!(sent[1].subject, "second");
    }
}
