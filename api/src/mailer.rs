//! Outbound mail relay
//!
//! Notices go out as HTTP POSTs to a relay endpoint. Delivery is handed off
//! to a spawned task so the request path never waits on it; failures are
//! logged and swallowed.

use alice_tenant::{Notice, Notifier};
use std::time::Duration;

/// HTTP mail relay notifier.
pub struct RelayMailer {
    client: reqwest::Client,
    relay_url: String,
}

impl RelayMailer {
    /// Mailer posting to the given relay endpoint.
    pub fn new(relay_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            relay_url,
        }
    }
}

impl Notifier for RelayMailer {
    fn deliver(&self, notice: Notice) {
        let client = self.client.clone();
        let url = self.relay_url.clone();
        tokio::spawn(async move {
            let result = client
                .post(&url)
                .json(&notice)
                .timeout(Duration::from_secs(30))
                .send()
                .await;
            match result {
                Ok(resp) if resp.status().is_success() => {
                    tracing::info!(to = %notice.to, subject = %notice.subject, "notice delivered");
                }
                Ok(resp) => {
                    tracing::error!(to = %notice.to, status = %resp.status(), "mail relay rejected notice");
                }
                Err(e) => {
                    tracing::error!(to = %notice.to, error = %e, "mail relay unreachable");
                }
            }
        });
    }
}
