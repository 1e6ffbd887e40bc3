//! Runtime configuration
//!
//! Everything comes from the environment with development defaults, the way
//! the service has always been deployed.

use std::env;

/// Service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Listen address, `0.0.0.0:<PORT>`
    pub bind_addr: String,
    /// HS256 secret for staff session tokens
    pub jwt_secret: String,
    /// Operator key carried on approve/deny links
    pub admin_key: String,
    /// Operator address for claim notices
    pub admin_email: String,
    /// Public base URL used in approval links
    pub base_url: String,
    /// HTTP mail relay; notices are dropped when unset
    pub mail_relay_url: Option<String>,
}

impl Config {
    /// Read configuration from the environment.
    pub fn from_env() -> Self {
        let port = env::var("PORT").unwrap_or_else(|_| "8080".into());
        Self {
            bind_addr: format!("0.0.0.0:{port}"),
            jwt_secret: env::var("JWT_SECRET").unwrap_or_else(|_| "dev-secret-change-me".into()),
            admin_key: env::var("ADMIN_KEY").unwrap_or_else(|_| "change-me".into()),
            admin_email: env::var("ADMIN_EMAIL").unwrap_or_default(),
            base_url: env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".into()),
            mail_relay_url: env::var("MAIL_RELAY_URL").ok(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".into(),
            jwt_secret: "dev-secret-change-me".into(),
            admin_key: "change-me".into(),
            admin_email: String::new(),
            base_url: "http://localhost:8080".into(),
            mail_relay_url: None,
        }
    }
}
