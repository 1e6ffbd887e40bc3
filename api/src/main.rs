//! Alice EntrepreBot API server

use alice_api::{build_router, AppState, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let addr = config.bind_addr.clone();
    if config.mail_relay_url.is_none() {
        tracing::warn!("MAIL_RELAY_URL not set; operator notices will be dropped");
    }

    let app = build_router(AppState::new(config));

    tracing::info!("Alice API listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
