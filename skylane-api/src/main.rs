use std::net::SocketAddr;
use std::sync::Arc;

use skylane_api::{app, app_config::Config, AppState};
use skylane_provider::{AmadeusClient, ProviderConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "skylane_api=debug,tower_http=debug,axum::rejection=trace".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().expect("Failed to load config");
    tracing::info!("Starting Skylane API on port {}", config.server.port);

    let provider = AmadeusClient::new(ProviderConfig {
        base_url: config.provider.base_url.clone(),
        client_id: config.provider.client_id.clone(),
        client_secret: config.provider.client_secret.clone(),
        timeout_seconds: config.provider.timeout_seconds,
    })
    .expect("Failed to build provider client");

    let app_state = AppState {
        provider: Arc::new(provider),
    };

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
