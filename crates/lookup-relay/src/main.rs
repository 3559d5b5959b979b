//! Phone Lookup Relay - Entry point.

use lookup_relay::{
    api::{create_router, AppState},
    config::Config,
    NumverifyClient,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log.level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Phone Lookup Relay");

    // Initialize provider client
    let provider = match NumverifyClient::new(
        &config.provider.base_url,
        config.provider.api_key.clone(),
        config.provider.timeout,
    ) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to create provider client: {}", e);
            std::process::exit(1);
        }
    };

    if !provider.is_configured() {
        warn!("Provider API key not configured, lookups will fail");
    }

    let app = create_router(AppState::new(provider));

    // Bind to address
    let addr = SocketAddr::new(
        config.server.listen_addr.parse().unwrap_or([0, 0, 0, 0].into()),
        config.server.port,
    );

    info!("Listening on {}", addr);

    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    // Run server
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}
