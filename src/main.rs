use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use location_relay::{app, config::Config, services::ghanapost::LookupService};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "location_relay=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenv::dotenv().ok();
    let config = Config::from_env().expect("Failed to load configuration");

    info!("Starting location relay service");

    // Single shared client for all outbound lookups
    let lookup_service =
        Arc::new(LookupService::new(&config).expect("Failed to initialize lookup service"));

    let app = app(lookup_service);

    let addr: std::net::SocketAddr = format!("0.0.0.0:{}", config.port).parse().unwrap();
    info!("HTTP server listening on {}", addr);
    info!("Relaying address lookups to {}", config.upstream_url);

    // Run the HTTP server
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app)
        .await
        .expect("Failed to start HTTP server");
}
