//! Pay Bridge Service - HTTP façade over Stripe
//!
//! This is the main entry point for the pay-bridge service.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pay_bridge_service::{create_router, AppState, ServiceConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,pay_bridge=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Pay Bridge Service");

    // Load configuration from environment
    let config = ServiceConfig::from_env();

    tracing::info!(
        listen_addr = %config.listen_addr,
        stripe_api_base = %config.stripe_api_base,
        stripe_key_configured = %config.stripe_secret_key.is_some(),
        "Service configuration loaded"
    );

    // Build app state
    let state = AppState::new(config.clone())?;

    // Create the router
    let app = create_router(state);
    tracing::info!("Router configured with all API endpoints");

    // Start HTTP server
    tracing::info!(listen_addr = %config.listen_addr, "Starting HTTP server");
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
