// Main entry point for API server

use std::sync::Arc;

use anyhow::{Context, Result};
use catalog::{CatalogStore, FeedSource, FetchOutcome};
use feed_client::FeedClient;
use server_core::{server::build_app, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug,catalog=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting CT Domain Catalog API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(feed_url = %config.feed_url, "Configuration loaded");

    let feed: Arc<dyn FeedSource> =
        Arc::new(FeedClient::new(config.feed_url.clone()).with_timeout(config.feed_timeout));
    let catalog = Arc::new(CatalogStore::new(feed));

    // Initial load; a failing feed still lets the server start
    match catalog.refresh().await {
        FetchOutcome::Loaded { total } => tracing::info!(total, "Initial catalog load complete"),
        FetchOutcome::Failed { error } => {
            tracing::warn!(message = %error.message, "Initial catalog load failed")
        }
    }

    let app = build_app(catalog, &config.allowed_origins);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Catalog: http://localhost:{}/api/catalog", config.port);
    tracing::info!("Health check: http://localhost:{}/api/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
