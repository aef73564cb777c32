//! invoice-link HTTP Server
//!
//! Axum-based server: invoice submission, recent-invoice listing and the
//! static WASM frontend.

mod config;
mod error;
mod handlers;
mod routes;
mod state;

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use invoice_core::{InvoiceStore, PgInvoiceStore};
use invoice_payments::{PaymentGateway, StripeClient};

use crate::config::AppConfig;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment first so RUST_LOG from .env applies
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Fail fast on missing or malformed configuration
    let config = AppConfig::from_env().inspect_err(|e| {
        tracing::error!("Environment validation failed: {}", e);
    })?;

    // Initialize payments
    let stripe = StripeClient::new(&config.stripe_secret_key)?;

    match stripe.check_connectivity().await {
        Ok(()) => tracing::info!("✓ Connected to Stripe"),
        Err(e) => {
            tracing::warn!("⚠ Stripe not reachable: {}", e);
            tracing::warn!("  Invoice creation will fail until Stripe is reachable");
        }
    }

    // Initialize storage
    let store = PgInvoiceStore::connect_lazy(&config.database_url, config.database_max_connections)?;

    if config.run_migrations {
        store
            .migrate()
            .await
            .context("failed to apply database migrations")?;
        tracing::info!("✓ Database migrations applied");
    } else if store.health_check().await {
        tracing::info!("✓ Connected to {}", store.name());
    } else {
        tracing::warn!("⚠ Database not reachable - requests will fail");
    }

    // Build application state
    let state = AppState {
        store: Arc::new(store),
        gateway: Arc::new(stripe),
        public_base_url: Arc::from(config.public_base_url.as_str()),
    };

    let app = build_router(state, &config.static_dir);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🚀 invoice-link server running on http://{}", config.bind_addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health              - Health check");
    tracing::info!("  POST /api/create-invoice  - Create invoice + payment link");
    tracing::info!("  GET  /api/invoices        - Recent invoices");
    tracing::info!("");

    axum::serve(listener, app).await?;

    Ok(())
}
