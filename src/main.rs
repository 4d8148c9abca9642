use std::sync::Arc;

use anyhow::Context;
use tracing::{error, info};

mod catalog;
mod config;
mod cors;
mod error;
mod handlers;
mod models;
mod router;
mod seed;

use crate::catalog::Catalog;
use crate::config::Config;

/// Handed to every handler; cloning only bumps the catalog's reference count.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    dotenv::dotenv().ok();

    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,catalog_service=debug")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Catalog Service  · Rust + Axum      ║");
    info!("╚══════════════════════════════════════╝");

    let catalog = Catalog::seeded(&config.image_base_url())
        .context("failed to build product catalog")?;

    let state = AppState {
        catalog: Arc::new(catalog),
    };

    let app = router::build_router(state, &config.asset_dir);

    let addr = config.listen_addr();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(addr = %addr, error = %err, "Failed to bind listener");
            return Err(err).with_context(|| format!("failed to bind {}", addr));
        }
    };

    info!("Listening on http://{}", addr);
    info!(asset_dir = %config.asset_dir, "Serving static assets");

    axum::serve(listener, app).await?;

    Ok(())
}
