use std::path::Path;

use axum::{
    extract::{DefaultBodyLimit, OriginalUri},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{cors, error::AppError, handlers, AppState};

/// Routes under `/api`. The sub-router owns its fallback, so an unknown
/// `/api/*` path is a 404 here and never falls through to the asset server.
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/products", get(handlers::products::list_products))
        .route("/products/:id", get(handlers::products::get_product))
        // Intake bodies are never rejected, whatever their size
        .route(
            "/orders",
            post(handlers::intake::create_order).layer(DefaultBodyLimit::disable()),
        )
        .route(
            "/contact",
            post(handlers::intake::submit_contact).layer(DefaultBodyLimit::disable()),
        )
        .fallback(api_not_found)
}

async fn api_not_found(OriginalUri(uri): OriginalUri) -> AppError {
    AppError::NotFound(format!("No API route for {}", uri.path()))
}

pub fn build_router(state: AppState, asset_dir: impl AsRef<Path>) -> Router {
    Router::new()
        // ── API ─────────────────────────────────────────────────────────────
        .nest("/api", api_routes())

        // ── Static assets (everything else) ─────────────────────────────────
        .fallback_service(ServeDir::new(asset_dir.as_ref()))

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(cors::cors))
        .with_state(state)
}
