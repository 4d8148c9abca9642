use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use crate::{
    error::{AppError, AppResult},
    models::Product,
    AppState,
};

// ── GET /api/products ─────────────────────────────────────────────────────────

pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    let products = state.catalog.all().to_vec();

    info!(count = products.len(), "Responding with all products");

    Json(products)
}

// ── GET /api/products/:id ─────────────────────────────────────────────────────

pub async fn get_product(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Product>> {
    // Parsed by hand so a bad id is a 400 with our own reason, checked before any lookup
    let id: i64 = raw_id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid product ID".to_string()))?;

    match state.catalog.find(id) {
        Some(product) => {
            info!(id, name = %product.name, "Found product");
            Ok(Json(product.clone()))
        }
        None => {
            info!(id, "Product not found");
            Err(AppError::NotFound(format!("Product {} not found", id)))
        }
    }
}
