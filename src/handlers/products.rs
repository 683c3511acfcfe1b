use axum::{extract::State, http::StatusCode, Json};
use serde_json::json;
use tracing::{debug, info};

use crate::{
    error::AppResult,
    handlers::ApiJson,
    models::{CreateProduct, Product, StockSummary},
    AppState,
};

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_products(State(state): State<AppState>) -> (StatusCode, Json<Vec<Product>>) {
    let products = state.products.read().await.list_all();

    debug!(count = products.len(), "Listed products");

    (StatusCode::OK, Json(products))
}

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_product(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateProduct>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let product = state.products.write().await.create(&payload)?;

    info!(id = %product.id, sku = %product.sku, "Created product");

    Ok((StatusCode::CREATED, Json(product)))
}

// ── Stock summary ─────────────────────────────────────────────────────────────

pub async fn stock_summary(State(state): State<AppState>) -> (StatusCode, Json<StockSummary>) {
    let summary = state.products.read().await.stock_summary();

    debug!(
        total = summary.total_products,
        low = summary.low_stock_count,
        out = summary.out_of_stock_count,
        "Computed stock summary"
    );

    (StatusCode::OK, Json(summary))
}

// ── Low-stock alerts ──────────────────────────────────────────────────────────

pub async fn low_stock_count(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    let count = state.products.read().await.low_stock_count();

    debug!(count, "Counted low-stock products");

    (StatusCode::OK, Json(json!({ "count": count })))
}

pub async fn low_stock_alerts(State(state): State<AppState>) -> (StatusCode, Json<Vec<Product>>) {
    let products = state.products.read().await.low_stock_alerts();

    debug!(count = products.len(), "Listed low-stock products");

    (StatusCode::OK, Json(products))
}
