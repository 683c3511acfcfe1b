use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::sync::RwLock;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod error;
pub mod handlers;
pub mod ids;
pub mod models;
pub mod seed;
pub mod store;

use crate::error::AppResult;
use crate::ids::{IdGenerator, SequentialIdGenerator};
use crate::store::{ProductStore, UserStore};

/// Handles to the user and product stores, cloned into every request.
///
/// Handlers hold a store's lock for the whole operation, so no two requests
/// interleave their reads and writes on the same store.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<RwLock<UserStore>>,
    pub products: Arc<RwLock<ProductStore>>,
}

impl AppState {
    /// Fresh, empty stores sharing one id generator.
    pub fn empty(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            users: Arc::new(RwLock::new(UserStore::new(Arc::clone(&ids)))),
            products: Arc::new(RwLock::new(ProductStore::new(ids))),
        }
    }

    /// Fresh stores holding the startup data.
    pub fn seeded(ids: Arc<dyn IdGenerator>) -> AppResult<Self> {
        let mut users = UserStore::new(Arc::clone(&ids));
        let mut products = ProductStore::new(ids);
        seed::seed_users(&mut users)?;
        seed::seed_products(&mut products)?;
        Ok(Self {
            users: Arc::new(RwLock::new(users)),
            products: Arc::new(RwLock::new(products)),
        })
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::empty(Arc::new(SequentialIdGenerator::new()))
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route(
            "/health",
            get(handlers::health).fallback(handlers::route_not_found),
        )

        // ── Users ───────────────────────────────────────────────────────────
        .route(
            "/user/register",
            post(handlers::users::register).fallback(handlers::route_not_found),
        )
        .route(
            "/user/signin",
            post(handlers::users::sign_in).fallback(handlers::route_not_found),
        )

        // ── Inventory ───────────────────────────────────────────────────────
        .route(
            "/inventory/getall",
            get(handlers::products::list_products).fallback(handlers::route_not_found),
        )
        .route(
            "/inventory/create",
            post(handlers::products::create_product).fallback(handlers::route_not_found),
        )
        .route(
            "/inventory/stock-summary",
            get(handlers::products::stock_summary).fallback(handlers::route_not_found),
        )
        .route(
            "/inventory/alerts/lowstockcount",
            get(handlers::products::low_stock_count).fallback(handlers::route_not_found),
        )
        .route(
            "/inventory/alerts/lowstock",
            get(handlers::products::low_stock_alerts).fallback(handlers::route_not_found),
        )
        .fallback(handlers::route_not_found)

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
