//! Inventory Tracker backend library
//!
//! A small inventory-tracking backend: suppliers and items behind
//! role-guarded CRUD, plus batched purchase processing that decrements
//! stock and accrues revenue.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod permissions;
pub mod routes;
pub mod services;
pub mod store;

pub use config::Config;

use services::PurchaseService;
use store::PgItemStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: sqlx::PgPool,
    pub config: Arc<Config>,
    /// Built once so every request shares the same batch guard.
    pub purchase: PurchaseService<PgItemStore>,
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Inventory Tracker API v1.0"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
