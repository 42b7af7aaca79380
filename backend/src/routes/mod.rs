//! Route definitions for the Inventory Tracker API

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{handlers, middleware::auth_middleware, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Auth routes (public)
        .nest("/auth", auth_routes())
        // Protected routes - item catalog
        .nest("/items", item_routes())
        // Protected routes - supplier catalog
        .nest("/suppliers", supplier_routes())
        // Protected routes - purchasing
        .nest("/purchase", purchase_routes())
        // Protected routes - reporting
        .nest("/reports", report_routes())
}

/// Authentication routes (public)
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
}

/// Item catalog routes (protected)
fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_items).post(handlers::create_item))
        .route(
            "/:item_id",
            get(handlers::get_item)
                .put(handlers::update_item)
                .delete(handlers::delete_item),
        )
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Supplier catalog routes (protected)
fn supplier_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_suppliers).post(handlers::create_supplier),
        )
        .route(
            "/:supplier_id",
            get(handlers::get_supplier)
                .put(handlers::update_supplier)
                .delete(handlers::delete_supplier),
        )
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Purchase routes (protected, no role restriction beyond login)
fn purchase_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::submit_purchase))
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Reporting routes (protected)
fn report_routes() -> Router<AppState> {
    Router::new()
        .route("/stock", get(handlers::stock_report))
        .route_layer(middleware::from_fn(auth_middleware))
}
