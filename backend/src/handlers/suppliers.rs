//! HTTP handlers for supplier catalog endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use shared::models::Supplier;

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::permissions::{require, Action};
use crate::services::supplier::{CreateSupplierInput, SupplierService, UpdateSupplierInput};
use crate::AppState;

/// List all suppliers
pub async fn list_suppliers(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> AppResult<Json<Vec<Supplier>>> {
    require(&user, Action::ReadSuppliers)?;
    tracing::info!(user_id = user.user_id, "Listing suppliers");
    let service = SupplierService::new(state.db);
    let suppliers = service.list().await?;
    Ok(Json(suppliers))
}

/// Get a single supplier
pub async fn get_supplier(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(supplier_id): Path<i64>,
) -> AppResult<Json<Supplier>> {
    require(&user, Action::ReadSuppliers)?;
    let service = SupplierService::new(state.db);
    let supplier = service.get(supplier_id).await?;
    Ok(Json(supplier))
}

/// Create a supplier (admin only)
pub async fn create_supplier(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(input): Json<CreateSupplierInput>,
) -> AppResult<(StatusCode, Json<Supplier>)> {
    require(&user, Action::WriteSuppliers)?;
    let service = SupplierService::new(state.db);
    let supplier = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(supplier)))
}

/// Update a supplier (admin only)
pub async fn update_supplier(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(supplier_id): Path<i64>,
    Json(input): Json<UpdateSupplierInput>,
) -> AppResult<Json<Supplier>> {
    require(&user, Action::WriteSuppliers)?;
    let service = SupplierService::new(state.db);
    let supplier = service.update(supplier_id, input).await?;
    Ok(Json(supplier))
}

/// Delete a supplier (admin only)
pub async fn delete_supplier(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(supplier_id): Path<i64>,
) -> AppResult<StatusCode> {
    require(&user, Action::WriteSuppliers)?;
    let service = SupplierService::new(state.db);
    service.delete(supplier_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
