//! HTTP handlers for item catalog endpoints
//!
//! Reads are open to any authenticated caller but the response shape
//! depends on role: admins see the sales counters, customers only the
//! storefront fields. Writes are admin-only.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use rust_decimal::Decimal;
use serde::Serialize;
use shared::models::{Item, Role};

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::permissions::{require, Action};
use crate::services::item::{CreateItemInput, ItemService, UpdateItemInput};
use crate::AppState;

/// Full item view, for admins
#[derive(Debug, Serialize)]
pub struct AdminItemView {
    pub id: i64,
    pub name: String,
    pub quantity_in_stock: i64,
    pub quantity_sold: i64,
    pub revenue: Decimal,
    pub price: Decimal,
    pub supplier_ids: Vec<i64>,
}

/// Storefront item view, for customers
#[derive(Debug, Serialize)]
pub struct CustomerItemView {
    pub id: i64,
    pub name: String,
    pub quantity_in_stock: i64,
    pub price: Decimal,
}

/// Role-dependent item representation
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ItemView {
    Admin(AdminItemView),
    Customer(CustomerItemView),
}

impl ItemView {
    fn render(item: Item, role: Role) -> Self {
        match role {
            Role::Admin => ItemView::Admin(AdminItemView {
                id: item.id,
                name: item.name,
                quantity_in_stock: item.quantity_in_stock,
                quantity_sold: item.quantity_sold,
                revenue: item.revenue,
                price: item.price,
                supplier_ids: item.supplier_ids,
            }),
            Role::Customer => ItemView::Customer(CustomerItemView {
                id: item.id,
                name: item.name,
                quantity_in_stock: item.quantity_in_stock,
                price: item.price,
            }),
        }
    }
}

/// List all items
pub async fn list_items(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> AppResult<Json<Vec<ItemView>>> {
    require(&user, Action::ReadItems)?;
    tracing::info!(user_id = user.user_id, "Listing items");
    let service = ItemService::new(state.db);
    let items = service.list().await?;
    Ok(Json(
        items
            .into_iter()
            .map(|item| ItemView::render(item, user.role))
            .collect(),
    ))
}

/// Get a single item
pub async fn get_item(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(item_id): Path<i64>,
) -> AppResult<Json<ItemView>> {
    require(&user, Action::ReadItems)?;
    let service = ItemService::new(state.db);
    let item = service.get(item_id).await?;
    Ok(Json(ItemView::render(item, user.role)))
}

/// Create an item (admin only)
pub async fn create_item(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(input): Json<CreateItemInput>,
) -> AppResult<(StatusCode, Json<ItemView>)> {
    require(&user, Action::WriteItems)?;
    let service = ItemService::new(state.db);
    let item = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(ItemView::render(item, user.role))))
}

/// Update an item (admin only)
pub async fn update_item(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(item_id): Path<i64>,
    Json(input): Json<UpdateItemInput>,
) -> AppResult<Json<ItemView>> {
    require(&user, Action::WriteItems)?;
    let service = ItemService::new(state.db);
    let item = service.update(item_id, input).await?;
    Ok(Json(ItemView::render(item, user.role)))
}

/// Delete an item (admin only)
pub async fn delete_item(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(item_id): Path<i64>,
) -> AppResult<StatusCode> {
    require(&user, Action::WriteItems)?;
    let service = ItemService::new(state.db);
    service.delete(item_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
