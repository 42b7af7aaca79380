//! Item catalog service
//!
//! CRUD over the items table. Stock and revenue mutations from purchases
//! go through the purchase service instead; this service only manages
//! catalog records and their supplier links.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Deserialize;
use shared::models::Item;
use shared::validation::{validate_name, validate_price, validate_stock_quantity};
use sqlx::{FromRow, PgPool};

use crate::error::{AppError, AppResult};

/// Item service for catalog management
#[derive(Clone)]
pub struct ItemService {
    db: PgPool,
}

/// Input for creating an item
#[derive(Debug, Deserialize)]
pub struct CreateItemInput {
    pub name: String,
    pub quantity_in_stock: i64,
    pub price: Decimal,
    #[serde(default)]
    pub supplier_ids: Vec<i64>,
}

/// Input for updating an item. Absent fields keep their current value.
#[derive(Debug, Deserialize)]
pub struct UpdateItemInput {
    pub name: Option<String>,
    pub quantity_in_stock: Option<i64>,
    pub price: Option<Decimal>,
    pub supplier_ids: Option<Vec<i64>>,
}

#[derive(Debug, FromRow)]
struct ItemRow {
    id: i64,
    name: String,
    quantity_in_stock: i64,
    quantity_sold: i64,
    revenue: Decimal,
    price: Decimal,
}

impl ItemRow {
    fn into_item(self, supplier_ids: Vec<i64>) -> Item {
        Item {
            id: self.id,
            name: self.name,
            quantity_in_stock: self.quantity_in_stock,
            quantity_sold: self.quantity_sold,
            revenue: self.revenue,
            price: self.price,
            supplier_ids,
        }
    }
}

impl ItemService {
    /// Create a new ItemService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// List all items with their supplier links
    pub async fn list(&self) -> AppResult<Vec<Item>> {
        let rows = sqlx::query_as::<_, ItemRow>(
            r#"
            SELECT id, name, quantity_in_stock, quantity_sold, revenue, price
            FROM items
            ORDER BY id
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        let links = sqlx::query_as::<_, (i64, i64)>(
            "SELECT item_id, supplier_id FROM item_suppliers ORDER BY supplier_id",
        )
        .fetch_all(&self.db)
        .await?;

        let mut by_item: HashMap<i64, Vec<i64>> = HashMap::new();
        for (item_id, supplier_id) in links {
            by_item.entry(item_id).or_default().push(supplier_id);
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let suppliers = by_item.remove(&row.id).unwrap_or_default();
                row.into_item(suppliers)
            })
            .collect())
    }

    /// Get a single item by id
    pub async fn get(&self, item_id: i64) -> AppResult<Item> {
        let row = sqlx::query_as::<_, ItemRow>(
            r#"
            SELECT id, name, quantity_in_stock, quantity_sold, revenue, price
            FROM items
            WHERE id = $1
            "#,
        )
        .bind(item_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Item".to_string()))?;

        let supplier_ids = sqlx::query_scalar::<_, i64>(
            "SELECT supplier_id FROM item_suppliers WHERE item_id = $1 ORDER BY supplier_id",
        )
        .bind(item_id)
        .fetch_all(&self.db)
        .await?;

        Ok(row.into_item(supplier_ids))
    }

    /// Create an item
    pub async fn create(&self, input: CreateItemInput) -> AppResult<Item> {
        Self::check(validate_name(&input.name), "name")?;
        Self::check(validate_stock_quantity(input.quantity_in_stock), "quantity_in_stock")?;
        Self::check(validate_price(input.price), "price")?;
        self.ensure_suppliers_exist(&input.supplier_ids).await?;

        let mut tx = self.db.begin().await?;

        let row = sqlx::query_as::<_, ItemRow>(
            r#"
            INSERT INTO items (name, quantity_in_stock, quantity_sold, revenue, price)
            VALUES ($1, $2, 0, 0, $3)
            RETURNING id, name, quantity_in_stock, quantity_sold, revenue, price
            "#,
        )
        .bind(&input.name)
        .bind(input.quantity_in_stock)
        .bind(input.price)
        .fetch_one(&mut *tx)
        .await?;

        for supplier_id in &input.supplier_ids {
            sqlx::query("INSERT INTO item_suppliers (item_id, supplier_id) VALUES ($1, $2)")
                .bind(row.id)
                .bind(supplier_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        tracing::info!(item_id = row.id, "Item created");
        Ok(row.into_item(input.supplier_ids))
    }

    /// Update an item. Fields left out of the input keep their value.
    pub async fn update(&self, item_id: i64, input: UpdateItemInput) -> AppResult<Item> {
        let existing = self.get(item_id).await?;

        let name = input.name.unwrap_or(existing.name);
        let quantity_in_stock = input.quantity_in_stock.unwrap_or(existing.quantity_in_stock);
        let price = input.price.unwrap_or(existing.price);
        let supplier_ids = input.supplier_ids.unwrap_or(existing.supplier_ids);

        Self::check(validate_name(&name), "name")?;
        Self::check(validate_stock_quantity(quantity_in_stock), "quantity_in_stock")?;
        Self::check(validate_price(price), "price")?;
        self.ensure_suppliers_exist(&supplier_ids).await?;

        let mut tx = self.db.begin().await?;

        let row = sqlx::query_as::<_, ItemRow>(
            r#"
            UPDATE items
            SET name = $2, quantity_in_stock = $3, price = $4
            WHERE id = $1
            RETURNING id, name, quantity_in_stock, quantity_sold, revenue, price
            "#,
        )
        .bind(item_id)
        .bind(&name)
        .bind(quantity_in_stock)
        .bind(price)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM item_suppliers WHERE item_id = $1")
            .bind(item_id)
            .execute(&mut *tx)
            .await?;
        for supplier_id in &supplier_ids {
            sqlx::query("INSERT INTO item_suppliers (item_id, supplier_id) VALUES ($1, $2)")
                .bind(item_id)
                .bind(supplier_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(row.into_item(supplier_ids))
    }

    /// Delete an item
    pub async fn delete(&self, item_id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(item_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Item".to_string()));
        }

        tracing::info!(item_id, "Item deleted");
        Ok(())
    }

    /// Reject references to suppliers that do not exist
    async fn ensure_suppliers_exist(&self, supplier_ids: &[i64]) -> AppResult<()> {
        if supplier_ids.is_empty() {
            return Ok(());
        }

        let found = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM suppliers WHERE id = ANY($1)",
        )
        .bind(supplier_ids)
        .fetch_one(&self.db)
        .await?;

        if found != supplier_ids.len() as i64 {
            return Err(AppError::NotFound("Supplier".to_string()));
        }

        Ok(())
    }

    fn check(result: Result<(), &'static str>, field: &str) -> AppResult<()> {
        result.map_err(|message| AppError::Validation {
            field: field.to_string(),
            message: message.to_string(),
        })
    }
}
