//! Postgres-backed item store

use async_trait::async_trait;
use rust_decimal::Decimal;
use shared::models::Item;
use sqlx::{FromRow, PgPool};

use super::{ItemStore, StoreError};

/// [`ItemStore`] over the shared connection pool
#[derive(Clone)]
pub struct PgItemStore {
    db: PgPool,
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

impl PgItemStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ItemStore for PgItemStore {
    async fn get(&self, id: i64) -> Result<Option<Item>, StoreError> {
        let row = sqlx::query_as::<_, ItemRow>(
            r#"
            SELECT id, name, quantity_in_stock, quantity_sold, revenue, price
            FROM items
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let supplier_ids = sqlx::query_scalar::<_, i64>(
            "SELECT supplier_id FROM item_suppliers WHERE item_id = $1 ORDER BY supplier_id",
        )
        .bind(id)
        .fetch_all(&self.db)
        .await?;

        Ok(Some(Item {
            id: row.id,
            name: row.name,
            quantity_in_stock: row.quantity_in_stock,
            quantity_sold: row.quantity_sold,
            revenue: row.revenue,
            price: row.price,
            supplier_ids,
        }))
    }

    async fn save(&self, item: &Item) -> Result<(), StoreError> {
        // Supplier links are managed by the catalog CRUD, not by purchases,
        // so only the scalar columns are written here.
        sqlx::query(
            r#"
            UPDATE items
            SET name = $2, quantity_in_stock = $3, quantity_sold = $4,
                revenue = $5, price = $6
            WHERE id = $1
            "#,
        )
        .bind(item.id)
        .bind(&item.name)
        .bind(item.quantity_in_stock)
        .bind(item.quantity_sold)
        .bind(item.revenue)
        .bind(item.price)
        .execute(&self.db)
        .await?;

        Ok(())
    }
}
