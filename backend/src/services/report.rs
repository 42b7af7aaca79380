//! Stock reporting service
//!
//! Aggregates the catalog into the stock report: items running low, the
//! item with the highest lifetime takings (quantity sold x unit price),
//! and the item with the most units sold.

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::{FromRow, PgPool};

use crate::error::AppResult;

/// Report service
#[derive(Clone)]
pub struct ReportService {
    db: PgPool,
    low_stock_threshold: i64,
}

/// The stock report
#[derive(Debug, Serialize)]
pub struct StockReport {
    pub low_stock_items: Vec<LowStockItem>,
    pub top_item_by_revenue: Option<TopItem>,
    pub top_item_by_quantity: Option<TopItem>,
}

/// An item whose stock fell below the low-stock threshold
#[derive(Debug, Serialize, FromRow)]
pub struct LowStockItem {
    pub id: i64,
    pub name: String,
    pub quantity_in_stock: i64,
}

/// A top-seller entry
#[derive(Debug, Serialize, FromRow)]
pub struct TopItem {
    pub id: i64,
    pub name: String,
    pub quantity_sold: i64,
    pub total_revenue: Decimal,
}

impl ReportService {
    /// Create a new ReportService instance
    pub fn new(db: PgPool, low_stock_threshold: i64) -> Self {
        Self {
            db,
            low_stock_threshold,
        }
    }

    /// Build the stock report
    pub async fn stock_report(&self) -> AppResult<StockReport> {
        let low_stock_items = sqlx::query_as::<_, LowStockItem>(
            r#"
            SELECT id, name, quantity_in_stock
            FROM items
            WHERE quantity_in_stock < $1
            ORDER BY quantity_in_stock, id
            "#,
        )
        .bind(self.low_stock_threshold)
        .fetch_all(&self.db)
        .await?;

        let top_item_by_revenue = sqlx::query_as::<_, TopItem>(
            r#"
            SELECT id, name, quantity_sold, quantity_sold * price AS total_revenue
            FROM items
            ORDER BY quantity_sold * price DESC
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.db)
        .await?;

        let top_item_by_quantity = sqlx::query_as::<_, TopItem>(
            r#"
            SELECT id, name, quantity_sold, quantity_sold * price AS total_revenue
            FROM items
            ORDER BY quantity_sold DESC
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.db)
        .await?;

        tracing::info!("Stock report generated");
        Ok(StockReport {
            low_stock_items,
            top_item_by_revenue,
            top_item_by_quantity,
        })
    }
}
