//! Inventory item model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A stocked, sellable inventory record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub id: i64,
    pub name: String,
    /// Units currently on hand. Never negative after a committed mutation.
    pub quantity_in_stock: i64,
    /// Cumulative units sold over the item's lifetime.
    pub quantity_sold: i64,
    /// Cumulative revenue accrued from sales.
    pub revenue: Decimal,
    /// Unit price applied to every sale.
    pub price: Decimal,
    /// Suppliers this item can be restocked from. Not consulted by purchasing.
    pub supplier_ids: Vec<i64>,
}

impl Item {
    /// Apply a sale of `quantity` units: decrement stock, accrue the sold
    /// count and revenue. Returns the line total (`quantity` x unit price).
    ///
    /// Callers must have checked stock sufficiency and quantity positivity
    /// beforehand; this only performs the arithmetic.
    pub fn apply_sale(&mut self, quantity: i64) -> Decimal {
        let line_total = self.price * Decimal::from(quantity);
        self.quantity_in_stock -= quantity;
        self.quantity_sold += quantity;
        self.revenue += line_total;
        line_total
    }
}
