//! Item store abstraction
//!
//! The purchase processor reads and writes items exclusively through the
//! [`ItemStore`] trait, so the core logic is independent of the storage
//! technology. Production uses [`PgItemStore`]; tests use
//! [`MemoryItemStore`].

use async_trait::async_trait;
use shared::models::Item;
use thiserror::Error;

mod memory;
mod postgres;

pub use memory::MemoryItemStore;
pub use postgres::PgItemStore;

/// Storage fault. Business-rule failures (missing item, bad quantity) are
/// not store errors; a lookup miss is `Ok(None)`.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Persistent item records keyed by identifier
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Fetch an item by id. `Ok(None)` when no such item exists.
    async fn get(&self, id: i64) -> Result<Option<Item>, StoreError>;

    /// Persist an item's current state. The write is durable when this
    /// returns; the purchase processor relies on that for its
    /// save-per-line behavior.
    async fn save(&self, item: &Item) -> Result<(), StoreError>;
}
