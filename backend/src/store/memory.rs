//! In-memory item store
//!
//! Backs the service-level tests and never fails. State is held behind an
//! async lock so the store can be shared across tasks the same way the
//! Postgres store shares its pool.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use shared::models::Item;
use tokio::sync::RwLock;

use super::{ItemStore, StoreError};

/// HashMap-backed [`ItemStore`]
#[derive(Clone, Default)]
pub struct MemoryItemStore {
    items: Arc<RwLock<HashMap<i64, Item>>>,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-seeded with the given items.
    pub fn with_items(items: impl IntoIterator<Item = Item>) -> Self {
        let map = items.into_iter().map(|i| (i.id, i)).collect();
        Self {
            items: Arc::new(RwLock::new(map)),
        }
    }

    /// Insert or replace an item directly (test setup helper).
    pub async fn insert(&self, item: Item) {
        self.items.write().await.insert(item.id, item);
    }

    /// Snapshot of an item's current state, bypassing the trait.
    pub async fn snapshot(&self, id: i64) -> Option<Item> {
        self.items.read().await.get(&id).cloned()
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn get(&self, id: i64) -> Result<Option<Item>, StoreError> {
        Ok(self.items.read().await.get(&id).cloned())
    }

    async fn save(&self, item: &Item) -> Result<(), StoreError> {
        self.items.write().await.insert(item.id, item.clone());
        Ok(())
    }
}
