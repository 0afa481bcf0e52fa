use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::ServiceError;
use crate::item::{Item, ItemInput};
use crate::store::ItemStore;

/// In-memory item store. Same contract and id policy as the file-backed
/// store, minus the disk; handler tests swap it in for the real backend.
#[derive(Default)]
pub struct MemoryItemStore {
    items: RwLock<HashMap<u64, Item>>,
    next_id: AtomicU64,
}

impl MemoryItemStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn add(&self, input: ItemInput) -> Result<Item, ServiceError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let item = input.into_item(id);
        self.items.write().await.insert(id, item.clone());
        Ok(item)
    }

    async fn list(&self) -> Result<Vec<Item>, ServiceError> {
        Ok(self.items.read().await.values().cloned().collect())
    }

    async fn get(&self, id: u64) -> Result<Item, ServiceError> {
        self.items
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| ServiceError::not_found("item"))
    }

    async fn delete(&self, id: u64) -> Result<(), ServiceError> {
        match self.items.write().await.remove(&id) {
            Some(_) => Ok(()),
            None => Err(ServiceError::not_found("item")),
        }
    }
}
