use async_trait::async_trait;

use crate::errors::ServiceError;
use crate::item::{Item, ItemInput};

/// Trait abstraction for item persistence.
/// Implementations can be file-backed, in-memory, or remote.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Assign an id, persist, and return the authoritative stored copy.
    async fn add(&self, input: ItemInput) -> Result<Item, ServiceError>;
    /// All currently stored items; ordering follows backend enumeration.
    async fn list(&self) -> Result<Vec<Item>, ServiceError>;
    /// `NotFound` when no item with that id exists.
    async fn get(&self, id: u64) -> Result<Item, ServiceError>;
    /// `NotFound` when no item with that id exists; otherwise permanent.
    async fn delete(&self, id: u64) -> Result<(), ServiceError>;
}
