use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::fs;
use tracing::warn;

use crate::errors::ServiceError;
use crate::item::{Item, ItemInput};
use crate::store::ItemStore;

/// File-backed item store. Each item lives in its own `item{id}.json` file
/// under `dir`; get/delete locate a record purely by recomputing that path.
///
/// Ids come from a monotonic counter seeded with the maximum id found on
/// disk, so a mid-sequence delete never causes a later add to collide with a
/// surviving record. File writes themselves are unsynchronized.
pub struct FileItemStore {
    dir: PathBuf,
    next_id: AtomicU64,
}

/// Filename shape is `item{id}.json`; anything else in the directory is not
/// ours and gets ignored by the id scan.
fn parse_item_id(file_name: &str) -> Option<u64> {
    file_name
        .strip_prefix("item")?
        .strip_suffix(".json")?
        .parse()
        .ok()
}

impl FileItemStore {
    /// Initialize the store on the given directory, creating it if missing,
    /// and seed the id counter from the records already there.
    pub async fn new<P: Into<PathBuf>>(dir: P) -> Result<Arc<Self>, ServiceError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| ServiceError::Io(e.to_string()))?;
        let max_id = Self::scan_max_id(&dir).await?;
        Ok(Arc::new(Self { dir, next_id: AtomicU64::new(max_id) }))
    }

    async fn scan_max_id(dir: &Path) -> Result<u64, ServiceError> {
        let mut entries = fs::read_dir(dir)
            .await
            .map_err(|e| ServiceError::Io(e.to_string()))?;
        let mut max_id = 0;
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| ServiceError::Io(e.to_string()))?
        {
            if let Some(id) = entry.file_name().to_str().and_then(parse_item_id) {
                max_id = max_id.max(id);
            }
        }
        Ok(max_id)
    }

    fn item_path(&self, id: u64) -> PathBuf {
        self.dir.join(format!("item{id}.json"))
    }

    fn io_error(entity: &str, e: std::io::Error) -> ServiceError {
        if e.kind() == ErrorKind::NotFound {
            ServiceError::not_found(entity)
        } else {
            ServiceError::Io(e.to_string())
        }
    }
}

#[async_trait]
impl ItemStore for FileItemStore {
    async fn add(&self, input: ItemInput) -> Result<Item, ServiceError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let item = input.into_item(id);
        let data =
            serde_json::to_vec(&item).map_err(|e| ServiceError::Serde(e.to_string()))?;
        fs::write(self.item_path(id), data)
            .await
            .map_err(|e| ServiceError::Io(e.to_string()))?;
        Ok(item)
    }

    async fn list(&self) -> Result<Vec<Item>, ServiceError> {
        let mut entries = fs::read_dir(&self.dir)
            .await
            .map_err(|e| ServiceError::Io(e.to_string()))?;
        let mut items = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| ServiceError::Io(e.to_string()))?
        {
            let path = entry.path();
            let bytes = match fs::read(&path).await {
                Ok(bytes) => bytes,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping unreadable record");
                    continue;
                }
            };
            match serde_json::from_slice::<Item>(&bytes) {
                Ok(item) => items.push(item),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping malformed record");
                }
            }
        }
        Ok(items)
    }

    async fn get(&self, id: u64) -> Result<Item, ServiceError> {
        let bytes = fs::read(self.item_path(id))
            .await
            .map_err(|e| Self::io_error("item", e))?;
        serde_json::from_slice(&bytes).map_err(|e| ServiceError::Serde(e.to_string()))
    }

    async fn delete(&self, id: u64) -> Result<(), ServiceError> {
        fs::remove_file(self.item_path(id))
            .await
            .map_err(|e| Self::io_error("item", e))
    }
}
