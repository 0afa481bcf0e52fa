//! File-backed storage
//!
//! One JSON file per item under a data directory; paths are recomputed from
//! the item id, no index is kept.

pub mod item_store;

pub use item_store::FileItemStore;
