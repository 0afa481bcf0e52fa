pub mod errors;
pub mod file;
pub mod item;
pub mod memory;
pub mod store;

pub use errors::ServiceError;
pub use item::{Item, ItemInput};
pub use store::ItemStore;
