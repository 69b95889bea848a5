//! Storage layer for cafe-admin
//!
//! Two key-value areas (tab-scoped and persistent) behind one trait, plus the
//! record stores that encode session, products, theme and inventory into them.

mod areas;
pub mod error;
mod file_store;
mod memory;
mod preferences;
mod product_store;
mod session_store;
#[cfg(test)]
mod tests;
pub mod traits;

pub use areas::StorageAreas;
pub use error::StorageError;
pub use file_store::FileStore;
pub use memory::MemoryStore;
pub use preferences::{InventoryStore, ThemeStore};
pub use product_store::ProductStore;
pub use session_store::SessionStore;
pub use traits::KeyValueStore;
