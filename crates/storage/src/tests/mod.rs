//! Test utilities and module declarations for storage tests.

use std::sync::Arc;

use crate::{KeyValueStore, MemoryStore, StorageAreas};
use cafe_admin_core::{NewProduct, Product};

/// Storage areas backed by memory, with handles to inspect each area directly.
pub fn create_test_areas() -> (StorageAreas, Arc<MemoryStore>, Arc<MemoryStore>) {
    let tab = Arc::new(MemoryStore::new());
    let persistent = Arc::new(MemoryStore::new());
    let areas = StorageAreas::new(tab.clone(), persistent.clone());
    (areas, tab, persistent)
}

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn create_test_product(name: &str, price: &str) -> Product {
    NewProduct::parse(name, price).unwrap().into_product()
}

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn raw(store: &dyn KeyValueStore, key: &str) -> Option<String> {
    store.get(key).unwrap()
}

mod file_store_tests;
