use std::sync::Arc;

use cafe_admin_core::constants::PRODUCTS_KEY;
use cafe_admin_core::{Product, ProductId};
use serde::Deserialize;

use crate::error::StorageError;
use crate::traits::KeyValueStore;

/// Product list as persisted. Records written before identifiers existed
/// carry only `name` and `price`.
#[derive(Deserialize)]
struct StoredProduct {
    #[serde(default)]
    id: Option<ProductId>,
    name: String,
    price: f64,
}

/// Ordered product list in the persistent area.
#[derive(Clone)]
pub struct ProductStore {
    store: Arc<dyn KeyValueStore>,
}

impl ProductStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Products in insertion order.
    ///
    /// A missing or malformed list reads as empty; a malformed record (such
    /// as a `null` price) is skipped on its own. Records without an
    /// identifier get one, and the list is written back so the identifier
    /// stays stable across reads.
    ///
    /// # Errors
    /// Returns error only if the store itself fails.
    pub fn load(&self) -> Result<Vec<Product>, StorageError> {
        let Some(raw) = self.store.get(PRODUCTS_KEY)? else {
            return Ok(Vec::new());
        };
        let records = match serde_json::from_str::<Option<Vec<serde_json::Value>>>(&raw) {
            Ok(list) => list.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(error = %e, "malformed product list, treating as empty");
                return Ok(Vec::new());
            },
        };

        let mut migrated = false;
        let mut products = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            let stored: StoredProduct = match serde_json::from_value(record) {
                Ok(stored) => stored,
                Err(e) => {
                    tracing::warn!(index, error = %e, "skipping malformed product record");
                    continue;
                },
            };
            let id = match stored.id {
                Some(id) => id,
                None => {
                    migrated = true;
                    ProductId::generate()
                },
            };
            products.push(Product { id, name: stored.name, price: stored.price });
        }

        if migrated {
            tracing::info!(count = products.len(), "assigned identifiers to legacy products");
            self.save(&products)?;
        }
        Ok(products)
    }

    /// Replace the whole list.
    ///
    /// # Errors
    /// Returns error if encoding or the store write fails.
    pub fn save(&self, products: &[Product]) -> Result<(), StorageError> {
        let json = serde_json::to_string(products)?;
        self.store.set(PRODUCTS_KEY, &json)
    }

    /// Append `product` to the end of the list.
    ///
    /// # Errors
    /// Returns error if the store fails.
    pub fn append(&self, product: Product) -> Result<Vec<Product>, StorageError> {
        let mut products = self.load()?;
        products.push(product);
        self.save(&products)?;
        Ok(products)
    }

    /// Remove the product with `id`. Returns the removed product, or `None`
    /// when no product has that identifier (nothing is written then).
    ///
    /// # Errors
    /// Returns error if the store fails.
    pub fn remove(&self, id: ProductId) -> Result<Option<Product>, StorageError> {
        let mut products = self.load()?;
        let Some(position) = products.iter().position(|p| p.id == id) else {
            return Ok(None);
        };
        let removed = products.remove(position);
        self.save(&products)?;
        Ok(Some(removed))
    }

    /// Remove the product at `index`; out-of-range indices remove nothing.
    ///
    /// # Errors
    /// Returns error if the store fails.
    pub fn remove_at(&self, index: usize) -> Result<Option<Product>, StorageError> {
        let mut products = self.load()?;
        if index >= products.len() {
            return Ok(None);
        }
        let removed = products.remove(index);
        self.save(&products)?;
        Ok(Some(removed))
    }
}
