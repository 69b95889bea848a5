//! Small single-key records: the theme flag and the inventory ledger.

use std::sync::Arc;

use cafe_admin_core::constants::{INVENTORY_KEY, THEME_KEY};
use cafe_admin_core::{InventoryLedger, Theme};

use crate::error::StorageError;
use crate::traits::KeyValueStore;

/// Persisted theme flag, stored as the raw string `light` or `dark`.
#[derive(Clone)]
pub struct ThemeStore {
    store: Arc<dyn KeyValueStore>,
}

impl ThemeStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// # Errors
    /// Returns error if the store fails.
    pub fn load(&self) -> Result<Theme, StorageError> {
        Ok(Theme::from_stored(self.store.get(THEME_KEY)?.as_deref()))
    }

    /// # Errors
    /// Returns error if the store fails.
    pub fn save(&self, theme: Theme) -> Result<(), StorageError> {
        self.store.set(THEME_KEY, theme.as_str())
    }
}

/// Persisted stock and sales ledger.
#[derive(Clone)]
pub struct InventoryStore {
    store: Arc<dyn KeyValueStore>,
}

impl InventoryStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Ledger contents; a missing or malformed record reads as empty.
    ///
    /// # Errors
    /// Returns error if the store fails.
    pub fn load(&self) -> Result<InventoryLedger, StorageError> {
        let Some(raw) = self.store.get(INVENTORY_KEY)? else {
            return Ok(InventoryLedger::default());
        };
        match serde_json::from_str(&raw) {
            Ok(ledger) => Ok(ledger),
            Err(e) => {
                tracing::warn!(error = %e, "malformed inventory ledger, treating as empty");
                Ok(InventoryLedger::default())
            },
        }
    }

    /// # Errors
    /// Returns error if encoding or the store write fails.
    pub fn save(&self, ledger: &InventoryLedger) -> Result<(), StorageError> {
        let json = serde_json::to_string(ledger)?;
        self.store.set(INVENTORY_KEY, &json)
    }
}
