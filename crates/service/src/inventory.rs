//! Bean stock and sales bookkeeping on top of the persisted ledger.

use cafe_admin_core::{CoffeeType, InventoryEntry, SaleReceipt};
use cafe_admin_storage::{InventoryStore, StorageAreas};

use crate::error::ServiceError;

pub struct InventoryService {
    store: InventoryStore,
}

impl InventoryService {
    pub fn new(areas: &StorageAreas) -> Self {
        Self { store: InventoryStore::new(areas.persistent.clone()) }
    }

    /// Add stock and return the new quantity.
    ///
    /// # Errors
    /// Invalid amount, or storage failure.
    pub fn add_stock(&self, coffee_type: CoffeeType, kilograms: u32) -> Result<u32, ServiceError> {
        let mut ledger = self.store.load()?;
        let quantity = ledger.add_stock(coffee_type, kilograms)?;
        self.store.save(&ledger)?;
        tracing::info!(%coffee_type, kilograms, quantity, "stock added");
        Ok(quantity)
    }

    /// Record a sale. Nothing is written when the sale is rejected.
    ///
    /// # Errors
    /// Invalid amount, insufficient stock, or storage failure.
    pub fn sell(&self, coffee_type: CoffeeType, kilograms: u32) -> Result<SaleReceipt, ServiceError> {
        let mut ledger = self.store.load()?;
        let receipt = ledger.sell(coffee_type, kilograms).inspect_err(|e| {
            tracing::warn!(%coffee_type, kilograms, error = %e, "sale rejected");
        })?;
        self.store.save(&ledger)?;
        Ok(receipt)
    }

    /// # Errors
    /// Storage failure.
    pub fn stock(&self) -> Result<Vec<InventoryEntry>, ServiceError> {
        Ok(self.store.load()?.stock_entries())
    }

    /// # Errors
    /// Storage failure.
    pub fn sales(&self) -> Result<Vec<InventoryEntry>, ServiceError> {
        Ok(self.store.load()?.sales_entries())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cafe_admin_core::CoreError;

    #[test]
    fn test_rejected_sale_writes_nothing() {
        let areas = StorageAreas::in_memory();
        let inventory = InventoryService::new(&areas);
        inventory.add_stock(CoffeeType::Liberica, 20).unwrap();

        let err = inventory.sell(CoffeeType::Liberica, 25).unwrap_err();

        assert!(matches!(err, ServiceError::InvalidInput(CoreError::InsufficientStock { .. })));
        assert_eq!(inventory.stock().unwrap()[0].kilograms, 20);
        assert!(inventory.sales().unwrap().is_empty());
    }

    #[test]
    fn test_sales_accumulate_per_type() {
        let areas = StorageAreas::in_memory();
        let inventory = InventoryService::new(&areas);
        inventory.add_stock(CoffeeType::Robusta, 10).unwrap();

        inventory.sell(CoffeeType::Robusta, 5).unwrap();
        let receipt = inventory.sell(CoffeeType::Robusta, 5).unwrap();

        assert_eq!(receipt, SaleReceipt { remaining_kg: 0, total_sold_kg: 10 });
    }
}
