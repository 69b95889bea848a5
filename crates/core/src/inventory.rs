//! Coffee bean stock and sales ledger
//!
//! Quantities are whole kilograms. The ledger only ever holds the three bean
//! varieties the café buys.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Bean variety. Variant order is alphabetical so ledgers list sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoffeeType {
    Arabica,
    Liberica,
    Robusta,
}

impl CoffeeType {
    pub const ALL: [Self; 3] = [Self::Arabica, Self::Liberica, Self::Robusta];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Arabica => "arabica",
            Self::Liberica => "liberica",
            Self::Robusta => "robusta",
        }
    }
}

impl Display for CoffeeType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CoffeeType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "arabica" => Ok(Self::Arabica),
            "liberica" => Ok(Self::Liberica),
            "robusta" => Ok(Self::Robusta),
            other => Err(CoreError::UnknownCoffeeType(other.to_owned())),
        }
    }
}

/// One row of the stock or sales listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InventoryEntry {
    pub coffee_type: CoffeeType,
    pub kilograms: u32,
}

/// Outcome of a successful sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaleReceipt {
    pub remaining_kg: u32,
    pub total_sold_kg: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryLedger {
    #[serde(default)]
    stock: BTreeMap<CoffeeType, u32>,
    #[serde(default)]
    sales: BTreeMap<CoffeeType, u32>,
}

impl InventoryLedger {
    #[must_use]
    pub fn quantity(&self, coffee_type: CoffeeType) -> u32 {
        self.stock.get(&coffee_type).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn sold(&self, coffee_type: CoffeeType) -> u32 {
        self.sales.get(&coffee_type).copied().unwrap_or(0)
    }

    /// Add `kilograms` of stock and return the new quantity.
    ///
    /// # Errors
    /// [`CoreError::NonPositiveAmount`] for zero, or when the sum would overflow.
    pub fn add_stock(&mut self, coffee_type: CoffeeType, kilograms: u32) -> Result<u32, CoreError> {
        if kilograms == 0 {
            return Err(CoreError::NonPositiveAmount);
        }
        let slot = self.stock.entry(coffee_type).or_insert(0);
        *slot = slot
            .checked_add(kilograms)
            .ok_or_else(|| CoreError::InvalidInput(format!("{coffee_type} stock overflow")))?;
        Ok(*slot)
    }

    /// Move `kilograms` from stock to the sales tally.
    ///
    /// # Errors
    /// [`CoreError::NonPositiveAmount`] for zero, [`CoreError::InsufficientStock`]
    /// when stock is lower than the requested amount. The ledger is unchanged on error.
    pub fn sell(&mut self, coffee_type: CoffeeType, kilograms: u32) -> Result<SaleReceipt, CoreError> {
        if kilograms == 0 {
            return Err(CoreError::NonPositiveAmount);
        }
        let available = self.quantity(coffee_type);
        if available < kilograms {
            return Err(CoreError::InsufficientStock {
                coffee_type: coffee_type.to_string(),
                available,
                requested: kilograms,
            });
        }
        let total_sold = self
            .sold(coffee_type)
            .checked_add(kilograms)
            .ok_or_else(|| CoreError::InvalidInput(format!("{coffee_type} sales overflow")))?;
        let remaining = available - kilograms;
        self.stock.insert(coffee_type, remaining);
        self.sales.insert(coffee_type, total_sold);
        Ok(SaleReceipt { remaining_kg: remaining, total_sold_kg: total_sold })
    }

    /// Stock rows ordered by coffee type.
    #[must_use]
    pub fn stock_entries(&self) -> Vec<InventoryEntry> {
        self.stock
            .iter()
            .map(|(&coffee_type, &kilograms)| InventoryEntry { coffee_type, kilograms })
            .collect()
    }

    /// Sales rows ordered by coffee type.
    #[must_use]
    pub fn sales_entries(&self) -> Vec<InventoryEntry> {
        self.sales
            .iter()
            .map(|(&coffee_type, &kilograms)| InventoryEntry { coffee_type, kilograms })
            .collect()
    }
}

/// Parse a signed amount from user input, rejecting zero and negatives.
///
/// # Errors
/// [`CoreError::NonPositiveAmount`] or [`CoreError::InvalidInput`] for non-integers.
pub fn parse_amount(raw: &str) -> Result<u32, CoreError> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| CoreError::InvalidInput(format!("amount {raw:?} is not a whole number")))?;
    if value <= 0 {
        return Err(CoreError::NonPositiveAmount);
    }
    u32::try_from(value).map_err(|_| CoreError::InvalidInput(format!("amount {value} is too large")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_coffee_type_message() {
        let err = "kopi-luwak".parse::<CoffeeType>().unwrap_err();
        assert_eq!(err.to_string(), "kopi-luwak is not a valid coffee type");
    }

    #[test]
    fn test_add_then_sell() {
        let mut ledger = InventoryLedger::default();
        assert_eq!(ledger.add_stock(CoffeeType::Arabica, 15).unwrap(), 15);
        let receipt = ledger.sell(CoffeeType::Arabica, 2).unwrap();
        assert_eq!(receipt, SaleReceipt { remaining_kg: 13, total_sold_kg: 2 });
        let receipt = ledger.sell(CoffeeType::Arabica, 3).unwrap();
        assert_eq!(receipt.total_sold_kg, 5);
    }

    #[test]
    fn test_overselling_leaves_ledger_untouched() {
        let mut ledger = InventoryLedger::default();
        ledger.add_stock(CoffeeType::Robusta, 4).unwrap();
        let before = ledger.clone();

        let err = ledger.sell(CoffeeType::Robusta, 5).unwrap_err();

        assert!(matches!(err, CoreError::InsufficientStock { available: 4, requested: 5, .. }));
        assert_eq!(err.to_string(), "Not enough inventory");
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_zero_amount_rejected() {
        let mut ledger = InventoryLedger::default();
        assert_eq!(ledger.add_stock(CoffeeType::Liberica, 0), Err(CoreError::NonPositiveAmount));
    }

    #[test]
    fn test_entries_sorted_by_type() {
        let mut ledger = InventoryLedger::default();
        ledger.add_stock(CoffeeType::Robusta, 10).unwrap();
        ledger.add_stock(CoffeeType::Arabica, 15).unwrap();
        ledger.add_stock(CoffeeType::Liberica, 20).unwrap();
        let order: Vec<_> = ledger.stock_entries().iter().map(|e| e.coffee_type).collect();
        assert_eq!(order, CoffeeType::ALL);
        assert!(ledger.sales_entries().is_empty());
    }

    #[test]
    fn test_ledger_json_uses_lowercase_keys() {
        let mut ledger = InventoryLedger::default();
        ledger.add_stock(CoffeeType::Arabica, 3).unwrap();
        let json = serde_json::to_string(&ledger).unwrap();
        assert_eq!(json, r#"{"stock":{"arabica":3},"sales":{}}"#);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(" 7 "), Ok(7));
        assert_eq!(parse_amount("-2"), Err(CoreError::NonPositiveAmount));
        assert_eq!(parse_amount("0"), Err(CoreError::NonPositiveAmount));
        assert!(parse_amount("1.5").is_err());
    }
}
