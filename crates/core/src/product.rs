use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;

/// Stable product identifier assigned at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(Uuid);

impl ProductId {
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|e| CoreError::InvalidInput(format!("invalid product id {s:?}: {e}")))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
}

impl Product {
    /// Price with two decimals, as shown in the product list. Halves round
    /// away from zero, so `3.125` shows as `3.13`.
    #[must_use]
    pub fn display_price(&self) -> String {
        format!("{:.2}", (self.price * 100.0).round() / 100.0)
    }
}

/// Validated product form input, not yet assigned an identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
}

impl NewProduct {
    /// Validate raw form values.
    ///
    /// The name is trimmed and must be non-empty. The price is trimmed; an empty
    /// price counts as zero. Anything that is not a finite, non-negative number
    /// is rejected.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidInput`] when either field is invalid.
    pub fn parse(name: &str, price: &str) -> Result<Self, CoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::InvalidInput("product name is empty".to_owned()));
        }
        let price = parse_price(price)?;
        Ok(Self { name: name.to_owned(), price })
    }

    #[must_use]
    pub fn into_product(self) -> Product {
        Product { id: ProductId::generate(), name: self.name, price: self.price }
    }
}

fn parse_price(raw: &str) -> Result<f64, CoreError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0.0);
    }
    let price: f64 = raw
        .parse()
        .map_err(|_| CoreError::InvalidInput(format!("price {raw:?} is not a number")))?;
    if !price.is_finite() || price < 0.0 {
        return Err(CoreError::InvalidInput(format!("price {raw:?} must be a non-negative number")));
    }
    // -0 parses fine but should not render as "-0.00"
    Ok(price.abs())
}
