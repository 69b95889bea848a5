//! Demo order board
//!
//! Illustrative records only. Nothing here is persisted or mutated.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OrderStatus {
    Completed,
    Preparing,
    Pending,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Preparing => "Preparing",
            Self::Pending => "Pending",
        }
    }

    /// Visual class of the status pill.
    ///
    /// Only `Completed` is highlighted; `Preparing` and `Pending` share the
    /// pending style.
    #[must_use]
    pub const fn pill(self) -> StatusPill {
        match self {
            Self::Completed => StatusPill::Success,
            Self::Preparing | Self::Pending => StatusPill::Pending,
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusPill {
    Success,
    Pending,
}

impl StatusPill {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Pending => "pending",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    pub id: &'static str,
    pub item: &'static str,
    pub customer: &'static str,
    pub status: OrderStatus,
}

static DEMO_ORDERS: [Order; 4] = [
    Order { id: "ORD-1024", item: "Latte", customer: "Sam", status: OrderStatus::Completed },
    Order { id: "ORD-1025", item: "Cappuccino", customer: "Alex", status: OrderStatus::Preparing },
    Order { id: "ORD-1026", item: "Espresso", customer: "Lee", status: OrderStatus::Completed },
    Order { id: "ORD-1027", item: "Mocha", customer: "Taylor", status: OrderStatus::Pending },
];

/// The fixed order board shown on the dashboard.
#[must_use]
pub fn demo_orders() -> &'static [Order] {
    &DEMO_ORDERS
}
