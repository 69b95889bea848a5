//! Core types for cafe-admin
//!
//! Domain values shared by the storage, service and CLI crates.

pub mod constants;
mod error;
mod inventory;
mod order;
mod paths;
mod product;
mod session;
mod theme;

pub use error::*;
pub use inventory::*;
pub use order::*;
pub use paths::DataPaths;
pub use product::*;
pub use session::*;
pub use theme::*;
