//! Page controllers for cafe-admin
//!
//! The login and dashboard controllers run the page logic against injected
//! storage areas and hand navigation decisions back to the host.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(missing_debug_implementations, reason = "Controllers hold trait objects")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short error vars are idiomatic")]

mod dashboard;
mod error;
mod inventory;
mod login;
#[cfg(test)]
mod login_tests;
mod navigation;
pub mod render;

pub use dashboard::{DashboardController, DashboardElements, OrderRow, ProductForm, ProductRow};
pub use error::ServiceError;
pub use inventory::InventoryService;
pub use login::{LoginController, LoginElements, LoginForm};
pub use navigation::{Location, Mount, Navigation};
