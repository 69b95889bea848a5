//! Typed error enum for the service layer.
//!
//! Form validation problems are not errors here: the login form reports them
//! inline and the product form drops them. What reaches callers is storage
//! failure, or invalid input on operations that have no form to report to.

use cafe_admin_core::CoreError;
use cafe_admin_storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage area failed (I/O, poisoned lock, encoding).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Caller provided invalid input.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] CoreError),

    /// HTML template failed to render.
    #[error("render: {0}")]
    Render(#[from] askama::Error),
}
