use thiserror::Error;

/// Errors raised while parsing or validating domain values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{0} is not a valid coffee type")]
    UnknownCoffeeType(String),

    #[error("Amount must be positive")]
    NonPositiveAmount,

    #[error("Not enough inventory")]
    InsufficientStock { coffee_type: String, available: u32, requested: u32 },
}

pub type Result<T> = std::result::Result<T, CoreError>;
