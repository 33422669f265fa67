use rust_decimal::Decimal;
use std::path::PathBuf;
use thiserror::Error;

/// Recoverable purchase failures. The caller is expected to display the
/// message and retry with an adjusted quantity or a further deposit.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum VendError {
    #[error("invalid selection")]
    InvalidSelection,
    #[error("out of stock")]
    OutOfStock,
    #[error("insufficient funds: {required} more required")]
    InsufficientFunds { required: Decimal },
    #[error("quantity must be at least 1")]
    InvalidQuantity,
    #[error("deposit amount must not be negative")]
    NegativeDeposit,
}

/// Startup-time inventory failures. These abort machine construction; they
/// never surface once a machine exists.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("inventory resource not found: {}", .0.display())]
    ResourceNotFound(PathBuf),
    #[error("malformed inventory data: {0}")]
    MalformedData(String),
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid request: {0}")]
    Request(String),
}
