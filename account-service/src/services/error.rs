use service_core::error::AppError;
use thiserror::Error;

/// Caller-input errors of the banking operations. Every message here is the
/// wire contract, `Insuficient balance.` spelling included.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceError {
    #[error("Customer already exists!")]
    DuplicateCustomer,

    #[error("Customer not found.")]
    CustomerNotFound,

    #[error("Id not provided!")]
    MissingIdentifier,

    #[error("Invalid date.")]
    InvalidDate,

    #[error("Amount must not be negative.")]
    InvalidAmount,

    #[error("Insuficient balance.")]
    InsufficientBalance,
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        // The public surface reports every caller-input error as 400 with
        // the bare message as the body, not-found included.
        AppError::BadRequest(anyhow::anyhow!("{err}"))
    }
}
