//! Request and response types for the HTTP surface.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateCustomerRequest {
    pub cpf: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct RenameCustomerRequest {
    pub name: String,
}

/// Body shared by deposit and withdraw.
#[derive(Debug, Deserialize)]
pub struct OperationRequest {
    pub description: String,
    pub amount: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct StatementQuery {
    pub date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
