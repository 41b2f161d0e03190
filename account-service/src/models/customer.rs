//! Customer model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::entry::LedgerEntry;

/// Registered customer with its statement history.
///
/// The `id` is generated at registration and never reused; the tax id
/// (serialized as `cpf`, the form the callers supply it in) is unique
/// across the store for the lifetime of the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    #[serde(rename = "cpf")]
    pub tax_id: String,
    pub name: String,
    pub statements: Vec<LedgerEntry>,
}

impl Customer {
    /// Create a new customer with a fresh id and empty history.
    pub fn new(tax_id: String, name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            tax_id,
            name,
            statements: Vec::new(),
        }
    }
}
