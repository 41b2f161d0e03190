//! Customer lifecycle operations.

use crate::models::Customer;
use crate::services::error::ServiceError;
use crate::services::store::CustomerStore;
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

/// Orchestrates create/rename/fetch/delete against the store.
#[derive(Clone)]
pub struct CustomerService {
    store: Arc<CustomerStore>,
}

impl CustomerService {
    pub fn new(store: Arc<CustomerStore>) -> Self {
        Self { store }
    }

    /// Register a new customer under a unique tax id.
    #[instrument(skip(self, tax_id, name), fields(tax_id = %tax_id))]
    pub fn create(&self, tax_id: &str, name: &str) -> Result<Customer, ServiceError> {
        self.store.register(tax_id, name)
    }

    /// Rename a customer in place, returning the updated snapshot.
    #[instrument(skip(self, new_name))]
    pub async fn rename(&self, id: Uuid, new_name: &str) -> Result<Customer, ServiceError> {
        let handle = self.store.find(id)?;
        let mut customer = handle.write().await;
        customer.name = new_name.to_string();

        info!(customer_id = %id, "Customer renamed");
        Ok(customer.clone())
    }

    /// Fetch a customer snapshot including its full statement history.
    pub async fn fetch(&self, id: Uuid) -> Result<Customer, ServiceError> {
        let handle = self.store.find(id)?;
        let customer = handle.read().await;
        Ok(customer.clone())
    }

    /// Delete a customer and its statements.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        self.store.remove(id).await
    }
}
