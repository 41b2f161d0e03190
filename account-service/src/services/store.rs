//! In-memory customer registry.

use crate::models::Customer;
use crate::services::error::ServiceError;
use dashmap::{mapref::entry::Entry, DashMap};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

/// Authoritative set of customers, keyed by id, with a secondary uniqueness
/// index on the tax id.
///
/// Customer state is only reachable through handles returned by `find`, and
/// every operation re-resolves: once `remove` returns, later `find` calls
/// observe `CustomerNotFound` no matter which handles are still in flight.
#[derive(Default)]
pub struct CustomerStore {
    customers: DashMap<Uuid, Arc<RwLock<Customer>>>,
    tax_ids: DashMap<String, Uuid>,
}

impl CustomerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new customer under a unique tax id.
    ///
    /// The tax-id slot is held exclusively while the customer is inserted,
    /// so concurrent registrations with the same tax id cannot both succeed.
    pub fn register(&self, tax_id: &str, name: &str) -> Result<Customer, ServiceError> {
        match self.tax_ids.entry(tax_id.to_string()) {
            Entry::Occupied(_) => Err(ServiceError::DuplicateCustomer),
            Entry::Vacant(slot) => {
                let customer = Customer::new(tax_id.to_string(), name.to_string());
                let snapshot = customer.clone();
                self.customers
                    .insert(customer.id, Arc::new(RwLock::new(customer)));
                slot.insert(snapshot.id);

                info!(customer_id = %snapshot.id, "Customer registered");
                Ok(snapshot)
            }
        }
    }

    /// Resolve a customer handle by id.
    pub fn find(&self, id: Uuid) -> Result<Arc<RwLock<Customer>>, ServiceError> {
        self.customers
            .get(&id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or(ServiceError::CustomerNotFound)
    }

    /// Delete a customer and its statements.
    ///
    /// The primary entry goes first so lookups observe the deletion before
    /// the tax id frees up for re-registration.
    pub async fn remove(&self, id: Uuid) -> Result<(), ServiceError> {
        let (_, handle) = self
            .customers
            .remove(&id)
            .ok_or(ServiceError::CustomerNotFound)?;

        let tax_id = handle.read().await.tax_id.clone();
        self.tax_ids.remove_if(&tax_id, |_, owner| *owner == id);

        info!(customer_id = %id, "Customer removed");
        Ok(())
    }
}
