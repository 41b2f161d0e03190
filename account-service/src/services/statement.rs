//! Statement operations: deposits, withdrawals, history queries.

use crate::models::{EntryKind, LedgerEntry};
use crate::services::balance::compute_balance;
use crate::services::error::ServiceError;
use crate::services::store::CustomerStore;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

/// Balance plus the entries it was computed from, in insertion order.
#[derive(Debug, Clone, Serialize)]
pub struct StatementView {
    pub balance: Decimal,
    pub statements: Vec<LedgerEntry>,
}

/// Orchestrates deposit/withdraw/query against a customer's entry sequence.
#[derive(Clone)]
pub struct StatementService {
    store: Arc<CustomerStore>,
}

impl StatementService {
    pub fn new(store: Arc<CustomerStore>) -> Self {
        Self { store }
    }

    /// List a customer's statements, optionally restricted to a single UTC
    /// calendar day, together with the balance over the returned set.
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        id: Uuid,
        date: Option<&str>,
    ) -> Result<StatementView, ServiceError> {
        let day = date.map(parse_day).transpose()?;

        let handle = self.store.find(id)?;
        let customer = handle.read().await;

        let statements: Vec<LedgerEntry> = match day {
            Some(day) => customer
                .statements
                .iter()
                .filter(|entry| entry.created_at.date_naive() == day)
                .cloned()
                .collect(),
            None => customer.statements.clone(),
        };

        Ok(StatementView {
            balance: compute_balance(&statements),
            statements,
        })
    }

    /// Record a credit against the customer.
    #[instrument(skip(self, description))]
    pub async fn deposit(
        &self,
        id: Uuid,
        description: &str,
        amount: Decimal,
    ) -> Result<(), ServiceError> {
        if amount < Decimal::ZERO {
            return Err(ServiceError::InvalidAmount);
        }

        let handle = self.store.find(id)?;
        let mut customer = handle.write().await;
        customer
            .statements
            .push(LedgerEntry::credit(description, amount));

        info!(customer_id = %id, kind = %EntryKind::Credit, %amount, "Entry appended");
        Ok(())
    }

    /// Record a debit against the customer.
    ///
    /// The balance check and the append happen under one write-lock
    /// acquisition, so concurrent withdrawals cannot jointly overdraw.
    #[instrument(skip(self, description))]
    pub async fn withdraw(
        &self,
        id: Uuid,
        description: &str,
        amount: Decimal,
    ) -> Result<(), ServiceError> {
        if amount < Decimal::ZERO {
            return Err(ServiceError::InvalidAmount);
        }

        let handle = self.store.find(id)?;
        let mut customer = handle.write().await;

        if compute_balance(&customer.statements) < amount {
            return Err(ServiceError::InsufficientBalance);
        }
        customer
            .statements
            .push(LedgerEntry::debit(description, amount));

        info!(customer_id = %id, kind = %EntryKind::Debit, %amount, "Entry appended");
        Ok(())
    }
}

fn parse_day(raw: &str) -> Result<NaiveDate, ServiceError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| ServiceError::InvalidDate)
}
