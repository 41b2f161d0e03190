//! Statement entry model for the customer ledger.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Entry kind (credit or debit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Credit,
    Debit,
}

impl EntryKind {
    /// Get string representation for the wire and for metric labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Credit => "credit",
            Self::Debit => "debit",
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Single statement entry. Immutable once appended to a customer; the
/// timestamp is assigned by the service at insertion time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEntry {
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub amount: Decimal,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl LedgerEntry {
    pub fn new(
        kind: EntryKind,
        description: &str,
        amount: Decimal,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            kind,
            amount,
            description: description.to_string(),
            created_at,
        }
    }

    /// Credit entry stamped with the current time.
    pub fn credit(description: &str, amount: Decimal) -> Self {
        Self::new(EntryKind::Credit, description, amount, Utc::now())
    }

    /// Debit entry stamped with the current time.
    pub fn debit(description: &str, amount: Decimal) -> Self {
        Self::new(EntryKind::Debit, description, amount, Utc::now())
    }

    /// Get signed amount (positive for credit, negative for debit).
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            EntryKind::Credit => self.amount,
            EntryKind::Debit => -self.amount,
        }
    }
}
