//! Balance computation over statement entries.

use crate::models::LedgerEntry;
use rust_decimal::Decimal;

/// Net balance of a sequence of entries: sum of credits minus sum of debits,
/// folded in a single deterministic pass over the input order.
pub fn compute_balance(entries: &[LedgerEntry]) -> Decimal {
    entries
        .iter()
        .fold(Decimal::ZERO, |acc, entry| acc + entry.signed_amount())
}
