//! Prometheus metrics for account-service.

use once_cell::sync::Lazy;
use prometheus::{register_counter, register_counter_vec, Counter, CounterVec};

/// Customers registered since startup.
pub static CUSTOMERS_CREATED: Lazy<Counter> = Lazy::new(|| {
    register_counter!(
        "account_customers_created_total",
        "Total number of customers registered"
    )
    .expect("Failed to register customers_created")
});

/// Statement entries appended, by kind.
pub static ENTRIES_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "account_entries_total",
        "Total number of statement entries appended",
        &["kind"] // credit, debit
    )
    .expect("Failed to register entries_total")
});

/// Initialize all metrics (forces lazy initialization).
pub fn init_metrics() {
    Lazy::force(&CUSTOMERS_CREATED);
    Lazy::force(&ENTRIES_TOTAL);
}

/// Get metrics in Prometheus text format.
pub fn get_metrics() -> String {
    let encoder = prometheus::TextEncoder::new();
    let metric_families = prometheus::gather();
    encoder
        .encode_to_string(&metric_families)
        .unwrap_or_default()
}
