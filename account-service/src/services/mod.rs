//! Service layer: store, balance engine, and the orchestration services.

pub mod balance;
pub mod customer;
pub mod error;
pub mod metrics;
pub mod statement;
pub mod store;

pub use customer::CustomerService;
pub use error::ServiceError;
pub use statement::{StatementService, StatementView};
pub use store::CustomerStore;
