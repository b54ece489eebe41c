//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, Transaction};

/// Read side of the transaction store. Supplies the full dataset per call.
#[async_trait::async_trait]
pub trait TransactionSource: Send + Sync {
    /// All transactions, in the order the store holds them. That order is
    /// what first-seen tie-breaks follow.
    async fn fetch_all(&self) -> Result<Vec<Transaction>, DomainError>;
}

/// Write side, used only to seed an empty store at startup.
#[async_trait::async_trait]
pub trait TransactionStore: Send + Sync {
    async fn count(&self) -> Result<u64, DomainError>;

    /// Insert in one batch. Rows whose id already exists are skipped.
    async fn insert_many(&self, transactions: &[Transaction]) -> Result<u64, DomainError>;
}

/// Source of initial records for an empty store (e.g. a JSON file).
#[async_trait::async_trait]
pub trait SeedPort: Send + Sync {
    async fn load(&self) -> Result<Vec<Transaction>, DomainError>;
}

/// Injected logging capability. Keeps use cases free of a global logger.
pub trait LogPort: Send + Sync {
    fn info(&self, message: &str);

    /// Log a failure together with the error that caused it.
    fn error(&self, message: &str, cause: &(dyn std::error::Error + Send + Sync));
}
