//! Implements TransactionSource over an already-loaded sequence.

use crate::domain::{DomainError, Transaction};
use crate::ports::TransactionSource;

/// Holds the dataset in memory and hands out a copy per call.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    transactions: Vec<Transaction>,
}

impl MemorySource {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }
}

#[async_trait::async_trait]
impl TransactionSource for MemorySource {
    async fn fetch_all(&self) -> Result<Vec<Transaction>, DomainError> {
        Ok(self.transactions.clone())
    }
}
