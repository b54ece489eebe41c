//! First-run seeding: populate an empty store from the seed source.
//!
//! - Checks the store's row count first; a populated store is left untouched
//! - Loads seed records only when needed

use crate::domain::DomainError;
use crate::ports::{LogPort, SeedPort, TransactionStore};
use std::sync::Arc;

/// Seed service. Copies seed records into the store once.
pub struct SeedService {
    store: Arc<dyn TransactionStore>,
    seed: Arc<dyn SeedPort>,
    log: Arc<dyn LogPort>,
}

impl SeedService {
    pub fn new(
        store: Arc<dyn TransactionStore>,
        seed: Arc<dyn SeedPort>,
        log: Arc<dyn LogPort>,
    ) -> Self {
        Self { store, seed, log }
    }

    /// Returns the number of rows inserted (0 if the store already had data).
    pub async fn seed_if_empty(&self) -> Result<u64, DomainError> {
        let existing = self.store.count().await?;
        if existing > 0 {
            self.log.info(&format!(
                "Store already holds {} transactions; skipping seed.",
                existing
            ));
            return Ok(0);
        }

        let transactions = self.seed.load().await?;
        if transactions.is_empty() {
            self.log.info("No data was found in the seed file.");
            return Ok(0);
        }

        let inserted = self.store.insert_many(&transactions).await?;
        self.log.info(&format!("Seeded {} transactions.", inserted));
        Ok(inserted)
    }
}
