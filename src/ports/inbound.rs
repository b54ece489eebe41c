//! Inbound ports. UI (adapter) calls into the application.

use crate::domain::DomainError;
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

/// Query contract: the five statistics over the stored transactions.
#[async_trait::async_trait]
pub trait StatisticsQueries: Send + Sync {
    async fn total_credit_amount(&self) -> Result<Decimal, DomainError>;

    async fn total_debit_amount(&self) -> Result<Decimal, DomainError>;

    async fn highest_amount_date(&self) -> Result<Option<NaiveDateTime>, DomainError>;

    async fn average_amount_per_day(&self) -> Result<Decimal, DomainError>;

    async fn top_dates_by_total(&self) -> Result<Vec<NaiveDate>, DomainError>;
}

/// Input port: UI/CLI runs an interactive session until the user exits.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    async fn run(&self) -> Result<(), DomainError>;
}
