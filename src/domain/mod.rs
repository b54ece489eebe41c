//! Core domain layer. No external I/O dependencies.
//!
//! Entities, errors and the pure aggregation functions live here.

pub mod entities;
pub mod errors;
pub mod statistics;

pub use entities::{Transaction, TransactionKind};
pub use errors::DomainError;
pub use statistics::{DailyTotal, TOP_DATES_LIMIT};
