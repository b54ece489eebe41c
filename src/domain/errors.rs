//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these. The statistics facade logs
//! and re-returns them without translation.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Repository error: {0}")]
    Repo(String),

    #[error("Computation failed: {0}")]
    Compute(String),

    #[error("Seed error: {0}")]
    Seed(String),

    #[error("UI error: {0}")]
    Ui(String),
}
