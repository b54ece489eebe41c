//! Domain entities. Pure data structures for the core business.
//!
//! No storage/IO types here; adapters map their rows and files into these.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single financial movement. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i32,
    pub date: NaiveDateTime,
    pub kind: TransactionKind,
    pub amount: Decimal,
}

impl Transaction {
    pub fn new(id: i32, date: NaiveDateTime, kind: TransactionKind, amount: Decimal) -> Self {
        Self {
            id,
            date,
            kind,
            amount,
        }
    }

    /// Calendar day of the transaction; time-of-day is dropped.
    pub fn day(&self) -> NaiveDate {
        self.date.date()
    }
}

/// Transaction tag. Stored as free text; only the exact literals
/// `"Credit"` and `"Debit"` are meaningful.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransactionKind {
    Credit,
    Debit,
    /// Any other tag, kept verbatim. Counts toward neither total.
    Other(String),
}

impl TransactionKind {
    /// Case-sensitive: `"credit"` is `Other`, not `Credit`.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "Credit" => Self::Credit,
            "Debit" => Self::Debit,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Credit => "Credit",
            Self::Debit => "Debit",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for TransactionKind {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Credit" => Self::Credit,
            "Debit" => Self::Debit,
            _ => Self::Other(raw),
        }
    }
}

impl From<TransactionKind> for String {
    fn from(kind: TransactionKind) -> Self {
        match kind {
            TransactionKind::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
