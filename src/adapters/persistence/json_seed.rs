//! Implements SeedPort from a JSON file (`transaction.json`).
//!
//! The file is an array of objects keyed `Id`, `Date`, `Type`, `Amount`.
//! Records are mapped into domain transactions here; nothing else sees the file layout.

use crate::domain::{DomainError, Transaction, TransactionKind};
use crate::ports::SeedPort;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SeedRecord {
    id: i32,
    date: String,
    #[serde(rename = "Type", default)]
    kind: Option<String>,
    amount: Decimal,
}

/// Accepts `2024-08-12T10:00:00[.fff]`, the same with a space separator,
/// RFC 3339 with an offset (wall time kept), or a bare `2024-08-12`.
fn parse_seed_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.naive_local())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Parse seed JSON. A literal `null` is treated as an empty file.
pub fn parse_seed(json: &str) -> Result<Vec<Transaction>, DomainError> {
    let records: Option<Vec<SeedRecord>> =
        serde_json::from_str(json).map_err(|e| DomainError::Seed(e.to_string()))?;
    records
        .unwrap_or_default()
        .into_iter()
        .map(|r| {
            let date = parse_seed_date(&r.date).ok_or_else(|| {
                DomainError::Seed(format!("transaction {}: unrecognised date {:?}", r.id, r.date))
            })?;
            let kind = TransactionKind::from(r.kind.unwrap_or_default());
            Ok(Transaction::new(r.id, date, kind, r.amount))
        })
        .collect()
}

/// JSON seed file on disk.
pub struct JsonSeedFile {
    path: PathBuf,
}

impl JsonSeedFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl SeedPort for JsonSeedFile {
    async fn load(&self) -> Result<Vec<Transaction>, DomainError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(DomainError::Seed(format!(
                    "seed file not found: {}",
                    self.path.display()
                )));
            }
            Err(e) => return Err(DomainError::Seed(e.to_string())),
        };
        let transactions = parse_seed(&content)?;
        info!(
            path = %self.path.display(),
            count = transactions.len(),
            "loaded seed file"
        );
        Ok(transactions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_seed_basic() {
        let json = r#"[
            {"Id": 1, "Date": "2024-08-12T10:15:00", "Type": "Credit", "Amount": 1000.00},
            {"Id": 2, "Date": "2024-08-11", "Type": "Debit", "Amount": "500.25"},
            {"Id": 3, "Date": "2024-08-10T08:00:00+05:30", "Type": null, "Amount": 3}
        ]"#;

        let txs = parse_seed(json).unwrap();

        assert_eq!(txs.len(), 3);
        assert_eq!(txs[0].kind, TransactionKind::Credit);
        assert_eq!(txs[0].amount, dec!(1000));
        assert_eq!(txs[0].date.to_string(), "2024-08-12 10:15:00");
        assert_eq!(txs[1].date.to_string(), "2024-08-11 00:00:00");
        assert_eq!(txs[1].amount, dec!(500.25));
        // Wall time kept from the offset form.
        assert_eq!(txs[2].date.to_string(), "2024-08-10 08:00:00");
        assert_eq!(txs[2].kind, TransactionKind::Other(String::new()));
    }

    #[test]
    fn test_parse_seed_missing_type_and_null_file() {
        let txs = parse_seed(r#"[{"Id": 9, "Date": "2024-01-01 12:00:00", "Amount": 1}]"#).unwrap();
        assert_eq!(txs[0].kind, TransactionKind::Other(String::new()));

        assert!(parse_seed("null").unwrap().is_empty());
        assert!(parse_seed("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_seed_rejects_bad_date() {
        let err = parse_seed(r#"[{"Id": 4, "Date": "12/08/2024", "Type": "Credit", "Amount": 1}]"#)
            .unwrap_err();
        assert!(matches!(err, DomainError::Seed(msg) if msg.contains("transaction 4")));
    }

    #[tokio::test]
    async fn test_missing_file_is_seed_error() {
        let seed = JsonSeedFile::new("/nonexistent/txstats/transaction.json");
        assert!(matches!(seed.load().await, Err(DomainError::Seed(_))));
    }
}
