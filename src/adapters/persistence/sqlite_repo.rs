//! SQLite-backed store via libsql. Implements TransactionSource and TransactionStore.
//!
//! Single `transactions` table in data/transactions.db. Amounts are stored as
//! decimal text so no precision is lost; reads come back in insertion order
//! (`seq`), independent of the transaction ids.

use crate::domain::{DomainError, Transaction, TransactionKind};
use crate::ports::{TransactionSource, TransactionStore};
use chrono::NaiveDateTime;
use libsql::{Database, params};
use rust_decimal::Decimal;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::info;

const DB_FILE: &str = "transactions.db";

/// Storage format for `transactions.date`. Fractional seconds only when non-zero.
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

const TRANSACTIONS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS transactions (
    seq INTEGER PRIMARY KEY AUTOINCREMENT,
    id INTEGER NOT NULL UNIQUE,
    date TEXT NOT NULL,
    kind TEXT NOT NULL DEFAULT '',
    amount TEXT NOT NULL
)"#;
const TRANSACTIONS_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_transactions_date ON transactions (date)";

/// SQLite store. One database file in the given base directory.
pub struct SqliteRepo {
    db: Database,
    db_path: PathBuf,
}

impl SqliteRepo {
    /// Connect to (or create) the database and ensure the schema exists.
    /// Call once at startup; the returned repo is safe to share via Arc.
    pub async fn connect(base_dir: impl AsRef<Path>) -> Result<Self, DomainError> {
        let base = base_dir.as_ref();
        std::fs::create_dir_all(base).map_err(|e| DomainError::Repo(e.to_string()))?;
        let db_path = base.join(DB_FILE);
        let path_str = db_path.to_string_lossy();
        let db = libsql::Builder::new_local(path_str.as_ref())
            .build()
            .await
            .map_err(|e| DomainError::Repo(e.to_string()))?;
        let conn = db.connect().map_err(|e| DomainError::Repo(e.to_string()))?;

        // PRAGMA returns a row; drain it (execute fails when rows are returned).
        let mut wal_rows = conn
            .query("PRAGMA journal_mode=WAL", ())
            .await
            .map_err(|e| DomainError::Repo(format!("WAL pragma failed: {}", e)))?;
        while wal_rows
            .next()
            .await
            .map_err(|e| DomainError::Repo(e.to_string()))?
            .is_some()
        {}

        conn.execute(TRANSACTIONS_TABLE, ())
            .await
            .map_err(|e| DomainError::Repo(e.to_string()))?;
        conn.execute(TRANSACTIONS_INDEX, ())
            .await
            .map_err(|e| DomainError::Repo(e.to_string()))?;

        info!(path = %db_path.display(), "SQLite connected with WAL mode");

        Ok(Self { db, db_path })
    }

    pub fn path(&self) -> &Path {
        &self.db_path
    }

    fn connection(&self) -> Result<libsql::Connection, DomainError> {
        self.db
            .connect()
            .map_err(|e| DomainError::Repo(e.to_string()))
    }

    fn parse_row(row: &libsql::Row) -> Result<Transaction, DomainError> {
        let id: i32 = row.get(0).map_err(|e| DomainError::Repo(e.to_string()))?;
        let date: String = row.get(1).map_err(|e| DomainError::Repo(e.to_string()))?;
        let kind: String = row.get(2).map_err(|e| DomainError::Repo(e.to_string()))?;
        let amount: String = row.get(3).map_err(|e| DomainError::Repo(e.to_string()))?;

        let date = NaiveDateTime::parse_from_str(&date, DATE_FORMAT)
            .map_err(|e| DomainError::Repo(format!("bad date {:?} in row {}: {}", date, id, e)))?;
        let amount = Decimal::from_str(&amount).map_err(|e| {
            DomainError::Repo(format!("bad amount {:?} in row {}: {}", amount, id, e))
        })?;
        Ok(Transaction::new(id, date, TransactionKind::from(kind), amount))
    }
}

#[async_trait::async_trait]
impl TransactionSource for SqliteRepo {
    async fn fetch_all(&self) -> Result<Vec<Transaction>, DomainError> {
        let conn = self.connection()?;
        let mut rows = conn
            .query(
                "SELECT id, date, kind, amount FROM transactions ORDER BY seq",
                (),
            )
            .await
            .map_err(|e| DomainError::Repo(e.to_string()))?;
        let mut transactions = Vec::new();
        while let Some(row) = rows
            .next()
            .await
            .map_err(|e| DomainError::Repo(e.to_string()))?
        {
            transactions.push(Self::parse_row(&row)?);
        }
        Ok(transactions)
    }
}

#[async_trait::async_trait]
impl TransactionStore for SqliteRepo {
    async fn count(&self) -> Result<u64, DomainError> {
        let conn = self.connection()?;
        let mut rows = conn
            .query("SELECT COUNT(*) FROM transactions", ())
            .await
            .map_err(|e| DomainError::Repo(e.to_string()))?;
        match rows
            .next()
            .await
            .map_err(|e| DomainError::Repo(e.to_string()))?
        {
            Some(row) => {
                let n: i64 = row.get(0).map_err(|e| DomainError::Repo(e.to_string()))?;
                Ok(n.max(0) as u64)
            }
            None => Ok(0),
        }
    }

    async fn insert_many(&self, transactions: &[Transaction]) -> Result<u64, DomainError> {
        if transactions.is_empty() {
            return Ok(0);
        }
        let conn = self.connection()?;
        let tx = conn
            .transaction()
            .await
            .map_err(|e| DomainError::Repo(e.to_string()))?;
        let mut inserted = 0u64;
        for t in transactions {
            let date = t.date.format(DATE_FORMAT).to_string();
            inserted += tx
                .execute(
                    r#"
                    INSERT INTO transactions (id, date, kind, amount)
                    VALUES (?1, ?2, ?3, ?4)
                    ON CONFLICT (id) DO NOTHING
                    "#,
                    params![t.id, date, t.kind.as_str(), t.amount.to_string()],
                )
                .await
                .map_err(|e| DomainError::Repo(e.to_string()))?;
        }
        tx.commit()
            .await
            .map_err(|e| DomainError::Repo(e.to_string()))?;
        info!(
            path = %self.db_path.display(),
            count = inserted,
            "saved transactions to disk"
        );
        Ok(inserted)
    }
}
