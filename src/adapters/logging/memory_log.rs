//! In-memory LogPort for testing.
//!
//! Records every entry so tests can assert on what was logged and in which order.

use crate::ports::LogPort;
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    /// Display form of the causing error (error entries only).
    pub cause: Option<String>,
}

#[derive(Debug, Default)]
pub struct MemoryLog {
    entries: Mutex<Vec<LogEntry>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        match self.entries.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn entries_at(&self, level: LogLevel) -> Vec<LogEntry> {
        self.entries()
            .into_iter()
            .filter(|e| e.level == level)
            .collect()
    }

    /// Messages at `level`, oldest first.
    pub fn messages(&self, level: LogLevel) -> Vec<String> {
        self.entries_at(level)
            .into_iter()
            .map(|e| e.message)
            .collect()
    }

    fn push(&self, entry: LogEntry) {
        match self.entries.lock() {
            Ok(mut guard) => guard.push(entry),
            Err(poisoned) => poisoned.into_inner().push(entry),
        }
    }
}

impl LogPort for MemoryLog {
    fn info(&self, message: &str) {
        self.push(LogEntry {
            level: LogLevel::Info,
            message: message.to_string(),
            cause: None,
        });
    }

    fn error(&self, message: &str, cause: &(dyn std::error::Error + Send + Sync)) {
        self.push(LogEntry {
            level: LogLevel::Error,
            message: message.to_string(),
            cause: Some(cause.to_string()),
        });
    }
}
