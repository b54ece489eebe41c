//! Logging adapters. Implement LogPort.
//!
//! `TracingLog` for the running application, `MemoryLog` for tests.

pub mod memory_log;
pub mod tracing_log;

pub use memory_log::{LogEntry, LogLevel, MemoryLog};
pub use tracing_log::TracingLog;
