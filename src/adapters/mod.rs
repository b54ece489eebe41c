//! Infrastructure adapters. Implement the ports.
//!
//! SQLite store, seed file, logging, console UI. Map errors to DomainError.

pub mod logging;
pub mod persistence;
pub mod ui;
