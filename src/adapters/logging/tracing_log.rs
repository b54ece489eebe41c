//! Implements LogPort on top of `tracing`. The subscriber is installed in main.

use crate::ports::LogPort;
use tracing::{error, info};

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLog;

impl TracingLog {
    pub fn new() -> Self {
        Self
    }
}

impl LogPort for TracingLog {
    fn info(&self, message: &str) {
        info!("{}", message);
    }

    fn error(&self, message: &str, cause: &(dyn std::error::Error + Send + Sync)) {
        error!(error = %cause, "{}", message);
    }
}
