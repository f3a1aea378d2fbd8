use std::io;
use std::path::PathBuf;

use thiserror::Error;

use duallog_config::ConfigError;
use duallog_telemetry::TelemetryError;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("Failed to open log file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write log file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to sync log file {}: {source}", path.display())]
    Sync {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Tracing initialization failed: {0}")]
    TracingInit(#[source] TelemetryError),

    #[error("Tracing shutdown failed: {0}")]
    Shutdown(#[source] TelemetryError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl LoggerError {
    /// True for file open, write and sync failures.
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            LoggerError::Open { .. } | LoggerError::Write { .. } | LoggerError::Sync { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, LoggerError>;
