//! ## duallog-telemetry::diagnostics
//! **Subscriber for the logger's own diagnostics**
//!
//! The crates report sink and tracer lifecycle through `tracing` macros. Hosts
//! without a subscriber of their own can install this one; verbosity follows
//! `RUST_LOG` and defaults to `info`.

use tracing_subscriber::{fmt, EnvFilter};

use crate::TelemetryError;

/// Installs a global fmt subscriber.
///
/// Fails instead of panicking when a global subscriber is already set.
pub fn init() -> Result<(), TelemetryError> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_thread_names(true)
        .try_init()
        .map_err(|e| TelemetryError::Subscriber(e.to_string()))
}
