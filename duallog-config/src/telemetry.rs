//! Distributed tracing configuration.
//!
//! Parameters for the per-call span pipeline:
//! - Collector endpoint and export timeout
//! - Behaviour when the pipeline cannot be initialized

use serde::{Deserialize, Serialize};
use validator::{self, Validate};

/// What to do when the tracer pipeline fails to initialize.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum InitFailurePolicy {
    /// Construction of the logger fails.
    #[default]
    FailFast,
    /// The logger is built without tracing and a warning is emitted.
    FileOnly,
}

/// Tracing configuration.
#[derive(Debug, Serialize, Deserialize, Validate, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    /// Emit one span per log call.
    #[serde(default)]
    pub enabled: bool,

    /// OTLP/HTTP traces endpoint of the collector.
    #[validate(url)]
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Export timeout (milliseconds).
    #[validate(range(min = 1, max = 120000))]
    #[serde(default = "default_timeout")]
    pub timeout_ms: u64,

    /// Init failure handling.
    #[serde(default)]
    pub on_init_failure: InitFailurePolicy,
}

fn default_endpoint() -> String {
    "http://localhost:4318/v1/traces".into()
}

fn default_timeout() -> u64 {
    10_000
}

impl TracingConfig {
    /// Tracing switched on with default collector settings.
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            ..Self::default()
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: default_endpoint(),
            timeout_ms: default_timeout(),
            on_init_failure: InitFailurePolicy::default(),
        }
    }
}
