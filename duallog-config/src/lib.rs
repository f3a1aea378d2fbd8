//! # duallog configuration
//!
//! Layered configuration for the dual-sink logger.
//!
//! ## Features
//! - **Sinks**: directory, file names and creation mode of the info and error logs
//! - **Format**: timestamp zone/precision and call-site style of each line
//! - **Tracing**: optional per-call span export to an OTLP collector
//!
//! Defaults: `info.log` and `error.log` in the working directory, local time,
//! short call site, no tracing.

#![warn(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

mod error;
mod format;
mod sinks;
mod telemetry;
mod validation;

pub use error::ConfigError;
pub use format::CallerStyle;
pub use format::FormatConfig;
pub use sinks::SinkConfig;
pub use telemetry::InitFailurePolicy;
pub use telemetry::TracingConfig;

/// Base configuration file, relative to the working directory.
pub const CONFIG_FILE: &str = "config/duallog.yaml";

/// Prefix of the environment variables overriding file settings.
pub const ENV_PREFIX: &str = "DUALLOG_";

/// Top-level configuration container for the logger.
#[derive(Debug, Serialize, Deserialize, Validate, Default, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Info and error file sinks.
    #[validate(nested)]
    #[serde(default)]
    pub sinks: SinkConfig,

    /// Line format options.
    #[validate(nested)]
    #[serde(default)]
    pub format: FormatConfig,

    /// Per-call tracing spans.
    #[validate(nested)]
    #[serde(default)]
    pub tracing: TracingConfig,
}

impl LoggerConfig {
    /// Load configuration from default files and environment.
    ///
    /// Hierarchy:
    /// 1. Default values
    /// 2. `config/duallog.yaml` - base settings. If missing, defaults are used.
    /// 3. `config/<environment>.yaml` - environment-specific overrides, where the
    ///    environment is taken from `DUALLOG_ENV` (default `production`).
    /// 4. `DUALLOG_*` environment variables, nested keys separated by `__`.
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(LoggerConfig::default()));

        if Path::new(CONFIG_FILE).exists() {
            figment = figment.merge(Yaml::file(CONFIG_FILE));
        }

        let env = std::env::var("DUALLOG_ENV").unwrap_or_else(|_| "production".into());
        let env_file = format!("config/{}.yaml", env);
        if Path::new(&env_file).exists() {
            figment = figment.merge(Yaml::file(env_file));
        }

        Self::extract(figment)
    }

    /// Load configuration from a specific YAML file, still honouring `DUALLOG_*`
    /// environment overrides.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(PathBuf::from(path)));
        }

        let figment =
            Figment::from(Serialized::defaults(LoggerConfig::default())).merge(Yaml::file(path));
        Self::extract(figment)
    }

    fn extract(figment: Figment) -> Result<Self, ConfigError> {
        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(ConfigError::from)
            .and_then(|config: Self| {
                config.validate()?;
                Ok(config)
            })
    }
}
