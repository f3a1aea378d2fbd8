//! File sink configuration.
//!
//! Where the info and error log files live and how they are created.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use validator::{self, Validate};

use crate::validation;

/// Location and permissions of the two append-only log files.
#[derive(Debug, Serialize, Deserialize, Validate, Clone, PartialEq, Eq)]
#[validate(schema(function = validation::validate_distinct_files))]
pub struct SinkConfig {
    /// Directory both files are created in.
    #[serde(default = "default_directory")]
    pub directory: PathBuf,

    /// File receiving `INFO` lines.
    #[validate(custom(function = validation::validate_file_name))]
    #[serde(default = "default_info_file")]
    pub info_file: String,

    /// File receiving `ERROR` lines.
    #[validate(custom(function = validation::validate_file_name))]
    #[serde(default = "default_error_file")]
    pub error_file: String,

    /// Permission bits used when a file is created (Unix only).
    #[validate(range(max = 511))] // 0o777
    #[serde(default = "default_mode")]
    pub mode: u32,
}

fn default_directory() -> PathBuf {
    PathBuf::from(".")
}

fn default_info_file() -> String {
    "info.log".into()
}

fn default_error_file() -> String {
    "error.log".into()
}

fn default_mode() -> u32 {
    0o666
}

impl SinkConfig {
    /// Sink configuration rooted at `directory` with the default file names.
    pub fn in_directory(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            ..Self::default()
        }
    }

    /// Full path of the info log.
    pub fn info_path(&self) -> PathBuf {
        self.directory.join(&self.info_file)
    }

    /// Full path of the error log.
    pub fn error_path(&self) -> PathBuf {
        self.directory.join(&self.error_file)
    }
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            info_file: default_info_file(),
            error_file: default_error_file(),
            mode: default_mode(),
        }
    }
}
