//! Line format configuration.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// How the call-site annotation is rendered.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CallerStyle {
    /// File name and line (`main.rs:12`).
    #[default]
    Short,
    /// Full path as recorded by the compiler and line.
    Long,
    /// No annotation.
    Off,
}

/// Timestamp and call-site options for every written line.
///
/// The defaults reproduce `INFO: 2006/01/02 15:04:05 main.rs:12: message`.
#[derive(Default, Debug, Serialize, Deserialize, Validate, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    /// Render timestamps in UTC instead of local time.
    #[serde(default)]
    pub utc: bool,

    /// Append microseconds to the time of day.
    #[serde(default)]
    pub microseconds: bool,

    /// Call-site annotation style.
    #[serde(default)]
    pub caller: CallerStyle,
}
