//! Custom validation functions for configuration.
//!
//! Shared checks used by the sink and tracing sections.

use validator::ValidationError;

use crate::sinks::SinkConfig;

/// Validate that a log file name is a bare file name (no directory components).
pub fn validate_file_name(name: &str) -> Result<(), ValidationError> {
    let valid = !name.trim().is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0']);

    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_file_name"))
    }
}

/// Validate that the info and error sinks do not point at the same file.
pub fn validate_distinct_files(sinks: &SinkConfig) -> Result<(), ValidationError> {
    if sinks.info_file == sinks.error_file {
        return Err(ValidationError::new("sink_files_must_differ"));
    }
    Ok(())
}
