/// Severity of a log call. Each level owns one file sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Info,
    Error,
}

impl Level {
    /// Line prefix written before the timestamp.
    pub const fn prefix(self) -> &'static str {
        match self {
            Level::Info => "INFO: ",
            Level::Error => "ERROR: ",
        }
    }

    /// Name of the span recorded for a call at this level.
    pub const fn span_name(self) -> &'static str {
        match self {
            Level::Info => "Info",
            Level::Error => "Error",
        }
    }
}
