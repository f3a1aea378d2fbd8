//! ## duallog-core::line
//! **Line rendering**
//!
//! `INFO: 2006/01/02 15:04:05 main.rs:12: message`

use std::fmt::Write;
use std::panic::Location;

use chrono::{DateTime, Local, Utc};

use duallog_config::{CallerStyle, FormatConfig};

use crate::Level;

/// One rendered, newline-terminated log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine(String);

impl LogLine {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

/// Renders log lines according to a [`FormatConfig`].
#[derive(Debug, Clone, Default)]
pub struct LineFormatter {
    config: FormatConfig,
}

impl LineFormatter {
    pub fn new(config: FormatConfig) -> Self {
        Self { config }
    }

    /// Renders a line stamped with the current time.
    pub fn render(&self, level: Level, caller: &Location<'_>, message: &str) -> LogLine {
        self.render_at(level, Utc::now(), caller, message)
    }

    pub fn render_at(
        &self,
        level: Level,
        now: DateTime<Utc>,
        caller: &Location<'_>,
        message: &str,
    ) -> LogLine {
        let timestamp = match (self.config.utc, self.config.microseconds) {
            (true, false) => now.format("%Y/%m/%d %H:%M:%S").to_string(),
            (true, true) => now.format("%Y/%m/%d %H:%M:%S%.6f").to_string(),
            (false, false) => now.with_timezone(&Local).format("%Y/%m/%d %H:%M:%S").to_string(),
            (false, true) => now
                .with_timezone(&Local)
                .format("%Y/%m/%d %H:%M:%S%.6f")
                .to_string(),
        };

        let mut line =
            String::with_capacity(level.prefix().len() + timestamp.len() + message.len() + 32);
        line.push_str(level.prefix());
        line.push_str(&timestamp);
        line.push(' ');
        match self.config.caller {
            CallerStyle::Short => {
                let _ = write!(line, "{}:{}: ", short_file(caller.file()), caller.line());
            }
            CallerStyle::Long => {
                let _ = write!(line, "{}:{}: ", caller.file(), caller.line());
            }
            CallerStyle::Off => {}
        }
        line.push_str(message);
        if !message.ends_with('\n') {
            line.push('\n');
        }
        LogLine(line)
    }
}

fn short_file(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
    }

    fn utc() -> FormatConfig {
        FormatConfig {
            utc: true,
            ..FormatConfig::default()
        }
    }

    #[test]
    fn reference_layout() {
        let caller = Location::caller();
        let line = LineFormatter::new(utc()).render_at(Level::Info, fixed_time(), caller, "ready");
        assert_eq!(
            line.as_str(),
            format!("INFO: 2024/01/02 03:04:05 line.rs:{}: ready\n", caller.line())
        );
    }

    #[test]
    fn error_prefix_and_microseconds() {
        let caller = Location::caller();
        let config = FormatConfig {
            microseconds: true,
            ..utc()
        };
        let now = fixed_time() + chrono::Duration::microseconds(42);
        let line = LineFormatter::new(config).render_at(Level::Error, now, caller, "boom");
        assert_eq!(
            line.as_str(),
            format!("ERROR: 2024/01/02 03:04:05.000042 line.rs:{}: boom\n", caller.line())
        );
    }

    #[test]
    fn caller_styles() {
        let caller = Location::caller();
        let long = FormatConfig {
            caller: CallerStyle::Long,
            ..utc()
        };
        let line = LineFormatter::new(long).render_at(Level::Info, fixed_time(), caller, "x");
        assert!(line.as_str().contains(&format!("{}:{}: x", caller.file(), caller.line())));

        let off = FormatConfig {
            caller: CallerStyle::Off,
            ..utc()
        };
        let line = LineFormatter::new(off).render_at(Level::Info, fixed_time(), caller, "x");
        assert_eq!(line.as_str(), "INFO: 2024/01/02 03:04:05 x\n");
    }

    #[test]
    fn existing_newline_is_not_doubled() {
        let line = LineFormatter::new(utc()).render_at(
            Level::Info,
            fixed_time(),
            Location::caller(),
            "already terminated\n",
        );
        assert!(line.as_str().ends_with("already terminated\n"));
        assert!(!line.as_str().ends_with("\n\n"));
    }

    #[test]
    fn local_time_is_default() {
        let line = LineFormatter::default().render(Level::Info, Location::caller(), "now");
        let expected_date = Local::now().format("%Y/%m/%d").to_string();
        // Midnight rollover between the two clock reads is tolerated.
        let yesterday = (Local::now() - chrono::Duration::days(1))
            .format("%Y/%m/%d")
            .to_string();
        assert!(
            line.as_str().starts_with(&format!("INFO: {}", expected_date))
                || line.as_str().starts_with(&format!("INFO: {}", yesterday))
        );
    }

    #[test]
    fn short_file_strips_directories() {
        assert_eq!(short_file("src/bin/server.rs"), "server.rs");
        assert_eq!(short_file("C:\\src\\main.rs"), "main.rs");
        assert_eq!(short_file("main.rs"), "main.rs");
    }
}
