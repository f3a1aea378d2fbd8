//! # duallog-core
//!
//! Dual-sink logger: `INFO` lines go to one append-only file, `ERROR` lines to
//! another, each stamped with time and call site:
//!
//! ```text
//! INFO: 2024/01/02 15:04:05 main.rs:12: cache warmed
//! ```
//!
//! With tracing configured, every call is mirrored as one span named `Info`
//! or `Error` holding the message as its single event.
//!
//! ### Key Submodules:
//! - `logger`: [`DualSinkLogger`], construction and the logging calls
//! - `sink`: mutex-guarded append-only files
//! - `line`: line layout and timestamps
//! - `printf`: printf-style rendering behind `logf`, `infof` and `errorf`

#![warn(unsafe_code)]

mod macros;

pub mod error;
pub mod level;
pub mod line;
pub mod logger;
pub mod printf;
pub mod sink;

pub use error::{LoggerError, Result};
pub use level::Level;
pub use line::{LineFormatter, LogLine};
pub use logger::DualSinkLogger;
pub use printf::{sprintf, Arg};
pub use sink::FileSink;

pub use duallog_config::LoggerConfig;
