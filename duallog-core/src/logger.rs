//! ## duallog-core::logger
//! **Dual-sink logger**
//!
//! Routes each call to the file of its level and, when tracing is configured,
//! mirrors it as one span with one event. The line is written on the calling
//! thread; spans are only queued there and exported by the tracer provider.

use std::panic::Location;
use std::path::Path;

use tracing::{debug, info, warn};
use validator::Validate;

use duallog_config::{ConfigError, InitFailurePolicy, LoggerConfig};
use duallog_telemetry::{build_provider, SpanRecorder, TracerProvider};

use crate::printf::{self, Arg};
use crate::sink::{FileSink, SinkPair};
use crate::{Level, LineFormatter, LoggerError, Result};

/// Logger writing `INFO` and `ERROR` lines to two separate files.
///
/// Share it between threads with `Arc`; lines written to the same file by
/// concurrent callers never interleave.
#[derive(Debug)]
pub struct DualSinkLogger {
    service_name: String,
    info: FileSink,
    error: FileSink,
    formatter: LineFormatter,
    spans: Option<SpanRecorder>,
}

impl DualSinkLogger {
    /// Opens both sinks and, if `config.tracing.enabled`, builds a tracer
    /// provider owned by this logger.
    ///
    /// # Errors
    /// * [`LoggerError::Config`] if `config` does not validate.
    /// * [`LoggerError::Open`] if either file cannot be opened. Files created
    ///   by this call are removed again.
    /// * [`LoggerError::TracingInit`] if the tracer pipeline fails and the
    ///   policy is [`InitFailurePolicy::FailFast`].
    pub fn new(service_name: &str, config: &LoggerConfig) -> Result<Self> {
        config.validate().map_err(ConfigError::from)?;
        let sinks = SinkPair::open(&config.sinks)?;

        let spans = if config.tracing.enabled {
            match build_provider(service_name, &config.tracing) {
                Ok(provider) => Some(SpanRecorder::owned(service_name, provider)),
                Err(err) => match config.tracing.on_init_failure {
                    InitFailurePolicy::FailFast => {
                        sinks.discard();
                        return Err(LoggerError::TracingInit(err));
                    }
                    InitFailurePolicy::FileOnly => {
                        warn!(
                            service = service_name,
                            error = %err,
                            "Tracing unavailable, falling back to file-only logging"
                        );
                        None
                    }
                },
            }
        } else {
            None
        };

        Ok(Self::assemble(service_name, config, sinks, spans))
    }

    /// Opens both sinks and records spans on `provider`, regardless of
    /// `config.tracing.enabled`. The provider stays under the caller's control
    /// and is not shut down by [`DualSinkLogger::close`].
    pub fn with_tracer_provider(
        service_name: &str,
        config: &LoggerConfig,
        provider: TracerProvider,
    ) -> Result<Self> {
        config.validate().map_err(ConfigError::from)?;
        let sinks = SinkPair::open(&config.sinks)?;
        let spans = SpanRecorder::shared(service_name, provider);
        Ok(Self::assemble(service_name, config, sinks, Some(spans)))
    }

    fn assemble(
        service_name: &str,
        config: &LoggerConfig,
        sinks: SinkPair,
        spans: Option<SpanRecorder>,
    ) -> Self {
        info!(
            service = service_name,
            info = %sinks.info.path().display(),
            error = %sinks.error.path().display(),
            tracing = spans.is_some(),
            "Logger ready"
        );
        Self {
            service_name: service_name.to_owned(),
            info: sinks.info,
            error: sinks.error,
            formatter: LineFormatter::new(config.format.clone()),
            spans,
        }
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Whether each call also produces a span.
    pub fn tracing_enabled(&self) -> bool {
        self.spans.is_some()
    }

    pub fn info_path(&self) -> &Path {
        self.info.path()
    }

    pub fn error_path(&self) -> &Path {
        self.error.path()
    }

    /// Appends one line for `message` to the file of `level`.
    ///
    /// The span, if any, is recorded even when the write fails; the write
    /// error is still returned.
    #[track_caller]
    pub fn log(&self, level: Level, message: &str) -> Result<()> {
        let caller = Location::caller();
        let line = self.formatter.render(level, caller, message);
        let written = self.sink(level).write_line(&line);
        if let Some(spans) = &self.spans {
            spans.record(level.span_name(), message, caller);
        }
        written
    }

    /// Renders `format` with `args` (see [`printf`]) and logs the result.
    #[track_caller]
    pub fn logf(&self, level: Level, format: &str, args: &[Arg]) -> Result<()> {
        self.log(level, &printf::sprintf(format, args))
    }

    #[track_caller]
    pub fn info(&self, message: &str) -> Result<()> {
        self.log(Level::Info, message)
    }

    #[track_caller]
    pub fn error(&self, message: &str) -> Result<()> {
        self.log(Level::Error, message)
    }

    #[track_caller]
    pub fn infof(&self, format: &str, args: &[Arg]) -> Result<()> {
        self.logf(Level::Info, format, args)
    }

    #[track_caller]
    pub fn errorf(&self, format: &str, args: &[Arg]) -> Result<()> {
        self.logf(Level::Error, format, args)
    }

    /// Syncs both files and shuts down a tracer provider this logger owns.
    ///
    /// Every step is attempted; the first failure is returned.
    pub fn close(self) -> Result<()> {
        let info = self.info.sync();
        let error = self.error.sync();
        let spans = match &self.spans {
            Some(spans) => spans.shutdown().map_err(LoggerError::Shutdown),
            None => Ok(()),
        };
        debug!(service = %self.service_name, "Logger closed");
        info.and(error).and(spans)
    }

    fn sink(&self, level: Level) -> &FileSink {
        match level {
            Level::Info => &self.info,
            Level::Error => &self.error,
        }
    }
}
