/// Logs a printf-style message at `level`, converting each argument with
/// [`Arg::from`](crate::Arg).
///
/// ```no_run
/// # use duallog_core::{logf, DualSinkLogger, Level};
/// # fn demo(logger: &DualSinkLogger) -> duallog_core::Result<()> {
/// logf!(logger, Level::Info, "%d jobs queued", 12)?;
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! logf {
    ($logger:expr, $level:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $logger.logf($level, $format, &[$($crate::Arg::from($arg)),*])
    };
}

/// [`logf!`] at [`Level::Info`](crate::Level::Info).
#[macro_export]
macro_rules! infof {
    ($logger:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $logger.infof($format, &[$($crate::Arg::from($arg)),*])
    };
}

/// [`logf!`] at [`Level::Error`](crate::Level::Error).
#[macro_export]
macro_rules! errorf {
    ($logger:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $logger.errorf($format, &[$($crate::Arg::from($arg)),*])
    };
}
