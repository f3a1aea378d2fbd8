//! ## duallog-core::sink
//! **Append-only file sinks**
//!
//! Each sink serializes its writers with a mutex and hands every line to the
//! file in a single `write_all`, so concurrent callers never interleave
//! partial lines. `File` is unbuffered: once `write_line` returns, the line
//! has reached the operating system.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
#[cfg(unix)]
use std::os::unix::fs::OpenOptionsExt;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tracing::debug;

use duallog_config::SinkConfig;

use crate::{LogLine, LoggerError, Result};

#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    file: Mutex<File>,
}

impl FileSink {
    /// Opens `path` for appending, creating it with `mode` if absent.
    pub fn open(path: impl Into<PathBuf>, mode: u32) -> Result<Self> {
        let path = path.into();
        let mut options = OpenOptions::new();
        options.append(true).create(true);
        #[cfg(unix)]
        options.mode(mode);
        #[cfg(not(unix))]
        let _ = mode;

        let file = options.open(&path).map_err(|source| LoggerError::Open {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), "Opened log sink");
        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write_line(&self, line: &LogLine) -> Result<()> {
        let mut file = self.file.lock();
        file.write_all(line.as_bytes()).map_err(|source| LoggerError::Write {
            path: self.path.clone(),
            source,
        })
    }

    /// Flushes file contents and metadata to disk.
    pub fn sync(&self) -> Result<()> {
        self.file
            .lock()
            .sync_all()
            .map_err(|source| LoggerError::Sync {
                path: self.path.clone(),
                source,
            })
    }
}

/// The info and error sinks of one logger, opened together.
#[derive(Debug)]
pub(crate) struct SinkPair {
    pub(crate) info: FileSink,
    pub(crate) error: FileSink,
    created: [bool; 2],
}

impl SinkPair {
    /// Opens both sinks or neither: a file created here is removed again when
    /// the other one fails to open.
    pub(crate) fn open(config: &SinkConfig) -> Result<Self> {
        let info_path = config.info_path();
        let error_path = config.error_path();
        let created = [!info_path.exists(), !error_path.exists()];

        let info = FileSink::open(info_path, config.mode)?;
        let error = match FileSink::open(error_path, config.mode) {
            Ok(sink) => sink,
            Err(err) => {
                discard(info, created[0]);
                return Err(err);
            }
        };
        Ok(Self {
            info,
            error,
            created,
        })
    }

    /// Closes both sinks, removing the files this pair created.
    pub(crate) fn discard(self) {
        discard(self.info, self.created[0]);
        discard(self.error, self.created[1]);
    }
}

fn discard(sink: FileSink, created: bool) {
    let FileSink { path, file } = sink;
    drop(file);
    if created {
        if let Err(err) = fs::remove_file(&path) {
            debug!(path = %path.display(), error = %err, "Could not remove log sink");
        }
    }
}
