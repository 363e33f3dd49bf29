use std::fs::{OpenOptions, create_dir_all};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Local};
use thiserror::Error;
use tracing::Dispatch;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::prelude::*;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid log filter '{level}': {message}")]
    Filter { level: String, message: String },
}

/// Logger for one CLI session. The dispatch is handed to the generation
/// engine and installed as the default for the main thread by the caller.
pub struct LogSession {
    pub dispatch: Dispatch,
    pub path: Option<PathBuf>,
}

impl LogSession {
    pub fn disabled() -> Self {
        Self {
            dispatch: Dispatch::none(),
            path: None,
        }
    }
}

pub fn log_file_name(started_at: DateTime<Local>) -> String {
    format!("passlist_{}.log", started_at.format("%Y-%m-%d_%H-%M-%S"))
}

/// Opens `<dir>/passlist_<timestamp>.log` and builds a JSON subscriber on it.
pub fn open_session(
    dir: &Path,
    level: &str,
    started_at: DateTime<Local>,
) -> Result<LogSession, LoggingError> {
    create_dir_all(dir)?;
    let path = dir.join(log_file_name(started_at));
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    let file = Arc::new(Mutex::new(file));

    let make_writer = BoxMakeWriter::new(move || SharedWriter {
        file: Arc::clone(&file),
    });

    let filter = EnvFilter::try_new(level).map_err(|err| LoggingError::Filter {
        level: level.to_string(),
        message: err.to_string(),
    })?;

    let layer = tracing_subscriber::fmt::layer()
        .json()
        .with_timer(UtcTime::rfc_3339())
        .with_thread_names(true)
        .with_writer(make_writer);

    let subscriber = tracing_subscriber::registry().with(filter).with(layer);

    Ok(LogSession {
        dispatch: Dispatch::new(subscriber),
        path: Some(path),
    })
}

struct SharedWriter {
    file: Arc<Mutex<std::fs::File>>,
}

impl Write for SharedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        file.flush()
    }
}
