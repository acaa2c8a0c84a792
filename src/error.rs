use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that stop the application before or during a game view.
#[derive(Debug, Error)]
pub enum AppError {
    /// Terminal setup, drawing or event polling failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    /// The log file could not be opened.
    #[error("cannot open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A global tracing subscriber was already installed.
    #[error("logging already initialised")]
    LoggingInit,
}
