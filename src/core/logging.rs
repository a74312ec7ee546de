//! File logging.
//!
//! The terminal belongs to the game while it runs, so log output never goes to
//! stdout/stderr. With `--log <path>` events are appended to that file;
//! without it no subscriber is installed and `tracing` macros are no-ops.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;

/// Install a global subscriber writing plain-text events to `path`.
pub fn init_file_logging(path: &Path, level: Level) -> io::Result<()> {
    let file = open_log_file(path)?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_max_level(level)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::AlreadyExists, e.to_string()))
}

fn open_log_file(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}
