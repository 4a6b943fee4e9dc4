use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::form::error::FormError;
use crate::trace::trace::TraceEvent;

/// Appends session events to a JSONL file.
pub struct TraceLogger {
    file: Option<Mutex<File>>,
    written: AtomicU64,
}

impl TraceLogger {
    /// Open `path` for appending, failing if it cannot be created.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, FormError> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Some(Mutex::new(file)),
            written: AtomicU64::new(0),
        })
    }

    /// Like `open`, but an unwritable path only warns and disables tracing.
    pub fn new(path: &str) -> Self {
        match Self::open(path) {
            Ok(logger) => logger,
            Err(e) => {
                eprintln!("Warning: could not open trace file '{}': {}", path, e);
                Self::disabled()
            }
        }
    }

    pub fn disabled() -> Self {
        Self {
            file: None,
            written: AtomicU64::new(0),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.file.is_some()
    }

    /// Number of events successfully written so far.
    pub fn events_written(&self) -> u64 {
        self.written.load(Ordering::Relaxed)
    }

    pub fn log(&self, event: &TraceEvent) {
        let Some(file_mutex) = &self.file else {
            return;
        };

        let json = match serde_json::to_string(event) {
            Ok(j) => j,
            Err(e) => {
                eprintln!("Warning: failed to serialize trace event: {}", e);
                return;
            }
        };

        let mut file = match file_mutex.lock() {
            Ok(f) => f,
            Err(e) => {
                eprintln!("Warning: trace logger lock poisoned: {}", e);
                return;
            }
        };

        match writeln!(file, "{}", json) {
            Ok(()) => {
                self.written.fetch_add(1, Ordering::Relaxed);
            }
            Err(e) => eprintln!("Warning: failed to write trace event: {}", e),
        }
    }
}
