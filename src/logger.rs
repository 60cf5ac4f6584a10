use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::{Mutex, OnceLock};

use anyhow::{Context, Result};
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Appends timestamped lines to a file. The terminal belongs to the game
/// while it runs, so nothing is ever printed.
pub struct Logger {
    file: Mutex<File>,
}

impl Logger {
    fn new(file: File) -> Self {
        Self {
            file: Mutex::new(file),
        }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        if let Ok(mut out) = self.file.lock() {
            // a failed log write is not worth interrupting the game for
            let _ = writeln!(out, "[{}][{}:{}] {}", timestamp, file_name, line, message);
        }
    }
}

/// Opens `path` for appending and routes `log!` there. Without a call to
/// this, `log!` does nothing.
pub fn init_logger(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;
    LOGGER.get_or_init(|| Logger::new(file));
    Ok(())
}

pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}
