use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::logger::write_line;
use super::{LogLevel, Logger};

/// Logger appending formatted lines to a file.
///
/// Every line is flushed as soon as it is written. Once closed, further
/// lines are discarded.
#[derive(Debug)]
pub struct FileLogger {
    name: String,
    path: PathBuf,
    file: Option<File>,
}

impl FileLogger {
    /// Opens `path` for logging, appending to existing content when `append`
    /// is set and truncating it otherwise.
    pub fn open(path: impl AsRef<Path>, append: bool) -> Result<Self> {
        Self::open_named(path, "", append)
    }

    /// Like [`FileLogger::open`], with a logger name.
    pub fn open_named(path: impl AsRef<Path>, name: &str, append: bool) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let mut options = OpenOptions::new();
        options.create(true);
        if append {
            options.append(true);
        } else {
            options.write(true).truncate(true);
        }

        let file = options
            .open(&path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;

        log::debug!("file logger opened: {} (append={append})", path.display());

        Ok(Self {
            name: name.to_owned(),
            path,
            file: Some(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_open(&self) -> bool {
        self.file.is_some()
    }

    /// Flushes and releases the file. Idempotent.
    pub fn close(&mut self) {
        if let Some(mut file) = self.file.take() {
            if let Err(err) = file.flush() {
                log::warn!("flushing {} failed: {err}", self.path.display());
            }
            log::debug!("file logger closed: {}", self.path.display());
        }
    }
}

impl Logger for FileLogger {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: &str) {
        self.name = name.to_owned();
    }

    fn log(&mut self, level: LogLevel, message: &str) {
        let line = self.format(level, message);
        let Some(file) = self.file.as_mut() else {
            return;
        };
        if let Err(err) = write_line(file, &line) {
            log::warn!("writing to {} failed: {err}", self.path.display());
        }
    }
}

impl Drop for FileLogger {
    fn drop(&mut self) {
        self.close();
    }
}
