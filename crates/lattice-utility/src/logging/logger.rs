use std::io::{self, Write};

use chrono::Local;

use super::LogLevel;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Renders one log line: `[timestamp] [name] [LEVEL] message`.
///
/// The timestamp is local time with millisecond precision. The name bracket
/// is left out when `name` is empty.
pub fn format_message(name: &str, level: LogLevel, message: &str) -> String {
    let timestamp = Local::now().format(TIMESTAMP_FORMAT);
    if name.is_empty() {
        format!("[{timestamp}] [{level}] {message}")
    } else {
        format!("[{timestamp}] [{name}] [{level}] {message}")
    }
}

/// Writes `line` plus a newline and flushes, so the line is visible at once.
pub(crate) fn write_line(out: &mut impl Write, line: &str) -> io::Result<()> {
    writeln!(out, "{line}")?;
    out.flush()
}

/// A named sink for log lines.
pub trait Logger {
    fn name(&self) -> &str;

    fn set_name(&mut self, name: &str);

    fn log(&mut self, level: LogLevel, message: &str);

    /// Formats `message` with this logger's name.
    fn format(&self, level: LogLevel, message: &str) -> String {
        format_message(self.name(), level, message)
    }

    fn debug(&mut self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    fn info(&mut self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    fn warning(&mut self, message: &str) {
        self.log(LogLevel::Warning, message);
    }

    fn error(&mut self, message: &str) {
        self.log(LogLevel::Error, message);
    }
}
