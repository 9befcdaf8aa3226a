use std::fmt;
use std::io;

use super::logger::write_line;
use super::{LogLevel, Logger};

/// Console stream a level is written to.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum Console {
    Stdout,
    Stderr,
}

impl fmt::Display for Console {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Console::Stdout => f.write_str("stdout"),
            Console::Stderr => f.write_str("stderr"),
        }
    }
}

impl Console {
    pub(crate) fn for_level(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug | LogLevel::Info => Console::Stdout,
            LogLevel::Warning | LogLevel::Error => Console::Stderr,
        }
    }
}

/// Logger writing to the process console.
///
/// Debug and info lines go to stdout, warnings and errors to stderr.
#[derive(Debug, Clone, Default)]
pub struct StandardLogger {
    name: String,
}

impl StandardLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Logger for StandardLogger {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: &str) {
        self.name = name.to_owned();
    }

    fn log(&mut self, level: LogLevel, message: &str) {
        let line = self.format(level, message);
        let console = Console::for_level(level);
        let written = match console {
            Console::Stdout => write_line(&mut io::stdout().lock(), &line),
            Console::Stderr => write_line(&mut io::stderr().lock(), &line),
        };
        if let Err(err) = written {
            log::warn!("writing to {console} failed: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_route_to_streams() {
        assert_eq!(Console::for_level(LogLevel::Debug), Console::Stdout);
        assert_eq!(Console::for_level(LogLevel::Info), Console::Stdout);
        assert_eq!(Console::for_level(LogLevel::Warning), Console::Stderr);
        assert_eq!(Console::for_level(LogLevel::Error), Console::Stderr);
    }

    #[test]
    fn streams_display_their_names() {
        assert_eq!(Console::Stdout.to_string(), "stdout");
        assert_eq!(Console::Stderr.to_string(), "stderr");
    }

    #[test]
    fn name_round_trip() {
        let mut logger = StandardLogger::new();
        assert_eq!(logger.name(), "");
        logger.set_name("ui");
        assert_eq!(logger.name(), "ui");
        assert_eq!(StandardLogger::named("net").name(), "net");
    }

    #[test]
    fn logging_does_not_panic() {
        let mut logger = StandardLogger::named("smoke");
        logger.info("to stdout");
        logger.error("to stderr");
    }
}
