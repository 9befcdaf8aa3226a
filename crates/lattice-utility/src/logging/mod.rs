//! Logging utilities.
//!
//! Two layers live here. `init_logging` installs `env_logger` behind the
//! standard `log` facade. The `Logger` trait and its sinks (console, file,
//! facade) give components a named logger producing
//! `[timestamp] [name] [LEVEL] message` lines.

mod facade;
mod file;
mod init;
mod level;
mod loggable;
mod logger;
mod standard;

pub use facade::FacadeLogger;
pub use file::FileLogger;
pub use init::{init_logging, LoggingConfig};
pub use level::LogLevel;
pub use loggable::{component_logger, Loggable};
pub use logger::{format_message, Logger};
pub use standard::StandardLogger;
