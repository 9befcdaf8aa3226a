use super::{LogLevel, Logger};

/// Logger forwarding to the `log` facade.
///
/// The logger name becomes the record target, so `env_logger` filters such
/// as `Renderer=warn` apply per component. Unnamed loggers use this module's
/// path as target.
#[derive(Debug, Clone, Default)]
pub struct FacadeLogger {
    name: String,
}

impl FacadeLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Logger for FacadeLogger {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: &str) {
        self.name = name.to_owned();
    }

    fn log(&mut self, level: LogLevel, message: &str) {
        let level = log::Level::from(level);
        if self.name.is_empty() {
            log::log!(level, "{message}");
        } else {
            log::log!(target: self.name.as_str(), level, "{message}");
        }
    }
}
