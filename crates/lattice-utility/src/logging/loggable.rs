use super::{LogLevel, Logger};

/// Builds a default logger named after `T`.
///
/// The name is the unqualified type name, generic arguments included.
pub fn component_logger<T: ?Sized, L: Logger + Default>() -> L {
    let mut logger = L::default();
    logger.set_name(short_type_name::<T>());
    logger
}

fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base_end = full.find('<').unwrap_or(full.len());
    let start = full[..base_end].rfind("::").map_or(0, |i| i + 2);
    &full[start..]
}

/// A component that owns its logger.
pub trait Loggable {
    type Logger: Logger;

    fn logger(&self) -> &Self::Logger;

    fn logger_mut(&mut self) -> &mut Self::Logger;

    fn log(&mut self, level: LogLevel, message: &str) {
        self.logger_mut().log(level, message);
    }
}
