use std::sync::Once;

/// Settings for the process-wide `env_logger` backend.
///
/// Filter resolution order: `env_filter` (env_logger directive syntax, e.g.
/// `"lattice_utility=debug,Renderer=warn"`), then the `RUST_LOG` variable,
/// then `default_level` for every target.
///
/// Named loggers built on [`FacadeLogger`](super::FacadeLogger) use their
/// name as target, so directives can address them individually.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_level: log::LevelFilter,
    /// ANSI coloring of console output.
    pub write_style: env_logger::WriteStyle,
    /// Route output through the test harness so it is captured per test.
    pub is_test: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: log::LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
            is_test: false,
        }
    }
}

impl LoggingConfig {
    /// Debug level, captured by the test harness.
    pub fn for_tests() -> Self {
        Self {
            default_level: log::LevelFilter::Debug,
            is_test: true,
            ..Self::default()
        }
    }

    /// Filter directives this configuration resolves to, `None` when
    /// `default_level` applies.
    fn directives(&self) -> Option<String> {
        self.env_filter
            .clone()
            .or_else(|| std::env::var("RUST_LOG").ok())
    }

    fn builder(&self) -> env_logger::Builder {
        let mut builder = env_logger::Builder::new();
        match self.directives() {
            Some(directives) => builder.parse_filters(&directives),
            None => builder.filter_level(self.default_level),
        };
        builder.write_style(self.write_style).is_test(self.is_test);
        builder
    }
}

static INSTALL: Once = Once::new();

/// Installs the `env_logger` backend behind the `log` facade.
///
/// Only the first call in a process has any effect. When another backend
/// is already registered it stays active and the failure is reported at
/// debug level.
pub fn init_logging(config: LoggingConfig) {
    INSTALL.call_once(|| match config.builder().try_init() {
        Ok(()) => log::debug!("env_logger installed (max level {})", log::max_level()),
        Err(err) => log::debug!("env_logger not installed: {err}"),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_info() {
        let config = LoggingConfig::default();
        assert!(config.env_filter.is_none());
        assert_eq!(config.default_level, log::LevelFilter::Info);
        assert!(!config.is_test);
    }

    #[test]
    fn explicit_filter_wins() {
        let config = LoggingConfig {
            env_filter: Some("Renderer=warn".to_owned()),
            ..LoggingConfig::default()
        };
        assert_eq!(config.directives().as_deref(), Some("Renderer=warn"));
    }

    #[test]
    fn explicit_filter_builds_matching_logger() {
        let config = LoggingConfig {
            env_filter: Some("warn".to_owned()),
            ..LoggingConfig::for_tests()
        };
        let logger = config.builder().build();
        assert_eq!(logger.filter(), log::LevelFilter::Warn);
    }

    #[test]
    fn repeated_init_is_harmless() {
        init_logging(LoggingConfig::for_tests());
        init_logging(LoggingConfig::for_tests());
        log::info!("logged after init");
    }
}
