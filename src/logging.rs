//! Tracing setup for hosts that load the extension.
//!
//! The core only emits `tracing` events; nothing is printed until a host
//! installs a subscriber through [`init`] or [`init_with_config`].

use once_cell::sync::OnceCell;
use std::io;
use tracing::{Level, Subscriber};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static LOGGER_INITIALIZED: OnceCell<()> = OnceCell::new();

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Default level for this crate's events.
    pub level: Level,
    /// Emit JSON lines instead of human-readable text.
    pub json_format: bool,
    /// Include the event target (module path).
    pub with_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            json_format: false,
            with_target: true,
        }
    }
}

impl LogConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        // TINYEXT_LOG_LEVEL: trace, debug, info, warn, error
        if let Ok(level_str) = std::env::var("TINYEXT_LOG_LEVEL") {
            config.level = parse_level(&level_str);
        }

        config.json_format = std::env::var("TINYEXT_LOG_JSON").is_ok();

        config
    }

    fn filter_directive(&self) -> String {
        format!("tinyext={}", self.level.as_str().to_lowercase())
    }
}

/// Parse a level name, falling back to INFO.
pub fn parse_level(name: &str) -> Level {
    match name.trim().to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Initialize logging from the environment.
pub fn init() {
    init_with_config(LogConfig::from_env());
}

/// Initialize logging with custom configuration.
///
/// Only the first call installs a subscriber. `RUST_LOG` overrides the
/// configured level when set.
pub fn init_with_config(config: LogConfig) {
    LOGGER_INITIALIZED.get_or_init(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.filter_directive()));

        // A host may already own the global subscriber.
        let _ = build_subscriber(&config, env_filter, io::stderr).try_init();
    });
}

/// Build the text or JSON subscriber described by `config`.
pub(crate) fn build_subscriber<W>(
    config: &LogConfig,
    env_filter: EnvFilter,
    writer: W,
) -> Box<dyn Subscriber + Send + Sync>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let registry = tracing_subscriber::registry().with(env_filter);

    if config.json_format {
        Box::new(
            registry.with(
                fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_target(config.with_target),
            ),
        )
    } else {
        Box::new(
            registry.with(
                fmt::layer()
                    .with_writer(writer)
                    .with_target(config.with_target),
            ),
        )
    }
}

/// Check if logging is initialized.
pub fn is_initialized() -> bool {
    LOGGER_INITIALIZED.get().is_some()
}
