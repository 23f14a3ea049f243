//! Logging system for hashplus.
//!
//! Installs a `tracing` subscriber whose level and format come from the
//! settings. `RUST_LOG` still takes precedence over the configured level.
//! Installing twice is harmless: the first subscriber stays in place.

use hashplus_types::config::{LogConfig, LogFormat};
use hashplus_types::{LogLevel, Result};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Settings;

/// Map a configured log level onto a `tracing` filter.
pub fn level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::None => LevelFilter::OFF,
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Trace => LevelFilter::TRACE,
    }
}

/// Initialize the logging system with default configuration.
pub fn init_default() -> Result<()> {
    init_from_config(&[LogConfig {
        level: LogLevel::Warn,
        format: LogFormat::Compact,
    }])
}

/// Initialize logging from the log section of the settings.
pub fn init_from_settings(settings: &Settings) -> Result<()> {
    init_from_config(&settings.logs)
}

/// Initialize logging from configuration.
///
/// Only the first entry is used; a process has a single stderr sink.
pub fn init_from_config(configs: &[LogConfig]) -> Result<()> {
    let Some(config) = configs.first() else {
        return init_default();
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level_filter(config.level).into())
        .from_env_lossy();
    let registry = tracing_subscriber::registry().with(filter);

    let installed = match config.format {
        LogFormat::Pretty => registry.with(fmt::layer().pretty()).try_init(),
        LogFormat::Json => registry.with(fmt::layer().json()).try_init(),
        LogFormat::Compact => registry.with(fmt::layer().compact()).try_init(),
    };

    if let Err(e) = installed {
        tracing::debug!("Logging already initialized: {}", e);
    }
    Ok(())
}
