//! Logging bootstrap for berth binaries.
//!
//! Libraries in this workspace only emit `tracing` events; installing a subscriber is the
//! binary's job, done once at startup with [`init_logger`].
mod config;
mod error;
mod format;
mod level;
mod logger;
mod timer;

pub use config::LoggerConfig;
pub use error::{LoggerError, LoggerResult};
pub use format::LoggerFormat;
pub use level::LoggerLevel;
pub use timer::UtcRfc3339;

/// Initializes the global tracing subscriber with the given configuration.
///
/// Fails with [`LoggerError::AlreadyInitialized`] when a global subscriber is already installed.
///
/// # Examples
/// ```rust
/// use berth_observe::{LoggerConfig, init_logger};
///
/// let config = LoggerConfig::default();
/// init_logger(&config).expect("failed to initialize logger");
///
/// tracing::info!("logger initialized");
/// ```
pub fn init_logger(cfg: &LoggerConfig) -> LoggerResult<()> {
    match cfg.format {
        LoggerFormat::Text => logger::logger_text(cfg),
        LoggerFormat::Json => logger::logger_json(cfg),
        LoggerFormat::Journald => logger::logger_journald(cfg),
    }
}
