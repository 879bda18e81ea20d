//! Logging setup for hosts embedding the SDK
//!
//! The SDK only emits `tracing` events. Hosts that have no subscriber of
//! their own can install one here; hosts that draw their own UI should stay
//! `Silent` so nothing is written to stderr.

use tracing_subscriber::{fmt, EnvFilter, Registry};

/// Logging mode for different use cases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggingMode {
    /// No subscriber installed
    Silent,
    /// Compact stderr output, `info` by default
    Development,
    /// Verbose output with thread ids and source locations, `debug` by default
    Debug,
}

/// Logging configuration error
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to initialize tracing subscriber: {0}")]
    TracingInit(String),

    #[error("Invalid log filter '{filter}': {reason}")]
    InvalidFilter { filter: String, reason: String },
}

/// Initialize logging with the specified mode
///
/// # Environment Variables
///
/// - `AETHERFM_LOG_LEVEL`: filter directive (e.g. `aetherfm_sdk=debug`)
/// - `RUST_LOG`: used when `AETHERFM_LOG_LEVEL` is unset
pub fn init_logging(mode: LoggingMode) -> Result<(), LoggingError> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    match mode {
        LoggingMode::Silent => Ok(()),
        LoggingMode::Development => {
            let filter = create_env_filter("info")?;

            Registry::default()
                .with(
                    fmt::layer()
                        .with_target(false)
                        .with_thread_ids(false)
                        .compact(),
                )
                .with(filter)
                .try_init()
                .map_err(|e| LoggingError::TracingInit(e.to_string()))
        }
        LoggingMode::Debug => {
            let filter = create_env_filter("debug")?;

            Registry::default()
                .with(
                    fmt::layer()
                        .pretty()
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .with(filter)
                .try_init()
                .map_err(|e| LoggingError::TracingInit(e.to_string()))
        }
    }
}

/// Initialize logging from `AETHERFM_LOG_MODE`
///
/// `"development"` and `"debug"` select those modes; anything else is silent.
pub fn init_logging_from_env() -> Result<(), LoggingError> {
    let mode = parse_mode(std::env::var("AETHERFM_LOG_MODE").ok().as_deref());
    init_logging(mode)
}

fn parse_mode(value: Option<&str>) -> LoggingMode {
    match value.map(str::to_ascii_lowercase).as_deref() {
        Some("development") => LoggingMode::Development,
        Some("debug") => LoggingMode::Debug,
        _ => LoggingMode::Silent,
    }
}

/// Build a filter from `AETHERFM_LOG_LEVEL`, then `RUST_LOG`, then the default
fn create_env_filter(default_level: &str) -> Result<EnvFilter, LoggingError> {
    let directive = std::env::var("AETHERFM_LOG_LEVEL")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| default_level.to_string());

    EnvFilter::try_new(&directive).map_err(|e| LoggingError::InvalidFilter {
        filter: directive.clone(),
        reason: e.to_string(),
    })
}
