use aetherfm_state::logging::LoggingError;
use thiserror::Error;

/// Errors from setting the SDK up
///
/// Gateway operations never return these; they degrade to fallbacks.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Logging setup failed: {0}")]
    Logging(#[from] LoggingError),
}
