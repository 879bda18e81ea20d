//! Error types for the IPC transport

use thiserror::Error;

/// Errors that can occur while reaching the remote service
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransportError {
    /// Nothing on the remote side answers to this name
    #[error("No provider registered for '{0}'")]
    NotAvailable(String),

    /// The call did not complete in time
    #[error("Call to '{0}' timed out")]
    Timeout(String),

    /// The remote side answered with a value of the wrong shape
    #[error("Type mismatch: {0}")]
    TypeMismatch(String),

    /// The remote side raised while handling the call
    #[error("Remote exception: {0}")]
    Remote(String),

    /// The channel to the remote process is gone
    #[error("Transport disconnected")]
    Disconnected,
}
