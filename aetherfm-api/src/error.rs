use ipc_transport::TransportError;
use thiserror::Error;

use crate::Gate;

/// Errors from executing a gate operation
///
/// These never reach consumers of the SDK gateway; they are logged and then
/// replaced by the operation's fallback value.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The transport could not complete the call
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Arguments could not be turned into transport values
    #[error("Failed to encode arguments for {gate:?}: {message}")]
    Encode { gate: Gate, message: String },

    /// The reply did not have the type the operation declares
    #[error("Unexpected reply from {gate:?}: {message}")]
    Decode { gate: Gate, message: String },

    /// The transport implementation panicked during the call
    #[error("Call to {gate:?} panicked: {message}")]
    Panicked { gate: Gate, message: String },
}

impl ApiError {
    /// Whether the failure came from the remote side rather than local encoding
    pub fn is_remote(&self) -> bool {
        matches!(self, ApiError::Transport(_) | ApiError::Decode { .. })
    }
}

/// Type alias for results that can return an ApiError
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_conversion() {
        let err: ApiError = TransportError::Timeout("AetherFM.Play".to_string()).into();
        assert!(matches!(err, ApiError::Transport(TransportError::Timeout(_))));
        assert!(err.is_remote());
    }

    #[test]
    fn test_error_display() {
        let err = ApiError::Decode {
            gate: Gate::GetVolume,
            message: "expected f32".to_string(),
        };
        assert_eq!(err.to_string(), "Unexpected reply from GetVolume: expected f32");

        let err: ApiError = TransportError::Disconnected.into();
        assert_eq!(err.to_string(), "Transport error: Transport disconnected");
    }

    #[test]
    fn test_encode_is_local() {
        let err = ApiError::Encode {
            gate: Gate::SetVolume,
            message: "bad".to_string(),
        };
        assert!(!err.is_remote());
    }
}
