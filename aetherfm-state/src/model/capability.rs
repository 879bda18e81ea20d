//! Remote version and readiness

use serde::{Deserialize, Serialize};

/// Lowest IPC version this SDK can drive
pub const MIN_SUPPORTED_VERSION: i32 = 1;

/// What the remote side reports about itself
///
/// Queried on demand and never cached; each field falls back on its own
/// when its gate fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RemoteCapability {
    pub version: i32,
    pub feature_flags: i32,
    pub ready: bool,
}

impl RemoteCapability {
    /// Ready and speaking a supported protocol version
    pub fn is_available(&self) -> bool {
        self.ready && self.version >= MIN_SUPPORTED_VERSION
    }

    /// Whether every bit of `mask` is set in the feature flags
    pub fn has_feature(&self, mask: i32) -> bool {
        mask != 0 && self.feature_flags & mask == mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_availability_matrix() {
        for ready in [false, true] {
            for version in 0..=2 {
                let cap = RemoteCapability { version, feature_flags: 0, ready };
                assert_eq!(cap.is_available(), ready && version >= 1);
            }
        }
    }

    #[test]
    fn test_feature_mask() {
        let cap = RemoteCapability { version: 1, feature_flags: 0b101, ready: true };
        assert!(cap.has_feature(0b001));
        assert!(cap.has_feature(0b101));
        assert!(!cap.has_feature(0b010));
        assert!(!cap.has_feature(0));
    }
}
