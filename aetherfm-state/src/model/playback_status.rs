//! Playback status classification

use serde::{Deserialize, Serialize};

/// Playback status reported by the remote side
///
/// The remote side sends free-form strings; anything that is not one of the
/// three known states classifies as `Unknown`. Callers keep the raw string
/// for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PlaybackStatus {
    #[default]
    Unknown,
    Playing,
    Paused,
    Stopped,
}

impl PlaybackStatus {
    /// Classify a status string, ignoring ASCII case
    pub fn from_status(status: &str) -> Self {
        if status.eq_ignore_ascii_case("Playing") {
            PlaybackStatus::Playing
        } else if status.eq_ignore_ascii_case("Paused") {
            PlaybackStatus::Paused
        } else if status.eq_ignore_ascii_case("Stopped") {
            PlaybackStatus::Stopped
        } else {
            PlaybackStatus::Unknown
        }
    }

    /// Canonical spelling, empty for `Unknown`
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaybackStatus::Unknown => "",
            PlaybackStatus::Playing => "Playing",
            PlaybackStatus::Paused => "Paused",
            PlaybackStatus::Stopped => "Stopped",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive() {
        assert_eq!(PlaybackStatus::from_status("Playing"), PlaybackStatus::Playing);
        assert_eq!(PlaybackStatus::from_status("PLAYING"), PlaybackStatus::Playing);
        assert_eq!(PlaybackStatus::from_status("paused"), PlaybackStatus::Paused);
        assert_eq!(PlaybackStatus::from_status("sToPpEd"), PlaybackStatus::Stopped);
    }

    #[test]
    fn test_unrecognized_is_unknown() {
        assert_eq!(PlaybackStatus::from_status(""), PlaybackStatus::Unknown);
        assert_eq!(PlaybackStatus::from_status("Buffering"), PlaybackStatus::Unknown);
        assert_eq!(PlaybackStatus::from_status("Playing!"), PlaybackStatus::Unknown);
        assert_eq!(PlaybackStatus::from_status(" Playing"), PlaybackStatus::Unknown);
    }

    #[test]
    fn test_default() {
        assert_eq!(PlaybackStatus::default(), PlaybackStatus::Unknown);
        assert_eq!(PlaybackStatus::Unknown.as_str(), "");
    }
}
