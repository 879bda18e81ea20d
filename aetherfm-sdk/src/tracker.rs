//! Last-known station tracking for status-driven consumers

use aetherfm_state::{PlaybackStatus, StateSnapshot};

use crate::gateway::CallGateway;

/// Remembers the most recent non-empty station URL and name
///
/// Feed it status strings from a status callback. A `Playing` status
/// refreshes the cache from the remote side. `Stopped` is terminal: the
/// tracker never resumes or starts playback on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StationTracker {
    last_url: Option<String>,
    last_name: Option<String>,
}

impl StationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the cache from whatever station the remote side reports now
    ///
    /// Not gated on availability: an unreachable remote answers with empty
    /// fallbacks, which leave the cache untouched.
    pub fn prime(&mut self, gateway: &CallGateway) {
        self.refresh(gateway);
    }

    /// React to a status report and return its classification
    pub fn observe(&mut self, gateway: &CallGateway, status: &str) -> PlaybackStatus {
        let classified = PlaybackStatus::from_status(status);
        match classified {
            PlaybackStatus::Playing => self.refresh(gateway),
            PlaybackStatus::Stopped => {
                tracing::debug!(
                    last_url = self.last_url.as_deref().unwrap_or(""),
                    "playback stopped"
                );
            }
            _ => {}
        }
        classified
    }

    /// Re-read the current station, keeping only non-empty values
    pub fn refresh(&mut self, gateway: &CallGateway) {
        let url = gateway.current_station_url();
        if !url.is_empty() {
            self.last_url = Some(url);
        }
        let name = gateway.current_station();
        if !name.is_empty() {
            self.last_name = Some(name);
        }
    }

    /// Record a name chosen locally, e.g. from a favorites menu
    pub fn remember_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !name.is_empty() {
            self.last_name = Some(name);
        }
    }

    pub fn last_url(&self) -> Option<&str> {
        self.last_url.as_deref()
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    /// Snapshot label, filling in the cached name while playing unnamed
    pub fn display_label(&self, snapshot: &StateSnapshot) -> String {
        match (&self.last_name, snapshot.is_playing() && snapshot.station_name().is_empty()) {
            (Some(name), true) => format!("{}: {}", snapshot.status(), name),
            _ => snapshot.display_label(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_remember_name_ignores_empty() {
        let mut tracker = StationTracker::new();
        tracker.remember_name("Jazz FM");
        tracker.remember_name("");
        assert_eq!(tracker.last_name(), Some("Jazz FM"));
    }

    #[test]
    fn test_display_label_uses_cached_name() {
        let mut tracker = StationTracker::new();
        tracker.remember_name("Jazz FM");

        let unnamed = StateSnapshot::new(true, "Playing", "", "", 0.5, Utc::now());
        assert_eq!(tracker.display_label(&unnamed), "Playing: Jazz FM");

        let named = StateSnapshot::new(true, "Playing", "Lo-Fi", "", 0.5, Utc::now());
        assert_eq!(tracker.display_label(&named), "Playing: Lo-Fi");

        let stopped = StateSnapshot::new(true, "Stopped", "", "", 0.5, Utc::now());
        assert_eq!(tracker.display_label(&stopped), "Stopped");
    }
}
