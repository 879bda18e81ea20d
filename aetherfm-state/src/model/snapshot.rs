//! Point-in-time view of the remote player

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::{PlaybackStatus, StationReference, VolumeLevel};

/// Label shown when the remote service cannot be reached
pub const UNAVAILABLE_LABEL: &str = "AetherFM unavailable";

/// Immutable snapshot of the remote player's state
///
/// Assembled from several independent reads taken back to back, so the
/// fields may reflect slightly different remote instants. `captured_at_utc`
/// is when assembly finished.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    ready: bool,
    status: String,
    station_name: String,
    station_url: String,
    volume: f32,
    captured_at_utc: DateTime<Utc>,
}

impl StateSnapshot {
    /// Build a snapshot; `volume` is clamped into `[0, 1]`
    pub fn new(
        ready: bool,
        status: impl Into<String>,
        station_name: impl Into<String>,
        station_url: impl Into<String>,
        volume: f32,
        captured_at_utc: DateTime<Utc>,
    ) -> Self {
        Self {
            ready,
            status: status.into(),
            station_name: station_name.into(),
            station_url: station_url.into(),
            volume: VolumeLevel::new(volume).value(),
            captured_at_utc,
        }
    }

    /// The canonical snapshot for an unreachable remote
    pub fn unavailable(now: DateTime<Utc>) -> Self {
        Self::new(false, "", "", "", 0.0, now)
    }

    pub fn ready(&self) -> bool {
        self.ready
    }

    /// Raw status string as reported, unrecognized values included
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn station_name(&self) -> &str {
        &self.station_name
    }

    pub fn station_url(&self) -> &str {
        &self.station_url
    }

    pub fn station(&self) -> StationReference {
        StationReference::new(self.station_name.clone(), self.station_url.clone())
    }

    pub fn volume(&self) -> VolumeLevel {
        VolumeLevel::new(self.volume)
    }

    pub fn captured_at_utc(&self) -> DateTime<Utc> {
        self.captured_at_utc
    }

    /// Time elapsed between capture and `now`
    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        now - self.captured_at_utc
    }

    /// Classified status; `Unknown` whenever the remote is not ready
    pub fn playback_status(&self) -> PlaybackStatus {
        if !self.ready {
            return PlaybackStatus::Unknown;
        }
        PlaybackStatus::from_status(&self.status)
    }

    pub fn is_playing(&self) -> bool {
        self.playback_status() == PlaybackStatus::Playing
    }

    pub fn is_paused(&self) -> bool {
        self.playback_status() == PlaybackStatus::Paused
    }

    pub fn is_stopped(&self) -> bool {
        self.playback_status() == PlaybackStatus::Stopped
    }

    /// Volume as a rounded percentage (0-100)
    pub fn volume_percentage(&self) -> u8 {
        self.volume().percentage()
    }

    /// Short text for a toolbar: status, plus the station name when known
    pub fn display_label(&self) -> String {
        if !self.ready {
            return UNAVAILABLE_LABEL.to_string();
        }
        if self.station_name.is_empty() {
            return self.status.clone();
        }
        format!("{}: {}", self.status, self.station_name)
    }

    /// Consistency check for snapshots that did not come from `new`
    ///
    /// Fails on a volume outside `[0, 1]`, an unset timestamp, or a ready
    /// remote with no status.
    pub fn is_valid(&self) -> bool {
        if !(0.0..=1.0).contains(&self.volume) {
            return false;
        }
        if self.captured_at_utc == DateTime::<Utc>::MIN_UTC {
            return false;
        }
        if self.ready && self.status.is_empty() {
            return false;
        }
        true
    }
}
