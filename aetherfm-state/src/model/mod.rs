//! Data model for AetherFM state

mod capability;
mod playback_status;
mod snapshot;
mod station;
mod volume;

pub use capability::{RemoteCapability, MIN_SUPPORTED_VERSION};
pub use playback_status::PlaybackStatus;
pub use snapshot::{StateSnapshot, UNAVAILABLE_LABEL};
pub use station::StationReference;
pub use volume::VolumeLevel;
