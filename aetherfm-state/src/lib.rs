//! Data model for the AetherFM SDK
//!
//! Plain values shared by the gateway and its consumers: volume, playback
//! status, station, remote capability and the immutable [`StateSnapshot`].
//! Nothing in this crate talks to the remote side.

pub mod logging;
pub mod model;

pub use model::{
    PlaybackStatus, RemoteCapability, StateSnapshot, StationReference, VolumeLevel,
    MIN_SUPPORTED_VERSION, UNAVAILABLE_LABEL,
};
