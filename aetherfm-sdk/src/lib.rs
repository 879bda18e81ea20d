//! Never-failing SDK for driving the AetherFM player over IPC
//!
//! [`CallGateway`] wraps every AetherFM gate behind a call that cannot
//! fail: each operation returns the decoded reply, or a documented
//! fallback when the transport errors, times out, answers with the wrong
//! type or panics. Remote unavailability is something to poll with
//! [`CallGateway::is_available`], not an error to handle.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use aetherfm_sdk::{CallGateway, StatusCallback};
//!
//! let mut gateway = CallGateway::new(transport);
//!
//! let on_status = StatusCallback::new(|status| println!("status: {status}"));
//! gateway.subscribe_status_changed(Some(&on_status));
//!
//! gateway.play_by_name("Jazz FM");
//! println!("{}", gateway.capture().display_label());
//!
//! // on the control thread, e.g. once per frame
//! gateway.dispatch_status_events();
//! ```
//!
//! Status callbacks always run on the thread that calls
//! [`CallGateway::dispatch_status_events`], never on the transport's.

mod config;
mod error;
mod favorites;
mod gateway;
mod registry;
mod snapshot;
mod status;
mod tracker;

pub use config::GatewayConfig;
pub use error::SdkError;
pub use favorites::FavoritesCollection;
pub use gateway::{CallGateway, PlaybackToggle};
pub use registry::{SubscriptionRegistry, TeardownReport};
pub use status::{StatusCallback, StatusEvent};
pub use tracker::StationTracker;

pub use aetherfm_api::{Gate, DEFAULT_NAMESPACE};
pub use aetherfm_state::logging;
pub use aetherfm_state::{
    PlaybackStatus, RemoteCapability, StateSnapshot, StationReference, VolumeLevel,
    UNAVAILABLE_LABEL,
};
pub use ipc_transport::{CallbackId, LocalBus, Transport, TransportError};
