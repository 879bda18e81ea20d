//! Status-change callbacks and the events that carry them
//!
//! The transport calls back on its own threads. The gateway never runs user
//! code there: its handler only queues a [`StatusEvent`], and the control
//! thread delivers queued events with
//! [`CallGateway::dispatch_status_events`](crate::CallGateway::dispatch_status_events).

use std::fmt;
use std::sync::Arc;

use aetherfm_state::PlaybackStatus;
use chrono::{DateTime, Utc};
use ipc_transport::CallbackId;

/// A status-change callback with a stable identity
///
/// Clones share the identity, so subscribing a clone is the same
/// subscription. Two callbacks built from identical closures are distinct.
#[derive(Clone)]
pub struct StatusCallback {
    id: CallbackId,
    func: Arc<dyn Fn(&str) + Send + Sync>,
}

impl StatusCallback {
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        Self {
            id: CallbackId::new(),
            func: Arc::new(func),
        }
    }

    pub fn id(&self) -> CallbackId {
        self.id
    }

    pub(crate) fn call(&self, status: &str) {
        (self.func)(status)
    }
}

impl PartialEq for StatusCallback {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for StatusCallback {}

impl fmt::Debug for StatusCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatusCallback").field("id", &self.id).finish()
    }
}

/// A status report queued for delivery on the control thread
#[derive(Debug, Clone, PartialEq)]
pub struct StatusEvent {
    /// Subscription the remote side addressed
    pub callback: CallbackId,
    /// Raw status string, as reported
    pub status: String,
    /// When the transport handed the event over
    pub received_at: DateTime<Utc>,
}

impl StatusEvent {
    pub(crate) fn new(callback: CallbackId, status: String) -> Self {
        Self {
            callback,
            status,
            received_at: Utc::now(),
        }
    }

    pub fn playback_status(&self) -> PlaybackStatus {
        PlaybackStatus::from_status(&self.status)
    }
}
