//! Private named-call transport for talking to the AetherFM service
//!
//! This crate defines the minimal contract the SDK needs from an IPC
//! mechanism: invoke a named gate with a typed argument list, and register
//! or unregister a status handler through named subscription gates.
//! Arguments and replies travel as [`serde_json::Value`] so typed encoding
//! stays in the layer above.
//!
//! [`LocalBus`] is an in-process implementation used by tests and demos.

mod bus;
mod error;

pub use bus::{LocalBus, Route};
pub use error::TransportError;

use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use uuid::Uuid;

/// Handler invoked by the transport when the remote side reports a status
///
/// May be called from any thread, at any time, on the remote side's schedule.
pub type StatusHandler = Arc<dyn Fn(String) + Send + Sync>;

/// Identity of a registered callback
///
/// Two registrations are the same iff their ids are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CallbackId(Uuid);

impl CallbackId {
    /// Allocate a fresh, unique id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CallbackId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CallbackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cb-{}", self.0.simple())
    }
}

/// Point-to-point invoke-by-name facility with callback registration
///
/// Each method performs exactly one remote interaction. Implementations
/// report every failure as a [`TransportError`]; they never retry.
pub trait Transport: Send + Sync {
    /// Call the gate `name` with `args` and return its reply
    fn invoke(&self, name: &str, args: Vec<Value>) -> Result<Value, TransportError>;

    /// Register `handler` under `id` through the subscription gate `gate`
    ///
    /// Returns the remote side's acceptance flag.
    fn register_callback(
        &self,
        gate: &str,
        id: CallbackId,
        handler: StatusHandler,
    ) -> Result<bool, TransportError>;

    /// Remove the handler registered under `id` through the unsubscription
    /// gate `gate`
    ///
    /// Returns whether the remote side knew and dropped the handler.
    fn unregister_callback(&self, gate: &str, id: CallbackId) -> Result<bool, TransportError>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn invoke(&self, name: &str, args: Vec<Value>) -> Result<Value, TransportError> {
        (**self).invoke(name, args)
    }

    fn register_callback(
        &self,
        gate: &str,
        id: CallbackId,
        handler: StatusHandler,
    ) -> Result<bool, TransportError> {
        (**self).register_callback(gate, id, handler)
    }

    fn unregister_callback(&self, gate: &str, id: CallbackId) -> Result<bool, TransportError> {
        (**self).unregister_callback(gate, id)
    }
}
