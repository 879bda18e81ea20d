//! In-process transport
//!
//! `LocalBus` plays the remote side inside the current process: gates are
//! closures registered by name, listeners are kept per subscription gate,
//! and faults can be injected per route. Every attempt is counted, including the ones
//! that fail, so callers can assert on how often a gate was reached.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::Value;

use crate::{CallbackId, StatusHandler, Transport, TransportError};

type GateFn = Arc<dyn Fn(&[Value]) -> Result<Value, TransportError> + Send + Sync>;

/// One addressable interaction with the bus
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// `invoke` on a gate
    Call(String),
    /// `register_callback` through a subscription gate
    Register(String),
    /// `unregister_callback` through an unsubscription gate
    Unregister(String),
}

impl Route {
    pub fn call(name: impl Into<String>) -> Self {
        Route::Call(name.into())
    }

    pub fn register(gate: impl Into<String>) -> Self {
        Route::Register(gate.into())
    }

    pub fn unregister(gate: impl Into<String>) -> Self {
        Route::Unregister(gate.into())
    }
}

#[derive(Default)]
struct Faults {
    persistent: Option<TransportError>,
    queued: VecDeque<TransportError>,
}

#[derive(Default)]
struct BusState {
    gates: HashMap<String, GateFn>,
    listeners: HashMap<String, HashMap<CallbackId, StatusHandler>>,
    faults: HashMap<Route, Faults>,
    attempts: HashMap<Route, usize>,
}

impl BusState {
    /// Count the attempt and return the fault to raise, if any
    fn enter(&mut self, route: &Route) -> Result<(), TransportError> {
        *self.attempts.entry(route.clone()).or_insert(0) += 1;

        let Some(faults) = self.faults.get_mut(route) else {
            return Ok(());
        };
        if let Some(err) = faults.queued.pop_front() {
            return Err(err);
        }
        match &faults.persistent {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

/// In-process [`Transport`] with named gates and status listeners
///
/// Listeners are grouped by the gate they subscribed through. Registration
/// always succeeds unless a fault is injected. Unregistering removes the id
/// from whichever gate holds it and answers `false` for an unknown id.
#[derive(Default)]
pub struct LocalBus {
    state: Mutex<BusState>,
}

impl LocalBus {
    /// Create an empty bus with no gates
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve the gate `name` with `gate`
    ///
    /// Replaces any previous provider for the same name.
    pub fn provide<F>(&self, name: impl Into<String>, gate: F)
    where
        F: Fn(&[Value]) -> Result<Value, TransportError> + Send + Sync + 'static,
    {
        self.state.lock().gates.insert(name.into(), Arc::new(gate));
    }

    /// Serve the gate `name` with a constant reply
    pub fn provide_value(&self, name: impl Into<String>, value: Value) {
        self.provide(name, move |_| Ok(value.clone()));
    }

    /// Stop serving the gate `name`
    pub fn withdraw(&self, name: &str) {
        self.state.lock().gates.remove(name);
    }

    /// Make every attempt on `route` fail with `err` until cleared
    pub fn fail(&self, route: Route, err: TransportError) {
        self.state.lock().faults.entry(route).or_default().persistent = Some(err);
    }

    /// Make the next attempt on `route` fail with `err`
    ///
    /// Queued faults are consumed in order before any persistent one.
    pub fn fail_once(&self, route: Route, err: TransportError) {
        self.state
            .lock()
            .faults
            .entry(route)
            .or_default()
            .queued
            .push_back(err);
    }

    /// Drop every injected fault
    pub fn clear_faults(&self) {
        self.state.lock().faults.clear();
    }

    /// Number of attempts made on `route`, failed ones included
    pub fn attempts(&self, route: &Route) -> usize {
        self.state.lock().attempts.get(route).copied().unwrap_or(0)
    }

    /// Number of handlers currently registered through `gate`
    pub fn listener_count(&self, gate: &str) -> usize {
        self.state
            .lock()
            .listeners
            .get(gate)
            .map_or(0, HashMap::len)
    }

    /// Deliver `status` to every handler registered through `gate`
    ///
    /// Handlers run on the calling thread, outside the bus lock. Returns the
    /// number of handlers reached.
    pub fn emit(&self, gate: &str, status: &str) -> usize {
        let handlers: Vec<StatusHandler> = self
            .state
            .lock()
            .listeners
            .get(gate)
            .map(|l| l.values().cloned().collect())
            .unwrap_or_default();

        for handler in &handlers {
            handler(status.to_string());
        }
        handlers.len()
    }
}

impl Transport for LocalBus {
    fn invoke(&self, name: &str, args: Vec<Value>) -> Result<Value, TransportError> {
        let gate = {
            let mut state = self.state.lock();
            state.enter(&Route::call(name))?;
            state
                .gates
                .get(name)
                .cloned()
                .ok_or_else(|| TransportError::NotAvailable(name.to_string()))?
        };

        tracing::trace!(gate = name, args = args.len(), "local bus call");
        gate(&args)
    }

    fn register_callback(
        &self,
        gate: &str,
        id: CallbackId,
        handler: StatusHandler,
    ) -> Result<bool, TransportError> {
        let mut state = self.state.lock();
        state.enter(&Route::register(gate))?;
        state
            .listeners
            .entry(gate.to_string())
            .or_default()
            .insert(id, handler);
        Ok(true)
    }

    fn unregister_callback(&self, gate: &str, id: CallbackId) -> Result<bool, TransportError> {
        let mut state = self.state.lock();
        state.enter(&Route::unregister(gate))?;
        let mut removed = false;
        for listeners in state.listeners.values_mut() {
            removed |= listeners.remove(&id).is_some();
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_provided_gate_answers() {
        let bus = LocalBus::new();
        bus.provide_value("AetherFM.IpcVersion", json!(1));

        let reply = bus.invoke("AetherFM.IpcVersion", vec![]).unwrap();
        assert_eq!(reply, json!(1));
        assert_eq!(bus.attempts(&Route::call("AetherFM.IpcVersion")), 1);
    }

    #[test]
    fn test_gate_receives_arguments() {
        let bus = LocalBus::new();
        bus.provide("echo", |args| Ok(args.first().cloned().unwrap_or(Value::Null)));

        let reply = bus.invoke("echo", vec![json!("http://x")]).unwrap();
        assert_eq!(reply, json!("http://x"));
    }

    #[test]
    fn test_missing_gate_is_not_available() {
        let bus = LocalBus::new();
        let err = bus.invoke("AetherFM.Play", vec![]).unwrap_err();
        assert_eq!(err, TransportError::NotAvailable("AetherFM.Play".to_string()));
        // the failed attempt is still counted
        assert_eq!(bus.attempts(&Route::call("AetherFM.Play")), 1);
    }

    #[test]
    fn test_withdraw_removes_gate() {
        let bus = LocalBus::new();
        bus.provide_value("AetherFM.IsReady", json!(true));
        bus.withdraw("AetherFM.IsReady");
        assert!(bus.invoke("AetherFM.IsReady", vec![]).is_err());
    }

    #[test]
    fn test_fail_once_then_recover() {
        let bus = LocalBus::new();
        bus.provide_value("AetherFM.Play", json!(true));
        bus.fail_once(
            Route::call("AetherFM.Play"),
            TransportError::Timeout("AetherFM.Play".to_string()),
        );

        assert!(bus.invoke("AetherFM.Play", vec![]).is_err());
        assert_eq!(bus.invoke("AetherFM.Play", vec![]).unwrap(), json!(true));
    }

    #[test]
    fn test_persistent_fault_until_cleared() {
        let bus = LocalBus::new();
        bus.provide_value("AetherFM.Stop", json!(true));
        bus.fail(Route::call("AetherFM.Stop"), TransportError::Disconnected);

        assert!(bus.invoke("AetherFM.Stop", vec![]).is_err());
        assert!(bus.invoke("AetherFM.Stop", vec![]).is_err());

        bus.clear_faults();
        assert!(bus.invoke("AetherFM.Stop", vec![]).is_ok());
        assert_eq!(bus.attempts(&Route::call("AetherFM.Stop")), 3);
    }

    #[test]
    fn test_register_emit_unregister() {
        let bus = LocalBus::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let id = CallbackId::new();

        let counter = Arc::clone(&hits);
        let handler: StatusHandler = Arc::new(move |_status| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert!(bus.register_callback("AetherFM.SubscribeStatusChanged", id, handler).unwrap());
        assert_eq!(bus.listener_count("AetherFM.SubscribeStatusChanged"), 1);
        assert_eq!(bus.emit("AetherFM.SubscribeStatusChanged", "Playing"), 1);
        assert_eq!(hits.load(Ordering::SeqCst), 1);

        assert!(bus.unregister_callback("AetherFM.UnsubscribeStatusChanged", id).unwrap());
        assert!(!bus.unregister_callback("AetherFM.UnsubscribeStatusChanged", id).unwrap());
        assert_eq!(bus.emit("AetherFM.SubscribeStatusChanged", "Stopped"), 0);
        assert_eq!(bus.attempts(&Route::unregister("AetherFM.UnsubscribeStatusChanged")), 2);
    }

    #[test]
    fn test_register_fault_leaves_no_listener() {
        let bus = LocalBus::new();
        bus.fail_once(
            Route::register("AetherFM.SubscribeStatusChanged"),
            TransportError::Remote("refused".to_string()),
        );

        let handler: StatusHandler = Arc::new(|_| {});
        assert!(bus
            .register_callback("AetherFM.SubscribeStatusChanged", CallbackId::new(), handler)
            .is_err());
        assert_eq!(bus.listener_count("AetherFM.SubscribeStatusChanged"), 0);
    }
}
