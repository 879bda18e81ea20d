use std::fmt;
use std::sync::Arc;

use ipc_transport::{CallbackId, StatusHandler, Transport};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiError, Result};
use crate::gate::{Gate, DEFAULT_NAMESPACE};
use crate::operation::GateOperation;

/// A client for executing AetherFM gate operations over a transport
///
/// This client bridges the stateless operation definitions and the actual
/// named calls. It does not retry and does not swallow errors; fallback
/// policy belongs to the SDK gateway.
///
/// # Example
/// ```rust,ignore
/// use aetherfm_api::{IpcClient, operations::IpcVersionOperation};
///
/// let client = IpcClient::new(transport);
/// let version = client.execute::<IpcVersionOperation>(&())?;
/// ```
#[derive(Clone)]
pub struct IpcClient {
    transport: Arc<dyn Transport>,
    namespace: String,
}

impl IpcClient {
    /// Create a client publishing under the default `AetherFM` namespace
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self::with_namespace(transport, DEFAULT_NAMESPACE)
    }

    /// Create a client for a service published under another namespace
    pub fn with_namespace(transport: Arc<dyn Transport>, namespace: impl Into<String>) -> Self {
        Self {
            transport,
            namespace: namespace.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Wire name of `gate` for this client's namespace
    pub fn gate_name(&self, gate: Gate) -> String {
        gate.qualified(&self.namespace)
    }

    /// Execute a typed operation
    ///
    /// Encodes the argument tuple, performs exactly one transport call and
    /// decodes the reply into `Op::Output`.
    pub fn execute<Op: GateOperation>(&self, args: &Op::Args) -> Result<Op::Output> {
        let args = Op::encode_args(args)?;
        let reply = self.call_raw(Op::GATE, args)?;
        Op::decode_output(reply)
    }

    /// Execute a call whose gate is only known at runtime
    pub fn call<O: DeserializeOwned>(&self, gate: Gate, args: Vec<Value>) -> Result<O> {
        let reply = self.call_raw(gate, args)?;
        serde_json::from_value(reply).map_err(|e| ApiError::Decode {
            gate,
            message: e.to_string(),
        })
    }

    /// Perform one transport call and hand back the untyped reply
    pub fn call_raw(&self, gate: Gate, args: Vec<Value>) -> Result<Value> {
        let name = self.gate_name(gate);
        tracing::trace!(gate = %name, args = args.len(), "calling gate");
        Ok(self.transport.invoke(&name, args)?)
    }

    /// Register `handler` under `id` through `SubscribeStatusChanged`
    pub fn register_status_handler(&self, id: CallbackId, handler: StatusHandler) -> Result<bool> {
        let name = self.gate_name(Gate::SubscribeStatusChanged);
        tracing::trace!(gate = %name, callback = %id, "registering status handler");
        Ok(self.transport.register_callback(&name, id, handler)?)
    }

    /// Remove the handler registered under `id` through `UnsubscribeStatusChanged`
    pub fn unregister_status_handler(&self, id: CallbackId) -> Result<bool> {
        let name = self.gate_name(Gate::UnsubscribeStatusChanged);
        tracing::trace!(gate = %name, callback = %id, "unregistering status handler");
        Ok(self.transport.unregister_callback(&name, id)?)
    }
}

impl fmt::Debug for IpcClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IpcClient")
            .field("namespace", &self.namespace)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::{GetStatusOperation, IpcVersionOperation, SetVolumeOperation};
    use ipc_transport::{LocalBus, Route, TransportError};
    use serde_json::json;

    fn bus_client() -> (Arc<LocalBus>, IpcClient) {
        let bus = Arc::new(LocalBus::new());
        let client = IpcClient::new(bus.clone());
        (bus, client)
    }

    #[test]
    fn test_execute_decodes_reply() {
        let (bus, client) = bus_client();
        bus.provide_value("AetherFM.IpcVersion", json!(2));

        assert_eq!(client.execute::<IpcVersionOperation>(&()).unwrap(), 2);
    }

    #[test]
    fn test_execute_passes_arguments() {
        let (bus, client) = bus_client();
        bus.provide("AetherFM.SetVolume", |args| Ok(json!(args == [json!(0.5)])));

        assert!(client.execute::<SetVolumeOperation>(&(0.5,)).unwrap());
    }

    #[test]
    fn test_execute_maps_transport_error() {
        let (bus, client) = bus_client();
        bus.fail(Route::call("AetherFM.GetStatus"), TransportError::Disconnected);

        let err = client.execute::<GetStatusOperation>(&()).unwrap_err();
        assert!(matches!(err, ApiError::Transport(TransportError::Disconnected)));
    }

    #[test]
    fn test_custom_namespace() {
        let bus = Arc::new(LocalBus::new());
        let client = IpcClient::with_namespace(bus.clone(), "AetherFM.Beta");
        bus.provide_value("AetherFM.Beta.IpcVersion", json!(1));

        assert_eq!(client.gate_name(Gate::IpcVersion), "AetherFM.Beta.IpcVersion");
        assert_eq!(client.execute::<IpcVersionOperation>(&()).unwrap(), 1);
    }

    #[test]
    fn test_status_handler_registration_uses_published_gates() {
        let (bus, client) = bus_client();
        let id = CallbackId::new();

        assert!(client.register_status_handler(id, Arc::new(|_| {})).unwrap());
        assert_eq!(bus.listener_count("AetherFM.SubscribeStatusChanged"), 1);
        assert!(client.unregister_status_handler(id).unwrap());
        assert_eq!(bus.listener_count("AetherFM.SubscribeStatusChanged"), 0);

        assert_eq!(bus.attempts(&Route::register("AetherFM.SubscribeStatusChanged")), 1);
        assert_eq!(bus.attempts(&Route::unregister("AetherFM.UnsubscribeStatusChanged")), 1);
        assert_eq!(bus.attempts(&Route::register("AetherFM.StatusChanged")), 0);
        assert_eq!(bus.attempts(&Route::unregister("AetherFM.StatusChanged")), 0);
    }
}
