//! Versioning and readiness gates

crate::define_gate_operation! {
    /// IPC protocol version; `>= 1` for every supported build
    IpcVersionOperation => IpcVersion() -> i32
}

crate::define_gate_operation! {
    /// Bitmask of optional features the remote build supports
    FeatureFlagsOperation => FeatureFlags() -> i32
}

crate::define_gate_operation! {
    /// Whether the remote service has finished starting up
    IsReadyOperation => IsReady() -> bool
}
