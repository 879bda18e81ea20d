//! Current playback state gates
//!
//! The remote side answers null when nothing is loaded, hence `Option`.

crate::define_gate_operation! {
    GetCurrentStationOperation => GetCurrentStation() -> Option<String>
}

crate::define_gate_operation! {
    GetCurrentStationUrlOperation => GetCurrentStationUrl() -> Option<String>
}

crate::define_gate_operation! {
    /// Free-form status string, usually "Playing", "Paused" or "Stopped"
    GetStatusOperation => GetStatus() -> Option<String>
}
