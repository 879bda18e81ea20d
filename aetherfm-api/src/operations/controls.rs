//! Transport and window controls
//!
//! Every control answers whether the remote side acted on it.

use crate::define_gate_operation;

define_gate_operation! { PlayOperation => Play() -> bool }
define_gate_operation! { PauseOperation => Pause() -> bool }
define_gate_operation! { StopOperation => Stop() -> bool }

define_gate_operation! {
    /// Restart the most recently played station
    ResumeLastOperation => ResumeLast() -> bool
}

define_gate_operation! {
    /// Flip between playing and stopped
    TogglePlayStopOperation => TogglePlayStop() -> bool
}

define_gate_operation! { OpenWindowOperation => OpenWindow() -> bool }
define_gate_operation! { ToggleWindowOperation => ToggleWindow() -> bool }
define_gate_operation! { OpenMiniPlayerOperation => OpenMiniPlayer() -> bool }
define_gate_operation! { ToggleMiniPlayerOperation => ToggleMiniPlayer() -> bool }

define_gate_operation! { PlayByUrlOperation => PlayByUrl(String) -> bool }
define_gate_operation! { PlayByNameOperation => PlayByName(String) -> bool }
