use serde::{Deserialize, Serialize};

/// Namespace every AetherFM gate is published under
pub const DEFAULT_NAMESPACE: &str = "AetherFM";

/// Named entry points exposed by the AetherFM service (IPC API v1)
///
/// Wire names are `"{namespace}.{name}"` and must match the remote side
/// exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gate {
    // Versioning & health
    IpcVersion,
    FeatureFlags,
    IsReady,

    // State & info
    GetCurrentStation,
    GetCurrentStationUrl,
    GetStatus,

    // Controls & UI
    Play,
    Pause,
    Stop,
    ResumeLast,
    TogglePlayStop,
    OpenWindow,
    ToggleWindow,
    OpenMiniPlayer,
    ToggleMiniPlayer,

    // Direct play
    PlayByUrl,
    PlayByName,

    // Favorites
    GetFavorites,
    GetFavoriteNames,
    /// Older spelling of [`Gate::GetFavoriteNames`] still served by some builds
    GetFavoritesNames,
    AddFavorite,
    RemoveFavorite,

    // Volume
    GetVolume,
    SetVolume,

    // Status events ("Playing", "Stopped", ...)
    SubscribeStatusChanged,
    UnsubscribeStatusChanged,
}

/// Coarse grouping of gates, used for log fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateCategory {
    Health,
    State,
    Control,
    Favorites,
    Volume,
    Events,
}

impl Gate {
    /// Every gate, in catalogue order
    pub const ALL: [Gate; 26] = [
        Gate::IpcVersion,
        Gate::FeatureFlags,
        Gate::IsReady,
        Gate::GetCurrentStation,
        Gate::GetCurrentStationUrl,
        Gate::GetStatus,
        Gate::Play,
        Gate::Pause,
        Gate::Stop,
        Gate::ResumeLast,
        Gate::TogglePlayStop,
        Gate::OpenWindow,
        Gate::ToggleWindow,
        Gate::OpenMiniPlayer,
        Gate::ToggleMiniPlayer,
        Gate::PlayByUrl,
        Gate::PlayByName,
        Gate::GetFavorites,
        Gate::GetFavoriteNames,
        Gate::GetFavoritesNames,
        Gate::AddFavorite,
        Gate::RemoveFavorite,
        Gate::GetVolume,
        Gate::SetVolume,
        Gate::SubscribeStatusChanged,
        Gate::UnsubscribeStatusChanged,
    ];

    /// Unqualified gate name
    pub fn name(&self) -> &'static str {
        match self {
            Gate::IpcVersion => "IpcVersion",
            Gate::FeatureFlags => "FeatureFlags",
            Gate::IsReady => "IsReady",
            Gate::GetCurrentStation => "GetCurrentStation",
            Gate::GetCurrentStationUrl => "GetCurrentStationUrl",
            Gate::GetStatus => "GetStatus",
            Gate::Play => "Play",
            Gate::Pause => "Pause",
            Gate::Stop => "Stop",
            Gate::ResumeLast => "ResumeLast",
            Gate::TogglePlayStop => "TogglePlayStop",
            Gate::OpenWindow => "OpenWindow",
            Gate::ToggleWindow => "ToggleWindow",
            Gate::OpenMiniPlayer => "OpenMiniPlayer",
            Gate::ToggleMiniPlayer => "ToggleMiniPlayer",
            Gate::PlayByUrl => "PlayByUrl",
            Gate::PlayByName => "PlayByName",
            Gate::GetFavorites => "GetFavorites",
            Gate::GetFavoriteNames => "GetFavoriteNames",
            Gate::GetFavoritesNames => "GetFavoritesNames",
            Gate::AddFavorite => "AddFavorite",
            Gate::RemoveFavorite => "RemoveFavorite",
            Gate::GetVolume => "GetVolume",
            Gate::SetVolume => "SetVolume",
            Gate::SubscribeStatusChanged => "SubscribeStatusChanged",
            Gate::UnsubscribeStatusChanged => "UnsubscribeStatusChanged",
        }
    }

    /// Fully qualified wire name under `namespace`
    pub fn qualified(&self, namespace: &str) -> String {
        format!("{}.{}", namespace, self.name())
    }

    pub fn category(&self) -> GateCategory {
        match self {
            Gate::IpcVersion | Gate::FeatureFlags | Gate::IsReady => GateCategory::Health,
            Gate::GetCurrentStation | Gate::GetCurrentStationUrl | Gate::GetStatus => {
                GateCategory::State
            }
            Gate::Play
            | Gate::Pause
            | Gate::Stop
            | Gate::ResumeLast
            | Gate::TogglePlayStop
            | Gate::OpenWindow
            | Gate::ToggleWindow
            | Gate::OpenMiniPlayer
            | Gate::ToggleMiniPlayer
            | Gate::PlayByUrl
            | Gate::PlayByName => GateCategory::Control,
            Gate::GetFavorites
            | Gate::GetFavoriteNames
            | Gate::GetFavoritesNames
            | Gate::AddFavorite
            | Gate::RemoveFavorite => GateCategory::Favorites,
            Gate::GetVolume | Gate::SetVolume => GateCategory::Volume,
            Gate::SubscribeStatusChanged | Gate::UnsubscribeStatusChanged => {
                GateCategory::Events
            }
        }
    }

    /// Look a gate up by its unqualified name
    pub fn from_name(name: &str) -> Option<Gate> {
        Gate::ALL.iter().copied().find(|g| g.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_qualified_names() {
        assert_eq!(Gate::IpcVersion.qualified(DEFAULT_NAMESPACE), "AetherFM.IpcVersion");
        assert_eq!(
            Gate::GetCurrentStation.qualified(DEFAULT_NAMESPACE),
            "AetherFM.GetCurrentStation"
        );
        assert_eq!(Gate::SetVolume.qualified("Custom"), "Custom.SetVolume");
        assert_eq!(
            Gate::UnsubscribeStatusChanged.qualified(DEFAULT_NAMESPACE),
            "AetherFM.UnsubscribeStatusChanged"
        );
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = Gate::ALL.iter().map(Gate::name).collect();
        assert_eq!(names.len(), Gate::ALL.len());
    }

    #[test]
    fn test_from_name_round_trips_catalogue() {
        for gate in Gate::ALL {
            assert_eq!(Gate::from_name(gate.name()), Some(gate));
        }
        assert_eq!(Gate::from_name("Rewind"), None);
    }

    #[test]
    fn test_categories() {
        assert_eq!(Gate::IsReady.category(), GateCategory::Health);
        assert_eq!(Gate::PlayByName.category(), GateCategory::Control);
        assert_eq!(Gate::GetFavoritesNames.category(), GateCategory::Favorites);
        assert_eq!(Gate::SubscribeStatusChanged.category(), GateCategory::Events);
        assert_eq!(Gate::UnsubscribeStatusChanged.category(), GateCategory::Events);
    }
}
