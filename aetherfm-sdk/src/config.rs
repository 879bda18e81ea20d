//! Gateway configuration
//!
//! Defaults match the published AetherFM IPC API v1. A JSON file at
//! `<config dir>/aetherfm/gateway.json` can override any field.

use std::path::{Path, PathBuf};

use aetherfm_api::{Gate, DEFAULT_NAMESPACE};
use serde::{Deserialize, Serialize};

use crate::SdkError;

/// Configuration for a [`CallGateway`](crate::CallGateway)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Namespace the remote gates are published under
    /// Default: "AetherFM"
    pub namespace: String,

    /// Gates tried in order when resolving favorite display names; the first
    /// non-empty answer wins
    /// Default: [GetFavoriteNames, GetFavoritesNames]
    pub favorite_name_sources: Vec<Gate>,

    /// Increment used by `volume_up` / `volume_down`
    /// Default: 0.05
    pub volume_step: f32,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            favorite_name_sources: vec![Gate::GetFavoriteNames, Gate::GetFavoritesNames],
            volume_step: 0.05,
        }
    }
}

impl GatewayConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Where `load` looks for a configuration file
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("aetherfm").join("gateway.json"))
    }

    /// Load the user's configuration file, or defaults when there is none
    pub fn load() -> Result<Self, SdkError> {
        match Self::default_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load and validate an explicit configuration file
    pub fn from_file(path: &Path) -> Result<Self, SdkError> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), namespace = %config.namespace, "loaded gateway config");
        Ok(config)
    }

    /// Validate the configuration and return any issues
    pub fn validate(&self) -> Result<(), SdkError> {
        if self.namespace.is_empty() || self.namespace.contains(char::is_whitespace) {
            return Err(SdkError::Config(format!(
                "Namespace '{}' must be non-empty and contain no whitespace",
                self.namespace
            )));
        }

        if self.favorite_name_sources.is_empty() {
            return Err(SdkError::Config(
                "At least one favorite name source is required".to_string(),
            ));
        }

        if let Some(gate) = self
            .favorite_name_sources
            .iter()
            .find(|g| {
                !matches!(
                    **g,
                    Gate::GetFavoriteNames | Gate::GetFavoritesNames | Gate::GetFavorites
                )
            })
        {
            return Err(SdkError::Config(format!(
                "{:?} does not answer with a list of favorites",
                gate
            )));
        }

        if !(self.volume_step > 0.0 && self.volume_step <= 1.0) {
            return Err(SdkError::Config(format!(
                "Volume step {} must be within (0, 1]",
                self.volume_step
            )));
        }

        Ok(())
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn with_favorite_name_sources(mut self, sources: Vec<Gate>) -> Self {
        self.favorite_name_sources = sources;
        self
    }

    pub fn with_volume_step(mut self, step: f32) -> Self {
        self.volume_step = step;
        self
    }
}
