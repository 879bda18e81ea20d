use serde::{Deserialize, Serialize};

/// The station currently loaded on the remote side
///
/// Both fields empty means no station.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StationReference {
    pub name: String,
    pub url: String,
}

impl StationReference {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.url.is_empty()
    }
}
