//! Favorites and favorite-name resolution

use aetherfm_api::Gate;

/// Favorite station URLs and display names
///
/// The two lists come from independent remote queries and are not
/// guaranteed to line up by position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoritesCollection {
    urls: Vec<String>,
    names: Vec<String>,
}

impl FavoritesCollection {
    pub fn new(urls: Vec<String>, names: Vec<String>) -> Self {
        Self { urls, names }
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty() && self.names.is_empty()
    }

    /// Whether `url` is a favorite, ignoring ASCII case
    pub fn contains_url(&self, url: &str) -> bool {
        !url.is_empty() && self.urls.iter().any(|u| u.eq_ignore_ascii_case(url))
    }
}

/// Try `sources` in order and keep the first non-empty answer
///
/// Later sources are never consulted once one has answered.
pub(crate) fn resolve_first_non_empty<F>(sources: &[Gate], mut fetch: F) -> Vec<String>
where
    F: FnMut(Gate) -> Vec<String>,
{
    for &gate in sources {
        let names = fetch(gate);
        if !names.is_empty() {
            return names;
        }
        tracing::debug!(gate = gate.name(), "favorite name source empty, trying next");
    }
    Vec::new()
}
