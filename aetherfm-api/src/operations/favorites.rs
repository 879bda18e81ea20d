//! Favorites gates

use crate::define_gate_operation;

define_gate_operation! {
    /// Favorite station URLs, in the remote side's order
    GetFavoritesOperation => GetFavorites() -> Option<Vec<String>>
}

define_gate_operation! {
    /// Favorite display names
    GetFavoriteNamesOperation => GetFavoriteNames() -> Option<Vec<String>>
}

define_gate_operation! {
    /// Favorite display names under the older gate spelling
    GetFavoritesNamesOperation => GetFavoritesNames() -> Option<Vec<String>>
}

define_gate_operation! { AddFavoriteOperation => AddFavorite(String) -> bool }
define_gate_operation! { RemoveFavoriteOperation => RemoveFavorite(String) -> bool }
