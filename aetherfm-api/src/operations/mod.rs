//! Operation types for every AetherFM gate, grouped by concern

pub mod controls;
pub mod favorites;
pub mod health;
pub mod state;
pub mod volume;

pub use controls::*;
pub use favorites::*;
pub use health::*;
pub use state::*;
pub use volume::*;
