//! Volume level on the remote side's 0.0..=1.0 scale

use serde::{Deserialize, Serialize};

/// Volume level, always within `[0, 1]`
///
/// Every way of building one clamps, including deserialization. NaN maps to
/// the lower bound.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(from = "f32", into = "f32")]
pub struct VolumeLevel(f32);

impl VolumeLevel {
    pub const MIN: VolumeLevel = VolumeLevel(0.0);
    pub const MAX: VolumeLevel = VolumeLevel(1.0);

    /// Clamp `value` into `[0, 1]`
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::MIN;
        }
        Self(value.clamp(0.0, 1.0))
    }

    pub fn value(&self) -> f32 {
        self.0
    }

    /// Volume as a rounded percentage (0-100)
    pub fn percentage(&self) -> u8 {
        (self.0 * 100.0).round() as u8
    }

    /// Move by `delta`, staying within bounds
    pub fn step(&self, delta: f32) -> Self {
        Self::new(self.0 + delta)
    }
}

impl From<f32> for VolumeLevel {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

impl From<VolumeLevel> for f32 {
    fn from(level: VolumeLevel) -> Self {
        level.0
    }
}
