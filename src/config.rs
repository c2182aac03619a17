//! Weapon tunables
//!
//! [`WeaponSettings`] is the editor-facing surface of the simulation: every
//! value a designer would tweak lives here. Settings are plain serde data so
//! hosts can embed them in their own asset descriptions or load them from
//! JSON.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// Tunable parameters for one weapon.
///
/// All fields are optional in serialized form; missing fields take the
/// defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponSettings {
    /// Time for a blade to travel between fully retracted and fully
    /// extended, in seconds.
    pub extend_duration_seconds: f32,
    /// Whether the weapon (and all of its blades) starts active.
    pub initially_active: bool,
    /// Unit-range RGB blade color, shared by the light tint and the glow.
    pub blade_color: [f32; 3],
    /// HDR multiplier applied to the blade color for the emissive glow.
    pub blade_color_intensity: f32,
    /// Scene-light intensity per unit of blade length.
    pub light_intensity: f32,
    /// Swing speed above which the swing cue triggers, in units/second.
    pub swing_speed_threshold: f32,
}

impl Default for WeaponSettings {
    fn default() -> Self {
        Self {
            extend_duration_seconds: 0.1,
            initially_active: false,
            blade_color: [1.0, 1.0, 1.0],
            blade_color_intensity: 600.0,
            light_intensity: 1000.0,
            swing_speed_threshold: 0.8,
        }
    }
}

impl WeaponSettings {
    /// The blade color as a math-friendly vector.
    #[must_use]
    pub fn blade_color(&self) -> Vec3 {
        Vec3::from_array(self.blade_color)
    }

    /// Parses settings from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads settings from a JSON file on disk.
    pub fn from_json_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}
