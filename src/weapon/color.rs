use glam::Vec3;

use crate::errors::{Result, SaberError};

/// Display / emissive color pair shared by every segment of a weapon.
///
/// The display color tints the segment lights; the emissive color is the
/// over-driven HDR value fed to the shader, producing the inner-white,
/// outer-colored glow. Stateless after construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BladeColorProfile {
    base_color: Vec3,
    intensity: f32,
}

impl BladeColorProfile {
    /// `base_color` is unit-range RGB; `intensity` is the HDR multiplier.
    pub fn new(base_color: Vec3, intensity: f32) -> Result<Self> {
        if intensity <= 0.0 {
            return Err(SaberError::InvalidIntensity {
                context: "color intensity",
                value: intensity,
            });
        }
        Ok(Self { base_color, intensity })
    }

    /// The base color, unmodified. Used for ambient light tint.
    #[must_use]
    pub fn display_color(&self) -> Vec3 {
        self.base_color
    }

    /// The base color scaled component-wise by the intensity.
    ///
    /// Components may exceed the unit range (HDR glow).
    #[must_use]
    pub fn emissive_color(&self) -> Vec3 {
        self.base_color * self.intensity
    }

    #[must_use]
    pub fn intensity(&self) -> f32 {
        self.intensity
    }
}
