//! Per-tick output values
//!
//! The simulation emits plain values for the host's render, light, material
//! and audio systems to apply. Nothing in here references a scene object;
//! this keeps the core headless and testable.

use glam::{Vec2, Vec3};
use smallvec::SmallVec;

use crate::audio::AudioCommandBuffer;

/// Display values for one segment after one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentVisual {
    /// Show or hide the segment's scene object.
    pub visible: bool,
    /// Scale to apply along the segment's extension axis (the current
    /// blade length).
    pub axis_scale: f32,
    /// Fixed scale of the non-extending axes.
    pub cross_section: Vec2,
    /// Intensity of the light attached to the segment.
    pub light_intensity: f32,
    /// Tint of that light.
    pub light_color: Vec3,
}

/// Shader-facing color values, emitted at initialization and whenever the
/// color profile changes. Applies uniformly to every segment's material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorUpdate {
    /// Unit-range tint for the segment lights.
    pub light_color: Vec3,
    /// HDR emissive color for the blade shader.
    pub emissive: Vec3,
}

/// Everything the weapon asks the host to apply after one tick.
#[derive(Debug, Clone, Default)]
pub struct WeaponFrame {
    /// One entry per segment, in construction order.
    pub segments: SmallVec<[SegmentVisual; 4]>,
    /// Audio requests raised this tick, in emission order.
    pub audio: AudioCommandBuffer,
    /// Aggregate activity flag: true iff any segment is engaged.
    pub weapon_active: bool,
}
