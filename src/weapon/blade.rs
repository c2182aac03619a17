use glam::Vec2;

use crate::errors::{Result, SaberError};

/// A fully retracted blade has zero length along its extension axis.
const MIN_LENGTH: f32 = 0.0;

/// Extension state machine for a single blade segment.
///
/// The length integrates over time at a fixed signed rate toward whichever
/// bound the current direction points at, clamped to `[0, max_length]`.
/// Reaching a bound halts further change in that direction until the
/// direction reverses; the blade never bounces.
///
/// The `engaged` flag is derived from the length on every update and is
/// never set directly.
#[derive(Debug, Clone)]
pub struct BladeState {
    /// Maximum blade length, taken from the scene at construction.
    max_length: f32,
    /// Current length, mutated only by [`advance`](Self::advance).
    length: f32,
    /// Signed units/second; the sign is the current direction,
    /// the magnitude is `max_length / extend_duration`.
    rate: f32,
    engaged: bool,
    /// Fixed scale of the non-extending axes.
    cross_section: Vec2,
}

impl BladeState {
    /// Creates a segment from its scene-provided maximum length and the
    /// shared extend duration.
    ///
    /// An initially active segment starts fully extended and pointed toward
    /// extension; an inactive one starts at zero length, pointed toward
    /// retraction.
    pub fn new(max_length: f32, extend_duration: f32, initially_active: bool) -> Result<Self> {
        if max_length <= 0.0 {
            return Err(SaberError::InvalidBladeLength(max_length));
        }
        if extend_duration <= 0.0 {
            return Err(SaberError::InvalidExtendDuration(extend_duration));
        }

        let magnitude = max_length / extend_duration;
        let length = if initially_active { max_length } else { MIN_LENGTH };
        Ok(Self {
            max_length,
            length,
            rate: if initially_active { magnitude } else { -magnitude },
            engaged: length > MIN_LENGTH,
            cross_section: Vec2::ONE,
        })
    }

    /// Sets the scale of the non-extending axes (configuration stage).
    #[must_use]
    pub fn with_cross_section(mut self, cross_section: Vec2) -> Self {
        self.cross_section = cross_section;
        self
    }

    /// Points the segment toward extension or retraction.
    ///
    /// Only the sign of the rate changes; the magnitude and the current
    /// length are untouched. Idempotent.
    pub fn set_direction(&mut self, extending: bool) {
        self.rate = if extending {
            self.rate.abs()
        } else {
            -self.rate.abs()
        };
    }

    /// Advances the extension by `dt` seconds and re-derives the engaged flag.
    ///
    /// At a bound this is a no-op in the current direction (clamped, not
    /// bounced).
    pub fn advance(&mut self, dt: f32) {
        self.length = (self.length + self.rate * dt).clamp(MIN_LENGTH, self.max_length);
        self.engaged = self.length > MIN_LENGTH;
    }

    /// Light intensity emitted at the current length.
    ///
    /// Monotonic in length; exactly zero when fully retracted.
    #[must_use]
    pub fn light_intensity(&self, scale: f32) -> f32 {
        self.length * scale
    }

    #[must_use]
    pub fn length(&self) -> f32 {
        self.length
    }

    #[must_use]
    pub fn max_length(&self) -> f32 {
        self.max_length
    }

    /// True iff the segment is at least partially extended.
    #[must_use]
    pub fn engaged(&self) -> bool {
        self.engaged
    }

    /// True iff the segment is currently pointed toward extension.
    #[must_use]
    pub fn is_extending(&self) -> bool {
        self.rate > 0.0
    }

    #[must_use]
    pub fn cross_section(&self) -> Vec2 {
        self.cross_section
    }
}
