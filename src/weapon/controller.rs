//! Weapon Controller
//!
//! [`WeaponController`] is the per-weapon coordinator: it owns the blade
//! segments, the color profile and the swing gate, consumes toggle events,
//! and emits one [`WeaponFrame`] of output values per simulation tick.
//!
//! # Lifecycle
//!
//! 1. Create with [`WeaponController::new`] or
//!    [`WeaponController::from_settings`] (fails fast on misconfiguration)
//! 2. Forward each edge-triggered input event with
//!    [`toggle`](WeaponController::toggle)
//! 3. Call [`tick`](WeaponController::tick) once per frame and hand the
//!    returned frame to the render/light/audio collaborators
//!
//! The controller is single-threaded and synchronous; every transition
//! completes within the tick call.

use glam::Vec3;
use smallvec::SmallVec;

use crate::audio::swing::DEFAULT_SPEED_THRESHOLD;
use crate::audio::{AudioCommand, AudioCommandBuffer, AudioCue, SwingAudioGate};
use crate::config::WeaponSettings;
use crate::errors::{Result, SaberError};
use crate::weapon::blade::BladeState;
use crate::weapon::color::BladeColorProfile;
use crate::weapon::output::{ColorUpdate, SegmentVisual, WeaponFrame};

/// Aggregate state machine over a non-empty set of blade segments.
///
/// The weapon's activity is derived, not stored independently: it is the OR
/// over the segments' engaged flags, recomputed every tick. A segment that
/// has not finished retracting keeps the weapon active even after a
/// deactivate toggle.
pub struct WeaponController {
    segments: SmallVec<[BladeState; 4]>,
    color_profile: BladeColorProfile,
    light_intensity_scale: f32,

    /// Derived each tick as OR over `segments[i].engaged()`.
    weapon_active: bool,
    /// Direction the last toggle commanded; flips independently of how far
    /// any segment has actually moved.
    target_active: bool,

    /// Audio raised by toggles, drained into the next frame. Replaced (not
    /// appended) on each toggle so the last call within a tick wins.
    pending_audio: AudioCommandBuffer,

    swing: SwingAudioGate,
}

impl WeaponController {
    /// Creates a controller over pre-built segments.
    ///
    /// `initial_position` seeds the swing gate so the first tick does not
    /// see a spurious displacement. Fails with a configuration error when
    /// `segments` is empty or the light scale is not positive.
    pub fn new(
        segments: Vec<BladeState>,
        color_profile: BladeColorProfile,
        light_intensity_scale: f32,
        initial_position: Vec3,
    ) -> Result<Self> {
        if segments.is_empty() {
            return Err(SaberError::NoBladeSegments);
        }
        if light_intensity_scale <= 0.0 {
            return Err(SaberError::InvalidIntensity {
                context: "light intensity",
                value: light_intensity_scale,
            });
        }

        let weapon_active = segments.iter().any(BladeState::engaged);
        let target_active = weapon_active;

        // An initially active weapon hums from the first frame, without an
        // activation one-shot.
        let mut pending_audio = AudioCommandBuffer::new();
        if weapon_active {
            pending_audio.push(AudioCommand::StartLoop(AudioCue::Hum));
        }

        Ok(Self {
            segments: SmallVec::from_vec(segments),
            color_profile,
            light_intensity_scale,
            weapon_active,
            target_active,
            pending_audio,
            swing: SwingAudioGate::new(initial_position, DEFAULT_SPEED_THRESHOLD),
        })
    }

    /// Builds a weapon from tunable settings plus the scene-provided maximum
    /// length of each segment.
    pub fn from_settings(
        settings: &WeaponSettings,
        segment_max_lengths: &[f32],
        initial_position: Vec3,
    ) -> Result<Self> {
        let mut segments = Vec::with_capacity(segment_max_lengths.len());
        for &max_length in segment_max_lengths {
            segments.push(BladeState::new(
                max_length,
                settings.extend_duration_seconds,
                settings.initially_active,
            )?);
        }

        let color_profile =
            BladeColorProfile::new(settings.blade_color(), settings.blade_color_intensity)?;

        let mut controller = Self::new(
            segments,
            color_profile,
            settings.light_intensity,
            initial_position,
        )?;
        controller.swing = SwingAudioGate::new(initial_position, settings.swing_speed_threshold);
        Ok(controller)
    }

    /// Flips the commanded direction and queues the transition audio.
    ///
    /// Segments keep animating toward the requested direction across
    /// subsequent ticks, regardless of how far they have moved. Calling this
    /// more than once within a tick flips the direction each time; only the
    /// last call's audio survives into the next frame.
    pub fn toggle(&mut self) {
        let activating = !self.target_active;
        self.target_active = activating;

        for segment in &mut self.segments {
            segment.set_direction(activating);
        }

        self.pending_audio.clear();
        if activating {
            self.pending_audio.push(AudioCommand::PlayOneShot(AudioCue::Activate));
            self.pending_audio.push(AudioCommand::StartLoop(AudioCue::Hum));
            log::debug!("weapon activating ({} segments)", self.segments.len());
        } else {
            self.pending_audio.push(AudioCommand::PlayOneShot(AudioCue::Deactivate));
            self.pending_audio.push(AudioCommand::StopLoop(AudioCue::Hum));
            log::debug!("weapon deactivating ({} segments)", self.segments.len());
        }
    }

    /// Advances the simulation by `dt` seconds.
    ///
    /// Advances every segment, re-derives the aggregate activity flag,
    /// feeds the weapon's world position into the swing gate and returns
    /// the output values for the host to apply.
    pub fn tick(&mut self, dt: f32, world_position: Vec3) -> WeaponFrame {
        let mut frame = WeaponFrame {
            audio: std::mem::take(&mut self.pending_audio),
            ..WeaponFrame::default()
        };

        let light_color = self.color_profile.display_color();
        for segment in &mut self.segments {
            segment.advance(dt);
            frame.segments.push(SegmentVisual {
                visible: segment.engaged(),
                axis_scale: segment.length(),
                cross_section: segment.cross_section(),
                light_intensity: segment.light_intensity(self.light_intensity_scale),
                light_color,
            });
        }

        // Derived by re-scanning all segments every tick, never cached; a
        // segment still retracting keeps the weapon active.
        let was_active = self.weapon_active;
        self.weapon_active = self.segments.iter().any(BladeState::engaged);
        if was_active != self.weapon_active {
            log::debug!(
                "weapon {} (derived)",
                if self.weapon_active { "active" } else { "inactive" }
            );
        }

        self.swing
            .update(world_position, dt, self.weapon_active, &mut frame.audio);

        frame.weapon_active = self.weapon_active;
        frame
    }

    /// Shader-facing color values for every segment's material.
    ///
    /// Valid at initialization and after every
    /// [`set_color_profile`](Self::set_color_profile) call; the host only
    /// needs to re-apply it at those points.
    #[must_use]
    pub fn color_update(&self) -> ColorUpdate {
        ColorUpdate {
            light_color: self.color_profile.display_color(),
            emissive: self.color_profile.emissive_color(),
        }
    }

    /// Replaces the color profile; the next [`color_update`](Self::color_update)
    /// reflects it.
    pub fn set_color_profile(&mut self, profile: BladeColorProfile) {
        self.color_profile = profile;
    }

    /// True iff at least one segment is engaged, as of the last tick.
    #[must_use]
    pub fn weapon_active(&self) -> bool {
        self.weapon_active
    }

    #[must_use]
    pub fn segments(&self) -> &[BladeState] {
        &self.segments
    }

    #[must_use]
    pub fn swing_gate(&self) -> &SwingAudioGate {
        &self.swing
    }
}
