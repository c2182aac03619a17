use glam::Vec3;

use crate::audio::{AudioCommand, AudioCommandBuffer, AudioCue};

/// Swing speed above which the swing cue triggers, in units/second.
pub const DEFAULT_SPEED_THRESHOLD: f32 = 0.8;

/// Release multiplier applied to the swing volume once per tick.
///
/// Per-tick, not time-normalized; deterministic replay requires feeding
/// identical dt sequences.
const VOLUME_DECAY: f32 = 0.9;

/// Below this the fade is inaudible; snap to zero and stop the clip.
const MIN_VOLUME: f32 = 1e-3;

/// Hysteresis gate turning a continuous speed signal into discrete swing
/// audio requests.
///
/// Speed is estimated from the weapon's world-position displacement each
/// tick. Crossing the threshold plays the swing cue at full volume; dropping
/// back below it fades the volume out exponentially until the clip stops.
/// While the weapon is inactive the gate is frozen and emits nothing.
#[derive(Debug, Clone)]
pub struct SwingAudioGate {
    last_position: Vec3,
    speed: f32,
    speed_threshold: f32,
    volume: f32,
    playing: bool,
}

impl SwingAudioGate {
    #[must_use]
    pub fn new(initial_position: Vec3, speed_threshold: f32) -> Self {
        Self {
            last_position: initial_position,
            speed: 0.0,
            speed_threshold,
            volume: 0.0,
            playing: false,
        }
    }

    /// Feeds one tick of position data and appends any resulting audio
    /// requests to `out`.
    ///
    /// With `dt == 0` the speed estimate is left untouched (never divide by
    /// zero); the displacement accrued during such a tick is attributed to
    /// the next timed one.
    pub fn update(&mut self, position: Vec3, dt: f32, weapon_active: bool, out: &mut AudioCommandBuffer) {
        if dt > 0.0 {
            self.speed = (position - self.last_position).length() / dt;
            self.last_position = position;
        }

        if !weapon_active {
            return;
        }

        if self.speed > self.speed_threshold {
            if !self.playing {
                self.volume = 1.0;
                out.push(AudioCommand::SetVolume(AudioCue::Swing, 1.0));
                out.push(AudioCommand::PlayOneShot(AudioCue::Swing));
                self.playing = true;
            }
        } else if self.playing {
            self.volume *= VOLUME_DECAY;
            if self.volume > MIN_VOLUME {
                out.push(AudioCommand::SetVolume(AudioCue::Swing, self.volume));
            } else {
                self.volume = 0.0;
                out.push(AudioCommand::SetVolume(AudioCue::Swing, 0.0));
                out.push(AudioCommand::StopOneShot(AudioCue::Swing));
                self.playing = false;
            }
        }
    }

    /// Latest speed estimate in units/second.
    #[must_use]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    #[must_use]
    pub fn speed_threshold(&self) -> f32 {
        self.speed_threshold
    }

    /// Current swing clip volume in `[0, 1]`.
    #[must_use]
    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// True while the swing clip is (from the gate's point of view) audible.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }
}
