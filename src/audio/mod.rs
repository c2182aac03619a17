//! Audio request surface
//!
//! The simulation never touches a playback engine. It emits [`AudioCommand`]
//! values each tick; the host's audio system is responsible for mapping cues
//! to clips and executing the requests.

pub mod swing;

pub use swing::SwingAudioGate;

/// The four clips a weapon layers on top of its state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioCue {
    /// One-shot played when the weapon turns on.
    Activate,
    /// One-shot played when the weapon turns off.
    Deactivate,
    /// Continuous hum looping while the weapon is on.
    Hum,
    /// One-shot gated by swing speed.
    Swing,
}

/// A playback request emitted by the simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AudioCommand {
    PlayOneShot(AudioCue),
    StopOneShot(AudioCue),
    StartLoop(AudioCue),
    StopLoop(AudioCue),
    SetVolume(AudioCue, f32),
}

/// Per-tick command list. Rarely more than a handful of entries.
pub type AudioCommandBuffer = smallvec::SmallVec<[AudioCommand; 8]>;
