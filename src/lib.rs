#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod audio;
pub mod config;
pub mod errors;
pub mod input;
pub mod utils;
pub mod weapon;

pub use audio::{AudioCommand, AudioCommandBuffer, AudioCue, SwingAudioGate};
pub use config::WeaponSettings;
pub use errors::SaberError;
pub use input::{ButtonState, PressEdge};
pub use utils::time::Timer;
pub use weapon::{
    BladeColorProfile, BladeState, ColorUpdate, SegmentVisual, WeaponController, WeaponFrame,
};
