pub mod blade;
pub mod color;
pub mod controller;
pub mod output;

pub use blade::BladeState;
pub use color::BladeColorProfile;
pub use controller::WeaponController;
pub use output::{ColorUpdate, SegmentVisual, WeaponFrame};
