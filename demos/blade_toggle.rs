//! Minimal host loop for a two-segment blade prop.
//!
//! Runs a scripted 180-frame session: press the toggle, hold it (held frames
//! must not re-toggle), swing the weapon around, toggle it back off. The
//! commands a real host would forward to its render/light/audio systems are
//! printed instead.
//!
//! ```sh
//! RUST_LOG=debug cargo run --example blade_toggle
//! ```

use std::thread;
use std::time::Duration;

use glam::Vec3;
use saber_core::{PressEdge, Timer, WeaponController, WeaponSettings};

fn main() -> saber_core::errors::Result<()> {
    env_logger::init();

    let settings = WeaponSettings {
        blade_color: [0.2, 0.55, 1.0],
        ..WeaponSettings::default()
    };
    let mut weapon = WeaponController::from_settings(&settings, &[1.2, 0.8], Vec3::ZERO)?;

    let colors = weapon.color_update();
    println!(
        "material init: light tint {:?}, emissive {:?}",
        colors.light_color, colors.emissive
    );

    let mut toggle_key = PressEdge::new();
    let mut timer = Timer::new();
    let mut position = Vec3::ZERO;

    for frame in 0..180u32 {
        // Scripted input: pressed around frame 10 and again near the end,
        // held for a few frames each time.
        let key_held = (10..14).contains(&frame) || (120..124).contains(&frame);
        if toggle_key.sample(key_held) {
            weapon.toggle();
        }

        // Scripted motion: a fast lateral swing while extended.
        if (50..80).contains(&frame) {
            position.x += 0.05;
        }

        thread::sleep(Duration::from_millis(8));
        timer.tick();
        let out = weapon.tick(timer.dt_seconds(), position);

        for cmd in &out.audio {
            println!("frame {frame:3}: audio {cmd:?}");
        }
        if frame % 30 == 0 {
            println!(
                "frame {frame:3}: active={} blade0 len={:.3} light={:.1}",
                out.weapon_active, out.segments[0].axis_scale, out.segments[0].light_intensity
            );
        }
    }

    Ok(())
}
