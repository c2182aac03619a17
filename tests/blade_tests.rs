//! Blade Segment Tests
//!
//! Tests for:
//! - BladeState construction and validation
//! - Direction changes (sign only, idempotent)
//! - Clamped time integration and the engaged flag
//! - Length-proportional light intensity
//! - BladeColorProfile display/emissive split

use glam::{Vec2, Vec3};

use saber_core::errors::SaberError;
use saber_core::{BladeColorProfile, BladeState};

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

// ============================================================================
// BladeState: Construction
// ============================================================================

#[test]
fn inactive_blade_starts_retracted() {
    let blade = BladeState::new(2.0, 0.1, false).unwrap();
    assert_eq!(blade.length(), 0.0, "inactive blade must start at zero");
    assert!(!blade.engaged());
    assert!(!blade.is_extending());
}

#[test]
fn active_blade_starts_extended() {
    let blade = BladeState::new(2.0, 0.1, true).unwrap();
    assert!(approx(blade.length(), 2.0), "got {}", blade.length());
    assert!(blade.engaged());
    assert!(blade.is_extending());
}

#[test]
fn rejects_non_positive_max_length() {
    assert!(matches!(
        BladeState::new(0.0, 0.1, false),
        Err(SaberError::InvalidBladeLength(_))
    ));
    assert!(matches!(
        BladeState::new(-1.0, 0.1, false),
        Err(SaberError::InvalidBladeLength(_))
    ));
}

#[test]
fn rejects_non_positive_extend_duration() {
    assert!(matches!(
        BladeState::new(1.0, 0.0, false),
        Err(SaberError::InvalidExtendDuration(_))
    ));
    assert!(matches!(
        BladeState::new(1.0, -0.5, false),
        Err(SaberError::InvalidExtendDuration(_))
    ));
}

#[test]
fn cross_section_defaults_to_one() {
    let blade = BladeState::new(1.0, 0.1, false).unwrap();
    assert_eq!(blade.cross_section(), Vec2::ONE);

    let blade = BladeState::new(1.0, 0.1, false)
        .unwrap()
        .with_cross_section(Vec2::new(0.1, 0.1));
    assert_eq!(blade.cross_section(), Vec2::new(0.1, 0.1));
}

// ============================================================================
// Direction
// ============================================================================

#[test]
fn set_direction_is_idempotent() {
    let mut once = BladeState::new(1.0, 1.0, false).unwrap();
    let mut twice = once.clone();

    once.set_direction(true);
    twice.set_direction(true);
    twice.set_direction(true);

    once.advance(0.25);
    twice.advance(0.25);
    assert!(
        approx(once.length(), twice.length()),
        "double set_direction diverged: {} vs {}",
        once.length(),
        twice.length()
    );
}

#[test]
fn set_direction_does_not_snap_length() {
    let mut blade = BladeState::new(1.0, 1.0, false).unwrap();
    blade.set_direction(true);
    blade.advance(0.5);
    let mid = blade.length();

    blade.set_direction(false);
    assert!(
        approx(blade.length(), mid),
        "direction change moved the blade: {} vs {mid}",
        blade.length()
    );
}

// ============================================================================
// Advance: clamped integration
// ============================================================================

#[test]
fn clamp_invariant_over_mixed_sequence() {
    let mut blade = BladeState::new(1.5, 0.2, false).unwrap();

    let script: &[(bool, f32)] = &[
        (true, 0.05),
        (true, 0.5),
        (false, 0.01),
        (false, 2.0),
        (true, 0.1),
        (false, 0.0),
        (true, 10.0),
    ];
    for &(extending, dt) in script {
        blade.set_direction(extending);
        blade.advance(dt);
        assert!(
            blade.length() >= 0.0 && blade.length() <= blade.max_length(),
            "length {} escaped [0, {}]",
            blade.length(),
            blade.max_length()
        );
    }
}

#[test]
fn extension_is_monotonic_until_max() {
    let mut blade = BladeState::new(1.0, 1.0, false).unwrap();
    blade.set_direction(true);

    let mut prev = blade.length();
    for _ in 0..9 {
        blade.advance(0.1);
        assert!(
            blade.length() > prev,
            "extension not strictly increasing: {} after {prev}",
            blade.length()
        );
        prev = blade.length();
    }

    // At max, further advances hold (clamped, no bounce)
    blade.advance(0.1);
    blade.advance(5.0);
    assert!(approx(blade.length(), 1.0), "got {}", blade.length());
}

#[test]
fn retraction_clamps_at_exact_zero() {
    let mut blade = BladeState::new(1.0, 0.1, true).unwrap();
    blade.set_direction(false);
    blade.advance(3.0);
    assert_eq!(blade.length(), 0.0, "retraction must clamp to exactly zero");
    assert!(!blade.engaged());
}

#[test]
fn zero_dt_is_a_noop() {
    let mut blade = BladeState::new(1.0, 1.0, false).unwrap();
    blade.set_direction(true);
    blade.advance(0.5);
    let before = blade.length();
    blade.advance(0.0);
    assert!(approx(blade.length(), before));
}

#[test]
fn half_extend_then_full_then_hold() {
    // rate = 2.0 / 0.1 = 20 units/sec
    let mut blade = BladeState::new(2.0, 0.1, false).unwrap();
    blade.set_direction(true);

    blade.advance(0.05);
    assert!(approx(blade.length(), 1.0), "half: got {}", blade.length());

    blade.advance(0.05);
    assert!(approx(blade.length(), 2.0), "full: got {}", blade.length());

    blade.advance(1.0);
    assert!(approx(blade.length(), 2.0), "hold: got {}", blade.length());
}

#[test]
fn engaged_tracks_partial_extension() {
    let mut blade = BladeState::new(1.0, 1.0, false).unwrap();
    assert!(!blade.engaged());

    blade.set_direction(true);
    blade.advance(0.01);
    assert!(blade.engaged(), "any positive length must count as engaged");

    blade.set_direction(false);
    blade.advance(1.0);
    assert!(!blade.engaged());
}

// ============================================================================
// Light intensity
// ============================================================================

#[test]
fn light_intensity_is_length_times_scale() {
    let mut blade = BladeState::new(1.0, 1.0, false).unwrap();
    blade.set_direction(true);
    blade.advance(0.5);
    let intensity = blade.light_intensity(1000.0);
    assert!(approx(intensity, 500.0), "got {intensity}");
}

#[test]
fn light_intensity_zero_when_retracted() {
    let blade = BladeState::new(1.0, 1.0, false).unwrap();
    assert_eq!(blade.light_intensity(1000.0), 0.0);
}

// ============================================================================
// BladeColorProfile
// ============================================================================

#[test]
fn display_color_is_unmodified_base() {
    let base = Vec3::new(0.2, 0.55, 1.0);
    let profile = BladeColorProfile::new(base, 600.0).unwrap();
    assert_eq!(profile.display_color(), base);
}

#[test]
fn emissive_color_exceeds_unit_range() {
    let profile = BladeColorProfile::new(Vec3::new(0.2, 0.55, 1.0), 600.0).unwrap();
    let emissive = profile.emissive_color();
    assert!(approx(emissive.x, 120.0), "got {}", emissive.x);
    assert!(approx(emissive.y, 330.0), "got {}", emissive.y);
    assert!(approx(emissive.z, 600.0), "got {}", emissive.z);
}

#[test]
fn rejects_non_positive_color_intensity() {
    assert!(matches!(
        BladeColorProfile::new(Vec3::ONE, 0.0),
        Err(SaberError::InvalidIntensity { .. })
    ));
    assert!(matches!(
        BladeColorProfile::new(Vec3::ONE, -10.0),
        Err(SaberError::InvalidIntensity { .. })
    ));
}
