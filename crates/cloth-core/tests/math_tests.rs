use cloth_core::math::{direction_or, falloff};
use glam::Vec2;

#[test]
fn test_falloff_is_one_at_center_and_zero_at_edge() {
    assert_eq!(falloff(0.0, 20.0), 1.0);
    assert_eq!(falloff(20.0, 20.0), 0.0);
    assert_eq!(falloff(25.0, 20.0), 0.0);
    assert!((falloff(5.0, 20.0) - 0.75).abs() < 1e-6);
}

#[test]
fn test_falloff_is_monotonic() {
    let mut last = f32::INFINITY;
    for i in 0..=40 {
        let w = falloff(i as f32 * 0.5, 20.0);
        assert!(w <= last, "falloff increased at step {i}");
        last = w;
    }
}

#[test]
fn test_falloff_zero_radius() {
    assert_eq!(falloff(0.0, 0.0), 0.0);
    assert_eq!(falloff(0.0, -1.0), 0.0);
}

#[test]
fn test_direction_or_normalizes() {
    let d = direction_or(Vec2::new(3.0, 4.0), Vec2::Y);
    assert!((d - Vec2::new(0.6, 0.8)).length() < 1e-6);
}

#[test]
fn test_direction_or_uses_fallback_for_zero() {
    assert_eq!(direction_or(Vec2::ZERO, Vec2::X), Vec2::X);
    assert_eq!(direction_or(Vec2::splat(1e-9), Vec2::NEG_Y), Vec2::NEG_Y);
}
