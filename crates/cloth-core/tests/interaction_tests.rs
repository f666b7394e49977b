use cloth_core::config::InteractionConfig;
use cloth_core::error::ClothError;
use cloth_core::input::{Button, HostCommand, InputEvent, Key};
use cloth_core::interaction::{Interaction, InteractionMode};
use glam::Vec2;

fn interaction() -> Interaction {
    Interaction::new(InteractionConfig::default()).expect("default config is valid")
}

/// Hold the left button for `seconds` in `dt` frames.
fn hold(i: &mut Interaction, seconds: f32, dt: f32) {
    let frames = (seconds / dt).round() as usize;
    for _ in 0..frames {
        i.end_frame(dt);
    }
}

// ---------------------------------------------------------------------------
// Mode selection
// ---------------------------------------------------------------------------

#[test]
fn test_starts_idle() {
    let i = interaction();
    assert_eq!(i.mode(), InteractionMode::Idle);
    assert_eq!(i.force(), 0.0);
    assert_eq!(i.radius(), 20.0);
}

#[test]
fn test_new_rejects_invalid_config_without_panicking() {
    let nan = InteractionConfig::default().with_max_radius(f32::NAN);
    assert!(matches!(
        Interaction::new(nan),
        Err(ClothError::InvalidInteraction { .. })
    ));

    let negative = InteractionConfig::default().with_max_radius(-5.0);
    assert!(Interaction::new(negative).is_err());

    assert_eq!(Interaction::default().radius(), interaction().radius());
}

#[test]
fn test_left_press_is_drag_then_force_push() {
    let mut i = interaction();
    i.apply_event(&InputEvent::press(Button::Left));
    assert_eq!(i.mode(), InteractionMode::Drag, "first frame of a press drags");

    i.end_frame(0.015);
    assert_eq!(i.mode(), InteractionMode::ForcePush, "held across frames pushes");
}

#[test]
fn test_ctrl_left_is_tear() {
    let mut i = interaction();
    i.apply_event(&InputEvent::ctrl_press(Button::Left));
    i.end_frame(0.5);

    assert!(i.ctrl_down());
    assert_eq!(i.mode(), InteractionMode::Tear, "tear wins over force push");
}

#[test]
fn test_right_press_is_select() {
    let mut i = interaction();
    i.apply_event(&InputEvent::Moved { x: 12.0, y: 30.0 });
    i.apply_event(&InputEvent::press(Button::Right));

    assert_eq!(i.mode(), InteractionMode::Select);
    assert_eq!(i.selection(), Some(Vec2::new(12.0, 30.0)));

    i.apply_event(&InputEvent::release(Button::Right));
    assert_eq!(i.mode(), InteractionMode::Idle);
    assert_eq!(i.selection(), Some(Vec2::new(12.0, 30.0)), "selection point is kept");
}

#[test]
fn test_selection_follows_pointer_while_right_held() {
    let mut i = interaction();
    i.apply_event(&InputEvent::Moved { x: 12.0, y: 30.0 });
    i.apply_event(&InputEvent::press(Button::Right));
    i.apply_event(&InputEvent::Moved { x: 40.0, y: 18.0 });
    assert_eq!(i.selection(), Some(Vec2::new(40.0, 18.0)));

    i.apply_event(&InputEvent::release(Button::Right));
    i.apply_event(&InputEvent::Moved { x: 90.0, y: 90.0 });
    assert_eq!(i.selection(), Some(Vec2::new(40.0, 18.0)), "released selection is frozen");
}

#[test]
fn test_left_release_returns_to_idle() {
    let mut i = interaction();
    i.apply_event(&InputEvent::ctrl_press(Button::Left));
    i.apply_event(&InputEvent::release(Button::Left));

    assert_eq!(i.mode(), InteractionMode::Idle);
    assert!(!i.left_down());
    assert!(!i.ctrl_down());
}

// ---------------------------------------------------------------------------
// Pointer tracking
// ---------------------------------------------------------------------------

#[test]
fn test_motion_is_measured_from_frame_start() {
    let mut i = interaction();
    i.apply_event(&InputEvent::Moved { x: 10.0, y: 10.0 });
    i.end_frame(0.015);

    i.apply_event(&InputEvent::Moved { x: 12.0, y: 11.0 });
    i.apply_event(&InputEvent::Moved { x: 15.0, y: 14.0 });

    assert_eq!(i.position(), Vec2::new(15.0, 14.0));
    assert_eq!(i.motion(), Vec2::new(5.0, 4.0));

    i.end_frame(0.015);
    assert_eq!(i.motion(), Vec2::ZERO);
}

#[test]
fn test_dragging_flag_is_per_frame() {
    let mut i = interaction();
    i.apply_event(&InputEvent::Moved { x: 1.0, y: 1.0 });
    assert!(!i.is_dragging(), "moving without a button is not a drag");

    i.apply_event(&InputEvent::press(Button::Left));
    i.apply_event(&InputEvent::Moved { x: 2.0, y: 1.0 });
    assert!(i.is_dragging());

    i.end_frame(0.015);
    assert!(!i.is_dragging());
}

// ---------------------------------------------------------------------------
// Force accumulation
// ---------------------------------------------------------------------------

#[test]
fn test_force_grows_while_held_and_resets_on_release() {
    let mut i = interaction();
    let dt = 0.015;
    i.apply_event(&InputEvent::press(Button::Left));
    assert_eq!(i.force(), 0.0);

    hold(&mut i, 0.5, dt);
    let at_half = i.force();
    hold(&mut i, 1.5, dt);
    let at_two = i.force();

    assert!(at_half > 0.0);
    assert!(at_two > at_half, "force at 2s ({at_two}) should exceed 0.5s ({at_half})");
    assert!((i.hold_time() - 2.0).abs() < 0.02, "hold time {}", i.hold_time());

    i.apply_event(&InputEvent::release(Button::Left));
    assert_eq!(i.force(), 0.0, "release resets the accumulator immediately");
    assert_eq!(i.hold_time(), 0.0);
}

#[test]
fn test_force_is_capped() {
    let config = InteractionConfig::default().with_force_curve(10.0, 5.0);
    let mut i = Interaction::new(config).unwrap();
    i.apply_event(&InputEvent::press(Button::Left));

    hold(&mut i, 3.0, 0.1);

    assert_eq!(i.force(), 5.0);
}

#[test]
fn test_force_does_not_grow_when_released() {
    let mut i = interaction();
    hold(&mut i, 1.0, 0.1);
    assert_eq!(i.force(), 0.0);
}

#[test]
fn test_repeated_press_does_not_restart_hold() {
    let mut i = interaction();
    i.apply_event(&InputEvent::press(Button::Left));
    hold(&mut i, 1.0, 0.1);
    let before = i.force();

    i.apply_event(&InputEvent::press(Button::Left));
    assert_eq!(i.force(), before);
}

// ---------------------------------------------------------------------------
// Scroll and keys
// ---------------------------------------------------------------------------

#[test]
fn test_scroll_adjusts_radius_with_clamping() {
    let mut i = interaction();

    i.apply_event(&InputEvent::Scrolled { dy: 30.0 });
    assert_eq!(i.radius(), 50.0);

    i.apply_event(&InputEvent::Scrolled { dy: -500.0 });
    assert_eq!(i.radius(), 0.0, "clamped at zero");

    for _ in 0..20 {
        i.apply_event(&InputEvent::Scrolled { dy: 30.0 });
    }
    assert_eq!(i.radius(), i.max_radius(), "clamped at the maximum");
}

#[test]
fn test_scroll_ignores_non_finite_delta() {
    let mut i = interaction();
    i.apply_event(&InputEvent::Scrolled { dy: f32::NAN });
    assert_eq!(i.radius(), 20.0);
}

#[test]
fn test_keys_map_to_host_commands() {
    let mut i = interaction();

    assert_eq!(
        i.apply_event(&InputEvent::KeyPressed(Key::Escape)),
        Some(HostCommand::Close)
    );
    assert_eq!(
        i.apply_event(&InputEvent::KeyPressed(Key::Space)),
        Some(HostCommand::Reset)
    );
    assert_eq!(i.apply_event(&InputEvent::KeyPressed(Key::Other)), None);
    assert_eq!(i.apply_event(&InputEvent::Moved { x: 0.0, y: 0.0 }), None);
}
