//! Signature pad unit tests - event routing, stroke lifecycle, export.

use crate::helpers::{
    TestPadBuilder, pointer_down, pointer_move, pointer_up, touch_end, touch_move, touch_start,
};
use signpad::config::PadOptions;
use signpad::input::{DefaultAction, InputMode};
use signpad::types::point;

#[test]
fn test_stroke_cycle_ends_idle() {
    let mut pad = TestPadBuilder::new().build();
    pad.dispatch(&pointer_down(10.0, 10.0));
    assert!(pad.is_drawing());
    pad.dispatch(&pointer_move(50.0, 50.0));
    pad.dispatch(&pointer_move(90.0, 10.0));
    pad.dispatch(&pointer_up());
    assert!(!pad.is_drawing());
    assert!(!pad.surface().is_blank());
}

#[test]
fn test_move_before_down_is_noop() {
    let mut pad = TestPadBuilder::new().build();
    pad.dispatch(&pointer_move(50.0, 50.0));
    assert!(!pad.is_drawing());
    assert!(pad.surface().is_blank());
}

#[test]
fn test_move_after_up_is_noop() {
    let mut pad = TestPadBuilder::new()
        .with_stroke(&[(10.0, 10.0), (50.0, 50.0)])
        .build();
    let before = pad.surface().image().clone();
    pad.dispatch(&pointer_move(200.0, 100.0));
    assert!(!pad.is_drawing());
    assert_eq!(pad.surface().image(), &before);
}

#[test]
fn test_down_re_anchors_while_drawing() {
    let mut pad = TestPadBuilder::new().build();
    pad.dispatch(&pointer_down(10.0, 10.0));
    pad.dispatch(&pointer_down(300.0, 100.0));
    pad.dispatch(&pointer_move(310.0, 110.0));
    // The re-anchored stroke draws near the second down, not the first
    assert!(pad.surface().image().get_pixel(305, 105).0[3] > 0);
    assert_eq!(pad.surface().image().get_pixel(30, 30).0[3], 0);
}

#[test]
fn test_resize_discards_ink_and_resets_size() {
    let mut pad = TestPadBuilder::new()
        .with_width(400)
        .with_stroke(&[(10.0, 10.0), (50.0, 50.0)])
        .build();
    pad.resize(500);
    assert_eq!(pad.surface().size(), (500, 200));
    assert!(pad.surface().is_blank());
}

#[test]
fn test_clear_discards_ink_keeps_size() {
    let mut pad = TestPadBuilder::new()
        .with_stroke(&[(10.0, 10.0), (50.0, 50.0)])
        .build();
    pad.clear();
    assert_eq!(pad.surface().size(), (400, 160));
    assert!(pad.surface().is_blank());
}

// ============================================================================
// Input family wiring
// ============================================================================

#[test]
fn test_pointer_mode_ignores_touch_events() {
    let mut pad = TestPadBuilder::new().build();
    assert_eq!(pad.mode(), InputMode::Pointer);
    pad.dispatch(&touch_start(10.0, 10.0));
    pad.dispatch(&touch_move(50.0, 50.0));
    assert!(!pad.is_drawing());
    assert!(pad.surface().is_blank());
}

#[test]
fn test_touch_mode_ignores_pointer_events() {
    let mut pad = TestPadBuilder::new().with_touch_device(5).build();
    assert_eq!(pad.mode(), InputMode::Touch);
    pad.dispatch(&pointer_down(10.0, 10.0));
    pad.dispatch(&pointer_move(50.0, 50.0));
    assert!(!pad.is_drawing());
    assert!(pad.surface().is_blank());
}

#[test]
fn test_touch_disabled_by_options() {
    let options = PadOptions {
        touch_input: false,
        ..PadOptions::default()
    };
    let pad = TestPadBuilder::new()
        .with_touch_device(5)
        .with_options(options)
        .build();
    assert_eq!(pad.mode(), InputMode::Pointer);
}

#[test]
fn test_touch_coordinates_rebased_against_surface_origin() {
    let mut pad = TestPadBuilder::new().with_touch_device(1).build();
    pad.set_surface_origin(point(100.0, 250.0));
    pad.dispatch(&touch_start(130.0, 270.0));
    pad.dispatch(&touch_move(150.0, 280.0));
    pad.dispatch(&touch_end());
    // Client (130, 270) lands at surface-local (30, 20)
    assert!(pad.surface().image().get_pixel(40, 25).0[3] > 0);
}

#[test]
fn test_touch_move_suppresses_default_gesture_only_while_inking() {
    let mut pad = TestPadBuilder::new().with_touch_device(1).build();
    // Not drawing: the platform keeps its scroll gesture
    assert_eq!(pad.dispatch(&touch_move(50.0, 50.0)), DefaultAction::Allow);

    pad.dispatch(&touch_start(10.0, 10.0));
    assert_eq!(
        pad.dispatch(&touch_move(50.0, 50.0)),
        DefaultAction::Prevent
    );

    pad.dispatch(&touch_end());
    assert_eq!(pad.dispatch(&touch_move(60.0, 60.0)), DefaultAction::Allow);
}

#[test]
fn test_pointer_moves_never_suppress_defaults() {
    let mut pad = TestPadBuilder::new().build();
    pad.dispatch(&pointer_down(10.0, 10.0));
    assert_eq!(pad.dispatch(&pointer_move(50.0, 50.0)), DefaultAction::Allow);
}

// ============================================================================
// Export
// ============================================================================

#[test]
fn test_export_is_fresh_each_save() {
    let mut pad = TestPadBuilder::new()
        .with_stroke(&[(10.0, 10.0), (50.0, 50.0)])
        .build();
    let first = pad.export_flattened().unwrap();
    pad.clear();
    let second = pad.export_flattened().unwrap();
    assert_ne!(first, second);
}
