use colorink::input::{
    CanvasAction, GestureInterpreter, MAX_SCALE, MIN_SCALE, PointerSnapshot, TouchPhase,
    ViewTransform,
};
use egui::{Pos2, Vec2, pos2, vec2};

fn frame(time: f64, touches: &[(u64, Pos2, TouchPhase)]) -> PointerSnapshot {
    let mut snapshot = PointerSnapshot::new(time);
    for (id, pos, phase) in touches {
        snapshot.push(*id, *pos, *phase);
    }
    snapshot
}

/// Press and release quickly. Does not run out the double-tap window, so a
/// completed single tap is still held at return.
fn tap(interpreter: &mut GestureInterpreter, pos: Pos2, start: f64) -> Vec<CanvasAction> {
    let mut actions = interpreter.handle(&frame(start, &[(0, pos, TouchPhase::Started)]));
    actions.extend(interpreter.handle(&frame(start + 0.1, &[(0, pos, TouchPhase::Ended)])));
    actions
}

/// An idle frame late enough to release any held tap.
fn settle(interpreter: &mut GestureInterpreter, time: f64) -> Vec<CanvasAction> {
    interpreter.handle(&frame(time, &[]))
}

#[test]
fn transform_round_trips_points() {
    let transform = ViewTransform {
        scale: 2.5,
        translation: vec2(40.0, -12.0),
    };
    let device = pos2(180.0, 300.0);
    let image = transform.screen_to_image(device);
    let back = transform.image_to_screen(image);
    assert!((back - device).length() < 1e-3);
}

#[test]
fn scale_is_clamped_to_bounds() {
    let mut transform = ViewTransform::default();
    transform.set_scale(10.0);
    assert_eq!(transform.scale, MAX_SCALE);
    transform.set_scale(0.1);
    assert_eq!(transform.scale, MIN_SCALE);
}

#[test]
fn single_tap_paints_at_image_coordinates() {
    let mut interpreter = GestureInterpreter::new();
    let mut actions = tap(&mut interpreter, pos2(50.0, 60.0), 0.0);
    actions.extend(settle(&mut interpreter, 1.0));
    assert_eq!(actions, vec![CanvasAction::Paint(pos2(50.0, 60.0))]);
}

#[test]
fn tap_after_zoom_maps_through_the_inverse_transform() {
    let mut interpreter = GestureInterpreter::new();
    pinch_to(&mut interpreter, 2.0, 0.0);

    let mut actions = tap(&mut interpreter, pos2(100.0, 100.0), 5.0);
    actions.extend(settle(&mut interpreter, 6.0));
    assert_eq!(actions, vec![CanvasAction::Paint(pos2(50.0, 50.0))]);
}

#[test]
fn double_tap_resets_the_view() {
    let mut interpreter = GestureInterpreter::new();
    pinch_to(&mut interpreter, 2.0, 0.0);
    assert!(!interpreter.transform().is_identity());

    // The first tap is held for a possible second one.
    let first = tap(&mut interpreter, pos2(80.0, 80.0), 5.0);
    assert!(first.is_empty());
    let second = tap(&mut interpreter, pos2(82.0, 81.0), 5.15);
    assert_eq!(second, vec![CanvasAction::ViewReset]);
    assert!(interpreter.transform().is_identity());
}

#[test]
fn double_tap_never_paints_its_first_touch() {
    let mut interpreter = GestureInterpreter::new();
    let mut actions = tap(&mut interpreter, pos2(80.0, 80.0), 0.0);
    actions.extend(tap(&mut interpreter, pos2(81.0, 80.0), 0.15));
    actions.extend(settle(&mut interpreter, 2.0));
    assert_eq!(actions, vec![CanvasAction::ViewReset]);
}

#[test]
fn pinch_scales_relative_to_gesture_start() {
    let mut interpreter = GestureInterpreter::new();
    pinch_to(&mut interpreter, 2.0, 0.0);
    assert!((interpreter.transform().scale - 2.0).abs() < 1e-4);

    // A second pinch multiplies on top of the settled scale.
    pinch_to(&mut interpreter, 1.5, 10.0);
    assert!((interpreter.transform().scale - 3.0).abs() < 1e-4);
}

#[test]
fn pinch_is_clamped_at_the_bounds() {
    let mut interpreter = GestureInterpreter::new();
    pinch_to(&mut interpreter, 8.0, 0.0);
    assert_eq!(interpreter.transform().scale, MAX_SCALE);
}

#[test]
fn two_finger_pan_translates_the_view() {
    let mut interpreter = GestureInterpreter::new();
    interpreter.handle(&frame(0.0, &[(1, pos2(0.0, 0.0), TouchPhase::Started)]));
    interpreter.handle(&frame(0.01, &[(2, pos2(100.0, 0.0), TouchPhase::Started)]));
    let actions = interpreter.handle(&frame(
        0.1,
        &[
            (1, pos2(0.0, 30.0), TouchPhase::Moved),
            (2, pos2(100.0, 30.0), TouchPhase::Moved),
        ],
    ));
    assert!(actions.contains(&CanvasAction::ViewChanged));
    assert_eq!(interpreter.transform().translation, Vec2::new(0.0, 30.0));

    interpreter.handle(&frame(
        0.2,
        &[
            (1, pos2(0.0, 30.0), TouchPhase::Ended),
            (2, pos2(100.0, 30.0), TouchPhase::Ended),
        ],
    ));
    // The pan sticks after the fingers lift.
    assert_eq!(interpreter.transform().translation, Vec2::new(0.0, 30.0));
}

#[test]
fn moved_finger_loses_the_tap_race() {
    let mut interpreter = GestureInterpreter::new();
    interpreter.handle(&frame(0.0, &[(0, pos2(10.0, 10.0), TouchPhase::Started)]));
    interpreter.handle(&frame(0.05, &[(0, pos2(40.0, 10.0), TouchPhase::Moved)]));
    let actions = interpreter.handle(&frame(0.1, &[(0, pos2(40.0, 10.0), TouchPhase::Ended)]));
    assert!(actions.is_empty());
}

#[test]
fn slow_press_is_not_a_tap() {
    let mut interpreter = GestureInterpreter::new();
    interpreter.handle(&frame(0.0, &[(0, pos2(10.0, 10.0), TouchPhase::Started)]));
    let actions = interpreter.handle(&frame(1.0, &[(0, pos2(10.0, 10.0), TouchPhase::Ended)]));
    assert!(actions.is_empty());
}

#[test]
fn single_finger_drag_does_not_pan() {
    let mut interpreter = GestureInterpreter::new();
    interpreter.handle(&frame(0.0, &[(0, pos2(10.0, 10.0), TouchPhase::Started)]));
    let actions = interpreter.handle(&frame(0.1, &[(0, pos2(200.0, 10.0), TouchPhase::Moved)]));
    assert!(actions.is_empty());
    assert_eq!(interpreter.transform().translation, Vec2::ZERO);
}

/// Run a complete two-finger pinch whose span grows by `ratio`, spreading
/// symmetrically so the centroid (and thus the pan) stays fixed.
fn pinch_to(interpreter: &mut GestureInterpreter, ratio: f32, start: f64) {
    let lo = pos2(0.0, 50.0 * (1.0 - ratio));
    let hi = pos2(0.0, 50.0 * (1.0 + ratio));
    interpreter.handle(&frame(start, &[(1, pos2(0.0, 0.0), TouchPhase::Started)]));
    interpreter.handle(&frame(
        start + 0.01,
        &[(2, pos2(0.0, 100.0), TouchPhase::Started)],
    ));
    interpreter.handle(&frame(
        start + 0.1,
        &[(1, lo, TouchPhase::Moved), (2, hi, TouchPhase::Moved)],
    ));
    interpreter.handle(&frame(
        start + 0.2,
        &[(1, lo, TouchPhase::Ended), (2, hi, TouchPhase::Ended)],
    ));
}
