// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn buttons_map_to_drag_modes() {
    assert_eq!(drag_mode_for(0, false), DragMode::Orbit);
    assert_eq!(drag_mode_for(0, true), DragMode::Pan);
    assert_eq!(drag_mode_for(1, false), DragMode::Pan);
    assert_eq!(drag_mode_for(2, false), DragMode::Pan);
    assert_eq!(drag_mode_for(3, false), DragMode::None);
}

#[test]
fn drag_reports_deltas_between_moves() {
    let mut drag = DragState::default();
    drag.begin(DragMode::Orbit, Vec2::new(10.0, 10.0));
    assert_eq!(drag.advance(Vec2::new(13.0, 14.0)), Vec2::new(3.0, 4.0));
    assert_eq!(drag.advance(Vec2::new(13.0, 10.0)), Vec2::new(0.0, -4.0));
    assert!((drag.travel - 9.0).abs() < 1e-6);
    assert_eq!(drag.origin, Vec2::new(10.0, 10.0));
}

#[test]
fn short_drags_count_as_clicks() {
    let mut drag = DragState::default();
    drag.begin(DragMode::Orbit, Vec2::ZERO);
    drag.advance(Vec2::new(2.0, 0.0));
    assert!(drag.end(5.0));
    assert_eq!(drag.mode, DragMode::None);

    drag.begin(DragMode::Orbit, Vec2::ZERO);
    drag.advance(Vec2::new(20.0, 0.0));
    assert!(!drag.end(5.0));
}

#[test]
fn pan_press_without_movement_is_not_a_click() {
    let mut drag = DragState::default();
    drag.begin(drag_mode_for(2, false), Vec2::ZERO);
    assert!(!drag.end(5.0));

    drag.begin(drag_mode_for(0, true), Vec2::ZERO);
    drag.advance(Vec2::new(1.0, 0.0));
    assert!(!drag.end(5.0));
    assert_eq!(drag.mode, DragMode::None);
}

#[test]
fn jittery_drag_accumulates_travel() {
    let mut drag = DragState::default();
    drag.begin(DragMode::Pan, Vec2::ZERO);
    for _ in 0..5 {
        drag.advance(Vec2::new(2.0, 0.0));
        drag.advance(Vec2::ZERO);
    }
    // Ends where it started but moved 20px in total.
    assert!(!drag.end(5.0));
}

#[test]
fn ending_without_a_drag_is_not_a_click() {
    let mut drag = DragState::default();
    assert!(!drag.end(5.0));
}

#[test]
fn wheel_deltas_normalize_to_pixels() {
    assert_eq!(wheel_delta_px(-120.0, 0, 16.0, 800.0), -120.0);
    assert_eq!(wheel_delta_px(3.0, 1, 16.0, 800.0), 48.0);
    assert_eq!(wheel_delta_px(-1.0, 2, 16.0, 800.0), -800.0);
}

#[test]
fn css_offsets_scale_to_backing_pixels() {
    let p = css_to_backing_px(
        Vec2::new(100.0, 50.0),
        Vec2::new(400.0, 200.0),
        Vec2::new(800.0, 400.0),
    );
    assert_eq!(p, Vec2::new(200.0, 100.0));
    // Zero-sized elements pass through unchanged.
    let q = css_to_backing_px(Vec2::new(3.0, 4.0), Vec2::ZERO, Vec2::new(800.0, 400.0));
    assert_eq!(q, Vec2::new(3.0, 4.0));
}
