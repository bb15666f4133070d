// Host-side tests for input mapping and strategy selection.

use glam::Vec2;
use parallax_core::input::{pointer_input, rotation_input, select_strategy, SensorStatus};
use parallax_core::*;

fn frame(x: f32, y: f32, w: f32, h: f32) -> Frame {
    Frame::new(Bounds::new(x, y, w, h), Vec2::splat(0.5))
}

#[test]
fn element_relative_pointer_maps_through_center_and_radius() {
    // 100x100 element at the origin: ecx = 50, erx = 50
    let element = frame(0.0, 0.0, 100.0, 100.0);
    assert_eq!(element.center, Vec2::new(50.0, 50.0));
    assert_eq!(element.radius, Vec2::new(50.0, 50.0));
    let window = Frame::viewport(Vec2::new(1000.0, 1000.0), Vec2::splat(0.5));
    let input = pointer_input(
        Vec2::new(75.0, 50.0),
        PointerMode::Element { clip: false },
        &element,
        &window,
    );
    assert!((input.x - 0.5).abs() < 1e-6);
    assert_eq!(input.y, 0.0);
}

#[test]
fn window_pointer_uses_window_geometry() {
    let element = frame(0.0, 0.0, 100.0, 100.0);
    let window = Frame::viewport(Vec2::new(800.0, 600.0), Vec2::splat(0.5));
    let input = pointer_input(Vec2::new(800.0, 0.0), PointerMode::Window, &element, &window);
    assert_eq!(input, Vec2::new(1.0, -1.0));
}

#[test]
fn off_center_origin_uses_the_larger_radius() {
    let f = Frame::new(Bounds::new(0.0, 0.0, 100.0, 40.0), Vec2::new(0.25, 1.0));
    assert_eq!(f.center, Vec2::new(25.0, 40.0));
    assert_eq!(f.radius, Vec2::new(75.0, 40.0));
}

#[test]
fn clipping_keeps_input_inside_the_element() {
    let element = frame(10.0, 10.0, 100.0, 100.0);
    let window = Frame::viewport(Vec2::new(1000.0, 1000.0), Vec2::splat(0.5));
    let far = Vec2::new(900.0, -300.0);
    let clipped = pointer_input(far, PointerMode::Element { clip: true }, &element, &window);
    assert_eq!(clipped, Vec2::new(1.0, -1.0));
    let free = pointer_input(far, PointerMode::Element { clip: false }, &element, &window);
    assert!(free.x > 1.0 && free.y < -1.0);
}

#[test]
fn zero_sized_element_yields_zero_input_not_nan() {
    let element = frame(20.0, 20.0, 0.0, 0.0);
    let window = Frame::viewport(Vec2::new(800.0, 600.0), Vec2::splat(0.5));
    for clip in [false, true] {
        let input = pointer_input(
            Vec2::new(300.0, 5.0),
            PointerMode::Element { clip },
            &element,
            &window,
        );
        assert_eq!(input, Vec2::ZERO);
    }
}

#[test]
fn pointer_mode_follows_relative_flag() {
    assert_eq!(PointerMode::new(false, true), PointerMode::Window);
    assert_eq!(
        PointerMode::new(true, true),
        PointerMode::Element { clip: true }
    );
}

#[test]
fn rotation_divides_angles_by_thirty() {
    let v = rotation_input(Some(15.0), Some(-60.0)).unwrap();
    assert!((v.x - 0.5).abs() < 1e-6);
    assert!((v.y + 2.0).abs() < 1e-6);
}

#[test]
fn rotation_requires_both_angles() {
    assert_eq!(rotation_input(None, Some(1.0)), None);
    assert_eq!(rotation_input(Some(1.0), None), None);
    assert_eq!(rotation_input(Some(f64::NAN), Some(1.0)), None);
}

#[test]
fn desktop_detection_matches_handheld_agents() {
    assert!(!is_desktop_agent(
        "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15"
    ));
    assert!(!is_desktop_agent(
        "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 Mobile Safari/537.36"
    ));
    assert!(!is_desktop_agent("Opera/9.80 (J2ME/MIDP; Opera Mini/9.80)"));
    assert!(is_desktop_agent(
        "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 Chrome/120.0 Safari/537.36"
    ));
    assert!(is_desktop_agent(
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_0) AppleWebKit/605.1.15 Safari/605.1.15"
    ));
}

#[test]
fn strategy_priority_is_orientation_motion_pointer() {
    let on = SensorStatus::new(true);
    let off = SensorStatus::new(false);
    assert_eq!(select_strategy(false, on, on), InputStrategy::Orientation);
    assert_eq!(select_strategy(false, off, on), InputStrategy::Motion);
    assert_eq!(select_strategy(false, off, off), InputStrategy::Pointer);
    // Desktop never uses sensors
    assert_eq!(select_strategy(true, on, on), InputStrategy::Pointer);
}
