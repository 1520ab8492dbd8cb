//! Wheel zoom and toolbar zoom.

use crate::helpers::{EditorBuilder, move_to};
use archboard::Editor;
use archboard::geometry::{point2, size2};
use archboard::input::{Effect, WheelEvent};

fn wheel(editor: &mut Editor, x: f64, y: f64, delta_y: f64) -> Vec<Effect> {
    editor.on_wheel(&WheelEvent {
        position: point2(x, y),
        delta_y,
    })
}

#[test]
fn test_wheel_request_above_max_clamps() {
    let mut editor = Editor::default();
    // 1 * (1 - (-5000) * 0.001) = 6.0
    let effects = wheel(&mut editor, 200.0, 200.0, -5000.0);
    assert_eq!(effects, vec![Effect::PreventDefault, Effect::Render]);
    assert_eq!(editor.viewport().k(), 5.0);

    // Already at max: still suppresses the page scroll, nothing to redraw
    assert_eq!(wheel(&mut editor, 200.0, 200.0, -100.0), vec![Effect::PreventDefault]);
    assert_eq!(editor.viewport().k(), 5.0);
}

#[test]
fn test_wheel_below_min_clamps() {
    let mut editor = Editor::default();
    wheel(&mut editor, 0.0, 0.0, 5000.0);
    assert_eq!(editor.viewport().k(), 0.1);
}

#[test]
fn test_wheel_keeps_point_under_cursor() {
    let mut editor = EditorBuilder::new()
        .with_container_origin(100.0, 100.0)
        .with_viewport(30.0, -20.0, 1.5)
        .build();
    let page = point2(400.0, 300.0);
    let before = editor.screen_to_world(page);

    wheel(&mut editor, page.x, page.y, -120.0);
    assert!((editor.viewport().k() - 1.5 * 1.12).abs() < 1e-9);

    let after = editor.screen_to_world(page);
    assert!((before.x - after.x).abs() < 1e-9);
    assert!((before.y - after.y).abs() < 1e-9);
}

#[test]
fn test_toolbar_zoom_pivots_on_container_centre() {
    let mut editor = Editor::default();
    editor.set_container(point2(0.0, 0.0), Some(size2(800.0, 600.0)));
    let centre = editor.screen_to_world(point2(400.0, 300.0));

    assert_eq!(editor.zoom_in(), vec![Effect::Render]);
    assert!((editor.viewport().k() - 1.1).abs() < 1e-9);
    let after = editor.screen_to_world(point2(400.0, 300.0));
    assert!((centre.x - after.x).abs() < 1e-9 && (centre.y - after.y).abs() < 1e-9);

    editor.zoom_out();
    assert!((editor.viewport().k() - 0.99).abs() < 1e-9);
}

#[test]
fn test_toolbar_zoom_falls_back_to_cursor() {
    let mut editor = Editor::default();
    move_to(&mut editor, 200.0, 100.0);
    editor.zoom_by(2.0);
    // World (200, 100) stays under the cursor
    assert_eq!(editor.world_to_screen(point2(200.0, 100.0)), point2(200.0, 100.0));
}

#[test]
fn test_reset_view() {
    let mut editor = Editor::default();
    assert!(editor.reset_view().is_empty());
    wheel(&mut editor, 10.0, 10.0, -200.0);
    assert_eq!(editor.reset_view(), vec![Effect::Render]);
    assert_eq!(editor.viewport().k(), 1.0);
    assert_eq!((editor.viewport().x(), editor.viewport().y()), (0.0, 0.0));
}

#[test]
fn test_nan_wheel_delta_keeps_zoom() {
    let mut editor = EditorBuilder::new().with_viewport(5.0, 5.0, 3.0).build();
    assert_eq!(wheel(&mut editor, 100.0, 100.0, f64::NAN), vec![Effect::PreventDefault]);
    assert_eq!(editor.viewport().k(), 3.0);
    assert_eq!((editor.viewport().x(), editor.viewport().y()), (5.0, 5.0));
}
