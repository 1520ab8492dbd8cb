//! Panning, node dragging and click selection.

use crate::helpers::{EditorBuilder, at, down, move_to, node_position, two_connected_nodes, up};
use archboard::geometry::point2;
use archboard::input::{Effect, PointerButton, PointerId};
use archboard::settings::EditorSettings;
use archboard::types::{EdgeId, NodeId};

#[test]
fn test_background_press_pans_incrementally() {
    let mut editor = two_connected_nodes();
    editor.on_pointer_down(&at(80.0, 30.0));
    assert!(!editor.store().selection().is_empty());
    up(&mut editor, 80.0, 30.0);

    let effects = down(&mut editor, 300.0, 300.0);
    assert_eq!(effects, vec![Effect::CapturePointer(PointerId(0)), Effect::Render]);
    assert!(editor.mode().is_panning());
    // Pan-to-deselect
    assert!(editor.store().selection().is_empty());

    move_to(&mut editor, 310.0, 305.0);
    assert_eq!((editor.viewport().x(), editor.viewport().y()), (10.0, 5.0));
    move_to(&mut editor, 320.0, 305.0);
    assert_eq!((editor.viewport().x(), editor.viewport().y()), (20.0, 5.0));
    assert_eq!(editor.viewport().k(), 1.0);

    let effects = up(&mut editor, 320.0, 305.0);
    assert_eq!(effects, vec![Effect::ReleasePointer(PointerId(0)), Effect::Render]);
    assert!(editor.mode().is_idle());

    // Idle moves do nothing
    assert!(move_to(&mut editor, 500.0, 500.0).is_empty());
    assert_eq!(editor.viewport().x(), 20.0);
}

#[test]
fn test_pointer_leave_ends_pan() {
    let mut editor = two_connected_nodes();
    down(&mut editor, 300.0, 300.0);
    let effects = editor.on_pointer_leave(&at(-5.0, 300.0));
    assert_eq!(effects, vec![Effect::ReleasePointer(PointerId(0)), Effect::Render]);
    assert!(editor.mode().is_idle());
}

#[test]
fn test_other_pointers_are_ignored_during_capture() {
    let mut editor = two_connected_nodes();
    down(&mut editor, 300.0, 300.0);

    let other = at(900.0, 900.0).with_pointer(PointerId(7));
    assert!(editor.on_pointer_down(&other).is_empty());
    assert!(editor.on_pointer_move(&other).is_empty());
    assert!(editor.on_pointer_up(&other).is_empty());
    assert!(editor.mode().is_panning());
    assert_eq!(editor.viewport().x(), 0.0);
}

#[test]
fn test_drag_moves_node_with_snapping() {
    let mut editor = two_connected_nodes();

    let effects = down(&mut editor, 80.0, 30.0);
    assert_eq!(effects, vec![Effect::CapturePointer(PointerId(0)), Effect::Render]);
    assert!(editor.mode().is_dragging_node());
    assert_eq!(editor.store().selection().nodes(), &[NodeId::from("a")]);

    // Delta (43, 11) snaps to the 20-unit grid
    move_to(&mut editor, 123.0, 41.0);
    assert_eq!(node_position(&editor, "a"), point2(40.0, 20.0));

    up(&mut editor, 123.0, 41.0);
    assert!(editor.mode().is_idle());
    assert_eq!(node_position(&editor, "a"), point2(40.0, 20.0));
    assert_eq!(editor.viewport().x(), 0.0);
}

#[test]
fn test_drag_delta_uses_current_scale() {
    let mut editor = EditorBuilder::new()
        .with_node("a", "server", (0.0, 0.0))
        .with_viewport(0.0, 0.0, 2.0)
        .build();

    // World (80, 30) is at screen (160, 60)
    down(&mut editor, 160.0, 60.0);
    move_to(&mut editor, 240.0, 100.0);
    assert_eq!(node_position(&editor, "a"), point2(40.0, 20.0));
}

#[test]
fn test_drag_without_snapping() {
    let mut editor = two_connected_nodes();
    editor.set_settings(EditorSettings {
        snap_grid: 0.0,
        ..Default::default()
    });
    down(&mut editor, 80.0, 30.0);
    move_to(&mut editor, 93.5, 37.25);
    assert_eq!(node_position(&editor, "a"), point2(13.5, 7.25));
}

#[test]
fn test_only_grabbed_node_moves_under_multi_selection() {
    let mut editor = two_connected_nodes();
    down(&mut editor, 80.0, 30.0);
    up(&mut editor, 80.0, 30.0);
    editor.on_pointer_down(&at(480.0, 30.0).with_shift());
    assert_eq!(editor.store().selection().nodes().len(), 2);

    move_to(&mut editor, 520.0, 30.0);
    assert_eq!(node_position(&editor, "b"), point2(440.0, 0.0));
    assert_eq!(node_position(&editor, "a"), point2(0.0, 0.0));
}

#[test]
fn test_click_near_edge_selects_it_without_panning() {
    let mut editor = two_connected_nodes();
    down(&mut editor, 80.0, 30.0);
    up(&mut editor, 80.0, 30.0);

    // Edge "ab" runs along y = 30 between x = 160 and x = 400
    let effects = down(&mut editor, 280.0, 35.0);
    assert_eq!(effects, vec![Effect::Render]);
    assert_eq!(editor.store().selection().edge(), Some(&EdgeId::from("ab")));
    assert!(editor.store().selection().nodes().is_empty());
    assert!(editor.mode().is_idle());

    move_to(&mut editor, 380.0, 135.0);
    assert_eq!(editor.viewport().x(), 0.0);
    assert!(editor.routed_edges()[0].selected);
}

#[test]
fn test_secondary_button_is_ignored() {
    let mut editor = two_connected_nodes();
    let event = at(300.0, 300.0).with_button(PointerButton::Secondary);
    assert!(editor.on_pointer_down(&event).is_empty());
    assert!(editor.mode().is_idle());
}

#[test]
fn test_middle_button_pans_over_nodes() {
    let mut editor = two_connected_nodes();
    let event = at(80.0, 30.0).with_button(PointerButton::Middle);
    editor.on_pointer_down(&event);
    assert!(editor.mode().is_panning());
    move_to(&mut editor, 100.0, 30.0);
    assert_eq!(editor.viewport().x(), 20.0);
    assert_eq!(node_position(&editor, "a"), point2(0.0, 0.0));
}

#[test]
fn test_press_from_captured_pointer_ends_stale_pan() {
    let mut editor = two_connected_nodes();
    down(&mut editor, 300.0, 300.0);

    // The release for the first press never arrived
    let effects = down(&mut editor, 600.0, 500.0);
    assert_eq!(
        effects,
        vec![
            Effect::ReleasePointer(PointerId(0)),
            Effect::CapturePointer(PointerId(0)),
            Effect::Render,
        ]
    );
    assert!(editor.mode().is_panning());

    // The new pan starts from the new press
    move_to(&mut editor, 610.0, 500.0);
    assert_eq!((editor.viewport().x(), editor.viewport().y()), (10.0, 0.0));
}

#[test]
fn test_press_from_captured_pointer_ends_stale_drag() {
    let mut editor = two_connected_nodes();
    down(&mut editor, 80.0, 30.0);
    assert!(editor.mode().is_dragging_node());

    let effects = down(&mut editor, 480.0, 30.0);
    assert_eq!(effects[0], Effect::ReleasePointer(PointerId(0)));
    assert_eq!(editor.mode().dragged_node_id(), Some(&NodeId::from("b")));
    assert_eq!(node_position(&editor, "a"), point2(0.0, 0.0));
}

#[test]
fn test_import_removing_dragged_node_releases_pointer() {
    let mut editor = two_connected_nodes();
    down(&mut editor, 80.0, 30.0);

    let report = editor
        .import_document(r#"{"nodes": [{"id": "b", "type": "database", "x": 400, "y": 0, "data": {"label": "B"}}]}"#)
        .unwrap();
    assert_eq!(report.effects, vec![Effect::ReleasePointer(PointerId(0)), Effect::Render]);
    assert!(editor.mode().is_idle());
    assert!(editor.store().node(&"a".into()).is_none());
}
