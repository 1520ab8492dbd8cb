//! Delete/Backspace and Escape bindings.

use crate::helpers::{EditorBuilder, assert_no_dangling_edges, down, two_connected_nodes, up};
use archboard::input::{Effect, Key, KeyEvent, PointerId};
use archboard::types::NodeId;

#[test]
fn test_delete_selected_node_cascades() {
    let mut editor = EditorBuilder::new()
        .with_node("A", "server", (0.0, 0.0))
        .with_node("B", "database", (400.0, 0.0))
        .with_node("C", "cache", (400.0, 300.0))
        .with_edge("ab", "A", "B")
        .with_edge("ca", "C", "A")
        .with_edge("bc", "B", "C")
        .build();

    down(&mut editor, 80.0, 30.0);
    up(&mut editor, 80.0, 30.0);
    assert_eq!(editor.store().selection().nodes(), &[NodeId::from("A")]);

    let effects = editor.on_key_down(&KeyEvent::new(Key::Delete));
    assert_eq!(effects, vec![Effect::Render]);
    assert!(editor.store().node(&"A".into()).is_none());
    assert_eq!(editor.store().edges().len(), 1);
    assert_eq!(editor.store().edges()[0].id.as_str(), "bc");
    assert!(editor.store().selection().is_empty());
    assert_no_dangling_edges(&editor);
}

#[test]
fn test_backspace_deletes_selected_edge() {
    let mut editor = two_connected_nodes();
    down(&mut editor, 280.0, 35.0);
    assert!(editor.store().selection().edge().is_some());

    editor.on_key_down(&KeyEvent::new(Key::Backspace));
    assert!(editor.store().edges().is_empty());
    assert_eq!(editor.store().nodes().len(), 2);
    assert!(editor.store().selection().is_empty());
}

#[test]
fn test_keys_ignored_in_text_input() {
    let mut editor = two_connected_nodes();
    down(&mut editor, 80.0, 30.0);
    up(&mut editor, 80.0, 30.0);

    assert!(editor.on_key_down(&KeyEvent::new(Key::Delete).in_text_input()).is_empty());
    assert!(editor.on_key_down(&KeyEvent::new(Key::Escape).in_text_input()).is_empty());
    assert_eq!(editor.store().nodes().len(), 2);
    assert!(!editor.store().selection().is_empty());
}

#[test]
fn test_delete_with_empty_selection_does_nothing() {
    let mut editor = two_connected_nodes();
    let revision = editor.store().revision();
    assert!(editor.on_key_down(&KeyEvent::new(Key::Delete)).is_empty());
    assert_eq!(editor.store().revision(), revision);
}

#[test]
fn test_escape_clears_selection() {
    let mut editor = two_connected_nodes();
    down(&mut editor, 80.0, 30.0);
    up(&mut editor, 80.0, 30.0);
    assert_eq!(editor.on_key_down(&KeyEvent::new(Key::Escape)), vec![Effect::Render]);
    assert!(editor.store().selection().is_empty());
    assert!(editor.on_key_down(&KeyEvent::new(Key::Other("a".into()))).is_empty());
}

#[test]
fn test_delete_during_drag_releases_capture() {
    let mut editor = two_connected_nodes();
    down(&mut editor, 80.0, 30.0);
    assert!(editor.mode().is_dragging_node());

    let effects = editor.on_key_down(&KeyEvent::new(Key::Delete));
    assert_eq!(effects, vec![Effect::ReleasePointer(PointerId(0)), Effect::Render]);
    assert!(editor.mode().is_idle());
    assert_no_dangling_edges(&editor);
}

#[test]
fn test_clear_board() {
    let mut editor = two_connected_nodes();
    assert_eq!(editor.clear_board(), vec![Effect::Render]);
    assert!(editor.store().nodes().is_empty());
    assert!(editor.store().edges().is_empty());
}
