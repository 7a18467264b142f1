//! Integration tests: editor-level undo/redo across mixed operations.

mod common;

use common::*;
use kriter_core::{AnchorSide, NodeType};
use kriter_editor::Target;
use pretty_assertions::assert_eq;

#[test]
fn undo_redo_round_trips_mixed_operations() {
    let mut editor = editor();
    let original = editor.document().layout();

    let added = editor.add_node(NodeType::Method, "Lottery");
    assert!(editor.rename_node_to(id("node-1-2"), "SOCIOECONOMIC"));
    editor.connect(id("node-1-4"), AnchorSide::Right, added, AnchorSide::Left);
    click(&mut editor, Target::body(id("node-1-1")), &[(140.0, 100.0)]);
    let edited = editor.document().layout();
    assert_eq!(editor.history().undo_len(), 4);

    for _ in 0..4 {
        assert!(editor.undo());
    }
    assert_eq!(editor.document().layout(), original);
    assert!(!editor.undo());

    for _ in 0..4 {
        assert!(editor.redo());
    }
    assert_eq!(editor.document().layout(), edited);
    assert!(!editor.redo());
}

#[test]
fn undo_and_redo_persist_and_rerender() {
    let mut editor = editor();
    assert!(editor.rename_node_to(id("node-1-1"), "PRECONDITIONS"));
    let saves = editor.host().saved.len();
    let renders = editor.host().node_renders;

    assert!(editor.undo());
    assert_eq!(editor.host().saved.len(), saves + 1);
    assert_eq!(editor.host().saved.last().unwrap(), &editor.document().layout());
    assert!(editor.host().node_renders > renders);
}

#[test]
fn empty_history_is_a_silent_no_op() {
    let mut editor = editor();
    let before = editor.document().layout();

    assert!(!editor.undo());
    assert!(!editor.redo());
    assert_eq!(editor.document().layout(), before);
    assert!(editor.host().saved.is_empty());
}

#[test]
fn history_keeps_newest_fifty_entries() {
    let mut editor = editor();
    for i in 0..60 {
        assert!(editor.rename_node_to(id("node-1-1"), &format!("name {i}")));
    }
    assert_eq!(editor.history().undo_len(), 50);

    while editor.undo() {}
    assert_eq!(
        editor.document().node(id("node-1-1")).unwrap().name,
        "name 9",
        "the ten oldest snapshots were dropped"
    );
}

#[test]
fn new_action_after_undo_clears_redo() {
    let mut editor = editor();
    editor.rename_node_to(id("node-1-1"), "one");
    editor.undo();
    assert!(editor.history().can_redo());

    editor.rename_node_to(id("node-1-1"), "two");
    assert!(!editor.history().can_redo());
    assert!(!editor.redo());
}

#[test]
fn undo_restores_deleted_node_with_its_connections() {
    let mut editor = editor();
    let before = editor.document().layout();

    assert!(editor.delete_node(id("node-1-4")));
    assert!(editor.undo());

    assert_eq!(editor.document().layout(), before);
}
