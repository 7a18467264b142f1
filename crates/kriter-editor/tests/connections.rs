//! Integration tests: connection mode, connect-all and connector deletion.

mod common;

use common::*;
use kriter_core::{AnchorSide, ConnectionId, Point};
use kriter_editor::{ConnectorState, Editor, Mode, Target};
use pretty_assertions::assert_eq;

fn draw(editor: &mut Editor<RecordingHost>, from: Target, release: Target) -> bool {
    editor.set_connection_mode(true);
    let captured = editor.pointer_down(&pointer(10.0, 10.0).on(from));
    editor.pointer_move(&pointer(30.0, 40.0));
    editor.pointer_up(&pointer(30.0, 40.0).on(release));
    captured
}

fn count(editor: &Editor<RecordingHost>, from: &str, to: &str) -> usize {
    editor
        .document()
        .connections
        .iter()
        .filter(|c| c.from == id(from) && c.to == id(to))
        .count()
}

#[test]
fn drawing_between_anchors_creates_one_connection() {
    let mut editor = editor();
    let before = editor.document().connections.len();

    let captured = draw(
        &mut editor,
        Target::anchor(id("node-2-1a"), AnchorSide::Right),
        Target::anchor(id("node-2-4"), AnchorSide::Left),
    );

    assert!(captured);
    assert_eq!(editor.document().connections.len(), before + 1);
    let conn = editor.document().connections.last().unwrap();
    assert_eq!(conn.from_pos, AnchorSide::Right);
    assert_eq!(conn.to_pos, AnchorSide::Left);
    assert_eq!(editor.history().peek_undo(), Some("Add connection"));
    assert_eq!(editor.host().saved.len(), 1);
    assert_eq!(editor.host().paths.len(), before + 1);
}

#[test]
fn duplicate_pair_is_ignored_but_reverse_is_allowed() {
    let mut editor = editor();
    let a = |side| Target::anchor(id("node-2-1a"), side);
    let b = |side| Target::anchor(id("node-2-4"), side);

    draw(&mut editor, a(AnchorSide::Right), b(AnchorSide::Left));
    draw(&mut editor, a(AnchorSide::Bottom), b(AnchorSide::Top));
    assert_eq!(count(&editor, "node-2-1a", "node-2-4"), 1);
    assert_eq!(editor.history().undo_len(), 1, "duplicate takes no snapshot");

    draw(&mut editor, b(AnchorSide::Right), a(AnchorSide::Left));
    assert_eq!(count(&editor, "node-2-4", "node-2-1a"), 1);
}

#[test]
fn connection_mode_is_one_shot() {
    let mut editor = editor();
    let from = Target::anchor(id("node-1-1"), AnchorSide::Bottom);

    draw(&mut editor, from, Target::anchor(id("node-2-3"), AnchorSide::Top));
    assert!(!editor.connection_mode());

    let before = editor.document().connections.len();
    draw(&mut editor, from, Target::Canvas);
    assert!(!editor.connection_mode());
    assert_eq!(editor.document().connections.len(), before);
    assert_eq!(editor.connector().state(), ConnectorState::Idle);
    assert_eq!(editor.host().last_overlay().temp_line, None);
}

#[test]
fn release_on_source_node_aborts() {
    let mut editor = editor();
    let before = editor.document().connections.len();

    draw(
        &mut editor,
        Target::anchor(id("node-1-1"), AnchorSide::Right),
        Target::anchor(id("node-1-1"), AnchorSide::Left),
    );

    assert_eq!(editor.document().connections.len(), before);
    assert!(!editor.connection_mode());
}

#[test]
fn transient_line_follows_cursor_in_chart_space() {
    let mut editor = editor();
    editor.scroll_by(100.0, 0.0);
    editor.set_connection_mode(true);
    let from = Target::anchor(id("node-1-1"), AnchorSide::Right);

    editor.pointer_down(&pointer(210.0, 410.0).on(from));
    editor.pointer_move(&pointer(300.0, 500.0));

    assert_eq!(
        editor.host().last_overlay().temp_line,
        Some((Point::new(310.0, 410.0), Point::new(400.0, 500.0)))
    );
}

#[test]
fn canvas_and_card_presses_are_ignored_in_connection_mode() {
    let mut editor = editor();
    editor.set_connection_mode(true);

    assert!(!editor.pointer_down(&pointer(10.0, 10.0)));
    assert!(!editor.pointer_down(&pointer(10.0, 10.0).on(Target::body(id("node-1-1")))));
    assert_eq!(editor.mode(), Mode::Idle);
    assert!(editor.connection_mode());
}

#[test]
fn toggling_off_mid_gesture_discards_it() {
    let mut editor = editor();
    editor.set_connection_mode(true);
    editor.pointer_down(&pointer(0.0, 0.0).on(Target::anchor(id("node-1-1"), AnchorSide::Top)));

    assert!(!editor.toggle_connection_mode());
    editor.pointer_up(&pointer(0.0, 0.0).on(Target::anchor(id("node-2-2"), AnchorSide::Top)));

    assert_eq!(count(&editor, "node-1-1", "node-2-2"), 0);
    assert_eq!(editor.host().last_overlay().temp_line, None);
}

#[test]
fn cancel_aborts_connection_gesture() {
    let mut editor = editor();
    editor.set_connection_mode(true);
    let to = Target::anchor(id("node-2-2"), AnchorSide::Top);
    editor.pointer_down(&pointer(0.0, 0.0).on(Target::anchor(id("node-1-1"), AnchorSide::Top)));

    editor.pointer_cancel(&pointer(0.0, 0.0).on(to));

    assert_eq!(count(&editor, "node-1-1", "node-2-2"), 0);
    assert!(!editor.connection_mode());
}

#[test]
fn connect_all_links_source_to_every_other_node_once() {
    let mut editor = editor();
    let source = id("node-1-1");
    let before = editor.document().layout();

    // node-1-1 -> node-1-2 already exists.
    assert_eq!(editor.connect_all(source), 8);
    let added: Vec<_> = editor.document().connections[10..].to_vec();
    assert!(
        added
            .iter()
            .all(|c| c.from == source && c.from_pos == AnchorSide::Bottom && c.to_pos == AnchorSide::Top)
    );
    assert_eq!(editor.history().undo_len(), 1);

    assert_eq!(editor.connect_all(source), 0);
    assert_eq!(editor.history().undo_len(), 1);

    assert!(editor.undo());
    assert_eq!(editor.document().layout(), before);
}

#[test]
fn delete_connection_respects_confirmation() {
    let mut editor = editor();
    let c1 = ConnectionId::intern("c1");

    editor.host_mut().confirm_answer = false;
    assert!(!editor.delete_connection(c1));
    assert!(editor.document().connection(c1).is_some());
    assert_eq!(editor.history().undo_len(), 0);

    editor.host_mut().confirm_answer = true;
    assert!(editor.delete_connection(c1));
    assert!(editor.document().connection(c1).is_none());
    assert_eq!(editor.history().peek_undo(), Some("Delete connection"));
    assert!(!editor.delete_connection(c1), "already gone");
}

#[test]
fn connection_at_resolves_screen_points() {
    let mut editor = editor();
    editor.scroll_by(30.0, 10.0);

    // c1 runs along y = 410 between x = 310 and x = 350 in chart space.
    assert_eq!(
        editor.connection_at(Point::new(300.0, 402.0)),
        Some(ConnectionId::intern("c1"))
    );
    assert_eq!(editor.connection_at(Point::new(-400.0, -400.0)), None);
}
