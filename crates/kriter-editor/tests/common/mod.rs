//! Shared fixtures: a host that records every callback.
#![allow(dead_code)]

use kriter_core::defaults::default_workflow;
use kriter_core::{Document, EditorConfig, Layout, NodeId, Point, Viewport};
use kriter_editor::{Editor, Host, Overlay, PointerEvent, Target};
use kriter_render::ConnectorPath;

pub struct RecordingHost {
    /// Returned once from `load_layout`.
    pub initial: Option<Layout>,
    pub loads: usize,
    pub saved: Vec<Layout>,
    pub node_renders: usize,
    pub paths: Vec<ConnectorPath>,
    pub path_renders: usize,
    pub overlays: Vec<Overlay>,
    pub viewports: Vec<Viewport>,
    pub opened: Vec<NodeId>,
    pub filtered: Vec<NodeId>,
    pub confirm_answer: bool,
    pub prompt_answer: Option<String>,
    pub prompts: Vec<(String, String)>,
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self {
            initial: None,
            loads: 0,
            saved: Vec::new(),
            node_renders: 0,
            paths: Vec::new(),
            path_renders: 0,
            overlays: Vec::new(),
            viewports: Vec::new(),
            opened: Vec::new(),
            filtered: Vec::new(),
            confirm_answer: true,
            prompt_answer: None,
            prompts: Vec::new(),
        }
    }
}

impl RecordingHost {
    pub fn last_overlay(&self) -> Overlay {
        self.overlays.last().copied().unwrap_or_default()
    }
}

impl Host for RecordingHost {
    fn load_layout(&mut self) -> Option<Layout> {
        self.loads += 1;
        self.initial.take()
    }

    fn save_layout(&mut self, layout: &Layout) {
        self.saved.push(layout.clone());
    }

    fn render_nodes(&mut self, _doc: &Document) {
        self.node_renders += 1;
    }

    fn render_connections(&mut self, paths: &[ConnectorPath]) {
        self.paths = paths.to_vec();
        self.path_renders += 1;
    }

    fn render_overlay(&mut self, overlay: &Overlay) {
        self.overlays.push(*overlay);
    }

    fn render_viewport(&mut self, viewport: &Viewport) {
        self.viewports.push(*viewport);
    }

    fn open_detail(&mut self, id: NodeId) {
        self.opened.push(id);
    }

    fn toggle_method_filter(&mut self, id: NodeId) {
        self.filtered.push(id);
    }

    fn confirm(&mut self, _message: &str) -> bool {
        self.confirm_answer
    }

    fn prompt(&mut self, message: &str, default: &str) -> Option<String> {
        self.prompts.push((message.to_string(), default.to_string()));
        self.prompt_answer.clone()
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Editor over the default workflow at scale 1, scroll 0 (screen == chart).
pub fn editor() -> Editor<RecordingHost> {
    init_logging();
    Editor::with_document(
        default_workflow(),
        RecordingHost::default(),
        EditorConfig::default(),
    )
}

pub fn id(s: &str) -> NodeId {
    NodeId::intern(s)
}

pub fn position(editor: &Editor<RecordingHost>, node: &str) -> Point {
    editor.document().node(id(node)).unwrap().position()
}

pub fn pointer(x: f32, y: f32) -> PointerEvent {
    PointerEvent::new(1, x, y)
}

/// Press, optionally move, release: all with pointer 1 on `target`.
pub fn click(editor: &mut Editor<RecordingHost>, target: Target, moves: &[(f32, f32)]) {
    editor.pointer_down(&pointer(100.0, 100.0).on(target));
    for &(x, y) in moves {
        editor.pointer_move(&pointer(x, y).on(target));
    }
    let (x, y) = moves.last().copied().unwrap_or((100.0, 100.0));
    editor.pointer_up(&pointer(x, y).on(target));
}
