//! Host collaborator: persistence, rendering, node actions and prompts.
//!
//! The editor never touches a UI toolkit or the filesystem directly. It
//! calls into a `Host` after state changes; every method has a no-op default
//! so hosts implement only what they draw or store.

use kriter_core::{Document, Layout, LayoutFile, NodeId, Point, Rect, Viewport};
use kriter_render::ConnectorPath;

/// Transient drawing above the chart: rubber band and in-flight connector.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Overlay {
    /// Live selection rectangle in chart space.
    pub selection_box: Option<Rect>,
    /// Anchor → cursor line while a connection is being drawn (chart space).
    pub temp_line: Option<(Point, Point)>,
}

impl Overlay {
    pub fn is_empty(&self) -> bool {
        self.selection_box.is_none() && self.temp_line.is_none()
    }
}

pub trait Host {
    // ── Persistence ──

    /// Previously saved layout, if any. Called once by `Editor::new`.
    fn load_layout(&mut self) -> Option<Layout> {
        None
    }

    fn save_layout(&mut self, _layout: &Layout) {}

    // ── Rendering ──

    /// Node cards changed: position, name, existence, selection or preview.
    fn render_nodes(&mut self, _doc: &Document) {}

    fn render_connections(&mut self, _paths: &[ConnectorPath]) {}

    fn render_overlay(&mut self, _overlay: &Overlay) {}

    /// Scale or scroll changed.
    fn render_viewport(&mut self, _viewport: &Viewport) {}

    // ── Node actions ──

    /// Click on a process card.
    fn open_detail(&mut self, _id: NodeId) {}

    /// Click on a method card.
    fn toggle_method_filter(&mut self, _id: NodeId) {}

    // ── Prompts ──

    /// Yes/no confirmation before a destructive action.
    fn confirm(&mut self, _message: &str) -> bool {
        true
    }

    /// Free-text input. `None` means cancelled.
    fn prompt(&mut self, _message: &str, _default: &str) -> Option<String> {
        None
    }
}

/// Host that draws nothing and stores nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHost;

impl Host for NullHost {}

/// A layout file persists by itself; rendering and prompts stay no-ops.
/// I/O failures are logged and otherwise ignored so editing never stops.
impl Host for LayoutFile {
    fn load_layout(&mut self) -> Option<Layout> {
        match self.load() {
            Ok(layout) => layout,
            Err(e) => {
                log::warn!("failed to load {}: {e}", self.path().display());
                None
            }
        }
    }

    fn save_layout(&mut self, layout: &Layout) {
        if let Err(e) = self.save(layout) {
            log::warn!("failed to save {}: {e}", self.path().display());
        }
    }
}
