//! The editor: explicit owner of all diagram and interaction state.
//!
//! Everything the canvas needs lives on one `Editor` value, so several
//! independent canvases can coexist. Committed mutations follow the same
//! shape: snapshot, mutate, re-render, persist.

use crate::canvas::{Gesture, Mode};
use crate::connector::ConnectionBuilder;
use crate::history::History;
use crate::host::{Host, NullHost, Overlay};
use kriter_core::defaults::default_workflow;
use kriter_core::{
    AnchorSide, ConnectionId, Document, EditorConfig, ImportSummary, Node, NodeConfigRow, NodeId,
    NodeType, Point, Viewport, export_node_config, import_node_config,
};
use kriter_render::{Target, connection_at, connector_paths};

/// Screen-pixel distance within which a connector counts as hit.
pub const CONNECTION_HIT_TOLERANCE: f32 = 6.0;

/// Distance above the visible centre at which new nodes are placed,
/// whatever their type.
pub const NEW_NODE_CENTER_OFFSET: f32 = 50.0;

pub struct Editor<H: Host = NullHost> {
    pub(crate) doc: Document,
    pub(crate) history: History,
    pub(crate) viewport: Viewport,
    pub(crate) config: EditorConfig,
    pub(crate) gesture: Gesture,
    pub(crate) connector: ConnectionBuilder,
    pub(crate) host: H,
}

impl Default for Editor<NullHost> {
    fn default() -> Self {
        Self::new(NullHost, EditorConfig::default())
    }
}

impl<H: Host> Editor<H> {
    /// Create an editor, restoring the host's saved layout if it has one
    /// and falling back to the built-in workflow otherwise.
    pub fn new(mut host: H, config: EditorConfig) -> Self {
        let doc = match host.load_layout() {
            Some(layout) => {
                log::info!(
                    "restored layout: {} nodes, {} connections",
                    layout.nodes.len(),
                    layout.connections.len()
                );
                Document::from_layout(layout)
            }
            None => {
                log::debug!("no saved layout, using default workflow");
                default_workflow()
            }
        };
        Self::with_document(doc, host, config)
    }

    /// Create an editor over an explicit document. The host's saved
    /// layout is not consulted.
    pub fn with_document(doc: Document, host: H, config: EditorConfig) -> Self {
        let mut editor = Self {
            doc,
            history: History::new(config.history_depth),
            viewport: Viewport::default(),
            config,
            gesture: Gesture::default(),
            connector: ConnectionBuilder::new(),
            host,
        };
        editor.render_all();
        editor
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn mode(&self) -> Mode {
        self.gesture.mode()
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    pub fn connector(&self) -> &ConnectionBuilder {
        &self.connector
    }

    pub fn connection_mode(&self) -> bool {
        self.connector.is_active()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    pub fn overlay(&self) -> Overlay {
        Overlay {
            selection_box: self.gesture.selection_box(),
            temp_line: self.connector.temp_line(&self.doc),
        }
    }

    /// Resize the visible surface (screen pixels).
    pub fn set_viewport_size(&mut self, width: f32, height: f32) {
        self.viewport.width = width;
        self.viewport.height = height;
        self.notify_viewport();
    }

    /// Topmost target under a screen-space point.
    pub fn hit_test(&self, screen: Point) -> Target {
        kriter_render::hit_test(&self.doc, self.viewport.screen_to_chart(screen))
    }

    /// Connector under a screen-space point, for contextual delete.
    pub fn connection_at(&self, screen: Point) -> Option<ConnectionId> {
        let paths = connector_paths(&self.doc);
        let tolerance = CONNECTION_HIT_TOLERANCE / self.viewport.scale;
        connection_at(&paths, self.viewport.screen_to_chart(screen), tolerance)
    }

    // ─── History ─────────────────────────────────────────────────────────

    pub fn undo(&mut self) -> bool {
        self.end_drag();
        if self.history.undo(&mut self.doc).is_none() {
            return false;
        }
        self.render_all();
        self.persist();
        true
    }

    pub fn redo(&mut self) -> bool {
        self.end_drag();
        if self.history.redo(&mut self.doc).is_none() {
            return false;
        }
        self.render_all();
        self.persist();
        true
    }

    /// Undo and redo replace the document a drag is moving; the drag ends
    /// there and its pointers are released.
    fn end_drag(&mut self) {
        if self.gesture.mode().is_dragging() {
            log::debug!("history step during {:?}, gesture dropped", self.gesture.mode());
            self.commit_drag();
            self.gesture.reset();
        }
    }

    // ─── Selection ───────────────────────────────────────────────────────

    pub fn select_all(&mut self) {
        self.doc.select_all();
        self.notify_nodes();
    }

    pub fn clear_selection(&mut self) {
        if self.doc.selection.is_empty() {
            return;
        }
        self.doc.clear_selection();
        self.notify_nodes();
    }

    // ─── Nodes ───────────────────────────────────────────────────────────

    /// Add a node centred in the visible area.
    pub fn add_node(&mut self, kind: NodeType, name: &str) -> NodeId {
        self.history.save_state("Add node", &self.doc);

        let width = self.config.default_node_width;
        let center = self.viewport.visible_center();
        let id = NodeId::generate("node");
        let node = Node::new(
            id,
            kind,
            name,
            center.x - width / 2.0,
            center.y - NEW_NODE_CENTER_OFFSET,
            width,
        );
        self.doc.insert_node(node);
        log::info!("added {kind} node {id:?}");

        self.notify_nodes();
        self.persist();
        id
    }

    /// Ask the host for a new name, then rename.
    pub fn rename_node(&mut self, id: NodeId) -> bool {
        let Some(current) = self.doc.node(id).map(|n| n.name.clone()) else {
            log::debug!("rename: unknown node {id:?}");
            return false;
        };
        match self.host.prompt("Enter new name:", &current) {
            Some(name) => self.rename_node_to(id, &name),
            None => false,
        }
    }

    /// Rename without prompting. Blank names are rejected.
    pub fn rename_node_to(&mut self, id: NodeId, name: &str) -> bool {
        let name = name.trim();
        let Some(current) = self.doc.node(id).map(|n| n.name.as_str()) else {
            return false;
        };
        if name.is_empty() || name == current {
            return false;
        }
        self.history.save_state("Rename node", &self.doc);
        if let Some(node) = self.doc.node_mut(id) {
            node.name = name.to_string();
        }
        log::info!("renamed {id:?} to '{name}'");
        self.notify_nodes();
        self.persist();
        true
    }

    /// Delete a node and every connection touching it, after confirmation.
    pub fn delete_node(&mut self, id: NodeId) -> bool {
        if !self.doc.contains_node(id) {
            log::debug!("delete: unknown node {id:?}");
            return false;
        }
        if !self.host.confirm("Delete this node and its connections?") {
            return false;
        }
        self.history.save_state("Delete node", &self.doc);
        self.doc.remove_node_cascade(id);
        log::info!("deleted node {id:?}");
        self.render_all();
        self.persist();
        true
    }

    // ─── Connections ─────────────────────────────────────────────────────

    /// Create a connection unless it loops, duplicates an existing
    /// `(from, to)` pair, or names a missing node.
    pub fn connect(
        &mut self,
        from: NodeId,
        from_pos: AnchorSide,
        to: NodeId,
        to_pos: AnchorSide,
    ) -> Option<ConnectionId> {
        if !self.doc.contains_node(from) || !self.doc.contains_node(to) {
            log::debug!("connect: unknown endpoint {from:?} -> {to:?}");
            return None;
        }
        if from == to || self.doc.has_connection(from, to) {
            log::debug!("connect: {from:?} -> {to:?} ignored");
            return None;
        }
        self.history.save_state("Add connection", &self.doc);
        let id = self.doc.connect(from, from_pos, to, to_pos)?;
        log::info!("connected {from:?} {from_pos} -> {to:?} {to_pos}");
        self.notify_connections();
        self.persist();
        Some(id)
    }

    /// Delete one connection after confirmation.
    pub fn delete_connection(&mut self, id: ConnectionId) -> bool {
        if self.doc.connection(id).is_none() {
            log::debug!("delete: unknown connection {id:?}");
            return false;
        }
        if !self.host.confirm("Delete this connection?") {
            return false;
        }
        self.history.save_state("Delete connection", &self.doc);
        self.doc.remove_connection(id);
        log::info!("deleted connection {id:?}");
        self.notify_connections();
        self.persist();
        true
    }

    /// Connect `source` (bottom) to the top of every other node it is not
    /// already connected to. Returns how many connections were created.
    pub fn connect_all(&mut self, source: NodeId) -> usize {
        if !self.doc.contains_node(source) {
            return 0;
        }
        let before = self.doc.layout();
        let others: Vec<NodeId> = self
            .doc
            .nodes
            .keys()
            .copied()
            .filter(|&id| id != source)
            .collect();

        let created = others
            .into_iter()
            .filter(|&to| {
                self.doc
                    .connect(source, AnchorSide::Bottom, to, AnchorSide::Top)
                    .is_some()
            })
            .count();

        if created > 0 {
            self.history.push_layout("Connect all", before);
            log::info!("connected {source:?} to {created} nodes");
            self.notify_connections();
            self.persist();
        }
        created
    }

    pub fn toggle_connection_mode(&mut self) -> bool {
        let on = self.connector.toggle();
        self.notify_overlay();
        on
    }

    pub fn set_connection_mode(&mut self, on: bool) {
        self.connector.set_active(on);
        self.notify_overlay();
    }

    // ─── Import / export ─────────────────────────────────────────────────

    /// Merge configuration rows into the document as one undoable step.
    pub fn import_node_config(&mut self, rows: &[NodeConfigRow]) -> ImportSummary {
        let before = self.doc.layout();
        let summary = import_node_config(&mut self.doc, rows);
        if !summary.is_empty() {
            self.history.push_layout("Import configuration", before);
            self.render_all();
            self.persist();
        }
        summary
    }

    pub fn export_node_config(&self) -> Vec<NodeConfigRow> {
        export_node_config(&self.doc)
    }

    // ─── Host notifications ──────────────────────────────────────────────

    pub(crate) fn persist(&mut self) {
        let layout = self.doc.layout();
        self.host.save_layout(&layout);
    }

    pub(crate) fn notify_nodes(&mut self) {
        self.host.render_nodes(&self.doc);
    }

    pub(crate) fn notify_connections(&mut self) {
        let paths = connector_paths(&self.doc);
        self.host.render_connections(&paths);
    }

    pub(crate) fn notify_overlay(&mut self) {
        let overlay = self.overlay();
        self.host.render_overlay(&overlay);
    }

    pub(crate) fn notify_viewport(&mut self) {
        self.host.render_viewport(&self.viewport);
    }

    /// Redraw nodes, connectors and the viewport transform.
    pub fn render_all(&mut self) {
        self.notify_nodes();
        self.notify_connections();
        self.notify_viewport();
    }
}
