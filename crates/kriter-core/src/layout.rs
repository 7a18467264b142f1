//! Layout snapshot: the persisted `{ nodes, connections }` pair.
//!
//! The same shape doubles as the undo/redo snapshot payload. The JSON form
//! keys nodes by ID, matching what earlier versions wrote to storage.

use crate::id::NodeId;
use crate::model::{Connection, Node};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Nodes and connections, deep-copied out of a [`Document`](crate::Document).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Layout {
    #[serde(default)]
    pub nodes: IndexMap<NodeId, Node>,
    #[serde(default)]
    pub connections: Vec<Connection>,
}

/// Errors from reading or writing a layout file.
#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("layout file I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("layout JSON is malformed: {0}")]
    Json(#[from] serde_json::Error),
}

impl Layout {
    pub fn from_json(text: &str) -> Result<Self, LayoutError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> Result<String, LayoutError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.connections.is_empty()
    }
}

/// A layout persisted as a JSON file on disk.
#[derive(Debug, Clone)]
pub struct LayoutFile {
    path: PathBuf,
}

impl LayoutFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the layout. A missing file is not an error: it yields `Ok(None)`.
    pub fn load(&self) -> Result<Option<Layout>, LayoutError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let layout = Layout::from_json(&text)?;
        log::debug!(
            "loaded layout from {}: {} nodes, {} connections",
            self.path.display(),
            layout.nodes.len(),
            layout.connections.len()
        );
        Ok(Some(layout))
    }

    pub fn save(&self, layout: &Layout) -> Result<(), LayoutError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, layout.to_json()?)?;
        Ok(())
    }
}
