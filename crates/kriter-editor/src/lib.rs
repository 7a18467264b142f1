pub mod canvas;
pub mod connector;
pub mod editor;
pub mod history;
pub mod host;
pub mod input;
pub mod shortcuts;

pub use canvas::{Gesture, Mode};
pub use connector::{ConnectRequest, ConnectionBuilder, ConnectorState};
pub use editor::{CONNECTION_HIT_TOLERANCE, Editor, NEW_NODE_CENTER_OFFSET};
pub use history::{History, Snapshot};
pub use host::{Host, NullHost, Overlay};
pub use input::{KeyEvent, Modifiers, NodePart, PointerButton, PointerEvent, Target, WheelEvent};
pub use shortcuts::{ShortcutAction, ShortcutMap};

// Re-export the model so hosts can depend on this crate alone
pub use kriter_core;
pub use kriter_render;
