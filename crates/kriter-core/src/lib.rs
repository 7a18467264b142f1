pub mod config;
pub mod defaults;
pub mod geometry;
pub mod id;
pub mod import;
pub mod layout;
pub mod model;
pub mod viewport;

pub use config::{ConfigError, EditorConfig, MAX_SCALE, MIN_SCALE};
pub use geometry::{AnchorSide, ParseKindError, Point, Rect};
pub use id::{ConnectionId, NodeId, generate_id};
pub use import::{ImportSummary, NodeConfigRow, export_node_config, import_node_config};
pub use layout::{Layout, LayoutError, LayoutFile};
pub use model::*;
pub use viewport::Viewport;
