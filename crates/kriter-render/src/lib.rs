pub mod hit;
pub mod path;

pub use hit::{NodePart, Target, hit_test};
pub use path::{ConnectorPath, connection_at, connector_paths};
