pub mod color;
pub mod connections;
pub mod normalize;
pub mod options;

pub use connections::{filter_weak, top_connections, Connection};
pub use normalize::normalize_activations;
pub use options::VizOptions;
