pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod viz;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::{softmax, Activation};
pub use layers::dense::{DenseLayer, LayerOutput};
pub use network::forward::ForwardPass;
pub use network::grid::{PixelGrid, GRID_SIZE};
pub use network::Network;
pub use viz::connections::{filter_weak, top_connections, Connection};
pub use viz::normalize::normalize_activations;
pub use viz::options::VizOptions;
