pub mod arch;
pub mod forward;
pub mod grid;
pub mod network;

pub use forward::ForwardPass;
pub use grid::{PixelGrid, GRID_SIZE};
pub use network::{Network, HIDDEN_1, HIDDEN_2, INPUT_SIZE, OUTPUT_SIZE};
