use std::sync::{Arc, Mutex};

use glyph_nn::Network;

/// Everything the studio keeps between requests: the session's network
/// parameters.
///
/// The forward path only reads the network (it is immutable after
/// construction); the reshuffle handler swaps in a fresh draw. The mutex
/// makes that swap safe under the thread-per-request model.
pub struct StudioState {
    pub network: Network,
}

impl StudioState {
    pub fn new(network: Network) -> StudioState {
        StudioState { network }
    }
}

/// Shared state type: an `Arc<Mutex<StudioState>>` passed to every handler.
pub type SharedState = Arc<Mutex<StudioState>>;
