use std::io::Cursor;

use tiny_http::Response;

use glyph_nn::Network;

use crate::state::SharedState;

// ---------------------------------------------------------------------------
// POST /api/network/reinit
// ---------------------------------------------------------------------------

/// Swaps the session's parameters for a fresh random draw. The next
/// forward pass sees the new network; nothing is persisted.
pub fn handle(state: &SharedState) -> Response<Cursor<Vec<u8>>> {
    let network = Network::init(&mut rand::thread_rng());

    let mut st = state.lock().unwrap();
    st.network = network;
    drop(st);

    crate::routes::json_response(200, serde_json::json!({ "ok": true }).to_string())
}
