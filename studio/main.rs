/// glyph-nn studio
///
/// The interactive demo: draw a digit on a 28×28 canvas and watch an
/// untrained multi-layer perceptron (784 → 64 → 32 → 10, random weights)
/// produce activations, a probability bar chart, and a live diagram of
/// the strongest connections.
///
/// Served by a synchronous tiny_http server; no JavaScript frameworks
/// required. Run with:
///   cargo run --bin studio --release
/// Then open http://127.0.0.1:7878
///
/// Weights are drawn fresh at startup (and on demand via the reshuffle
/// button) and are never trained or persisted; the point is watching
/// the forward pass, not the accuracy.

mod handlers;
mod render;
mod routes;
mod state;

use std::sync::{Arc, Mutex};

use tiny_http::Server;

use glyph_nn::Network;
use state::StudioState;

fn main() {
    let addr = "127.0.0.1:7878";
    let server = Server::http(addr).expect("Failed to bind HTTP server");

    // Session parameters: one random draw, shared read-only by every
    // forward pass until the user reshuffles.
    let network = Network::init(&mut rand::thread_rng());
    let shared_state = Arc::new(Mutex::new(StudioState::new(network)));

    println!("╔══════════════════════════════════════════════╗");
    println!("║          glyph-nn studio                     ║");
    println!("╠══════════════════════════════════════════════╣");
    println!("║  Open in your browser:                       ║");
    println!("║  http://{}                 ║", addr);
    println!("╠══════════════════════════════════════════════╣");
    println!("║  Draw a digit (0-9) and watch the network    ║");
    println!("║  light up. Weights are random each session.  ║");
    println!("╚══════════════════════════════════════════════╝");

    // One thread per request keeps a slow client from stalling the rest;
    // the forward pass itself is microseconds of pure computation.
    for request in server.incoming_requests() {
        let state_clone = shared_state.clone();
        std::thread::spawn(move || {
            routes::dispatch(request, state_clone);
        });
    }
}
