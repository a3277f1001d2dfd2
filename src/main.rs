// This binary crate is intentionally minimal.
// All forward-pass logic lives in the library (src/lib.rs and its modules).
// The interactive demo is the `studio` binary:
//   cargo run --bin studio
fn main() {
    println!("glyph-nn: draw a digit, watch an untrained network light up.");
    println!("Run `cargo run --bin studio` and open http://127.0.0.1:7878");
    println!("or `cargo run --example forward` for a terminal demo.");
}
