/// Terminal demo of one forward pass through the untrained network.
///
/// Builds a 784 → 64 → 32 → 10 network from a fixed seed, draws a crude
/// "1" onto the pixel grid, and prints the resulting probabilities and
/// the strongest output-layer connections.
///
/// Run with:
///   cargo run --example forward

use rand::rngs::StdRng;
use rand::SeedableRng;

use glyph_nn::{top_connections, Network, PixelGrid};

/// Paints a vertical bar with a soft edge, roughly a handwritten "1".
fn stroke_digit(grid: &mut PixelGrid) {
    for y in 4..24 {
        grid.set(13, y, 255.0);
        grid.set(14, y, 200.0);
        grid.set(12, y, 90.0);
    }
    // Small flag at the top.
    grid.set(12, 5, 200.0);
    grid.set(11, 6, 160.0);
}

fn main() {
    // Fixed seed so the demo output is reproducible run to run.
    let mut rng = StdRng::seed_from_u64(0xD161);
    let network = Network::init(&mut rng);

    let mut grid = PixelGrid::blank();
    stroke_digit(&mut grid);

    println!("Network architecture:");
    println!("  Input:   784 neurons (28x28 pixels, normalized)");
    println!("  Hidden1: 64 neurons  (ReLU)");
    println!("  Hidden2: 32 neurons  (ReLU)");
    println!("  Output:  10 neurons  (Softmax)");
    println!("  Weights: Xavier-uniform, untrained\n");

    let pass = network.forward(&grid);

    println!("{:>6}  {:>12}  {}", "Digit", "Probability", "");
    println!("{}", "-".repeat(60));
    for (digit, &p) in pass.probabilities.iter().enumerate() {
        let bar = "#".repeat((p * 200.0).round() as usize);
        let marker = if digit == pass.prediction { "  <- prediction" } else { "" };
        println!("{:>6}  {:>11.2}%  {}{}", digit, p * 100.0, bar, marker);
    }

    println!(
        "\nPredicted digit: {} ({:.1}% confidence; random weights, honest nonsense)",
        pass.prediction,
        pass.probabilities[pass.prediction] * 100.0
    );

    // The three strongest connections into each output neuron, the same
    // ranking the studio draws.
    let ranked = top_connections(
        &network.output.weights,
        &pass.layer2,
        &pass.probabilities,
        3,
    );
    println!("\nStrongest connections into each output neuron:");
    println!("{:>6}  {:>8}  {:>9}", "Digit", "From", "Weight");
    println!("{}", "-".repeat(27));
    for conn in &ranked {
        println!("{:>6}  {:>8}  {:>9.4}", conn.target, conn.source, conn.weight);
    }
}
