//! End-to-end checks over the public API: seeded initialization, a full
//! forward pass, and the visualization projections built from it.

use rand::rngs::StdRng;
use rand::SeedableRng;

use glyph_nn::{
    filter_weak, normalize_activations, softmax, top_connections, Network, PixelGrid,
};

fn stroked_grid() -> PixelGrid {
    let mut grid = PixelGrid::blank();
    for y in 6..22 {
        grid.set(10, y, 255.0);
        grid.set(17, y, 130.0);
    }
    for x in 10..18 {
        grid.set(x, 6, 255.0);
        grid.set(x, 21, 255.0);
    }
    grid
}

#[test]
fn forward_pass_shapes_and_distribution() {
    let network = Network::init(&mut StdRng::seed_from_u64(21));
    let pass = network.forward(&stroked_grid());

    assert_eq!(pass.input.len(), 784);
    assert_eq!(pass.layer1.len(), 64);
    assert_eq!(pass.layer2.len(), 32);
    assert_eq!(pass.logits.len(), 10);
    assert_eq!(pass.probabilities.len(), 10);

    assert!(pass.input.iter().all(|&v| (0.0..=1.0).contains(&v)));
    assert!(pass.layer1.iter().all(|&a| a >= 0.0));
    assert!(pass.layer2.iter().all(|&a| a >= 0.0));

    let sum: f64 = pass.probabilities.iter().sum();
    assert!((sum - 1.0).abs() < 1e-9);
    assert!(pass.prediction < 10);

    // The probabilities are exactly the softmax of the logits.
    let expected = softmax(&pass.logits);
    for (p, e) in pass.probabilities.iter().zip(expected.iter()) {
        assert!((p - e).abs() < 1e-12);
    }
}

#[test]
fn identical_sessions_agree_exactly() {
    let grid = stroked_grid();

    let a = Network::init(&mut StdRng::seed_from_u64(33)).forward(&grid);
    let b = Network::init(&mut StdRng::seed_from_u64(33)).forward(&grid);

    assert_eq!(a, b);
}

#[test]
fn different_seeds_give_different_parameters() {
    let grid = stroked_grid();

    let a = Network::init(&mut StdRng::seed_from_u64(1)).forward(&grid);
    let b = Network::init(&mut StdRng::seed_from_u64(2)).forward(&grid);

    assert_ne!(a.logits, b.logits);
}

#[test]
fn visualization_projections_are_consistent_with_the_pass() {
    let network = Network::init(&mut StdRng::seed_from_u64(55));
    let pass = network.forward(&stroked_grid());

    // Eight edges kept per hidden-1 neuron, concatenated target-major.
    let ranked = top_connections(&network.layer1.weights, &pass.input, &pass.layer1, 8);
    assert_eq!(ranked.len(), 8 * 64);
    for conn in &ranked {
        assert!(conn.source < 784 && conn.target < 64);
        assert_eq!(conn.weight, network.layer1.weights.data[conn.target][conn.source]);
        assert_eq!(conn.source_activation, pass.input[conn.source]);
        assert_eq!(conn.target_activation, pass.layer1[conn.target]);
    }

    // Filtering never increases the count and respects the threshold.
    let filtered = filter_weak(ranked.clone(), 0.05);
    assert!(filtered.len() <= ranked.len());
    assert!(filtered.iter().all(|c| c.magnitude >= 0.05));

    // Normalized intensities stay in range for every layer.
    for values in [&pass.input, &pass.layer1, &pass.layer2, &pass.probabilities] {
        let normalized = normalize_activations(values);
        assert_eq!(normalized.len(), values.len());
        assert!(normalized.iter().all(|&v| (0.0..=1.0).contains(&v)));
    }
}

#[test]
fn blank_canvas_still_produces_a_valid_distribution() {
    let network = Network::init(&mut StdRng::seed_from_u64(77));
    let pass = network.forward(&PixelGrid::blank());

    let sum: f64 = pass.probabilities.iter().sum();
    assert!((sum - 1.0).abs() < 1e-9);

    // All-zero input: hidden activations are ReLU of the biases alone.
    assert!(pass.layer1.iter().all(|&a| a >= 0.0));
    // Constant (all-zero) input normalizes to the neutral midpoint.
    assert_eq!(normalize_activations(&pass.input), vec![0.5; 784]);
}
