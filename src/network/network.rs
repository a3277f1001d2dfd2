use rand::Rng;

use crate::activation::{softmax, Activation};
use crate::layers::dense::DenseLayer;
use crate::network::forward::{argmax, ForwardPass};
use crate::network::grid::{PixelGrid, GRID_SIZE};

pub const INPUT_SIZE: usize = GRID_SIZE * GRID_SIZE;
pub const HIDDEN_1: usize = 64;
pub const HIDDEN_2: usize = 32;
pub const OUTPUT_SIZE: usize = 10;

/// The demo's fixed three-layer perceptron: 784 → 64 → 32 → 10.
///
/// Parameters are drawn once per session and never mutated afterwards,
/// so a `Network` can be shared read-only across any number of forward
/// passes. There is no training; the weights stay random.
#[derive(Debug, Clone)]
pub struct Network {
    pub layer1: DenseLayer,
    pub layer2: DenseLayer,
    pub output: DenseLayer,
}

impl Network {
    /// Draws a fresh set of random parameters: Xavier-uniform weights,
    /// small uniform biases.
    pub fn init<R: Rng>(rng: &mut R) -> Network {
        Network {
            layer1: DenseLayer::init(INPUT_SIZE, HIDDEN_1, Activation::ReLU, rng),
            layer2: DenseLayer::init(HIDDEN_1, HIDDEN_2, Activation::ReLU, rng),
            output: DenseLayer::init(HIDDEN_2, OUTPUT_SIZE, Activation::Identity, rng),
        }
    }

    /// Runs one full forward pass over a drawing snapshot.
    ///
    /// Flattens the grid row-major, scales into `[0, 1]`, applies the
    /// three dense layers, then softmax over the logits. Pure: identical
    /// inputs and parameters give identical results.
    pub fn forward(&self, grid: &PixelGrid) -> ForwardPass {
        let input = grid.flatten_normalized();

        let l1 = self.layer1.forward(&input);
        let l2 = self.layer2.forward(&l1.activation);
        let out = self.output.forward(&l2.activation);

        let probabilities = softmax(&out.activation);
        let prediction = argmax(&probabilities);

        ForwardPass {
            input,
            layer1: l1.activation,
            layer2: l2.activation,
            logits: out.activation,
            probabilities,
            prediction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn stroked_grid() -> PixelGrid {
        // A crude vertical bar, roughly a "1".
        let mut grid = PixelGrid::blank();
        for y in 4..24 {
            grid.set(13, y, 255.0);
            grid.set(14, y, 180.0);
        }
        grid
    }

    #[test]
    fn init_builds_the_fixed_architecture() {
        let net = Network::init(&mut StdRng::seed_from_u64(1));
        assert_eq!(net.layer1.input_size(), INPUT_SIZE);
        assert_eq!(net.layer1.output_size(), HIDDEN_1);
        assert_eq!(net.layer2.input_size(), HIDDEN_1);
        assert_eq!(net.layer2.output_size(), HIDDEN_2);
        assert_eq!(net.output.input_size(), HIDDEN_2);
        assert_eq!(net.output.output_size(), OUTPUT_SIZE);
    }

    #[test]
    fn forward_on_a_blank_grid_is_well_formed() {
        let net = Network::init(&mut StdRng::seed_from_u64(2));
        let pass = net.forward(&PixelGrid::blank());

        assert_eq!(pass.input.len(), INPUT_SIZE);
        assert!(pass.input.iter().all(|&v| v == 0.0));

        // ReLU of bias-only sums is still non-negative.
        assert_eq!(pass.layer1.len(), HIDDEN_1);
        assert_eq!(pass.layer2.len(), HIDDEN_2);
        assert!(pass.layer1.iter().all(|&a| a >= 0.0));
        assert!(pass.layer2.iter().all(|&a| a >= 0.0));

        assert_eq!(pass.logits.len(), OUTPUT_SIZE);
        assert_eq!(pass.probabilities.len(), OUTPUT_SIZE);
        let sum: f64 = pass.probabilities.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!(pass.probabilities.iter().all(|&p| (0.0..=1.0).contains(&p)));
        assert!(pass.prediction < OUTPUT_SIZE);
    }

    #[test]
    fn forward_normalizes_input_into_unit_range() {
        let net = Network::init(&mut StdRng::seed_from_u64(3));
        let pass = net.forward(&stroked_grid());

        assert!(pass.input.iter().all(|&v| (0.0..=1.0).contains(&v)));
        assert!(pass.input.iter().any(|&v| v > 0.0));
        // Row-major: (x=13, y=4) lands at 4*28 + 13.
        assert_eq!(pass.input[4 * GRID_SIZE + 13], 1.0);
    }

    #[test]
    fn forward_is_deterministic_for_fixed_parameters() {
        let net = Network::init(&mut StdRng::seed_from_u64(4));
        let grid = stroked_grid();

        let a = net.forward(&grid);
        let b = net.forward(&grid);
        assert_eq!(a, b);
    }

    #[test]
    fn prediction_is_the_argmax_of_the_probabilities() {
        let net = Network::init(&mut StdRng::seed_from_u64(5));
        let pass = net.forward(&stroked_grid());

        let max = pass
            .probabilities
            .iter()
            .cloned()
            .fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(pass.probabilities[pass.prediction], max);
    }
}
