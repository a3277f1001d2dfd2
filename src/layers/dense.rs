use rand::Rng;

use crate::activation::Activation;
use crate::math::matrix::Matrix;

/// Biases are drawn uniformly from ±BIAS_LIMIT at initialization.
const BIAS_LIMIT: f64 = 0.05;

/// One fully-connected layer: a weight matrix (one row per output
/// neuron), a bias per output neuron, and the activation applied after
/// the affine transform.
///
/// Invariant: `weights.rows == biases.len()`; every weight row has
/// `weights.cols` entries (the layer's input size).
#[derive(Debug, Clone)]
pub struct DenseLayer {
    pub weights: Matrix,
    pub biases: Vec<f64>,
    pub activator: Activation,
}

/// Result of one layer application: the raw affine output and the same
/// vector after the activation function.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerOutput {
    pub pre_activation: Vec<f64>,
    pub activation: Vec<f64>,
}

impl DenseLayer {
    /// Builds a layer from existing parameters, checking the shape
    /// invariant.
    pub fn new(weights: Matrix, biases: Vec<f64>, activator: Activation) -> DenseLayer {
        assert_eq!(
            weights.rows,
            biases.len(),
            "Layer needs one bias per output neuron"
        );
        DenseLayer { weights, biases, activator }
    }

    /// Builds a layer with Xavier-uniform weights and small uniform
    /// biases in `[-0.05, 0.05]`.
    pub fn init<R: Rng>(
        input_size: usize,
        output_size: usize,
        activator: Activation,
        rng: &mut R,
    ) -> DenseLayer {
        let weights = Matrix::xavier_uniform(output_size, input_size, rng);
        let biases = (0..output_size)
            .map(|_| (rng.gen::<f64>() - 0.5) * (2.0 * BIAS_LIMIT))
            .collect();
        DenseLayer { weights, biases, activator }
    }

    pub fn input_size(&self) -> usize {
        self.weights.cols
    }

    pub fn output_size(&self) -> usize {
        self.weights.rows
    }

    /// Applies the layer: `pre[i] = biases[i] + Σ_j weights[i][j] * input[j]`,
    /// then the activation element-wise.
    ///
    /// Panics if `input.len()` does not match the layer's input size;
    /// a dimension mismatch is a caller bug, not a runtime condition.
    pub fn forward(&self, input: &[f64]) -> LayerOutput {
        assert_eq!(
            input.len(),
            self.weights.cols,
            "Layer expects {} inputs, got {}",
            self.weights.cols,
            input.len()
        );

        let mut pre_activation = Vec::with_capacity(self.weights.rows);
        let mut activation = Vec::with_capacity(self.weights.rows);

        for (row, &bias) in self.weights.data.iter().zip(self.biases.iter()) {
            let mut sum = bias;
            for (w, x) in row.iter().zip(input.iter()) {
                sum += w * x;
            }
            pre_activation.push(sum);
            activation.push(self.activator.function(sum));
        }

        LayerOutput { pre_activation, activation }
    }
}
