use serde::Serialize;

/// Everything one forward pass produces, captured as an immutable value.
///
/// Created fresh per pass; safe to hand to any number of renderers and
/// discard. All vectors are indexed the same way the layers are.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForwardPass {
    /// Normalized input, 784 values in `[0, 1]`, row-major.
    pub input: Vec<f64>,
    /// First hidden layer activations, 64 values, each ≥ 0 (ReLU).
    pub layer1: Vec<f64>,
    /// Second hidden layer activations, 32 values, each ≥ 0 (ReLU).
    pub layer2: Vec<f64>,
    /// Raw output-layer values before softmax, 10 values.
    pub logits: Vec<f64>,
    /// Softmax of the logits: 10 values in `[0, 1]` summing to 1.
    pub probabilities: Vec<f64>,
    /// Index of the most probable class, ties broken toward the lowest
    /// index.
    pub prediction: usize,
}

/// Index of the maximum value; the first (lowest) index wins on ties so
/// the prediction is deterministic.
///
/// Panics on an empty slice.
pub fn argmax(values: &[f64]) -> usize {
    assert!(!values.is_empty(), "argmax requires a non-empty input");

    let mut best = 0;
    for (i, &v) in values.iter().enumerate().skip(1) {
        if v > values[best] {
            best = i;
        }
    }
    best
}
