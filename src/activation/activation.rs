/// Element-wise activation applied by a dense layer after its affine
/// transform. `Identity` is used by the logits layer, which has no
/// nonlinearity before the softmax.
///
/// Softmax is a vector-valued function, not an element-wise one, so it
/// lives as the free function [`softmax`] and is applied to the final
/// logits by the forward pipeline rather than inside a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    ReLU,
    Identity,
}

impl Activation {
    /// Element-wise activation.
    pub fn function(&self, x: f64) -> f64 {
        match self {
            Activation::ReLU => if x > 0.0 { x } else { 0.0 },
            Activation::Identity => x,
        }
    }
}

/// Maps a vector of logits to a probability distribution.
///
/// The maximum logit is subtracted from every element before
/// exponentiating. Without the shift, large logits overflow `exp` to
/// infinity and very negative logits underflow every term to zero,
/// making the sum 0/0; with it, the largest exponent is exactly 1 and
/// the result is well-defined for any finite input.
///
/// Panics if `logits` is empty.
pub fn softmax(logits: &[f64]) -> Vec<f64> {
    assert!(!logits.is_empty(), "softmax requires a non-empty input");

    let max_logit = logits.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = logits.iter().map(|&x| (x - max_logit).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.iter().map(|&e| e / sum).collect()
}
