/// Linearly rescales activations into `[0, 1]` for color mapping.
///
/// A constant vector (including the all-zero vector from an empty
/// canvas) has no spread to map, so every element becomes 0.5: neutral
/// mid-scale rather than an extremum, and no division by zero.
///
/// Panics on empty input.
pub fn normalize_activations(activations: &[f64]) -> Vec<f64> {
    assert!(
        !activations.is_empty(),
        "normalize_activations requires a non-empty input"
    );

    let min = activations.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = activations.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    if range == 0.0 {
        return vec![0.5; activations.len()];
    }

    activations.iter().map(|&a| (a - min) / range).collect()
}
