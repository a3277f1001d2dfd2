use serde::Serialize;

use crate::math::matrix::Matrix;

/// One weighted edge between adjacent layers, projected for rendering.
/// Lives only for the frame that requested it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Connection {
    pub source: usize,
    pub target: usize,
    pub weight: f64,
    pub magnitude: f64,
    pub source_activation: f64,
    pub target_activation: f64,
}

/// Selects, for every target neuron, the `top_k` incoming connections
/// with the largest weight magnitude.
///
/// Results are concatenated in target-index order; within a target they
/// are sorted by descending magnitude, with ties keeping ascending
/// source order (stable sort), so the output is deterministic. When
/// `top_k` exceeds the source count all connections for that target are
/// kept, so the total is `min(top_k, M) * N` for an N×M weight matrix.
///
/// Drawing every edge of a dense layer would be 784 × 64 lines; this is
/// what keeps the diagram legible.
pub fn top_connections(
    weights: &Matrix,
    source_activations: &[f64],
    target_activations: &[f64],
    top_k: usize,
) -> Vec<Connection> {
    assert!(top_k >= 1, "top_k must be at least 1");
    assert_eq!(
        source_activations.len(),
        weights.cols,
        "Need one source activation per weight column"
    );
    assert_eq!(
        target_activations.len(),
        weights.rows,
        "Need one target activation per weight row"
    );

    let kept_per_target = top_k.min(weights.cols);
    let mut connections = Vec::with_capacity(kept_per_target * weights.rows);

    for (target, row) in weights.data.iter().enumerate() {
        let mut incoming: Vec<Connection> = row
            .iter()
            .enumerate()
            .map(|(source, &weight)| Connection {
                source,
                target,
                weight,
                magnitude: weight.abs(),
                source_activation: source_activations[source],
                target_activation: target_activations[target],
            })
            .collect();

        // Stable sort: equal magnitudes keep their ascending source order.
        incoming.sort_by(|a, b| {
            b.magnitude
                .partial_cmp(&a.magnitude)
                .expect("weight magnitudes are finite")
        });
        incoming.truncate(kept_per_target);
        connections.extend(incoming);
    }

    connections
}

/// Drops connections whose magnitude falls below `threshold`. A
/// threshold of 0.0 keeps everything.
pub fn filter_weak(connections: Vec<Connection>, threshold: f64) -> Vec<Connection> {
    connections
        .into_iter()
        .filter(|c| c.magnitude >= threshold)
        .collect()
}
