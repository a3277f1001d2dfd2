use std::io::{Cursor, Read};

use serde::{Deserialize, Serialize};
use tiny_http::{Request, Response};

use glyph_nn::network::arch;
use glyph_nn::viz::color::{activation_color, weight_color};
use glyph_nn::{
    filter_weak, normalize_activations, top_connections, Connection, ForwardPass, PixelGrid,
    VizOptions,
};

use crate::state::SharedState;

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct ForwardRequest {
    /// 28×28 row-major intensities in [0, 255]; validated on deserialize.
    grid: PixelGrid,
    #[serde(default)]
    options: VizOptions,
}

/// One diagram column, render-ready: normalized intensities plus the
/// color each neuron should be painted.
#[derive(Serialize)]
struct LayerView {
    label: String,
    intensity: Vec<f64>,
    colors: Vec<String>,
}

/// One edge to draw between adjacent columns.
#[derive(Serialize)]
struct EdgeView {
    source: usize,
    target: usize,
    weight: f64,
    color: String,
}

#[derive(Serialize)]
struct ForwardResponse {
    result: ForwardPass,
    layers: Vec<LayerView>,
    /// Ranked, threshold-filtered edges for the three layer gaps, in
    /// network order. Empty when the canvas is blank.
    edges: Vec<Vec<EdgeView>>,
}

// ---------------------------------------------------------------------------
// POST /api/forward
// ---------------------------------------------------------------------------

pub fn handle(request: &mut Request, state: &SharedState) -> Response<Cursor<Vec<u8>>> {
    let mut body = String::new();
    if let Err(e) = request.as_reader().read_to_string(&mut body) {
        return crate::routes::bad_request(&format!("Could not read request body: {}", e));
    }

    let fwd_request: ForwardRequest = match serde_json::from_str(&body) {
        Ok(r) => r,
        Err(e) => return crate::routes::bad_request(&format!("Invalid request: {}", e)),
    };
    let options = fwd_request.options.clamped();
    let grid = fwd_request.grid;

    let st = state.lock().unwrap();
    let pass = st.network.forward(&grid);

    // The original renderer only draws edges once something is on the
    // canvas; a blank grid keeps the diagram quiet.
    let edges = if grid.is_blank() {
        vec![Vec::new(), Vec::new(), Vec::new()]
    } else {
        let gaps: [(&glyph_nn::Matrix, &[f64], &[f64]); 3] = [
            (&st.network.layer1.weights, &pass.input, &pass.layer1),
            (&st.network.layer2.weights, &pass.layer1, &pass.layer2),
            (&st.network.output.weights, &pass.layer2, &pass.probabilities),
        ];
        gaps.iter()
            .map(|&(weights, sources, targets)| {
                let ranked = top_connections(weights, sources, targets, options.max_connections);
                edge_views(filter_weak(ranked, options.weak_threshold))
            })
            .collect()
    };
    drop(st);

    let layers = layer_views(&pass);
    let response = ForwardResponse { result: pass, layers, edges };

    match serde_json::to_string(&response) {
        Ok(json) => crate::routes::json_response(200, json),
        Err(e) => {
            eprintln!("Failed to serialize forward response: {}", e);
            crate::routes::json_response(
                500,
                serde_json::json!({ "error": "internal serialization error" }).to_string(),
            )
        }
    }
}

// ---------------------------------------------------------------------------
// View builders
// ---------------------------------------------------------------------------

fn layer_views(pass: &ForwardPass) -> Vec<LayerView> {
    let activations: [&[f64]; 4] = [
        &pass.input,
        &pass.layer1,
        &pass.layer2,
        &pass.probabilities,
    ];

    arch::layers()
        .into_iter()
        .zip(activations)
        .map(|(info, values)| {
            let intensity = normalize_activations(values);
            let colors = intensity.iter().map(|&t| activation_color(t)).collect();
            LayerView { label: info.label, intensity, colors }
        })
        .collect()
}

fn edge_views(connections: Vec<Connection>) -> Vec<EdgeView> {
    connections
        .into_iter()
        .map(|c| EdgeView {
            source: c.source,
            target: c.target,
            weight: c.weight,
            color: weight_color(c.weight),
        })
        .collect()
}
