use serde::Serialize;

use crate::network::network::{HIDDEN_1, HIDDEN_2, INPUT_SIZE, OUTPUT_SIZE};

/// Display description of one column in the network diagram.
#[derive(Debug, Clone, Serialize)]
pub struct LayerInfo {
    pub label: String,
    pub size: usize,
}

/// The four columns the renderer draws: input, both hidden layers, and
/// the output distribution.
pub fn layers() -> Vec<LayerInfo> {
    vec![
        LayerInfo { label: format!("Input ({})", INPUT_SIZE), size: INPUT_SIZE },
        LayerInfo { label: format!("Hidden 1 ({})", HIDDEN_1), size: HIDDEN_1 },
        LayerInfo { label: format!("Hidden 2 ({})", HIDDEN_2), size: HIDDEN_2 },
        LayerInfo { label: format!("Output ({})", OUTPUT_SIZE), size: OUTPUT_SIZE },
    ]
}
