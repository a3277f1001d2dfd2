use serde::{Deserialize, Serialize};

/// Rendering knobs exposed by the demo's advanced-controls panel.
///
/// These shape what gets drawn and never change the numeric results.
/// Every field has a slider range; `clamped()` snaps out-of-range values
/// back into it.
///
/// # Fields
/// - `max_connections` - edges kept per target neuron, 1 to 20
/// - `weak_threshold`  - hide edges with |weight| below this, 0.0 to 1.0
/// - `line_thickness`  - edge width multiplier, 0.5 to 5.0
/// - `brush_size`      - drawing brush radius in grid cells, 1 to 5
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VizOptions {
    pub max_connections: usize,
    pub weak_threshold: f64,
    pub line_thickness: f64,
    pub brush_size: usize,
}

impl Default for VizOptions {
    fn default() -> Self {
        VizOptions {
            max_connections: 8,
            weak_threshold: 0.0,
            line_thickness: 1.0,
            brush_size: 2,
        }
    }
}

impl VizOptions {
    pub fn clamped(&self) -> VizOptions {
        VizOptions {
            max_connections: self.max_connections.clamp(1, 20),
            weak_threshold: self.weak_threshold.clamp(0.0, 1.0),
            line_thickness: self.line_thickness.clamp(0.5, 5.0),
            brush_size: self.brush_size.clamp(1, 5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_control_panel() {
        let opts = VizOptions::default();
        assert_eq!(opts.max_connections, 8);
        assert_eq!(opts.weak_threshold, 0.0);
        assert_eq!(opts.line_thickness, 1.0);
        assert_eq!(opts.brush_size, 2);
    }

    #[test]
    fn clamped_snaps_into_slider_ranges() {
        let wild = VizOptions {
            max_connections: 500,
            weak_threshold: -0.3,
            line_thickness: 99.0,
            brush_size: 0,
        };
        let opts = wild.clamped();
        assert_eq!(opts.max_connections, 20);
        assert_eq!(opts.weak_threshold, 0.0);
        assert_eq!(opts.line_thickness, 5.0);
        assert_eq!(opts.brush_size, 1);
    }

    #[test]
    fn clamped_leaves_in_range_values_alone() {
        let opts = VizOptions::default().clamped();
        assert_eq!(opts, VizOptions::default());
    }

    #[test]
    fn missing_json_fields_fall_back_to_defaults() {
        let opts: VizOptions = serde_json::from_str("{\"max_connections\": 3}").unwrap();
        assert_eq!(opts.max_connections, 3);
        assert_eq!(opts.weak_threshold, 0.0);
        assert_eq!(opts.brush_size, 2);
    }
}
