/// Color mapping for the network diagram. Neurons are colored by their
/// normalized activation on a cold-to-hot gradient; edges are colored by
/// weight sign, warm for excitatory and cool for inhibitory.

fn to_hex(r: f64, g: f64, b: f64) -> String {
    let byte = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!("#{:02x}{:02x}{:02x}", byte(r), byte(g), byte(b))
}

/// Maps a normalized activation in `[0, 1]` onto a four-segment gradient:
/// dark blue → cyan → yellow → orange → red. Out-of-range inputs clamp.
pub fn activation_color(normalized: f64) -> String {
    let t = normalized.clamp(0.0, 1.0);

    let (r, g, b) = if t < 0.25 {
        let local = t / 0.25;
        (0.1 + local * 0.1, 0.2 + local * 0.5, 0.5 + local * 0.5)
    } else if t < 0.5 {
        let local = (t - 0.25) / 0.25;
        (0.2 + local * 0.6, 0.7 + local * 0.2, 1.0 - local * 0.5)
    } else if t < 0.75 {
        let local = (t - 0.5) / 0.25;
        (0.8 + local * 0.2, 0.9 - local * 0.4, 0.5 - local * 0.4)
    } else {
        let local = (t - 0.75) / 0.25;
        (1.0, 0.5 - local * 0.2, 0.1 - local * 0.05)
    };

    to_hex(r, g, b)
}

/// Edge color from a weight value: positive weights run yellow → red with
/// magnitude, negative weights cyan → blue. Magnitudes above 1 saturate.
pub fn weight_color(weight: f64) -> String {
    let normalized = weight.abs().min(1.0);
    if weight > 0.0 {
        to_hex(1.0, 1.0 - normalized * 0.5, 0.1)
    } else {
        to_hex(0.1, 0.5 + normalized * 0.5, 1.0)
    }
}
