use serde::Deserialize;

/// Side length of the drawing grid, in cells.
pub const GRID_SIZE: usize = 28;

/// Maximum pixel intensity; inputs are normalized by this before the
/// forward pass.
pub const MAX_INTENSITY: f64 = 255.0;

/// A 28×28 grid of pixel intensities in `[0, 255]`.
///
/// The drawing surface owns and mutates its own buffer; what reaches the
/// network is a validated snapshot. Construction rejects anything outside
/// the contract (wrong shape, non-finite or out-of-range values) instead
/// of coercing it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>")]
pub struct PixelGrid {
    rows: Vec<Vec<f64>>,
}

impl PixelGrid {
    /// An all-zero (empty canvas) grid.
    pub fn blank() -> PixelGrid {
        PixelGrid {
            rows: vec![vec![0.0; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Validates a raw row-major grid.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<PixelGrid, String> {
        if rows.len() != GRID_SIZE {
            return Err(format!(
                "Grid must have {} rows, got {}",
                GRID_SIZE,
                rows.len()
            ));
        }
        for (y, row) in rows.iter().enumerate() {
            if row.len() != GRID_SIZE {
                return Err(format!(
                    "Grid row {} must have {} values, got {}",
                    y,
                    GRID_SIZE,
                    row.len()
                ));
            }
            for (x, &v) in row.iter().enumerate() {
                if !v.is_finite() || !(0.0..=MAX_INTENSITY).contains(&v) {
                    return Err(format!(
                        "Pixel ({}, {}) is {}; intensities must be finite and in [0, {}]",
                        x, y, v, MAX_INTENSITY
                    ));
                }
            }
        }
        Ok(PixelGrid { rows })
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Sets one cell. Panics outside the grid or the intensity range;
    /// in-process drawing code is expected to stay inside the contract.
    pub fn set(&mut self, x: usize, y: usize, intensity: f64) {
        assert!(x < GRID_SIZE && y < GRID_SIZE, "pixel ({}, {}) out of bounds", x, y);
        assert!(
            intensity.is_finite() && (0.0..=MAX_INTENSITY).contains(&intensity),
            "intensity {} out of [0, {}]",
            intensity,
            MAX_INTENSITY
        );
        self.rows[y][x] = intensity;
    }

    /// Flattens row-major into a 784-element vector scaled to `[0, 1]`.
    pub fn flatten_normalized(&self) -> Vec<f64> {
        self.rows
            .iter()
            .flat_map(|row| row.iter().map(|&v| v / MAX_INTENSITY))
            .collect()
    }

    /// True when nothing has been drawn (every cell is zero).
    pub fn is_blank(&self) -> bool {
        self.rows.iter().all(|row| row.iter().all(|&v| v == 0.0))
    }
}

impl TryFrom<Vec<Vec<f64>>> for PixelGrid {
    type Error = String;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<PixelGrid, String> {
        PixelGrid::from_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_grid_is_blank_and_normalizes_to_zeros() {
        let grid = PixelGrid::blank();
        assert!(grid.is_blank());

        let flat = grid.flatten_normalized();
        assert_eq!(flat.len(), GRID_SIZE * GRID_SIZE);
        assert!(flat.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn flatten_is_row_major_and_scaled() {
        let mut grid = PixelGrid::blank();
        grid.set(3, 0, 255.0); // row 0, col 3 -> flat index 3
        grid.set(0, 1, 127.5); // row 1, col 0 -> flat index 28

        let flat = grid.flatten_normalized();
        assert_eq!(flat[3], 1.0);
        assert!((flat[GRID_SIZE] - 0.5).abs() < 1e-12);
        assert!(!grid.is_blank());
    }

    #[test]
    fn from_rows_rejects_wrong_shapes() {
        assert!(PixelGrid::from_rows(vec![vec![0.0; GRID_SIZE]; 27]).is_err());

        let mut rows = vec![vec![0.0; GRID_SIZE]; GRID_SIZE];
        rows[5].pop();
        assert!(PixelGrid::from_rows(rows).is_err());
    }

    #[test]
    fn from_rows_rejects_out_of_contract_values() {
        let mut rows = vec![vec![0.0; GRID_SIZE]; GRID_SIZE];
        rows[0][0] = 256.0;
        assert!(PixelGrid::from_rows(rows.clone()).is_err());

        rows[0][0] = -1.0;
        assert!(PixelGrid::from_rows(rows.clone()).is_err());

        rows[0][0] = f64::NAN;
        assert!(PixelGrid::from_rows(rows).is_err());
    }

    #[test]
    fn deserializes_from_a_json_array_of_rows() {
        let json = serde_json::to_string(&vec![vec![0.0; GRID_SIZE]; GRID_SIZE]).unwrap();
        let grid: PixelGrid = serde_json::from_str(&json).unwrap();
        assert!(grid.is_blank());

        let bad = serde_json::to_string(&vec![vec![0.0; 3]; 3]).unwrap();
        assert!(serde_json::from_str::<PixelGrid>(&bad).is_err());
    }
}
