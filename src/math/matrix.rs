use rand::Rng;

/// A dense row-major matrix of `f64` values.
///
/// Weight matrices follow the convention used throughout this crate:
/// one row per output neuron, so `rows` is the fan-out and `cols` is the
/// fan-in of the layer the matrix belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        let rows = data.len();
        let cols = data[0].len();
        for row in &data {
            assert_eq!(row.len(), cols, "All matrix rows must have equal length");
        }
        Matrix { rows, cols, data }
    }

    /// Xavier (Glorot) uniform initialization: every value is drawn
    /// uniformly from `[-limit, limit]` with
    /// `limit = sqrt(6 / (fan_in + fan_out))`.
    ///
    /// Keeps the variance of activations roughly equal across layers,
    /// which also keeps the untrained network's activations in a range
    /// that renders well.
    ///
    /// Shape: (rows, cols). `cols` is the fan-in, `rows` the fan-out.
    pub fn xavier_uniform<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let limit = (6.0 / (cols + rows) as f64).sqrt();
        let mut res = Matrix::zeros(rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = (rng.gen::<f64>() * 2.0 - 1.0) * limit;
            }
        }
        res
    }

    /// Borrowed view of row `i`.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i]
    }
}
