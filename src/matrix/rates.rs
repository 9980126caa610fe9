//! Column normalization of raw counts into per-class prediction rates.

use ndarray::{Array2, Axis};

use super::ConfusionMatrix;

/// Denominator smoothing term. Keeps all-zero columns at zero instead of NaN
/// while leaving populated columns effectively untouched.
pub const EPSILON: f64 = 1e-7;

/// Column-normalized confusion matrix.
///
/// Each column of the count grid is divided by (column sum + [`EPSILON`]), so
/// nonzero columns sum to just under 1 and empty columns stay at zero.
#[derive(Clone, Debug, PartialEq)]
pub struct RateMatrix {
    rates: Array2<f64>,
}

impl RateMatrix {
    /// Normalize a confusion matrix along axis 0 (per-column).
    pub fn from_confusion(matrix: &ConfusionMatrix) -> Self {
        let n = matrix.n_classes();
        let counts = Array2::from_shape_fn((n, n), |(i, j)| matrix.get(i, j) as f64);
        let denom = counts.sum_axis(Axis(0)) + EPSILON;
        Self { rates: counts / &denom }
    }

    /// Get number of classes
    pub fn n_classes(&self) -> usize {
        self.rates.nrows()
    }

    /// Rate at [true_label][predicted_label]
    pub fn get(&self, true_label: usize, predicted_label: usize) -> f64 {
        self.rates[[true_label, predicted_label]]
    }

    /// Sum of a predicted-class column, ≈ 1 for populated columns
    pub fn column_sum(&self, predicted_label: usize) -> f64 {
        self.rates.column(predicted_label).sum()
    }

    /// Largest rate in the grid, used to anchor the color scale
    pub fn max_rate(&self) -> f64 {
        self.rates.iter().fold(0.0_f64, |acc, &r| acc.max(r))
    }

    /// Borrow the underlying array
    pub fn as_array(&self) -> &Array2<f64> {
        &self.rates
    }
}
