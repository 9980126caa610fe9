//! Confusion matrix reconstruction and per-class statistics.

use std::fmt;

use crate::error::{Result, TrazarError};

mod rates;


pub use rates::{RateMatrix, EPSILON};

/// Confusion matrix recovered from a training log dump.
///
/// Element [i][j] is the count of samples with ground-truth class i predicted
/// as class j. The axis convention follows the producer of the dump; the
/// renderer labels axis 1 `Predictions` and axis 0 `Ground Truth`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfusionMatrix {
    /// Row-major counts, `n_classes * n_classes` entries
    counts: Vec<u64>,
    /// Number of classes
    n_classes: usize,
}

impl ConfusionMatrix {
    /// Reshape a flat count stream into a square matrix, row-major.
    ///
    /// The stream must contain exactly `n_classes²` values. Shorter or longer
    /// streams are an error, never truncated or padded.
    pub fn from_counts(values: Vec<u64>, n_classes: usize) -> Result<Self> {
        if n_classes == 0 {
            return Err(TrazarError::InvalidClassCount { value: n_classes });
        }
        let expected = n_classes * n_classes;
        if values.len() != expected {
            return Err(TrazarError::ShapeMismatch {
                expected,
                actual: values.len(),
                classes: n_classes,
            });
        }
        Ok(Self { counts: values, n_classes })
    }

    /// Get number of classes
    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    /// Get element at [true_label][predicted_label]
    pub fn get(&self, true_label: usize, predicted_label: usize) -> u64 {
        self.counts[true_label * self.n_classes + predicted_label]
    }

    /// Row slice for a ground-truth class
    pub fn row(&self, true_label: usize) -> &[u64] {
        let start = true_label * self.n_classes;
        &self.counts[start..start + self.n_classes]
    }

    /// Calculate support (total true instances) for a class
    pub fn support(&self, class: usize) -> u64 {
        self.row(class).iter().sum()
    }

    /// Total count predicted as a class (column sum)
    pub fn predicted(&self, class: usize) -> u64 {
        (0..self.n_classes).map(|i| self.get(i, class)).sum()
    }

    /// Total number of samples
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Calculate true positives for a class
    pub fn true_positives(&self, class: usize) -> u64 {
        self.get(class, class)
    }

    /// Calculate false positives for a class (predicted as class but wasn't)
    pub fn false_positives(&self, class: usize) -> u64 {
        self.predicted(class) - self.true_positives(class)
    }

    /// Calculate false negatives for a class (was class but predicted differently)
    pub fn false_negatives(&self, class: usize) -> u64 {
        self.support(class) - self.true_positives(class)
    }

    /// Calculate precision for a class
    pub fn precision(&self, class: usize) -> f64 {
        let predicted = self.predicted(class);
        if predicted == 0 {
            return 0.0;
        }
        self.true_positives(class) as f64 / predicted as f64
    }

    /// Calculate recall for a class
    pub fn recall(&self, class: usize) -> f64 {
        let support = self.support(class);
        if support == 0 {
            return 0.0;
        }
        self.true_positives(class) as f64 / support as f64
    }

    /// Calculate accuracy
    pub fn accuracy(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let correct: u64 = (0..self.n_classes).map(|i| self.get(i, i)).sum();
        correct as f64 / total as f64
    }
}

impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Confusion Matrix:")?;

        write!(f, "      ")?;
        for j in 0..self.n_classes {
            write!(f, "Pred {j} ")?;
        }
        writeln!(f)?;

        for i in 0..self.n_classes {
            write!(f, "True {i}")?;
            for j in 0..self.n_classes {
                write!(f, "{:>6} ", self.get(i, j))?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
