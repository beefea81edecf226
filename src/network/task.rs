use serde::{Serialize, Deserialize};

use crate::activation::activation::Activation;
use crate::loss::loss_type::Loss;

/// What a model's output layer means.
///
/// The task fixes the output width, the loss, the default output activation,
/// and how a scalar target maps to and from the raw output vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Task {
    /// One ReLU output trained with sum-of-squared-error.
    Regression,
    /// One sigmoid output per class trained with cross-entropy; the scalar is
    /// the class index.
    Classifier { classes: usize },
}

impl Task {
    pub fn output_size(&self) -> usize {
        match self {
            Task::Regression => 1,
            Task::Classifier { classes } => *classes,
        }
    }

    pub fn loss(&self) -> Loss {
        match self {
            Task::Regression => Loss::SumSquaredError,
            Task::Classifier { .. } => Loss::CrossEntropy,
        }
    }

    pub fn output_activation(&self) -> Activation {
        match self {
            Task::Regression => Activation::ReLU,
            Task::Classifier { .. } => Activation::Sigmoid,
        }
    }

    /// Collapses a raw output vector into the task's scalar.
    ///
    /// For classifiers this is the index of the first output that strictly
    /// beats every earlier one, starting from a best of `0.0`; an all
    /// non-positive vector therefore maps to class 0.
    /// An empty regression output maps to NaN.
    pub fn raw_to_scalar(&self, raw: &[f64]) -> f64 {
        match self {
            Task::Regression => raw.first().copied().unwrap_or(f64::NAN),
            Task::Classifier { .. } => {
                let mut best = 0.0;
                let mut result = 0;
                for (i, &value) in raw.iter().enumerate() {
                    if value > best {
                        best = value;
                        result = i;
                    }
                }
                result as f64
            }
        }
    }

    /// Expands a scalar target into an output-shaped vector.
    ///
    /// Classifiers one-hot encode `round(value)`; a value that rounds outside
    /// `0..classes` yields all zeros.
    pub fn scalar_to_raw(&self, value: f64) -> Vec<f64> {
        match self {
            Task::Regression => vec![value],
            Task::Classifier { classes } => {
                let hot = value.round();
                (0..*classes)
                    .map(|i| if i as f64 == hot { 1.0 } else { 0.0 })
                    .collect()
            }
        }
    }
}
