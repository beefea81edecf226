use serde::{Serialize, Deserialize};

use crate::loss::cross_entropy::CrossEntropyLoss;
use crate::loss::sse::SseLoss;

/// Selects the per-output loss a model is trained against.
///
/// - `SumSquaredError` — pair with a ReLU or Identity output (regression).
/// - `CrossEntropy`    — pair with a Sigmoid output (classification).
///
/// Both are scalar: the model sums them over its output cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Loss {
    SumSquaredError,
    CrossEntropy,
}

impl Loss {
    pub fn value(&self, predicted: f64, target: f64) -> f64 {
        match self {
            Loss::SumSquaredError => SseLoss::loss(predicted, target),
            Loss::CrossEntropy => CrossEntropyLoss::loss(predicted, target),
        }
    }

    /// Derivative with respect to the prediction only.
    pub fn partial_derivative(&self, predicted: f64, target: f64) -> f64 {
        match self {
            Loss::SumSquaredError => SseLoss::derivative(predicted, target),
            Loss::CrossEntropy => CrossEntropyLoss::derivative(predicted, target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sse_dispatch() {
        assert_eq!(Loss::SumSquaredError.value(3.0, 1.0), 4.0);
        assert_eq!(Loss::SumSquaredError.partial_derivative(3.0, 1.0), 4.0);
        assert_eq!(Loss::SumSquaredError.partial_derivative(1.0, 3.0), -4.0);
    }

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&Loss::CrossEntropy).unwrap();
        assert_eq!(json, "\"cross_entropy\"");
    }
}
