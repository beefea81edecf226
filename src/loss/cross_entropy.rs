/// Binary cross-entropy for a single sigmoid output cell.
///
/// No epsilon is added inside the logarithms: a prediction of exactly 0 or 1
/// yields an infinite loss, and callers see that rather than a clamped value.
pub struct CrossEntropyLoss;

impl CrossEntropyLoss {
    /// -t·ln(p) - (1-t)·ln(1-p)
    pub fn loss(predicted: f64, target: f64) -> f64 {
        -target * predicted.ln() - (1.0 - target) * (1.0 - predicted).ln()
    }

    /// ∂L/∂p = -t/p + (1-t)/(1-p)
    pub fn derivative(predicted: f64, target: f64) -> f64 {
        -target / predicted + (1.0 - target) / (1.0 - predicted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loss_is_minimal_at_the_target() {
        assert!(CrossEntropyLoss::loss(0.9, 1.0) < CrossEntropyLoss::loss(0.6, 1.0));
        assert!(CrossEntropyLoss::loss(0.1, 0.0) < CrossEntropyLoss::loss(0.4, 0.0));
    }

    #[test]
    fn derivative_sign_points_towards_target() {
        assert!(CrossEntropyLoss::derivative(0.3, 1.0) < 0.0);
        assert!(CrossEntropyLoss::derivative(0.3, 0.0) > 0.0);
        assert!((CrossEntropyLoss::derivative(0.5, 1.0) + 2.0).abs() < 1e-12);
    }

    #[test]
    fn saturated_prediction_is_not_masked() {
        assert!(CrossEntropyLoss::loss(0.0, 1.0).is_infinite());
        assert!(CrossEntropyLoss::derivative(1.0, 0.0).is_infinite());
    }
}
