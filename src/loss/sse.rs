/// Sum-of-squared-error, one output cell at a time.
pub struct SseLoss;

impl SseLoss {
    /// (p - t)²
    pub fn loss(predicted: f64, target: f64) -> f64 {
        (predicted - target).powi(2)
    }

    /// ∂L/∂p = 2(p - t)
    pub fn derivative(predicted: f64, target: f64) -> f64 {
        2.0 * (predicted - target)
    }
}
