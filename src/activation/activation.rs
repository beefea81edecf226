use serde::{Serialize, Deserialize};
use std::f64::consts::E;

/// Scalar nonlinearity applied to a neuron's weighted sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Activation {
    Identity,
    Sigmoid,
    ReLU,
}

impl Activation {
    pub fn function(&self, x: f64) -> f64 {
        match self {
            Activation::Identity => x,
            Activation::Sigmoid => 1.0 / (1.0 + E.powf(-x)),
            Activation::ReLU => if x > 0.0 { x } else { 0.0 },
        }
    }

    /// Derivative evaluated at the pre-activation `x`.
    ///
    /// ReLU treats the boundary `x == 0` as the flat side, so its derivative
    /// there is `0`.
    pub fn derivative(&self, x: f64) -> f64 {
        match self {
            Activation::Identity => 1.0,
            Activation::Sigmoid => {
                let e = E.powf(-x);
                e / (1.0 + e).powi(2)
            }
            Activation::ReLU => if x <= 0.0 { 0.0 } else { 1.0 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relu_is_flat_at_zero() {
        assert_eq!(Activation::ReLU.function(0.0), 0.0);
        assert_eq!(Activation::ReLU.derivative(0.0), 0.0);
        assert_eq!(Activation::ReLU.derivative(1e-12), 1.0);
        assert_eq!(Activation::ReLU.function(-3.0), 0.0);
        assert_eq!(Activation::ReLU.function(2.5), 2.5);
    }

    #[test]
    fn sigmoid_derivative_matches_closed_form() {
        for &x in &[-4.0, -0.5, 0.0, 0.5, 4.0] {
            let s = Activation::Sigmoid.function(x);
            let d = Activation::Sigmoid.derivative(x);
            assert!((d - s * (1.0 - s)).abs() < 1e-12, "x = {x}");
        }
        assert!((Activation::Sigmoid.function(0.0) - 0.5).abs() < 1e-15);
    }

    #[test]
    fn identity_passes_through() {
        assert_eq!(Activation::Identity.function(-7.25), -7.25);
        assert_eq!(Activation::Identity.derivative(123.0), 1.0);
    }
}
