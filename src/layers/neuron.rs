use rand::Rng;

use crate::activation::activation::Activation;

/// Identifies one trainable scalar of a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    /// `weights[index]` of the neuron at `(layer, slot)`.
    Weight { layer: usize, slot: usize, index: usize },
    /// The bias of the neuron at `(layer, slot)`.
    Bias { layer: usize, slot: usize },
}

/// One unit of a dense layer: a weight per input from the previous layer plus
/// a bias, passed through an activation.
#[derive(Debug, Clone)]
pub struct Neuron {
    layer: usize,
    slot: usize,
    weights: Vec<f64>,
    bias: f64,
    activation: Activation,
}

impl Neuron {
    /// Draws every weight (in index order) and then the bias uniformly from
    /// `[0, 1)`.
    pub fn new<R: Rng + ?Sized>(
        layer: usize,
        slot: usize,
        input_size: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Neuron {
        let weights = (0..input_size).map(|_| rng.gen::<f64>()).collect();
        let bias = rng.gen::<f64>();

        Neuron { layer, slot, weights, bias, activation }
    }

    pub fn layer(&self) -> usize {
        self.layer
    }

    pub fn slot(&self) -> usize {
        self.slot
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// z = Σ w·x + b
    fn pre_activation(&self, prev: &[f64]) -> f64 {
        debug_assert_eq!(prev.len(), self.weights.len());
        let mut z = 0.0;
        for (w, x) in self.weights.iter().zip(prev) {
            z += w * x;
        }
        z + self.bias
    }

    pub fn output(&self, prev: &[f64]) -> f64 {
        self.activation.function(self.pre_activation(prev))
    }

    /// Sensitivity of this neuron's output to `param`, given the previous
    /// layer's outputs and their sensitivities to the same parameter.
    ///
    /// If `param` is one of this neuron's own weights, the term for that
    /// input is the input value itself rather than `w·d_prev`. If it is this
    /// neuron's bias, `1` is added after the weighted sum.
    pub fn directional_derivative(&self, prev: &[f64], prev_diff: &[f64], param: Parameter) -> f64 {
        debug_assert_eq!(prev_diff.len(), self.weights.len());
        let slope = self.activation.derivative(self.pre_activation(prev));

        let mut inner = 0.0;
        match param {
            Parameter::Weight { layer, slot, index } if self.owns(layer, slot) => {
                for n in 0..self.weights.len() {
                    if n == index {
                        inner += prev[n];
                    } else {
                        inner += self.weights[n] * prev_diff[n];
                    }
                }
            }
            Parameter::Bias { layer, slot } if self.owns(layer, slot) => {
                for (w, d) in self.weights.iter().zip(prev_diff) {
                    inner += w * d;
                }
                inner += 1.0;
            }
            _ => {
                for (w, d) in self.weights.iter().zip(prev_diff) {
                    inner += w * d;
                }
            }
        }

        slope * inner
    }

    fn owns(&self, layer: usize, slot: usize) -> bool {
        self.layer == layer && self.slot == slot
    }

    pub fn update_weight(&mut self, index: usize, change: f64) {
        self.weights[index] += change;
    }

    pub fn update_bias(&mut self, change: f64) {
        self.bias += change;
    }
}
