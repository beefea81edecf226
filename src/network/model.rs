use log::{debug, log_enabled, trace, Level};
use rand::Rng;

use crate::activation::activation::Activation;
use crate::error::{Error, Result};
use crate::layers::neuron::{Neuron, Parameter};
use crate::network::spec::ModelSpec;
use crate::network::task::Task;

/// A dense feedforward network.
///
/// Layer 0 is the input and holds no neurons; layers `1..=L` are the ReLU
/// hidden layers and layer `L + 1` is the output. Every per-layer buffer has
/// exactly `layer_size(i)` cells.
#[derive(Debug, Clone)]
pub struct Model {
    spec: ModelSpec,
    sizes: Vec<usize>,
    layers: Vec<Vec<Neuron>>,
    /// Outputs of every neuron from the most recent forward pass.
    activations: Vec<Vec<f64>>,
    /// Sensitivity of every neuron's output to the parameter being trained.
    derivatives: Vec<Vec<f64>>,
}

impl Model {
    /// Builds a model whose initial weights come from the thread-local RNG.
    pub fn new(spec: ModelSpec) -> Result<Model> {
        Model::with_rng(spec, &mut rand::thread_rng())
    }

    /// Builds a model drawing every weight and bias from `rng`, neuron by
    /// neuron from the first hidden layer to the output layer.
    pub fn with_rng<R: Rng + ?Sized>(spec: ModelSpec, rng: &mut R) -> Result<Model> {
        spec.validate()?;

        let sizes = spec.layer_sizes();
        let output_layer = sizes.len() - 1;
        let output_activation = spec.resolved_output_activation();

        let mut layers = Vec::with_capacity(sizes.len());
        layers.push(Vec::new());
        for i in 1..sizes.len() {
            let activation = if i == output_layer { output_activation } else { Activation::ReLU };
            let layer = (0..sizes[i])
                .map(|j| Neuron::new(i, j, sizes[i - 1], activation, rng))
                .collect();
            layers.push(layer);
        }

        let activations: Vec<Vec<f64>> = sizes.iter().map(|&n| vec![0.0; n]).collect();
        let derivatives = activations.clone();

        let model = Model { spec, sizes, layers, activations, derivatives };
        debug!(
            "built {:?} model with layer sizes {:?} ({} parameters)",
            model.spec.task,
            model.sizes,
            model.parameter_count()
        );
        Ok(model)
    }

    /// Regression model: one ReLU output, sum-of-squared-error loss.
    pub fn regression(input_size: usize, hidden_layers: &[usize]) -> Result<Model> {
        Model::new(ModelSpec::regression(input_size, hidden_layers))
    }

    /// Classifier over `classes` sigmoid outputs, cross-entropy loss.
    pub fn classifier(input_size: usize, hidden_layers: &[usize], classes: usize) -> Result<Model> {
        Model::new(ModelSpec::classifier(input_size, hidden_layers, classes))
    }

    pub fn spec(&self) -> &ModelSpec {
        &self.spec
    }

    pub fn task(&self) -> Task {
        self.spec.task
    }

    pub fn input_size(&self) -> usize {
        self.sizes[0]
    }

    pub fn output_size(&self) -> usize {
        self.sizes[self.sizes.len() - 1]
    }

    /// Number of layers, input and output included.
    pub fn layer_count(&self) -> usize {
        self.sizes.len()
    }

    pub fn hidden_layer_count(&self) -> usize {
        self.sizes.len() - 2
    }

    /// Width of layer `layer`; zero past the output layer.
    pub fn layer_size(&self, layer: usize) -> usize {
        self.sizes.get(layer).copied().unwrap_or(0)
    }

    pub fn neuron(&self, layer: usize, slot: usize) -> Option<&Neuron> {
        self.layers.get(layer)?.get(slot)
    }

    /// Total number of weights and biases.
    pub fn parameter_count(&self) -> usize {
        self.sizes.windows(2).map(|w| w[1] * (w[0] + 1)).sum()
    }

    fn check_input(&self, input: &[f64]) -> Result<()> {
        if input.len() != self.input_size() {
            return Err(Error::ShapeMismatch { expected: self.input_size(), got: input.len() });
        }
        Ok(())
    }

    /// Forward pass. Leaves every neuron's output in the activation buffer and
    /// returns a copy of the output layer.
    pub fn evaluate(&mut self, input: &[f64]) -> Result<Vec<f64>> {
        self.check_input(input)?;

        self.activations[0].copy_from_slice(input);
        for i in 1..self.layers.len() {
            let (done, rest) = self.activations.split_at_mut(i);
            let prev = &done[i - 1];
            for (j, neuron) in self.layers[i].iter().enumerate() {
                rest[0][j] = neuron.output(prev);
            }
        }

        Ok(self.activations[self.sizes.len() - 1].clone())
    }

    /// Forward pass collapsed to the task's scalar (a value for regression, a
    /// class index for classification).
    pub fn predict(&mut self, input: &[f64]) -> Result<f64> {
        let raw = self.evaluate(input)?;
        Ok(self.spec.task.raw_to_scalar(&raw))
    }

    /// Loss of the current weights on one sample, summed over output cells.
    pub fn loss(&mut self, input: &[f64], target: f64) -> Result<f64> {
        self.evaluate(input)?;
        let expected = self.spec.task.scalar_to_raw(target);
        Ok(self.snapshot_loss(&expected))
    }

    /// Loss of the activations left by the most recent `evaluate` or `train`
    /// call. After `train` this is the loss before that call's updates.
    pub fn cached_loss(&self, target: f64) -> f64 {
        let expected = self.spec.task.scalar_to_raw(target);
        self.snapshot_loss(&expected)
    }

    fn snapshot_loss(&self, expected: &[f64]) -> f64 {
        let loss = self.spec.task.loss();
        let output = &self.activations[self.sizes.len() - 1];
        output.iter().zip(expected).map(|(&p, &t)| loss.value(p, t)).sum()
    }

    /// One gradient-descent step on every weight and then the bias of every
    /// neuron, layer by layer.
    ///
    /// A single forward pass is taken up front and reused for every gradient
    /// in the call. Each update is written to the neuron immediately, so later
    /// gradients in the same call see the updated weights in their sensitivity
    /// sums, but never a refreshed set of activations.
    pub fn train(&mut self, input: &[f64], target: f64, learning_rate: f64) -> Result<()> {
        self.evaluate(input)?;
        let expected = self.spec.task.scalar_to_raw(target);

        if log_enabled!(Level::Trace) {
            trace!("training step: loss before update = {}", self.snapshot_loss(&expected));
        }

        for w_i in 1..self.layers.len() {
            for w_j in 0..self.sizes[w_i] {
                for w_k in 0..self.sizes[w_i - 1] {
                    let param = Parameter::Weight { layer: w_i, slot: w_j, index: w_k };
                    let gradient = self.gradient(param, &expected);
                    self.layers[w_i][w_j].update_weight(w_k, -gradient * learning_rate);
                }

                let param = Parameter::Bias { layer: w_i, slot: w_j };
                let gradient = self.gradient(param, &expected);
                self.layers[w_i][w_j].update_bias(-gradient * learning_rate);
            }
        }

        Ok(())
    }

    /// ∂loss/∂param, by sweeping the sensitivity of every neuron to `param`
    /// forward from a zero input row and folding the output row into the loss.
    fn gradient(&mut self, param: Parameter, expected: &[f64]) -> f64 {
        let loss = self.spec.task.loss();
        let Model { layers, activations, derivatives, .. } = self;

        derivatives[0].iter_mut().for_each(|d| *d = 0.0);
        for i in 1..layers.len() {
            let (done, rest) = derivatives.split_at_mut(i);
            let prev = &activations[i - 1];
            let prev_diff = &done[i - 1];
            for (j, neuron) in layers[i].iter().enumerate() {
                rest[0][j] = neuron.directional_derivative(prev, prev_diff, param);
            }
        }

        let out = layers.len() - 1;
        let mut gradient = 0.0;
        for m in 0..activations[out].len() {
            gradient += loss.partial_derivative(activations[out][m], expected[m]) * derivatives[out][m];
        }
        gradient
    }
}
