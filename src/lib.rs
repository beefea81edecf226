//! A small feedforward neural network engine.
//!
//! Dense ReLU hidden layers feed a task-specific output layer. Training is
//! online gradient descent where each parameter's gradient is found by its own
//! forward sweep of output sensitivities, instead of by backpropagation.

pub mod error;
pub mod activation;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use error::{Error, Result};
pub use activation::activation::Activation;
pub use layers::neuron::{Neuron, Parameter};
pub use loss::loss_type::Loss;
pub use network::model::Model;
pub use network::spec::ModelSpec;
pub use network::task::Task;
pub use optim::schedule::LearningRate;
pub use optim::sgd::Sgd;
pub use train::loop_fn::train_loop;
pub use train::trainer::train_model;
pub use train::train_config::TrainConfig;
