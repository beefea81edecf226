pub mod schedule;
pub mod sgd;

pub use schedule::LearningRate;
pub use sgd::Sgd;
