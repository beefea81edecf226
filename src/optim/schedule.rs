use serde::{Serialize, Deserialize};

/// How the learning rate evolves over training steps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LearningRate {
    Constant { rate: f64 },
    /// `initial / (1 + decay · step)`
    InverseTime { initial: f64, decay: f64 },
}

impl LearningRate {
    /// Rate to use for the zero-based training step `step`.
    pub fn rate_at(&self, step: usize) -> f64 {
        match *self {
            LearningRate::Constant { rate } => rate,
            LearningRate::InverseTime { initial, decay } => initial / (1.0 + decay * step as f64),
        }
    }
}
