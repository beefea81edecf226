use crate::error::Result;
use crate::network::model::Model;
use crate::optim::schedule::LearningRate;

/// Plain online gradient descent following a learning-rate schedule.
#[derive(Debug, Clone, Copy)]
pub struct Sgd {
    pub schedule: LearningRate,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { schedule: LearningRate::Constant { rate: learning_rate } }
    }

    pub fn with_schedule(schedule: LearningRate) -> Sgd {
        Sgd { schedule }
    }

    /// Trains `model` on one sample at the rate scheduled for `step`, and
    /// returns that rate.
    pub fn step(&self, model: &mut Model, input: &[f64], target: f64, step: usize) -> Result<f64> {
        let rate = self.schedule.rate_at(step);
        model.train(input, target, rate)?;
        Ok(rate)
    }
}
