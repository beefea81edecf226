use std::time::Instant;

use log::{info, warn};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::Result;
use crate::network::model::Model;
use crate::network::task::Task;
use crate::optim::sgd::Sgd;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::{check_samples, run_pass};

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `model` online for `config.epochs` epochs and returns the mean
/// training loss of the **last completed epoch**.
///
/// # Arguments
/// - `model`     — modified in place, one `train` call per sample visit
/// - `inputs`    — samples, each of length `model.input_size()`
/// - `targets`   — scalar targets (class indices for classifiers)
/// - `optimizer` — carries the learning-rate schedule; the step counter starts
///                 at 0 and runs across epochs
/// - `config`    — epoch count, shuffling, optional progress channel
/// - `rng`       — source for the per-epoch shuffle
///
/// # Early termination
/// The loop stops early if the `progress_tx` receiver has been dropped.
pub fn train_loop<R: Rng + ?Sized>(
    model: &mut Model,
    inputs: &[Vec<f64>],
    targets: &[f64],
    optimizer: &Sgd,
    config: &TrainConfig,
    rng: &mut R,
) -> Result<f64> {
    check_samples(inputs, targets)?;

    let mut order: Vec<usize> = (0..inputs.len()).collect();
    let mut step = 0;
    let mut last_train_loss = 0.0;

    for epoch in 1..=config.epochs {
        let t_start = Instant::now();

        if config.shuffle {
            order.shuffle(rng);
        }

        let (train_loss, learning_rate) = run_pass(model, inputs, targets, &order, optimizer, &mut step)?;
        last_train_loss = train_loss;
        let elapsed_ms = t_start.elapsed().as_millis() as u64;

        let train_accuracy = match model.task() {
            Task::Classifier { .. } => Some(compute_accuracy(model, inputs, targets)?),
            Task::Regression => None,
        };

        if !train_loss.is_finite() {
            warn!("epoch {epoch}: training loss is {train_loss}");
        }
        info!(
            "epoch {epoch}/{}: loss = {train_loss:.6}, lr = {learning_rate}, accuracy = {train_accuracy:?}, {elapsed_ms} ms",
            config.epochs
        );

        let stats = EpochStats {
            epoch,
            total_epochs: config.epochs,
            train_loss,
            train_accuracy,
            learning_rate,
            elapsed_ms,
        };

        if let Some(ref tx) = config.progress_tx {
            // If the receiver has been dropped, stop training.
            if tx.send(stats).is_err() {
                break;
            }
        }
    }

    Ok(last_train_loss)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// Fraction of samples whose predicted class equals the rounded target.
fn compute_accuracy(model: &mut Model, inputs: &[Vec<f64>], targets: &[f64]) -> Result<f64> {
    let n = inputs.len();
    if n == 0 {
        return Ok(0.0);
    }
    let mut correct = 0;
    for (input, target) in inputs.iter().zip(targets) {
        if model.predict(input)? == target.round() {
            correct += 1;
        }
    }
    Ok(correct as f64 / n as f64)
}
