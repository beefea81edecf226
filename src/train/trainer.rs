use crate::error::{Error, Result};
use crate::network::model::Model;
use crate::optim::sgd::Sgd;

/// One in-order pass of online training: every sample gets its own `train`
/// call. `step` is the running step counter fed to the learning-rate schedule
/// and is advanced once per sample.
///
/// Returns the mean loss over the pass, each sample measured just before its
/// own update.
pub fn train_model(
    model: &mut Model,
    inputs: &[Vec<f64>],
    targets: &[f64],
    optimizer: &Sgd,
    step: &mut usize,
) -> Result<f64> {
    check_samples(inputs, targets)?;
    let order: Vec<usize> = (0..inputs.len()).collect();
    let (loss, _) = run_pass(model, inputs, targets, &order, optimizer, step)?;
    Ok(loss)
}

pub(crate) fn check_samples(inputs: &[Vec<f64>], targets: &[f64]) -> Result<()> {
    if inputs.len() != targets.len() {
        return Err(Error::SampleCountMismatch { inputs: inputs.len(), targets: targets.len() });
    }
    Ok(())
}

/// Trains on the samples in `order`. Returns the mean pre-update loss and the
/// last learning rate used (0 for an empty pass).
pub(crate) fn run_pass(
    model: &mut Model,
    inputs: &[Vec<f64>],
    targets: &[f64],
    order: &[usize],
    optimizer: &Sgd,
    step: &mut usize,
) -> Result<(f64, f64)> {
    if order.is_empty() {
        return Ok((0.0, 0.0));
    }

    let mut total_loss = 0.0;
    let mut rate = 0.0;
    for &idx in order {
        rate = optimizer.step(model, &inputs[idx], targets[idx], *step)?;
        total_loss += model.cached_loss(targets[idx]);
        *step += 1;
    }

    Ok((total_loss / order.len() as f64, rate))
}
