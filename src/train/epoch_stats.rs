use serde::{Serialize, Deserialize};

/// Per-epoch training statistics emitted by `train_loop`.
///
/// When a `progress_tx` channel is configured in `TrainConfig`, the loop sends
/// one `EpochStats` value at the end of every completed epoch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    pub total_epochs: usize,
    /// Mean per-sample loss, each measured just before that sample's update.
    pub train_loss: f64,
    /// Fraction of samples classified correctly after the epoch; classifiers only.
    pub train_accuracy: Option<f64>,
    /// Learning rate used for the last step of the epoch.
    pub learning_rate: f64,
    pub elapsed_ms: u64,
}
