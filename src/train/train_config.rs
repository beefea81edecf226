use std::sync::mpsc;

use crate::train::epoch_stats::EpochStats;

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `epochs`      — number of full passes over the samples
/// - `shuffle`     — visit samples in a fresh random order every epoch
/// - `progress_tx` — optional channel; one `EpochStats` is sent per completed
///                   epoch. If the receiver is dropped the loop stops early.
pub struct TrainConfig {
    pub epochs: usize,
    pub shuffle: bool,
    pub progress_tx: Option<mpsc::Sender<EpochStats>>,
}

impl TrainConfig {
    /// Shuffled training with no progress channel.
    pub fn new(epochs: usize) -> Self {
        TrainConfig {
            epochs,
            shuffle: true,
            progress_tx: None,
        }
    }

    pub fn in_order(mut self) -> Self {
        self.shuffle = false;
        self
    }

    pub fn with_progress(mut self, tx: mpsc::Sender<EpochStats>) -> Self {
        self.progress_tx = Some(tx);
        self
    }
}
