use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A caller-supplied input vector does not match the model's input layer.
    #[error("input has {got} values but the model expects {expected}")]
    ShapeMismatch { expected: usize, got: usize },

    /// Training helpers were handed a different number of inputs and targets.
    #[error("got {inputs} inputs but {targets} targets")]
    SampleCountMismatch { inputs: usize, targets: usize },

    #[error("invalid model spec: {0}")]
    InvalidSpec(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
