use serde::{Serialize, Deserialize};

use crate::activation::activation::Activation;
use crate::error::{Error, Result};
use crate::network::task::Task;

/// A serializable description of a model's architecture and task.
///
/// Holds no weights: saving a spec stores the shape a model is built from,
/// never what it has learned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSpec {
    /// Width of layer 0.
    pub input_size: usize,
    /// Widths of the hidden layers, input side first. Hidden layers use ReLU.
    #[serde(default)]
    pub hidden_layers: Vec<usize>,
    pub task: Task,
    /// Replaces the task's default output activation when set.
    #[serde(default)]
    pub output_activation: Option<Activation>,
}

impl ModelSpec {
    pub fn regression(input_size: usize, hidden_layers: &[usize]) -> ModelSpec {
        ModelSpec {
            input_size,
            hidden_layers: hidden_layers.to_vec(),
            task: Task::Regression,
            output_activation: None,
        }
    }

    pub fn classifier(input_size: usize, hidden_layers: &[usize], classes: usize) -> ModelSpec {
        ModelSpec {
            input_size,
            hidden_layers: hidden_layers.to_vec(),
            task: Task::Classifier { classes },
            output_activation: None,
        }
    }

    pub fn with_output_activation(mut self, activation: Activation) -> ModelSpec {
        self.output_activation = Some(activation);
        self
    }

    /// The activation actually used by the output layer.
    pub fn resolved_output_activation(&self) -> Activation {
        self.output_activation.unwrap_or_else(|| self.task.output_activation())
    }

    /// Widths of every layer, input and output included.
    pub fn layer_sizes(&self) -> Vec<usize> {
        let mut sizes = Vec::with_capacity(self.hidden_layers.len() + 2);
        sizes.push(self.input_size);
        sizes.extend_from_slice(&self.hidden_layers);
        sizes.push(self.task.output_size());
        sizes
    }

    pub fn validate(&self) -> Result<()> {
        if self.input_size == 0 {
            return Err(Error::InvalidSpec("input_size must be at least 1".into()));
        }
        if let Some(i) = self.hidden_layers.iter().position(|&w| w == 0) {
            return Err(Error::InvalidSpec(format!("hidden layer {} has zero width", i + 1)));
        }
        if self.task.output_size() == 0 {
            return Err(Error::InvalidSpec("a classifier needs at least one class".into()));
        }
        Ok(())
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes and validates a spec previously written by `save_json`.
    pub fn load_json(path: &str) -> Result<ModelSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let spec: ModelSpec = serde_json::from_reader(reader)?;
        spec.validate()?;
        Ok(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_sizes_include_both_ends() {
        let spec = ModelSpec::classifier(4, &[8, 5], 3);
        assert_eq!(spec.layer_sizes(), vec![4, 8, 5, 3]);
        assert_eq!(ModelSpec::regression(2, &[]).layer_sizes(), vec![2, 1]);
    }

    #[test]
    fn output_activation_override() {
        let spec = ModelSpec::regression(1, &[]);
        assert_eq!(spec.resolved_output_activation(), Activation::ReLU);
        let spec = spec.with_output_activation(Activation::Identity);
        assert_eq!(spec.resolved_output_activation(), Activation::Identity);
    }

    #[test]
    fn validate_rejects_degenerate_shapes() {
        assert!(matches!(ModelSpec::regression(0, &[]).validate(), Err(Error::InvalidSpec(_))));
        assert!(matches!(ModelSpec::regression(2, &[3, 0]).validate(), Err(Error::InvalidSpec(_))));
        assert!(matches!(ModelSpec::classifier(2, &[3], 0).validate(), Err(Error::InvalidSpec(_))));
        assert!(ModelSpec::classifier(2, &[3], 2).validate().is_ok());
    }

    #[test]
    fn missing_optional_fields_default() {
        let spec: ModelSpec =
            serde_json::from_str(r#"{"input_size":2,"task":{"type":"regression"}}"#).unwrap();
        assert_eq!(spec, ModelSpec::regression(2, &[]));
    }
}
