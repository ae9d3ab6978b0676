//! Dense feed-forward networks loaded from pretrained artifacts
//!
//! Inference only. The artifact is the serde JSON form of [`DenseNetwork`],
//! typically exported by the training pipeline that produced the weights.

use crate::error::{ForecastError, Result};
use crate::models::PretrainedModel;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Activation applied to a layer's pre-activation output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    /// Identity
    Linear,
    /// max(0, x)
    Relu,
    /// 1 / (1 + e^-x)
    Sigmoid,
}

impl Activation {
    fn apply(self, x: f64) -> f64 {
        match self {
            Activation::Linear => x,
            Activation::Relu => x.max(0.0),
            Activation::Sigmoid => 1.0 / (1.0 + (-x).exp()),
        }
    }
}

/// One fully-connected layer
///
/// `weights[j]` holds the input weights of output unit `j`, so the layer maps
/// `weights[0].len()` inputs to `weights.len()` outputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DenseLayer {
    weights: Vec<Vec<f64>>,
    bias: Vec<f64>,
    activation: Activation,
}

impl DenseLayer {
    /// Create a layer from raw parameters
    pub fn new(weights: Vec<Vec<f64>>, bias: Vec<f64>, activation: Activation) -> Result<Self> {
        let layer = Self {
            weights,
            bias,
            activation,
        };
        layer.validate()?;
        Ok(layer)
    }

    fn validate(&self) -> Result<()> {
        if self.weights.is_empty() || self.weights[0].is_empty() {
            return Err(ForecastError::InvalidParameter(
                "Layer weights must be a non-empty matrix".to_string(),
            ));
        }
        if self.weights.iter().any(|row| row.len() != self.weights[0].len()) {
            return Err(ForecastError::InvalidParameter(
                "Layer weight rows must all have the same length".to_string(),
            ));
        }
        if self.bias.len() != self.weights.len() {
            return Err(ForecastError::InvalidParameter(format!(
                "Bias length ({}) doesn't match unit count ({})",
                self.bias.len(),
                self.weights.len()
            )));
        }

        Ok(())
    }

    /// Number of inputs the layer expects
    pub fn input_size(&self) -> usize {
        self.weights[0].len()
    }

    /// Number of units in the layer
    pub fn output_size(&self) -> usize {
        self.weights.len()
    }

    fn forward(&self, input: &[f64]) -> Vec<f64> {
        self.weights
            .iter()
            .zip(self.bias.iter())
            .map(|(row, bias)| {
                let sum = row
                    .iter()
                    .zip(input.iter())
                    .map(|(w, x)| w * x)
                    .sum::<f64>();
                self.activation.apply(sum + bias)
            })
            .collect()
    }
}

/// A pretrained stack of dense layers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DenseNetwork {
    name: String,
    layers: Vec<DenseLayer>,
}

impl DenseNetwork {
    /// Create a network from an ordered list of layers
    pub fn new(name: impl Into<String>, layers: Vec<DenseLayer>) -> Result<Self> {
        let network = Self {
            name: name.into(),
            layers,
        };
        network.validate()?;
        Ok(network)
    }

    /// Load a network from a JSON artifact on disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref()).map_err(|e| {
            ForecastError::ModelError(format!(
                "Failed to open model artifact '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;
        let network: Self = serde_json::from_reader(BufReader::new(file))?;
        network.validate()?;
        Ok(network)
    }

    /// Write the network to a JSON artifact on disk
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.layers.is_empty() {
            return Err(ForecastError::ModelError(
                "Network must contain at least one layer".to_string(),
            ));
        }

        for layer in &self.layers {
            layer.validate()?;
        }

        for pair in self.layers.windows(2) {
            if pair[1].input_size() != pair[0].output_size() {
                return Err(ForecastError::ModelError(format!(
                    "Layer chain mismatch: {} outputs feed a layer expecting {} inputs",
                    pair[0].output_size(),
                    pair[1].input_size()
                )));
            }
        }

        Ok(())
    }

    fn forward(&self, window: &[f64]) -> Result<Vec<f64>> {
        if window.len() != self.input_size() {
            return Err(ForecastError::ValidationError(format!(
                "Input window length ({}) doesn't match model input size ({})",
                window.len(),
                self.input_size()
            )));
        }

        let mut current = window.to_vec();
        for layer in &self.layers {
            current = layer.forward(&current);
        }

        Ok(current)
    }
}

impl PretrainedModel for DenseNetwork {
    fn input_size(&self) -> usize {
        self.layers[0].input_size()
    }

    fn output_size(&self) -> usize {
        self.layers[self.layers.len() - 1].output_size()
    }

    fn predict_batch(&self, windows: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
        windows.iter().map(|window| self.forward(window)).collect()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
