use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::train::dataset::{xor_samples, Sample};

/// Settings for one training-and-evaluation run.
///
/// Every field has a default, so a JSON file only needs the keys it changes.
///
/// # Fields
/// - `input_dim`, `hidden_dim`, `output_dim` : network topology
/// - `learning_rate` : SGD step size
/// - `iterations`    : number of single-sample training steps
/// - `trials`        : evaluation passes over the sample set
/// - `threshold`     : outputs `>= threshold` count as class 1
/// - `seed`          : fixes the RNG for initialisation and sampling
/// - `log_interval`  : training steps between progress log lines (0 disables)
/// - `samples`       : training / evaluation set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub input_dim: usize,
    pub hidden_dim: usize,
    pub output_dim: usize,
    pub learning_rate: f32,
    pub iterations: usize,
    pub trials: usize,
    pub threshold: f32,
    pub seed: Option<u64>,
    pub log_interval: usize,
    pub samples: Vec<Sample>,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            input_dim: 2,
            hidden_dim: 4,
            output_dim: 1,
            learning_rate: 0.1,
            iterations: 10_000,
            trials: 100_000,
            threshold: 0.5,
            seed: None,
            log_interval: 1_000,
            samples: xor_samples(),
        }
    }
}

impl TrainConfig {
    /// Reads a config from a JSON file. The result is not validated.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<TrainConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.input_dim == 0 || self.hidden_dim == 0 || self.output_dim == 0 {
            return Err(Error::InvalidConfig(format!(
                "layer dimensions must be non-zero, got {}->{}->{}",
                self.input_dim, self.hidden_dim, self.output_dim
            )));
        }
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "learning rate must be positive, got {}",
                self.learning_rate
            )));
        }
        if self.trials == 0 {
            return Err(Error::InvalidConfig("trials must be at least 1".into()));
        }
        if self.samples.is_empty() {
            return Err(Error::InvalidConfig("sample set is empty".into()));
        }
        for (i, sample) in self.samples.iter().enumerate() {
            if sample.input.len() != self.input_dim || sample.target.len() != self.output_dim {
                return Err(Error::InvalidConfig(format!(
                    "sample {} has shape {}->{}, expected {}->{}",
                    i,
                    sample.input.len(),
                    sample.target.len(),
                    self.input_dim,
                    self.output_dim
                )));
            }
        }
        Ok(())
    }
}
