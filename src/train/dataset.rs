use serde::{Deserialize, Serialize};

/// One supervised example: an input vector and its target vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub input: Vec<f32>,
    pub target: Vec<f32>,
}

impl Sample {
    pub fn new(input: Vec<f32>, target: Vec<f32>) -> Sample {
        Sample { input, target }
    }
}

/// The four-row exclusive-or table.
pub fn xor_samples() -> Vec<Sample> {
    vec![
        Sample::new(vec![0.0, 1.0], vec![1.0]),
        Sample::new(vec![1.0, 0.0], vec![1.0]),
        Sample::new(vec![0.0, 0.0], vec![0.0]),
        Sample::new(vec![1.0, 1.0], vec![0.0]),
    ]
}
