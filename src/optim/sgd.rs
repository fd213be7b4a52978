use crate::{error::Result, layers::dense::Layer, math::matrix::Matrix};

/// Plain online gradient step with a fixed learning rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sgd {
    pub learning_rate: f32,
}

impl Sgd {
    pub fn new(learning_rate: f32) -> Sgd {
        Sgd { learning_rate }
    }

    /// Updates `layer` from its outputs, its inputs and the error at its output.
    pub fn step(
        &self,
        layer: &mut Layer,
        activations: &Matrix,
        inputs: &Matrix,
        errors: &Matrix,
    ) -> Result<()> {
        let (weights_delta, bias_delta) =
            layer.compute_gradients(activations, inputs, errors, self.learning_rate)?;
        layer.apply_gradients(&weights_delta, &bias_delta)
    }
}
