use rand::Rng;

use crate::activation::{sigmoid, sigmoid_derivative};
use crate::error::{Error, Result};
use crate::math::{ops, Matrix};

/// One affine transform followed by the sigmoid.
///
/// `weights` is `out_dim x in_dim`, `bias` is `out_dim x 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    weights: Matrix,
    bias: Matrix,
}

impl Layer {
    /// Randomised layer; weights and bias are uniform in `[-1, 1)`.
    pub fn new<R: Rng + ?Sized>(out_dim: usize, in_dim: usize, rng: &mut R) -> Layer {
        let mut weights = Matrix::zeros(out_dim, in_dim);
        let mut bias = Matrix::zeros(out_dim, 1);
        weights.randomize(rng);
        bias.randomize(rng);

        Layer { weights, bias }
    }

    /// Layer with explicit parameters.
    pub fn from_parts(weights: Matrix, bias: Matrix) -> Result<Layer> {
        if bias.cols() != 1 || bias.rows() != weights.rows() {
            return Err(Error::shape("layer bias", weights.shape(), bias.shape()));
        }
        Ok(Layer { weights, bias })
    }

    pub fn weights(&self) -> &Matrix {
        &self.weights
    }

    pub fn bias(&self) -> &Matrix {
        &self.bias
    }

    pub fn in_dim(&self) -> usize {
        self.weights.cols()
    }

    pub fn out_dim(&self) -> usize {
        self.weights.rows()
    }

    /// `sigmoid(weights · input + bias)` for an `in_dim x 1` column.
    pub fn forward(&self, input: &Matrix) -> Result<Matrix> {
        let z = self.weights.dot(input)?.zip_with(ops::add, &self.bias)?;
        Ok(z.map(sigmoid))
    }

    /// Returns `(weights_delta, bias_delta)` for one sample.
    ///
    /// `activations` are this layer's sigmoid outputs, `inputs` what was fed
    /// into it and `errors` the error at its output (target side minus output).
    pub fn compute_gradients(
        &self,
        activations: &Matrix,
        inputs: &Matrix,
        errors: &Matrix,
        learning_rate: f32,
    ) -> Result<(Matrix, Matrix)> {
        let gradient = activations
            .map(sigmoid_derivative)
            .zip_with(ops::multiply, errors)?
            .scalar(ops::multiply, learning_rate);
        let weights_delta = gradient.dot(&inputs.transpose())?;

        Ok((weights_delta, gradient))
    }

    /// Adds pre-computed deltas to the parameters.
    ///
    /// Both deltas are shape-checked before either parameter is replaced.
    pub fn apply_gradients(&mut self, weights_delta: &Matrix, bias_delta: &Matrix) -> Result<()> {
        let weights = self.weights.zip_with(ops::add, weights_delta)?;
        let bias = self.bias.zip_with(ops::add, bias_delta)?;
        self.weights = weights;
        self.bias = bias;
        Ok(())
    }
}
