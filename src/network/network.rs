use rand::Rng;

use crate::{
    error::{Error, Result},
    layers::dense::Layer,
    math::{matrix::Matrix, ops},
    optim::sgd::Sgd,
};

/// Fixed three-layer feedforward network.
///
/// Only `input_layer` (hidden x input) and `hidden_layer` (output x hidden)
/// take part in [`Network::feed`] and [`Network::train`]. `output_layer`
/// (output x output) is allocated at construction but never traversed.
#[derive(Debug, Clone)]
pub struct Network {
    input_layer: Layer,
    hidden_layer: Layer,
    output_layer: Layer,
    optimizer: Sgd,
}

impl Network {
    /// Builds a randomly initialised network using the thread-local RNG.
    pub fn new(
        input_dim: usize,
        hidden_dim: usize,
        output_dim: usize,
        learning_rate: f32,
    ) -> Network {
        Network::with_rng(
            input_dim,
            hidden_dim,
            output_dim,
            learning_rate,
            &mut rand::thread_rng(),
        )
    }

    pub fn with_rng<R: Rng + ?Sized>(
        input_dim: usize,
        hidden_dim: usize,
        output_dim: usize,
        learning_rate: f32,
        rng: &mut R,
    ) -> Network {
        log::trace!(
            "building network {}->{}->{} (lr = {})",
            input_dim,
            hidden_dim,
            output_dim,
            learning_rate
        );
        Network {
            input_layer: Layer::new(hidden_dim, input_dim, rng),
            hidden_layer: Layer::new(output_dim, hidden_dim, rng),
            output_layer: Layer::new(output_dim, output_dim, rng),
            optimizer: Sgd::new(learning_rate),
        }
    }

    /// Assembles a network from explicit layers, checking that they chain.
    pub fn from_layers(
        input_layer: Layer,
        hidden_layer: Layer,
        output_layer: Layer,
        learning_rate: f32,
    ) -> Result<Network> {
        if hidden_layer.in_dim() != input_layer.out_dim() {
            return Err(Error::shape(
                "hidden layer",
                input_layer.weights().shape(),
                hidden_layer.weights().shape(),
            ));
        }
        let expected = (hidden_layer.out_dim(), hidden_layer.out_dim());
        if output_layer.weights().shape() != expected {
            return Err(Error::shape("output layer", expected, output_layer.weights().shape()));
        }

        Ok(Network {
            input_layer,
            hidden_layer,
            output_layer,
            optimizer: Sgd::new(learning_rate),
        })
    }

    pub fn input_dim(&self) -> usize {
        self.input_layer.in_dim()
    }

    pub fn hidden_dim(&self) -> usize {
        self.input_layer.out_dim()
    }

    pub fn output_dim(&self) -> usize {
        self.hidden_layer.out_dim()
    }

    pub fn learning_rate(&self) -> f32 {
        self.optimizer.learning_rate
    }

    pub fn input_layer(&self) -> &Layer {
        &self.input_layer
    }

    pub fn hidden_layer(&self) -> &Layer {
        &self.hidden_layer
    }

    pub fn output_layer(&self) -> &Layer {
        &self.output_layer
    }

    /// Inference. Does not touch the network state.
    pub fn feed(&self, input: &[f32]) -> Result<Vec<f32>> {
        self.check_len("feed input", self.input_dim(), input)?;

        let inputs = Matrix::from_vec(input);
        let hidden = self.input_layer.forward(&inputs)?;
        let output = self.hidden_layer.forward(&hidden)?;
        Ok(output.to_vec())
    }

    /// One stochastic gradient step on a single `(input, target)` pair.
    ///
    /// Lengths are validated before any matrix work, so a rejected sample
    /// leaves the network unchanged.
    pub fn train(&mut self, input: &[f32], target: &[f32]) -> Result<()> {
        self.check_len("train input", self.input_dim(), input)?;
        self.check_len("train target", self.output_dim(), target)?;

        let inputs = Matrix::from_vec(input);
        let hidden = self.input_layer.forward(&inputs)?;
        let outputs = self.hidden_layer.forward(&hidden)?;

        let targets = Matrix::from_vec(target);
        let output_errors = targets.zip_with(ops::subtract, &outputs)?;
        // Uses the hidden weights from before this step's update.
        let hidden_errors = self.hidden_layer.weights().transpose().dot(&output_errors)?;

        self.optimizer
            .step(&mut self.hidden_layer, &outputs, &hidden, &output_errors)?;
        self.optimizer
            .step(&mut self.input_layer, &hidden, &inputs, &hidden_errors)?;
        Ok(())
    }

    fn check_len(&self, op: &'static str, expected: usize, values: &[f32]) -> Result<()> {
        if values.len() != expected {
            return Err(Error::shape(op, (expected, 1), (values.len(), 1)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn hand_built() -> Network {
        let input_layer = Layer::from_parts(Matrix::zeros(2, 2), Matrix::zeros(2, 1)).unwrap();
        let hidden_layer = Layer::from_parts(
            Matrix::from_data(vec![vec![1.0, -1.0]]).unwrap(),
            Matrix::zeros(1, 1),
        )
        .unwrap();
        let output_layer = Layer::from_parts(Matrix::zeros(1, 1), Matrix::zeros(1, 1)).unwrap();
        Network::from_layers(input_layer, hidden_layer, output_layer, 1.0).unwrap()
    }

    #[test]
    fn construction_wires_dimensions() {
        let mut rng = StdRng::seed_from_u64(3);
        let net = Network::with_rng(2, 4, 1, 0.1, &mut rng);
        assert_eq!(net.input_layer().weights().shape(), (4, 2));
        assert_eq!(net.hidden_layer().weights().shape(), (1, 4));
        assert_eq!(net.output_layer().weights().shape(), (1, 1));
        assert_eq!((net.input_dim(), net.hidden_dim(), net.output_dim()), (2, 4, 1));
        assert_eq!(net.learning_rate(), 0.1);
    }

    #[test]
    fn from_layers_rejects_broken_chain() {
        let mut rng = StdRng::seed_from_u64(3);
        let a = Layer::new(4, 2, &mut rng);
        let b = Layer::new(1, 3, &mut rng);
        let c = Layer::new(1, 1, &mut rng);
        assert!(Network::from_layers(a.clone(), b, c.clone(), 0.1).is_err());

        let b = Layer::new(1, 4, &mut rng);
        let wrong_out = Layer::new(2, 2, &mut rng);
        assert!(Network::from_layers(a.clone(), b.clone(), wrong_out, 0.1).is_err());
        assert!(Network::from_layers(a, b, c, 0.1).is_ok());
    }

    #[test]
    fn single_step_matches_hand_computation() {
        let mut net = hand_built();
        assert_eq!(net.feed(&[1.0, 0.0]).unwrap(), vec![0.5]);

        net.train(&[1.0, 0.0], &[1.0]).unwrap();

        // hidden layer: gradient = 0.25 * 0.5 = 0.125, delta = 0.125 * [0.5, 0.5]
        assert_eq!(net.hidden_layer().weights().data(), &[vec![1.0625, -0.9375]]);
        assert_eq!(net.hidden_layer().bias().to_vec(), vec![0.125]);

        // input layer sees hidden errors [0.5, -0.5] from the pre-update weights
        assert_eq!(
            net.input_layer().weights().data(),
            &[vec![0.125, 0.0], vec![-0.125, 0.0]]
        );
        assert_eq!(net.input_layer().bias().to_vec(), vec![0.125, -0.125]);

        // unused layer is never touched
        assert_eq!(net.output_layer().weights().to_vec(), vec![0.0]);
    }

    #[test]
    fn wrong_lengths_fail_before_mutation() {
        let mut net = hand_built();
        let before = (net.input_layer().clone(), net.hidden_layer().clone());

        assert!(matches!(
            net.feed(&[1.0]),
            Err(Error::ShapeMismatch { op: "feed input", left: (2, 1), right: (1, 1) })
        ));
        assert!(matches!(
            net.train(&[1.0, 0.0, 1.0], &[1.0]),
            Err(Error::ShapeMismatch { op: "train input", .. })
        ));
        assert!(matches!(
            net.train(&[1.0, 0.0], &[1.0, 0.0]),
            Err(Error::ShapeMismatch { op: "train target", .. })
        ));

        assert_eq!(before, (net.input_layer().clone(), net.hidden_layer().clone()));
    }
}
