pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;
pub mod error;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::sigmoid::{sigmoid, sigmoid_derivative};
pub use layers::dense::Layer;
pub use network::network::Network;
pub use loss::mse::MseLoss;
pub use optim::sgd::Sgd;
pub use train::{evaluate, train_stochastic, xor_samples, EvalReport, Prediction, Sample, TrainConfig};
pub use error::{Error, Result};
