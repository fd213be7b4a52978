pub mod dataset;
pub mod evaluate;
pub mod report;
pub mod train_config;
pub mod trainer;

pub use dataset::{xor_samples, Sample};
pub use evaluate::{evaluate, mean_squared_error};
pub use report::{EvalReport, Prediction};
pub use train_config::TrainConfig;
pub use trainer::train_stochastic;
