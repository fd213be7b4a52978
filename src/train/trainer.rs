use rand::Rng;

use crate::{
    error::{Error, Result},
    network::network::Network,
    train::dataset::Sample,
};

/// Runs `iterations` online SGD steps, each on a uniformly drawn sample.
///
/// Progress is logged at `debug` every `log_interval` steps; `0` disables it.
pub fn train_stochastic<R: Rng + ?Sized>(
    network: &mut Network,
    samples: &[Sample],
    iterations: usize,
    rng: &mut R,
    log_interval: usize,
) -> Result<()> {
    if samples.is_empty() {
        return Err(Error::InvalidConfig("cannot train on an empty sample set".into()));
    }

    for step in 0..iterations {
        let sample = &samples[rng.gen_range(0..samples.len())];
        network.train(&sample.input, &sample.target)?;

        if log_interval > 0 && (step + 1) % log_interval == 0 {
            log::debug!(
                "training progress: {}/{} steps ({:.2}%)",
                step + 1,
                iterations,
                100.0 * (step + 1) as f64 / iterations as f64
            );
        }
    }

    log::info!("finished {} training steps", iterations);
    Ok(())
}
