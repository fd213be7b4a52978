use crate::{
    error::{Error, Result},
    loss::mse::MseLoss,
    network::network::Network,
    train::{
        dataset::Sample,
        report::{EvalReport, Prediction},
    },
};

/// Feeds every sample `trials` times and tallies thresholded matches.
///
/// Each output element is a class-1 vote when `>= threshold`; it counts as
/// correct when it agrees with the same rule applied to the target. The
/// report also carries one [`Prediction`] per sample.
pub fn evaluate(
    network: &Network,
    samples: &[Sample],
    trials: usize,
    threshold: f32,
) -> Result<EvalReport> {
    check_targets(network, samples)?;

    let mut correct = 0;
    let mut incorrect = 0;
    let mut feeds = 0;

    for _ in 0..trials {
        for sample in samples {
            let output = network.feed(&sample.input)?;
            feeds += 1;
            for (&predicted, &expected) in output.iter().zip(sample.target.iter()) {
                if (predicted >= threshold) == (expected >= threshold) {
                    correct += 1;
                } else {
                    incorrect += 1;
                }
            }
        }
    }

    let predictions = samples
        .iter()
        .map(|sample| {
            let output = network.feed(&sample.input)?;
            let predicted = output.iter().map(|&y| u8::from(y >= threshold)).collect();
            Ok(Prediction {
                input: sample.input.clone(),
                output,
                expected: sample.target.clone(),
                predicted,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let mean_squared_error = mean_squared_error(network, samples)?;
    let total = correct + incorrect;
    let accuracy_percent = if total == 0 {
        0.0
    } else {
        correct as f32 / total as f32 * 100.0
    };

    Ok(EvalReport {
        trials,
        feeds,
        correct,
        incorrect,
        accuracy_percent,
        mean_squared_error,
        predictions,
    })
}

/// Mean of the per-sample MSE over one pass of `samples`.
pub fn mean_squared_error(network: &Network, samples: &[Sample]) -> Result<f32> {
    check_targets(network, samples)?;
    if samples.is_empty() {
        return Ok(0.0);
    }
    let mut total = 0.0;
    for sample in samples {
        let output = network.feed(&sample.input)?;
        total += MseLoss::loss(&output, &sample.target);
    }
    Ok(total / samples.len() as f32)
}

fn check_targets(network: &Network, samples: &[Sample]) -> Result<()> {
    let expected = network.output_dim();
    match samples.iter().find(|s| s.target.len() != expected) {
        Some(bad) => Err(Error::shape("evaluate target", (expected, 1), (bad.target.len(), 1))),
        None => Ok(()),
    }
}
