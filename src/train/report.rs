use std::fmt;

use serde::{Deserialize, Serialize};

/// Network response to one sample, taken from a single `feed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub input: Vec<f32>,
    /// Raw sigmoid outputs.
    pub output: Vec<f32>,
    pub expected: Vec<f32>,
    /// Thresholded `output`: 1 for `>= threshold`, else 0.
    pub predicted: Vec<u8>,
}

impl Prediction {
    pub fn is_correct(&self, threshold: f32) -> bool {
        self.predicted
            .iter()
            .zip(self.expected.iter())
            .all(|(&p, &e)| (p == 1) == (e >= threshold))
    }
}

/// Outcome of repeated inference over a sample set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalReport {
    /// Passes over the sample set.
    pub trials: usize,
    /// Total `feed` calls made while tallying.
    pub feeds: usize,
    /// Thresholded outputs that matched the thresholded target.
    pub correct: usize,
    pub incorrect: usize,
    /// `correct / (correct + incorrect)` as a percentage.
    pub accuracy_percent: f32,
    /// Mean squared error over one pass of the sample set.
    pub mean_squared_error: f32,
    pub predictions: Vec<Prediction>,
}

impl fmt::Display for EvalReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for p in &self.predictions {
            writeln!(
                f,
                "input: {:?}, output: {:.6?}, expected: {:?}, predicted: {:?}",
                p.input, p.output, p.expected, p.predicted
            )?;
        }
        writeln!(f, "correct:   {}", self.correct)?;
        writeln!(f, "incorrect: {}", self.incorrect)?;
        writeln!(f, "mse:       {:.6}", self.mean_squared_error)?;
        write!(
            f,
            "over {} feeds the network is correct {:.2}% of the time",
            self.feeds, self.accuracy_percent
        )
    }
}
