use thiserror::Error;

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the numeric engine and the training driver.
#[derive(Error, Debug)]
pub enum Error {
    /// Two operands (or an operand and the network topology) disagree on shape.
    /// Shapes are `(rows, cols)`.
    #[error("shape mismatch in {op}: {left:?} vs {right:?}")]
    ShapeMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn shape(op: &'static str, left: (usize, usize), right: (usize, usize)) -> Error {
        Error::ShapeMismatch { op, left, right }
    }
}
