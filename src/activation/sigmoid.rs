/// Logistic function `1 / (1 + e^(-x))`, evaluated in `f32`.
///
/// No overflow guard: for very negative `x` the exponential saturates to
/// infinity and the result collapses to `0.0`.
pub fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

/// Derivative of the sigmoid expressed through its own output.
///
/// `y` must already be `sigmoid(z)`; the result is `σ'(z) = y · (1 - y)`.
pub fn sigmoid_derivative(y: f32) -> f32 {
    y * (1.0 - y)
}
