//! Named binary operations passed as the `op` argument of
//! [`Matrix::scalar`](super::matrix::Matrix::scalar) and
//! [`Matrix::zip_with`](super::matrix::Matrix::zip_with).

pub fn add(x: f32, y: f32) -> f32 {
    x + y
}

pub fn subtract(x: f32, y: f32) -> f32 {
    x - y
}

pub fn multiply(x: f32, y: f32) -> f32 {
    x * y
}

pub fn divide(x: f32, y: f32) -> f32 {
    x / y
}
