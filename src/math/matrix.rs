use rand::Rng;

use crate::error::{Error, Result};

/// Dense row-major grid of `f32` values.
///
/// Every arithmetic operation returns a new matrix; the only in-place
/// mutation is [`Matrix::randomize`].
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Vec<f32>>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    /// Square identity matrix of size `n`.
    pub fn identity(n: usize) -> Matrix {
        let mut res = Matrix::zeros(n, n);
        for i in 0..n {
            res.data[i][i] = 1.0;
        }
        res
    }

    /// `rows x cols` matrix filled with uniform values in `[-1, 1)`.
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);
        res.randomize(rng);
        res
    }

    /// Builds a matrix from explicit rows. All rows must have the same length.
    pub fn from_data(data: Vec<Vec<f32>>) -> Result<Matrix> {
        let rows = data.len();
        let cols = data.first().map_or(0, |row| row.len());
        if let Some(bad) = data.iter().find(|row| row.len() != cols) {
            return Err(Error::shape("from_data", (rows, cols), (1, bad.len())));
        }
        Ok(Matrix { rows, cols, data })
    }

    /// Column vector (`values.len() x 1`).
    pub fn from_vec(values: &[f32]) -> Matrix {
        Matrix {
            rows: values.len(),
            cols: 1,
            data: values.iter().map(|&v| vec![v]).collect(),
        }
    }

    /// First column of every row, flattened.
    ///
    /// Only meaningful for column vectors; further columns are ignored and a
    /// matrix without columns yields zeros.
    pub fn to_vec(&self) -> Vec<f32> {
        self.data.iter().map(|row| row.first().copied().unwrap_or_default()).collect()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        self.data.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn data(&self) -> &[Vec<f32>] {
        &self.data
    }

    /// Fills every element with a uniform value in `[-1, 1)`.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for row in self.data.iter_mut() {
            for x in row.iter_mut() {
                *x = rng.gen_range(-1.0..1.0);
            }
        }
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f32) -> f32,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .map(|row| row.iter().map(|&x| functor(x)).collect())
                .collect(),
        }
    }

    /// Applies `op(scalar, element)` to every element.
    pub fn scalar<F>(&self, op: F, scalar: f32) -> Matrix
    where
        F: Fn(f32, f32) -> f32,
    {
        self.map(|x| op(scalar, x))
    }

    /// Applies `op(self[i][j], other[i][j])` elementwise.
    pub fn zip_with<F>(&self, op: F, other: &Matrix) -> Result<Matrix>
    where
        F: Fn(f32, f32) -> f32,
    {
        if self.shape() != other.shape() {
            return Err(Error::shape("elementwise", self.shape(), other.shape()));
        }

        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(row_a, row_b)| row_a.iter().zip(row_b.iter()).map(|(&a, &b)| op(a, b)).collect())
            .collect();

        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }

    /// Matrix product `self · rhs`. Each cell is a left-to-right `f32` sum.
    pub fn dot(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.cols != rhs.rows {
            return Err(Error::shape("dot", self.shape(), rhs.shape()));
        }

        let mut res = Matrix::zeros(self.rows, rhs.cols);

        for i in 0..res.rows {
            for j in 0..res.cols {
                let mut sum = 0.0f32;

                for k in 0..self.cols {
                    sum += self.data[i][k] * rhs.data[k][j];
                }

                res.data[i][j] = sum;
            }
        }

        Ok(res)
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);

        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] = self.data[j][i];
            }
        }

        res
    }
}
