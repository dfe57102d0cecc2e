use super::*;
use super::matrix::{Matrix, MatrixError, Shape};

use std::ops::Mul;

/// Tagged right-hand side of an arithmetic operation: either a scalar or a
/// whole matrix. Operand kinds outside these two do not convert and are
/// rejected at compile time.
#[derive(Debug, Clone)]
pub enum Operand<S> {
    Scalar(S),
    Matrix(Matrix<S>),
}

impl From<f32> for Operand<f32> {
    fn from(v: f32) -> Operand<f32> {
        Operand::Scalar(v)
    }
}

impl From<f64> for Operand<f64> {
    fn from(v: f64) -> Operand<f64> {
        Operand::Scalar(v)
    }
}

impl<S: Scalar> From<Matrix<S>> for Operand<S> {
    fn from(m: Matrix<S>) -> Operand<S> {
        Operand::Matrix(m)
    }
}

impl<'a, S: Scalar> From<&'a Matrix<S>> for Operand<S> {
    fn from(m: &'a Matrix<S>) -> Operand<S> {
        Operand::Matrix(m.clone())
    }
}

impl<S: Scalar> Matrix<S> {
    fn map(&self, f: impl Fn(S) -> S) -> Matrix<S> {
        Matrix {
            shape: self.shape,
            values: self.values.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Elementwise scaling, shape preserved.
    pub fn scale(&self, k: S) -> Matrix<S> {
        self.map(|v| v * k)
    }

    pub fn add(&self, rhs: impl Into<Operand<S>>) -> Result<Matrix<S>, MatrixError> {
        match rhs.into() {
            Operand::Scalar(x) => Ok(self.map(|v| v + x)),
            Operand::Matrix(other) => {
                if self.shape != other.shape {
                    return Err(MatrixError::DimensionMismatch {
                        lhs: self.shape,
                        rhs: other.shape,
                    });
                }
                let values = self
                    .values
                    .iter()
                    .zip(other.values.iter())
                    .map(|(&a, &b)| a + b)
                    .collect();
                Ok(Matrix { shape: self.shape, values })
            }
        }
    }

    /// Subtraction is addition of the negated operand.
    pub fn sub(&self, rhs: impl Into<Operand<S>>) -> Result<Matrix<S>, MatrixError> {
        match rhs.into() {
            Operand::Scalar(x) => self.add(Operand::Scalar(-x)),
            Operand::Matrix(other) => self.add(Operand::Matrix(other.scale(-S::one()))),
        }
    }

    pub fn mul(&self, rhs: impl Into<Operand<S>>) -> Result<Matrix<S>, MatrixError> {
        match rhs.into() {
            Operand::Scalar(x) => Ok(self.scale(x)),
            Operand::Matrix(other) => self.matmul(&other),
        }
    }

    /// Dividing by a scalar performs no zero check; a zero divisor yields
    /// infinities or NaN per IEEE semantics. Dividing by a matrix multiplies
    /// by its inverse.
    pub fn div(&self, rhs: impl Into<Operand<S>>) -> Result<Matrix<S>, MatrixError> {
        match rhs.into() {
            Operand::Scalar(x) => Ok(self.map(|v| v / x)),
            Operand::Matrix(other) => self.matmul(&other.inverse()?),
        }
    }

    fn matmul(&self, other: &Matrix<S>) -> Result<Matrix<S>, MatrixError> {
        if self.shape.cols != other.shape.rows {
            return Err(MatrixError::DimensionMismatch {
                lhs: self.shape,
                rhs: other.shape,
            });
        }

        let shape = Shape { rows: self.shape.rows, cols: other.shape.cols };
        let mut values = Vec::with_capacity(shape.len());
        for row in self.values.chunks(self.shape.cols) {
            for col in 0..other.shape.cols {
                let mut acc = S::zero();
                for (k, &a) in row.iter().enumerate() {
                    acc += a * other.values[k * other.shape.cols + col];
                }
                values.push(acc);
            }
        }

        Ok(Matrix { shape, values })
    }
}

impl Mul<Matrix<f32>> for f32 {
    type Output = Matrix<f32>;

    fn mul(self, rhs: Matrix<f32>) -> Matrix<f32> {
        rhs.scale(self)
    }
}

impl<'a> Mul<&'a Matrix<f32>> for f32 {
    type Output = Matrix<f32>;

    fn mul(self, rhs: &'a Matrix<f32>) -> Matrix<f32> {
        rhs.scale(self)
    }
}

impl Mul<Matrix<f64>> for f64 {
    type Output = Matrix<f64>;

    fn mul(self, rhs: Matrix<f64>) -> Matrix<f64> {
        rhs.scale(self)
    }
}

impl<'a> Mul<&'a Matrix<f64>> for f64 {
    type Output = Matrix<f64>;

    fn mul(self, rhs: &'a Matrix<f64>) -> Matrix<f64> {
        rhs.scale(self)
    }
}
