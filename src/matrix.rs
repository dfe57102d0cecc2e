use super::*;

use std::fmt;

use thiserror::Error;

/// Default number of decimal digits used when a matrix is rendered through
/// `Display`. Rounding happens at format time only; stored values are never
/// touched.
pub const PRECISION: i32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatrixError {
    #[error("matrix built from empty row data")]
    Empty,
    #[error("row {row} holds {len} values, expected {expected}")]
    Ragged { row: usize, len: usize, expected: usize },
    #[error("{len} flat values do not fill a {shape} matrix")]
    BadLength { len: usize, shape: Shape },
    #[error("shapes {lhs} and {rhs} do not agree")]
    DimensionMismatch { lhs: Shape, rhs: Shape },
    #[error("{shape} matrix is not square")]
    NotSquare { shape: Shape },
    #[error("{shape} matrix has zero determinant")]
    Singular { shape: Shape },
    #[error("index {idx} out of range for a {shape} matrix")]
    OutOfRange { idx: usize, shape: Shape },
}

/// Dense row-major matrix. A pure value: every operation returns a fresh
/// `Matrix`, operands are never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<S> {
    pub(crate) shape: Shape,
    pub(crate) values: Vec<S>,
}

impl<S: Scalar> Matrix<S> {
    /// Builds a matrix from row data. Rejects an empty row list, an empty
    /// first row, and rows of unequal length.
    pub fn from_rows(rows: Vec<Vec<S>>) -> Result<Matrix<S>, MatrixError> {
        let n_cols = rows.first().map(Vec::len).ok_or(MatrixError::Empty)?;
        if n_cols == 0 {
            return Err(MatrixError::Empty);
        }

        let shape = Shape { rows: rows.len(), cols: n_cols };
        let mut values = Vec::with_capacity(shape.len());
        for (idx, row) in rows.iter().enumerate() {
            if row.len() != n_cols {
                return Err(MatrixError::Ragged {
                    row: idx,
                    len: row.len(),
                    expected: n_cols,
                });
            }
            values.extend_from_slice(row);
        }

        Ok(Matrix { shape, values })
    }

    /// Inverse of `values()`: partitions a flat row-major sequence into
    /// `shape.rows` rows of `shape.cols` values.
    pub fn from_flat(values: Vec<S>, shape: Shape) -> Result<Matrix<S>, MatrixError> {
        if shape.len() == 0 || values.len() != shape.len() {
            return Err(MatrixError::BadLength { len: values.len(), shape });
        }
        Ok(Matrix { shape, values })
    }

    pub fn identity(n: usize) -> Matrix<S> {
        let mut values = vec![S::zero(); n * n];
        for i in 0..n {
            values[i * n + i] = S::one();
        }
        Matrix { shape: Shape { rows: n, cols: n }, values }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn rows(&self) -> usize {
        self.shape.rows
    }

    pub fn cols(&self) -> usize {
        self.shape.cols
    }

    /// Row-major flattening, length `rows * cols`.
    pub fn values(&self) -> &[S] {
        &self.values
    }

    /// Read-only view of row `idx`.
    pub fn row(&self, idx: usize) -> Result<&[S], MatrixError> {
        if idx >= self.shape.rows {
            return Err(MatrixError::OutOfRange { idx, shape: self.shape });
        }
        let start = idx * self.shape.cols;
        Ok(&self.values[start..start + self.shape.cols])
    }

    pub fn get(&self, row: usize, col: usize) -> Result<S, MatrixError> {
        if row >= self.shape.rows {
            return Err(MatrixError::OutOfRange { idx: row, shape: self.shape });
        }
        if col >= self.shape.cols {
            return Err(MatrixError::OutOfRange { idx: col, shape: self.shape });
        }
        Ok(self.values[row * self.shape.cols + col])
    }
}

impl<S: Scalar> fmt::Display for Matrix<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", format_matrix(self, PRECISION))
    }
}
